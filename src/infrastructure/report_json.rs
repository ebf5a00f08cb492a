use crate::infrastructure::schema_validator::validate_report;
use crate::usecase::analyze::AnalysisReport;
use anyhow::{Context, Result};
use tokio::fs;

fn validated_value(report: &AnalysisReport) -> Result<serde_json::Value> {
    let value = serde_json::to_value(report)?;
    validate_report(&value).context("analysis report does not match its schema")?;
    Ok(value)
}

/// Serializes `report` as pretty JSON after checking it against the report schema.
pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&validated_value(report)?)?)
}

/// Single-line form of [`report_to_json`], fit to share stdout with NDJSON events.
pub fn report_to_json_line(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string(&validated_value(report)?)?)
}

pub async fn write_report_file(path: &str, report: &AnalysisReport) -> Result<()> {
    let pretty = report_to_json(report)?;
    fs::write(path, pretty + "\n")
        .await
        .with_context(|| format!("writing report: {path}"))?;
    Ok(())
}
