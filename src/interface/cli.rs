use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::matrix_text::read_matrix_file;
use crate::infrastructure::report_json::{report_to_json, report_to_json_line, write_report_file};
use crate::usecase::analyze::{analyze_graph, AnalysisReport, AnalyzeOptions, Solvers};
use crate::usecase::budget::{Budget, DEFAULT_MAX_PATHS, DEFAULT_TIME_LIMIT};
use crate::usecase::event::AppEvent;
use crate::usecase::render::render_text;
use crate::usecase::stats::AnalysisStats;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Analyze {
            input,
            output,
            options,
            json,
            emit_events,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let matrix = read_matrix_file(&input)
                .await
                .with_context(|| format!("reading adjacency matrix: {input}"))?;

            let (report, stats) =
                analyze_graph(matrix, &options, &Solvers::default(), Some(tx)).await?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            match output.as_deref() {
                Some(path) => write_report_file(path, &report)
                    .await
                    .with_context(|| format!("writing analysis report: {path}"))?,
                None => print!("{}", stdout_report(&report, json, emit_events)?),
            }

            eprintln!("{}", summary_line(&stats, report.exact_truncated));

            Ok(())
        }
    }
}

/// Report text for stdout. With events on, the JSON report is one more NDJSON line.
fn stdout_report(report: &AnalysisReport, json: bool, emit_events: bool) -> Result<String> {
    match (json, emit_events) {
        (true, true) => Ok(report_to_json_line(report)? + "\n"),
        (true, false) => Ok(report_to_json(report)? + "\n"),
        (false, _) => Ok(render_text(report)),
    }
}

fn summary_line(stats: &AnalysisStats, truncated: bool) -> String {
    format!(
        "summary: vertices={} edges={} eulerian_length={} hamiltonian_cycles={} hamiltonian_paths={} exact_truncated={} heuristic_length={}",
        stats.vertices,
        stats.edges,
        stats.eulerian_length,
        stats.hamiltonian_cycles,
        stats.hamiltonian_paths,
        truncated,
        stats.heuristic_length
    )
}

#[derive(Debug)]
enum Cli {
    Analyze {
        input: String,
        output: Option<String>,
        options: AnalyzeOptions,
        json: bool,
        emit_events: bool,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> analyze --in/--input <matrix.txt> [--start N] [--time-limit SECS] [--max-paths N]
        //               [--json] [--out/--output <report.json>] [--emit-events]
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "analyze" => Self::parse_analyze(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut start = 0usize;
        let mut time_limit = DEFAULT_TIME_LIMIT;
        let mut max_paths = DEFAULT_MAX_PATHS;
        let mut json = false;
        let mut emit_events = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--start" => {
                    i += 1;
                    start = flag_value(args, i, "--start")?
                        .parse()
                        .map_err(|_| invalid("--start", &args[i]))?;
                }
                "--time-limit" => {
                    i += 1;
                    let secs: f64 = flag_value(args, i, "--time-limit")?
                        .parse()
                        .map_err(|_| invalid("--time-limit", &args[i]))?;
                    time_limit = Duration::try_from_secs_f64(secs)
                        .map_err(|_| invalid("--time-limit", &args[i]))?;
                }
                "--max-paths" => {
                    i += 1;
                    max_paths = flag_value(args, i, "--max-paths")?
                        .parse()
                        .ok()
                        .filter(|&n: &usize| n > 0)
                        .ok_or_else(|| invalid("--max-paths", &args[i]))?;
                }
                "--json" => {
                    json = true;
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::Analyze {
            input,
            output,
            options: AnalyzeOptions {
                start,
                budget: Budget {
                    time_limit,
                    max_paths,
                },
            },
            json,
            emit_events,
        })
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))
}

fn invalid(flag: &str, value: &str) -> anyhow::Error {
    anyhow!(format!("invalid value for {flag}: {value}\n\n{}", usage()))
}

fn usage() -> &'static str {
    "Usage:\n  analyze --in/--input <matrix.txt> [--start N] [--time-limit SECS] [--max-paths N] [--json] [--out/--output <report.json>] [--emit-events]\n\nInput:\n  One matrix row per line; '#' starts a comment, brackets and commas are ignored.\n\nOutput:\n  Text report on stdout by default. --json prints the JSON report instead; --out writes it to a file.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n  With --json and no --out, the report follows the events as a single JSON line.\n\nBudget:\n  The exact Hamiltonian search stops after --max-paths results (default 10000) or --time-limit seconds (default 10).\n  Both limits are checked only when a result is found, so a graph with no Hamiltonian path is always searched to the end."
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_rejects_unknown_arg() {
        let args = strings(&["bin", "analyze", "--wat"]);
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("unknown arg"));
        assert!(err.contains("Usage"));
    }

    #[test]
    fn parse_requires_input() {
        let args = strings(&["bin", "analyze", "--json"]);
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("missing --in/--input"));
    }

    #[test]
    fn parse_defaults_match_budget_defaults() {
        let args = strings(&["bin", "analyze", "--in", "m.txt"]);

        let Cli::Analyze {
            input,
            output,
            options,
            json,
            emit_events,
        } = Cli::parse(&args).expect("parse");
        assert_eq!(input, "m.txt");
        assert_eq!(output, None);
        assert_eq!(options, AnalyzeOptions::default());
        assert!(!json);
        assert!(!emit_events);
    }

    #[test]
    fn parse_success_with_every_flag() {
        let args = strings(&[
            "bin",
            "analyze",
            "--input",
            "m.txt",
            "--start",
            "3",
            "--time-limit",
            "0.5",
            "--max-paths",
            "7",
            "--json",
            "--output",
            "r.json",
            "--emit-events",
        ]);

        let Cli::Analyze {
            input,
            output,
            options,
            json,
            emit_events,
        } = Cli::parse(&args).expect("parse");
        assert_eq!(input, "m.txt");
        assert_eq!(output.as_deref(), Some("r.json"));
        assert_eq!(options.start, 3);
        assert_eq!(options.budget.time_limit, Duration::from_millis(500));
        assert_eq!(options.budget.max_paths, 7);
        assert!(json);
        assert!(emit_events);
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        for (flag, value) in [
            ("--start", "-1"),
            ("--time-limit", "-2"),
            ("--time-limit", "soon"),
            ("--max-paths", "0"),
        ] {
            let args = strings(&["bin", "analyze", "--in", "m.txt", flag, value]);
            let err = Cli::parse(&args).unwrap_err().to_string();
            assert!(err.contains("invalid value for"), "{flag} {value}: {err}");
        }

        let args = strings(&["bin", "analyze", "--in", "m.txt", "--start"]);
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("missing value for --start"));
    }

    #[test]
    fn parse_help_returns_error_with_usage() {
        let args = strings(&["bin", "analyze", "--help"]);
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("Usage"));

        let err = Cli::parse(&strings(&["bin"])).unwrap_err().to_string();
        assert!(err.contains("Usage"));
    }

    #[tokio::test]
    async fn run_with_args_smoke_writes_json_report() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("matrix.txt");
        let output_path = dir.path().join("report.json");
        std::fs::write(&input_path, "0 1 0\n0 0 1\n1 0 0\n").expect("write input");

        let args = strings(&[
            "bin",
            "analyze",
            "--in",
            input_path.to_str().unwrap(),
            "--out",
            output_path.to_str().unwrap(),
        ]);

        run_with_args(&args).await.expect("run");

        let raw_out = std::fs::read_to_string(&output_path).expect("read output");
        let parsed: serde_json::Value = serde_json::from_str(&raw_out).expect("valid json");
        assert_eq!(parsed["has_eulerian_cycle"], true);
        assert_eq!(parsed["num_hamiltonian_cycles"], 3);
    }

    #[tokio::test]
    async fn run_with_args_smoke_emit_events_text_output() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("matrix.txt");
        std::fs::write(&input_path, "[0, 1]\n[1, 0]\n").expect("write input");

        let args = strings(&[
            "bin",
            "analyze",
            "--in",
            input_path.to_str().unwrap(),
            "--emit-events",
        ]);

        run_with_args(&args).await.expect("run");
    }

    #[tokio::test]
    async fn json_report_with_events_is_a_single_ndjson_line() {
        let matrix = vec![vec![0, 1], vec![1, 0]];
        let (report, _) = analyze_graph(matrix, &AnalyzeOptions::default(), &Solvers::default(), None)
            .await
            .expect("analyze");

        let with_events = stdout_report(&report, true, true).expect("report");
        assert_eq!(with_events.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(with_events.trim_end()).expect("json");
        assert_eq!(v["num_hamiltonian_cycles"], 2);

        let plain = stdout_report(&report, true, false).expect("report");
        assert!(plain.lines().count() > 1);
        assert!(stdout_report(&report, false, true)
            .expect("report")
            .contains("Eulerian result:"));
    }

    #[tokio::test]
    async fn run_with_args_reports_malformed_matrix() {
        let dir = tempdir().expect("tempdir");
        let input_path = dir.path().join("matrix.txt");
        std::fs::write(&input_path, "0 1\n1\n").expect("write input");

        let args = strings(&["bin", "analyze", "--in", input_path.to_str().unwrap()]);

        let err = run_with_args(&args).await.unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("reading adjacency matrix"));
        assert!(msg.contains("must be square"));
    }

    #[tokio::test]
    async fn run_uses_env_args_and_returns_usage_error_under_test_harness() {
        let err = run().await.unwrap_err().to_string();
        assert!(err.contains("Usage"));
    }
}
