use crate::domain::outcome::{EulerianOutcome, HeuristicOutcome};
use crate::usecase::analyze::AnalysisReport;
use std::fmt::Write as _;

const NO_PATH: &str = "No path exists.";
const NO_CYCLE: &str = "No cycle exists.";
const NO_EDGES: &str = "Graph has no edges.";

pub fn format_sequence(sequence: &[usize]) -> String {
    sequence
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn render_eulerian(outcome: &EulerianOutcome) -> String {
    match outcome {
        EulerianOutcome::NoPath => NO_PATH.to_string(),
        EulerianOutcome::Empty => NO_EDGES.to_string(),
        EulerianOutcome::Sequence { vertices } => format_sequence(vertices),
    }
}

pub fn render_heuristic(outcome: &HeuristicOutcome) -> String {
    match outcome {
        HeuristicOutcome::NoPathFound => NO_PATH.to_string(),
        HeuristicOutcome::Sequence { vertices } => format_sequence(vertices),
    }
}

/// Plain-text report, one section per solver.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Eulerian result:");
    let _ = writeln!(out, "  {}", render_eulerian(&report.eulerian));
    out.push('\n');

    let _ = writeln!(out, "Hamiltonian cycles (exact) result:");
    write_numbered(&mut out, &report.hamiltonian_cycles, NO_CYCLE);
    out.push('\n');

    let _ = writeln!(out, "Hamiltonian paths (exact) result:");
    write_numbered(&mut out, &report.hamiltonian_paths, NO_PATH);
    if report.exact_truncated {
        let _ = writeln!(
            out,
            "  (search stopped early: limit of {} results or {}s reached)",
            report.max_paths, report.time_limit_secs
        );
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Hamiltonian (heuristic from {}) result:",
        report.heuristic_start
    );
    let _ = writeln!(out, "  {}", render_heuristic(&report.heuristic));

    out
}

fn write_numbered(out: &mut String, sequences: &[Vec<usize>], none: &str) {
    if sequences.is_empty() {
        let _ = writeln!(out, "  {none}");
        return;
    }
    for (idx, seq) in sequences.iter().enumerate() {
        let _ = writeln!(out, "  [{}]: {}", idx + 1, format_sequence(seq));
    }
}
