use crate::domain::outcome::{EulerianOutcome, HeuristicOutcome};
use crate::usecase::stats::AnalysisStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphBuilt {
        vertices: usize,
        edges: usize,
    },

    EulerianSolved {
        outcome: EulerianOutcome,
    },

    HamiltonianFound {
        index: usize,
        vertices: Vec<usize>,
        cycle: bool,
    },

    HamiltonianBudgetExhausted {
        collected: usize,
        elapsed_ms: u128,
    },

    HeuristicSolved {
        start: usize,
        outcome: HeuristicOutcome,
    },

    Finished {
        stats: AnalysisStats,
    },
}
