use crate::domain::graph::{Graph, Matrix};
use crate::domain::outcome::{EulerianOutcome, HeuristicOutcome};
use crate::domain::traits::{EulerianSolver, HamiltonianEnumerator, HamiltonianHeuristic};
use crate::infrastructure::hierholzer::HierholzerEulerianSolver;
use crate::infrastructure::most_constrained::MostConstrainedHeuristic;
use crate::infrastructure::permutation_search::PermutationHamiltonianEnumerator;
use crate::usecase::budget::{collect_hamiltonian, Budget};
use crate::usecase::emit;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalysisStats;
use anyhow::Result;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Start vertex for the greedy Hamiltonian walk.
    pub start: usize,
    pub budget: Budget,
}

/// The three solver ports an analysis runs.
#[derive(Clone, Copy)]
pub struct Solvers<'a> {
    pub eulerian: &'a dyn EulerianSolver,
    pub exact: &'a dyn HamiltonianEnumerator,
    pub heuristic: &'a dyn HamiltonianHeuristic,
}

impl Default for Solvers<'static> {
    fn default() -> Self {
        Self {
            eulerian: &HierholzerEulerianSolver,
            exact: &PermutationHamiltonianEnumerator,
            heuristic: &MostConstrainedHeuristic,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub graph_type: String,
    pub num_vertices: usize,
    pub num_edges: usize,

    pub time_limit_secs: f64,
    pub max_paths: usize,
    pub exact_time_secs: f64,
    pub heuristic_time_secs: f64,
    pub exact_truncated: bool,

    pub num_hamiltonian_cycles: usize,
    pub num_hamiltonian_paths: usize,

    pub has_eulerian_cycle: bool,
    pub has_eulerian_path: bool,
    pub has_hamiltonian_cycle: bool,
    pub has_hamiltonian_path: bool,
    pub has_heuristic_path: bool,

    pub eulerian: EulerianOutcome,
    pub hamiltonian_cycles: Vec<Vec<usize>>,
    pub hamiltonian_paths: Vec<Vec<usize>>,
    pub heuristic_start: usize,
    pub heuristic: HeuristicOutcome,
}

pub async fn analyze_graph(
    matrix: Matrix,
    options: &AnalyzeOptions,
    solvers: &Solvers<'_>,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(AnalysisReport, AnalysisStats)> {
    let mut stats = AnalysisStats::default();

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "build_graph".into(),
        },
    )
    .await;
    let graph = Graph::from_matrix(matrix);
    stats.vertices = graph.vertex_count();
    stats.edges = graph.edge_count();
    emit(
        &sink,
        AppEvent::GraphBuilt {
            vertices: stats.vertices,
            edges: stats.edges,
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "build_graph".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "eulerian".into(),
        },
    )
    .await;
    let eulerian = solvers.eulerian.solve(&graph);
    stats.eulerian_length = eulerian.sequence().map_or(0, <[usize]>::len);
    emit(
        &sink,
        AppEvent::EulerianSolved {
            outcome: eulerian.clone(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "eulerian".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "hamiltonian_exact".into(),
        },
    )
    .await;
    let exact = collect_hamiltonian(&graph, solvers.exact, &options.budget, &sink).await;
    stats.hamiltonian_cycles = exact.cycles.len();
    stats.hamiltonian_paths = exact.paths.len();
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "hamiltonian_exact".into(),
        },
    )
    .await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "hamiltonian_heuristic".into(),
        },
    )
    .await;
    let heuristic_started = Instant::now();
    let heuristic = solvers.heuristic.find(&graph, options.start);
    let heuristic_time = heuristic_started.elapsed();
    stats.heuristic_length = heuristic.sequence().map_or(0, <[usize]>::len);
    emit(
        &sink,
        AppEvent::HeuristicSolved {
            start: options.start,
            outcome: heuristic.clone(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "hamiltonian_heuristic".into(),
        },
    )
    .await;

    let report = AnalysisReport {
        graph_type: "directed".to_string(),
        num_vertices: stats.vertices,
        num_edges: stats.edges,
        time_limit_secs: options.budget.time_limit.as_secs_f64(),
        max_paths: options.budget.max_paths,
        exact_time_secs: exact.elapsed.as_secs_f64(),
        heuristic_time_secs: heuristic_time.as_secs_f64(),
        exact_truncated: exact.truncated,
        num_hamiltonian_cycles: exact.cycles.len(),
        num_hamiltonian_paths: exact.paths.len(),
        has_eulerian_cycle: eulerian.is_circuit(),
        has_eulerian_path: eulerian.is_trail(),
        has_hamiltonian_cycle: !exact.cycles.is_empty(),
        has_hamiltonian_path: !exact.paths.is_empty(),
        has_heuristic_path: heuristic.sequence().is_some(),
        eulerian,
        hamiltonian_cycles: exact.cycles,
        hamiltonian_paths: exact.paths,
        heuristic_start: options.start,
        heuristic,
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((report, stats))
}
