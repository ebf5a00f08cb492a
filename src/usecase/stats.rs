use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub vertices: usize,
    pub edges: usize,
    pub eulerian_length: usize,
    pub hamiltonian_cycles: usize,
    pub hamiltonian_paths: usize,
    pub heuristic_length: usize,
}
