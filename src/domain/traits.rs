use crate::domain::graph::Graph;
use crate::domain::outcome::{EulerianOutcome, HeuristicOutcome};

pub trait EulerianSolver {
    fn solve(&self, graph: &Graph) -> EulerianOutcome;
}

/// Lazily enumerates Hamiltonian paths; cycles carry the start vertex again
/// at the end. Dropping the iterator abandons the remaining search.
pub trait HamiltonianEnumerator {
    fn enumerate<'g>(&self, graph: &'g Graph) -> Box<dyn Iterator<Item = Vec<usize>> + 'g>;
}

pub trait HamiltonianHeuristic {
    fn find(&self, graph: &Graph, start: usize) -> HeuristicOutcome;
}
