use crate::domain::graph::Graph;
use crate::domain::outcome::HeuristicOutcome;
use crate::domain::traits::HamiltonianHeuristic;

/// Greedy Hamiltonian walk: always step to the unvisited out-neighbor that
/// has the fewest unvisited out-neighbors of its own (directed Warnsdorff rule).
pub struct MostConstrainedHeuristic;

impl HamiltonianHeuristic for MostConstrainedHeuristic {
    fn find(&self, graph: &Graph, start: usize) -> HeuristicOutcome {
        greedy_walk(graph, start)
    }
}

fn greedy_walk(graph: &Graph, start: usize) -> HeuristicOutcome {
    let n = graph.vertex_count();
    if start >= n {
        return HeuristicOutcome::NoPathFound;
    }

    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n + 1);
    visited[start] = true;
    path.push(start);

    let mut current = start;
    while path.len() < n {
        let Some(next) = most_constrained_next(graph, current, &visited) else {
            return HeuristicOutcome::NoPathFound;
        };
        visited[next] = true;
        path.push(next);
        current = next;
    }

    if graph.has_edge(current, start) {
        path.push(start);
    }

    HeuristicOutcome::Sequence { vertices: path }
}

/// Ties keep the first neighbor in scan order.
fn most_constrained_next(graph: &Graph, current: usize, visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for &candidate in graph.out_neighbors(current) {
        if visited[candidate] {
            continue;
        }
        let options = graph
            .out_neighbors(candidate)
            .iter()
            .filter(|&&w| !visited[w])
            .count();
        if best.map_or(true, |(_, fewest)| options < fewest) {
            best = Some((candidate, options));
        }
    }

    best.map(|(candidate, _)| candidate)
}
