use crate::domain::graph::Graph;
use crate::domain::outcome::EulerianOutcome;
use crate::domain::traits::EulerianSolver;
use std::collections::VecDeque;

pub struct HierholzerEulerianSolver;

impl EulerianSolver for HierholzerEulerianSolver {
    fn solve(&self, graph: &Graph) -> EulerianOutcome {
        eulerian_path(graph)
    }
}

fn eulerian_path(graph: &Graph) -> EulerianOutcome {
    let n = graph.vertex_count();

    let mut start_candidates = 0usize;
    let mut end_candidates = 0usize;
    let mut trail_start = 0usize;

    for v in 0..n {
        let diff = graph.out_degree(v) as isize - graph.in_degree(v) as isize;
        match diff {
            1 => {
                start_candidates += 1;
                trail_start = v;
            }
            -1 => end_candidates += 1,
            0 => {}
            _ => return EulerianOutcome::NoPath,
        }
    }

    let balanced = start_candidates == 0 && end_candidates == 0;
    let single_trail = start_candidates == 1 && end_candidates == 1;
    if !balanced && !single_trail {
        return EulerianOutcome::NoPath;
    }

    let Some(first_active) = (0..n).find(|&v| !graph.vertices()[v].is_isolated()) else {
        return EulerianOutcome::Empty;
    };

    let reachable = weakly_reachable(graph, first_active);
    let disconnected = graph
        .vertices()
        .iter()
        .any(|v| !v.is_isolated() && !reachable[v.id]);
    if disconnected {
        return EulerianOutcome::NoPath;
    }

    let start = if balanced { first_active } else { trail_start };

    EulerianOutcome::Sequence {
        vertices: hierholzer(graph, start),
    }
}

/// Breadth-first search that follows edges in both directions.
fn weakly_reachable(graph: &Graph, start: usize) -> Vec<bool> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([start]);
    seen[start] = true;

    while let Some(u) = queue.pop_front() {
        let neighbors = graph.out_neighbors(u).iter().chain(graph.in_neighbors(u));
        for &w in neighbors {
            if !seen[w] {
                seen[w] = true;
                queue.push_back(w);
            }
        }
    }

    seen
}

/// Consumes every edge exactly once. Callers must have checked degree
/// balance and connectivity.
fn hierholzer(graph: &Graph, start: usize) -> Vec<usize> {
    let mut unused: Vec<VecDeque<usize>> = graph
        .vertices()
        .iter()
        .map(|v| v.out_neighbors.iter().copied().collect())
        .collect();

    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&top) = stack.last() {
        match unused[top].pop_front() {
            Some(next) => stack.push(next),
            None => {
                stack.pop();
                circuit.push(top);
            }
        }
    }

    circuit.reverse();
    circuit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakly_reachable_follows_incoming_edges() {
        // 1 -> 0, 2 isolated
        let g = Graph::from_matrix(vec![vec![0, 0, 0], vec![1, 0, 0], vec![0, 0, 0]]);

        let seen = weakly_reachable(&g, 0);
        assert_eq!(seen, vec![true, true, false]);
    }

    #[test]
    fn hierholzer_splices_sub_circuits() {
        // Two loops sharing vertex 0: 0 -> 1 -> 0 and 0 -> 2 -> 0.
        let g = Graph::from_matrix(vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]);

        assert_eq!(hierholzer(&g, 0), vec![0, 1, 0, 2, 0]);
    }

    #[test]
    fn self_loop_only_graph_is_a_circuit() {
        let g = Graph::from_matrix(vec![vec![0, 0], vec![0, 3]]);

        assert_eq!(
            eulerian_path(&g),
            EulerianOutcome::Sequence {
                vertices: vec![1, 1]
            }
        );
    }

    #[test]
    fn imbalance_of_two_is_rejected_before_connectivity() {
        // 0 -> 1, 0 -> 2: vertex 0 has out - in = 2.
        let g = Graph::from_matrix(vec![vec![0, 1, 1], vec![0, 0, 0], vec![0, 0, 0]]);

        assert_eq!(eulerian_path(&g), EulerianOutcome::NoPath);
    }
}
