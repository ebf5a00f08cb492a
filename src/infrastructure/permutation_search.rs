use crate::domain::graph::Graph;
use crate::domain::traits::HamiltonianEnumerator;

/// Exhaustive Hamiltonian search over vertex permutations in lexicographic
/// order.
pub struct PermutationHamiltonianEnumerator;

impl HamiltonianEnumerator for PermutationHamiltonianEnumerator {
    fn enumerate<'g>(&self, graph: &'g Graph) -> Box<dyn Iterator<Item = Vec<usize>> + 'g> {
        Box::new(HamiltonianPaths::new(graph))
    }
}

/// Single-pass iterator over every Hamiltonian path of `graph`.
///
/// A permutation whose prefix already contains a missing edge is skipped
/// together with every other permutation sharing that prefix, which leaves the
/// emission order untouched.
#[derive(Debug, Clone)]
pub struct HamiltonianPaths<'g> {
    graph: &'g Graph,
    perm: Vec<usize>,
    exhausted: bool,
}

impl<'g> HamiltonianPaths<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            perm: (0..n).collect(),
            exhausted: n == 0,
        }
    }

    /// Index `k` of the first pair `perm[k] -> perm[k + 1]` that is not an edge.
    fn first_gap(&self) -> Option<usize> {
        self.perm
            .windows(2)
            .position(|pair| !self.graph.has_edge(pair[0], pair[1]))
    }

    fn close_if_cycle(&self) -> Vec<usize> {
        let mut found = self.perm.clone();
        if let (Some(&first), Some(&last)) = (self.perm.first(), self.perm.last()) {
            if self.graph.has_edge(last, first) {
                found.push(first);
            }
        }
        found
    }
}

impl Iterator for HamiltonianPaths<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let found = match self.first_gap() {
                None => Some(self.close_if_cycle()),
                Some(k) => {
                    // Jump to the last permutation that still starts with perm[..=k + 1].
                    self.perm[k + 2..].sort_unstable_by(|a, b| b.cmp(a));
                    None
                }
            };

            if !next_permutation(&mut self.perm) {
                self.exhausted = true;
            }

            if found.is_some() {
                return found;
            }
        }
        None
    }
}

/// Advances `perm` to its lexicographic successor. Returns `false` once `perm`
/// is the last permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_permutation_walks_lexicographic_order() {
        let mut perm = vec![0, 1, 2];
        let mut seen = vec![perm.clone()];
        while next_permutation(&mut perm) {
            seen.push(perm.clone());
        }

        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn next_permutation_stops_on_trivial_input() {
        assert!(!next_permutation(&mut []));
        assert!(!next_permutation(&mut [0]));
    }

    #[test]
    fn complete_graph_yields_every_permutation_as_cycle() {
        let g = Graph::from_matrix(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);

        let all: Vec<Vec<usize>> = HamiltonianPaths::new(&g).collect();
        assert_eq!(all.len(), 6);
        assert!(all.iter().all(|p| p.len() == 4 && p[0] == p[3]));
        assert_eq!(all[0], vec![0, 1, 2, 0]);
        assert_eq!(all[5], vec![2, 1, 0, 2]);
    }

    #[test]
    fn prefix_skip_keeps_later_matches() {
        // Only path: 2 -> 0 -> 1. Every permutation starting with 0 or 1 fails early.
        let g = Graph::from_matrix(vec![vec![0, 1, 0], vec![0, 0, 0], vec![1, 0, 0]]);

        let all: Vec<Vec<usize>> = HamiltonianPaths::new(&g).collect();
        assert_eq!(all, vec![vec![2, 0, 1]]);
    }

    #[test]
    fn single_vertex_is_reported_once() {
        let plain = Graph::from_matrix(vec![vec![0]]);
        let looped = Graph::from_matrix(vec![vec![1]]);

        assert_eq!(HamiltonianPaths::new(&plain).collect::<Vec<_>>(), vec![vec![0]]);
        assert_eq!(
            HamiltonianPaths::new(&looped).collect::<Vec<_>>(),
            vec![vec![0, 0]]
        );
    }
}
