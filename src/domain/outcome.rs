use serde::Serialize;

/// Result of the Eulerian solver. None of the variants is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EulerianOutcome {
    NoPath,
    /// The graph has no edges at all.
    Empty,
    /// A trail (`first != last`) or circuit (`first == last`) using every edge once.
    Sequence { vertices: Vec<usize> },
}

impl EulerianOutcome {
    pub fn sequence(&self) -> Option<&[usize]> {
        match self {
            Self::Sequence { vertices } => Some(vertices.as_slice()),
            _ => None,
        }
    }

    pub fn is_circuit(&self) -> bool {
        self.sequence().is_some_and(is_closed)
    }

    pub fn is_trail(&self) -> bool {
        self.sequence().is_some_and(|s| !is_closed(s))
    }
}

/// Result of the greedy Hamiltonian solver.
///
/// `NoPathFound` only says the greedy walk got stuck; a Hamiltonian path may
/// still exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeuristicOutcome {
    NoPathFound,
    Sequence { vertices: Vec<usize> },
}

impl HeuristicOutcome {
    pub fn sequence(&self) -> Option<&[usize]> {
        match self {
            Self::Sequence { vertices } => Some(vertices.as_slice()),
            Self::NoPathFound => None,
        }
    }

    pub fn is_cycle(&self) -> bool {
        self.sequence().is_some_and(is_closed)
    }
}

/// A sequence is closed when it returns to its first vertex.
///
/// A lone vertex `[v]` is an open path; `[v, v]` is a closed self-loop.
pub fn is_closed(sequence: &[usize]) -> bool {
    sequence.len() > 1 && sequence.first() == sequence.last()
}
