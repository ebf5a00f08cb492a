use crate::domain::graph::Graph;
use crate::domain::outcome::is_closed;
use crate::domain::traits::HamiltonianEnumerator;
use crate::usecase::emit;
use crate::usecase::event::AppEvent;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_PATHS: usize = 10_000;

/// Caps the exhaustive Hamiltonian search by wall-clock time and result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub time_limit: Duration,
    pub max_paths: usize,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collected {
    pub cycles: Vec<Vec<usize>>,
    pub paths: Vec<Vec<usize>>,
    pub elapsed: Duration,
    /// The budget ran out before the enumeration was exhausted.
    pub truncated: bool,
}

impl Collected {
    pub fn len(&self) -> usize {
        self.cycles.len() + self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pulls results until the enumeration ends or the budget is spent.
///
/// Limits are checked only after a result is yielded, so at least one result
/// is kept when any exists. The time limit never interrupts the search itself:
/// a graph with no Hamiltonian path is walked to the end however long it takes.
/// `truncated` is set only when the enumeration still has a result left.
pub async fn collect_hamiltonian(
    graph: &Graph,
    enumerator: &dyn HamiltonianEnumerator,
    budget: &Budget,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Collected {
    let started = Instant::now();
    let mut out = Collected::default();

    let mut results = enumerator.enumerate(graph).peekable();

    while let Some(found) = results.next() {
        let cycle = is_closed(&found);
        emit(
            sink,
            AppEvent::HamiltonianFound {
                index: out.len(),
                vertices: found.clone(),
                cycle,
            },
        )
        .await;

        if cycle {
            out.cycles.push(found);
        } else {
            out.paths.push(found);
        }

        if out.len() >= budget.max_paths || started.elapsed() > budget.time_limit {
            if results.peek().is_none() {
                break;
            }
            out.truncated = true;
            emit(
                sink,
                AppEvent::HamiltonianBudgetExhausted {
                    collected: out.len(),
                    elapsed_ms: started.elapsed().as_millis(),
                },
            )
            .await;
            break;
        }
    }

    out.elapsed = started.elapsed();
    out
}
