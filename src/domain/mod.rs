//! Domain layer: pure, synchronous graph model and solver contracts.

pub mod graph;
pub mod outcome;
pub mod traits;
