//! Eulerian and Hamiltonian path analysis for directed graphs given as
//! adjacency matrices.
//!
//! Layers:
//! - domain: the immutable graph, solver outcomes and solver ports
//! - infrastructure: solver implementations, matrix ingestion, JSON + NDJSON adapters
//! - usecase: analysis orchestration, budgets, progress events, rendering
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
