//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: the immutable graph and the solver ports
//! - usecase: analysis orchestration + progress events
//! - infrastructure: solver implementations, matrix ingestion, serde + async IO
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    graph_pathfinder::interface::cli::run().await
}
