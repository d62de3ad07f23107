//! Error types for the relgraph library.

use std::fmt;

use thiserror::Error;

/// Errors raised by direct store mutations.
///
/// Only missing or duplicate nodes are errors. An absent edge is a normal
/// negative result everywhere it can come up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N: fmt::Debug> {
    /// Node inserted directly when it is already present.
    #[error("node {0:?} is already in the graph")]
    DuplicateNode(N),

    /// Node named by a removal that is not in the store.
    #[error("node {0:?} does not exist in the graph")]
    NodeNotFound(N),
}

/// Convenience result type for store operations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;

/// Errors raised by edge-list ingestion.
///
/// Malformed lines are logged and skipped, never surfaced here; only a file
/// that cannot be opened or read aborts a load. Ingestion and the store have
/// independent failure domains: neither error type crosses into the other.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The source file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
