//! All data types for the relgraph library.

pub mod distance;
pub mod edge;
pub mod error;

pub use distance::Distance;
pub use edge::{Edge, Neighbor, Weight, DEFAULT_WEIGHT};
pub use error::{GraphError, GraphResult, IngestError};

use std::fmt;
use std::hash::Hash;

/// Marker trait for types usable as graph node identifiers.
///
/// Equality and hashing drive adjacency lookups; the total order drives
/// deterministic traversal tie-breaking and stable matrix indexing; `Debug`
/// lets errors name the offending node. Blanket-implemented for every type
/// meeting the bounds.
pub trait Node: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Node for T {}
