//! Edge-list ingestion — delimited text to graph edges.

pub mod reader;

pub use reader::{load_edge_list, IngestReport};
