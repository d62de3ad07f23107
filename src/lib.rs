//! relgraph — generic adjacency-list graph with traversal and shortest paths.
//!
//! Stores nodes of any hashable, totally ordered identifier type, with
//! directed or undirected, weighted or unweighted edges, and computes
//! breadth-first and depth-first visit orders, Dijkstra distances and path
//! reconstruction, and a dense adjacency-matrix export. A delimited-text
//! edge-list loader fills a graph from `entityA,entityB` lines.

pub mod cli;
pub mod graph;
pub mod ingest;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, dfs, distances, shortest_path, to_adj_matrix, Graph};
pub use ingest::{load_edge_list, IngestReport};
pub use types::{
    Distance, Edge, GraphError, GraphResult, IngestError, Neighbor, Node, Weight, DEFAULT_WEIGHT,
};
