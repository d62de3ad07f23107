//! CLI command implementations.
//!
//! Every command loads a `Graph<String>` from a delimited edge-list file,
//! runs one library operation, and prints the result as text or JSON.

use std::path::Path;

use crate::graph::{bfs, dfs, distances, shortest_path, to_adj_matrix, Graph};
use crate::ingest::load_edge_list;
use crate::types::IngestError;

/// Load the edge list behind a command invocation.
fn load(
    path: &Path,
    delimiter: char,
    directed: bool,
) -> Result<Graph<String>, IngestError> {
    let mut graph = Graph::new(directed);
    let report = load_edge_list(&mut graph, path, delimiter)?;
    if report.lines_skipped > 0 {
        log::warn!(
            "skipped {} of {} lines while loading {}",
            report.lines_skipped,
            report.lines_read,
            path.display()
        );
    }
    Ok(graph)
}

/// Summarize an edge-list file.
pub fn cmd_info(
    path: &Path,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let mut graph = Graph::new(directed);
    let report = load_edge_list(&mut graph, path, delimiter)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "directed": graph.is_directed(),
            "nodes": graph.node_count(),
            "stored_edges": graph.edge_count(),
            "report": report,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", graph.is_directed());
        println!("Nodes: {}", graph.node_count());
        println!("Stored edges: {}", graph.edge_count());
        println!("Lines read: {}", report.lines_read);
        println!("Edges added: {}", report.edges_added);
        println!("Lines skipped: {}", report.lines_skipped);
    }
    Ok(())
}

/// Print the graph, one node per line with its neighbors.
pub fn cmd_show(
    path: &Path,
    delimiter: char,
    directed: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    print!("{}", graph);
    Ok(())
}

/// List every stored edge triple.
pub fn cmd_edges(
    path: &Path,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    let edges = graph.edges();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&edges).unwrap_or_default()
        );
    } else {
        for edge in edges {
            println!("{} -> {} ({})", edge.from, edge.to, edge.weight);
        }
    }
    Ok(())
}

/// List the neighbors of one node.
pub fn cmd_neighbors(
    path: &Path,
    node: &str,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    let neighbors: Vec<_> = graph.neighbors(&node.to_string()).collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&neighbors).unwrap_or_default()
        );
    } else if neighbors.is_empty() {
        println!("{} has no neighbors", node);
    } else {
        for neighbor in neighbors {
            println!("{} ({})", neighbor.node, neighbor.weight);
        }
    }
    Ok(())
}

/// Breadth-first visit order from `start`.
pub fn cmd_bfs(
    path: &Path,
    start: &str,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    print_order(&bfs(&graph, start.to_string()), json);
    Ok(())
}

/// Depth-first visit order from `start`.
pub fn cmd_dfs(
    path: &Path,
    start: &str,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    print_order(&dfs(&graph, start.to_string()), json);
    Ok(())
}

/// Shortest distance from `start` to every node.
pub fn cmd_distances(
    path: &Path,
    start: &str,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    let dist = distances(&graph, start.to_string());

    if json {
        // Unreachable nodes serialize as null.
        let map: serde_json::Map<String, serde_json::Value> = graph
            .nodes()
            .iter()
            .map(|n| {
                let value = dist
                    .get(n)
                    .and_then(|d| d.value())
                    .map_or(serde_json::Value::Null, |w| w.into());
                (n.clone(), value)
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&map).unwrap_or_default()
        );
    } else {
        for node in graph.nodes() {
            if let Some(d) = dist.get(node) {
                println!("{}: {}", node, d);
            }
        }
    }
    Ok(())
}

/// Shortest path between two nodes.
pub fn cmd_path(
    path: &Path,
    from: &str,
    to: &str,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    let route = shortest_path(&graph, from.to_string(), to.to_string());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&route).unwrap_or_default()
        );
    } else if route.is_empty() {
        println!("no path from {} to {}", from, to);
    } else {
        println!("{}", route.join(" -> "));
    }
    Ok(())
}

/// Dense adjacency matrix, with the node order that indexes it.
pub fn cmd_matrix(
    path: &Path,
    delimiter: char,
    directed: bool,
    json: bool,
) -> Result<(), IngestError> {
    let graph = load(path, delimiter, directed)?;
    let matrix = to_adj_matrix(&graph);

    if json {
        let out = serde_json::json!({
            "nodes": graph.nodes(),
            "matrix": matrix,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for (node, row) in graph.nodes().iter().zip(&matrix) {
            let cells: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            println!("{}: [{}]", node, cells.join(", "));
        }
    }
    Ok(())
}

/// Print a visit order as text or JSON.
fn print_order(order: &[String], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(order).unwrap_or_default()
        );
    } else {
        println!("{}", order.join(" -> "));
    }
}
