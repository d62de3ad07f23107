//! Build -> traverse -> shortest path -> matrix flow.

use relgraph::{bfs, dfs, distances, shortest_path, to_adj_matrix, Graph, GraphResult};

fn main() -> GraphResult<(), &'static str> {
    let mut graph = Graph::undirected();

    // Collaboration edges between artists, weighted by hop cost
    graph.add_weighted_edge("Dylan", "Cash", 1);
    graph.add_weighted_edge("Cash", "Presley", 2);
    graph.add_weighted_edge("Dylan", "Presley", 4);
    graph.add_edge("Presley", "Orbison");
    graph.add_node("Satie")?;

    println!(
        "Graph with {} nodes and {} stored edges",
        graph.node_count(),
        graph.edge_count()
    );
    print!("{}", graph);

    println!("\nBFS from Dylan: {:?}", bfs(&graph, "Dylan"));
    println!("DFS from Dylan: {:?}", dfs(&graph, "Dylan"));

    let dist = distances(&graph, "Dylan");
    println!("\nDistances from Dylan:");
    for node in graph.nodes() {
        if let Some(d) = dist.get(node) {
            println!("  {}: {}", node, d);
        }
    }

    let path = shortest_path(&graph, "Dylan", "Orbison");
    println!("\nShortest path Dylan -> Orbison: {}", path.join(" -> "));

    let matrix = to_adj_matrix(&graph);
    println!("\nAdjacency matrix ({0} x {0}):", matrix.len());
    for row in &matrix {
        println!("  {:?}", row);
    }

    Ok(())
}
