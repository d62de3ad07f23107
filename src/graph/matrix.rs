//! Dense adjacency-matrix export.

use std::collections::HashMap;

use crate::types::{Node, Weight};

use super::Graph;

/// Materialize the graph as a dense N×N matrix.
///
/// Row and column indices follow the [`nodes`](Graph::nodes) snapshot
/// order; cell `(i, j)` holds the weight of the stored edge from node `i`
/// to node `j`, or 0 when there is none. The matrix mirrors raw directed
/// storage, so an undirected edge fills two symmetric cells. Indices stay
/// valid only until the next node addition or removal.
pub fn to_adj_matrix<N: Node>(graph: &Graph<N>) -> Vec<Vec<Weight>> {
    let nodes = graph.nodes();
    let index: HashMap<&N, usize> = nodes.iter().enumerate().map(|(i, n)| (n, i)).collect();

    let mut matrix = vec![vec![0; nodes.len()]; nodes.len()];
    for edge in graph.edges() {
        if let (Some(&i), Some(&j)) = (index.get(&edge.from), index.get(&edge.to)) {
            matrix[i][j] = edge.weight;
        }
    }

    matrix
}
