//! Single-source shortest distances and paths — Dijkstra's algorithm.
//!
//! Restricted to non-negative weights by construction ([`Weight`] is
//! unsigned); unweighted edges relax at the implicit weight 1.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::types::{Distance, Node, Weight};

use super::Graph;

/// Minimum distance from `start` to every node in the store.
///
/// Unreachable nodes map to [`Distance::Infinite`]; `start` maps to zero,
/// and is present in the result even when it is not a stored node.
/// Like traversal, this entry point does not validate membership. The
/// queue is ordered by the full `(distance, node)` pair, so ties on
/// distance pop in node order, which pins down relaxation order exactly.
pub fn distances<N: Node>(graph: &Graph<N>, start: N) -> HashMap<N, Distance> {
    let mut dist: HashMap<N, Distance> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), Distance::Infinite))
        .collect();
    dist.insert(start.clone(), Distance::ZERO);

    let mut heap: BinaryHeap<Reverse<(Weight, N)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((d, node))) = heap.pop() {
        let best = dist.get(&node).copied().unwrap_or(Distance::Infinite);
        if Distance::Finite(d) > best {
            // Stale entry; a later relaxation already improved this node.
            continue;
        }
        relax(graph, &node, d, &mut dist, &mut heap, None);
    }

    dist
}

/// Shortest path from `start` to `end`, inclusive of both.
///
/// Runs the same relaxation loop as [`distances`] but stops as soon as
/// `end` pops from the queue (sound because the queue is
/// distance-ordered), and tracks a predecessor map, which is then walked
/// backward from `end` and reversed. Returns the empty sequence when
/// either endpoint is absent from the store or `end` is unreachable. For
/// any non-empty result, the first element is `start`, the last is `end`,
/// and every consecutive pair is a stored edge.
pub fn shortest_path<N: Node>(graph: &Graph<N>, start: N, end: N) -> Vec<N> {
    if !graph.has_node(&start) || !graph.has_node(&end) {
        return Vec::new();
    }

    let mut dist: HashMap<N, Distance> = graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), Distance::Infinite))
        .collect();
    let mut previous: HashMap<N, N> = HashMap::new();
    dist.insert(start.clone(), Distance::ZERO);

    let mut heap: BinaryHeap<Reverse<(Weight, N)>> = BinaryHeap::new();
    heap.push(Reverse((0, start.clone())));

    while let Some(Reverse((d, node))) = heap.pop() {
        if node == end {
            break;
        }
        let best = dist.get(&node).copied().unwrap_or(Distance::Infinite);
        if Distance::Finite(d) > best {
            continue;
        }
        relax(graph, &node, d, &mut dist, &mut heap, Some(&mut previous));
    }

    // Walk predecessors back from `end`, then flip into path order.
    let mut path: Vec<N> = Vec::new();
    let mut cursor = Some(end);
    while let Some(node) = cursor {
        cursor = previous.get(&node).cloned();
        path.push(node);
    }
    path.reverse();

    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}

/// Relax every out-edge of `node`, currently settled at distance `d`.
fn relax<N: Node>(
    graph: &Graph<N>,
    node: &N,
    d: Weight,
    dist: &mut HashMap<N, Distance>,
    heap: &mut BinaryHeap<Reverse<(Weight, N)>>,
    mut previous: Option<&mut HashMap<N, N>>,
) {
    for neighbor in graph.neighbors(node) {
        let next = d.saturating_add(neighbor.weight);
        let known = dist
            .get(&neighbor.node)
            .copied()
            .unwrap_or(Distance::Infinite);
        if Distance::Finite(next) < known {
            dist.insert(neighbor.node.clone(), Distance::Finite(next));
            if let Some(previous) = previous.as_deref_mut() {
                previous.insert(neighbor.node.clone(), node.clone());
            }
            heap.push(Reverse((next, neighbor.node)));
        }
    }
}
