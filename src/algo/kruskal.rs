//! Kruskal minimum spanning tree construction.
use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::collect::{DisjointSet, MinHeap, UnionOutcome};
use crate::graph::{Graph, GraphError};

#[derive(Debug, Error)]
pub enum KruskalError {
    #[error("directed graphs are not supported by this Kruskal implementation")]
    DirectedUnsupported,
    #[error("the graph is not connected, no spanning tree exists")]
    NotConnected,
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Computes a minimum spanning tree of a connected undirected graph.
///
/// The result is a fresh graph over the same vertex set (handles carry
/// over); the input is never mutated. For a connected input with |V| ≥ 1
/// the result holds exactly |V| − 1 edges.
pub fn run_kruskal<T>(graph: &Graph<T>) -> Result<Graph<T>, KruskalError>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    if graph.directedness().is_directed() {
        return Err(KruskalError::DirectedUnsupported);
    }
    if !graph.is_connected()? {
        return Err(KruskalError::NotConnected);
    }

    let mut set = DisjointSet::new(graph.vertices().map(|v| graph.element(v).clone()));

    // 以 (weight, handle) 入堆，权重并列时按插入句柄次序出堆
    let mut heap = MinHeap::with_capacity(graph.num_edges());
    for e in graph.edges() {
        heap.add((graph.edge(e).weight, e));
    }

    let mut tree = graph.edgeless_copy();
    while let Some((weight, e)) = heap.remove_min() {
        let edge = graph.edge(e);
        let start = graph.element(edge.start);
        let end = graph.element(edge.end);
        match set.union(start, end) {
            UnionOutcome::Merged => {
                tree.insert_edge(edge.start, edge.end, weight);
                log::debug!("accepted edge {start:?} - {end:?} ({weight})");
            }
            UnionOutcome::AlreadyConnected => {
                log::debug!("rejected edge {start:?} - {end:?} ({weight}), would form a cycle");
            }
        }
    }

    log::info!(
        "minimum spanning tree: {} edges, total weight {}",
        tree.num_edges(),
        tree.total_weight()
    );
    Ok(tree)
}
