//! 单源最短路径：经典 Dijkstra，附带工作副本上的非最短边裁剪.
use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use thiserror::Error;

use crate::graph::{EdgeId, Graph, VertexId, Weight, INFINITE_COST};

#[derive(Debug, Error)]
pub enum DijkstraError {
    #[error("start vertex {0:?} is not a member of the graph")]
    InvalidStart(VertexId),
}

/// Per-vertex shortest-path record: best-known cost from the start, the
/// predecessor on that path and the edge it arrived through. Owned by the
/// result table only.
#[derive(Debug, Clone, Serialize)]
pub struct PathElement<T> {
    pub vertex: VertexId,
    pub element: T,
    pub predecessor: Option<VertexId>,
    pub in_edge: Option<EdgeId>,
    pub cost: Weight,
}

impl<T> PathElement<T> {
    fn initial(vertex: VertexId, element: T, cost: Weight) -> Self {
        Self {
            vertex,
            element,
            predecessor: None,
            in_edge: None,
            cost,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.cost == INFINITE_COST
    }
}

/// Result of a Dijkstra run. The element-keyed cost table is the primary
/// value; `tree` is the private working copy after pruning, reduced to a
/// shortest-path tree (the caller's graph is never touched). Handles in
/// the table resolve against `tree`.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T: Serialize + Eq + Hash"))]
pub struct ShortestPaths<T> {
    start: T,
    pub table: IndexMap<T, PathElement<T>>,
    pub tree: Graph<T>,
}

impl<T> ShortestPaths<T>
where
    T: Eq + Hash + Clone,
{
    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn cost(&self, element: &T) -> Option<Weight> {
        self.table.get(element).map(|record| record.cost)
    }

    /// Reconstructs the element sequence from the start to `element` by
    /// walking predecessors backwards. `None` for unknown or unreachable
    /// elements.
    pub fn path_to(&self, element: &T) -> Option<Vec<T>> {
        let mut record = self.table.get(element)?;
        if record.is_unreachable() {
            return None;
        }

        let mut path = vec![record.element.clone()];
        while let Some(prev) = record.predecessor {
            record = self.table.get(self.tree.element(prev))?;
            path.push(record.element.clone());
        }
        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra from `start` over a directed or undirected graph.
///
/// Costs start at 0 for `start` and infinity elsewhere; each round relaxes
/// around the most recently finalized vertex (strict improvement only, so
/// ties keep the first-found predecessor), prunes finalized-to-finalized
/// edges of the working copy that are not the recorded best in-edge of the
/// later-finalized endpoint, then finalizes the cheapest unfinalized entry
/// in table order. Unreachable vertices keep infinite cost, no predecessor.
pub fn run_dijkstras<T>(graph: &Graph<T>, start: VertexId) -> Result<ShortestPaths<T>, DijkstraError>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    if !graph.contains_vertex(start) {
        return Err(DijkstraError::InvalidStart(start));
    }

    let mut working = graph.clone();
    let mut table: IndexMap<VertexId, PathElement<T>> = graph
        .vertices()
        .map(|v| {
            let cost = if v == start { 0 } else { INFINITE_COST };
            (v, PathElement::initial(v, graph.element(v).clone(), cost))
        })
        .collect();
    let mut finalized: IndexSet<VertexId> = IndexSet::new();

    let mut current = start;
    loop {
        relax_around(&working, current, &mut table);
        finalized.insert(current);
        prune_cloud_edges(&mut working, current, &finalized, &table);

        match next_to_finalize(&table, &finalized) {
            Some(next) => current = next,
            None => break,
        }
    }

    let table = table
        .into_values()
        .map(|record| (record.element.clone(), record))
        .collect();
    Ok(ShortestPaths {
        start: graph.element(start).clone(),
        table,
        tree: working,
    })
}

/// Relaxes every neighbor reachable through `current`: incident edges for
/// undirected graphs, out-edges for directed ones. Only strict
/// improvements are applied.
fn relax_around<T>(
    working: &Graph<T>,
    current: VertexId,
    table: &mut IndexMap<VertexId, PathElement<T>>,
) where
    T: fmt::Debug,
{
    let edges = if working.directedness().is_directed() {
        working.out_edges(current)
    } else {
        working.incident_edges(current)
    };
    let current_cost = table[&current].cost;

    for e in edges {
        let neighbor = working.edge(e).opposite(current);
        let candidate = current_cost.saturating_add(working.edge(e).weight);
        let Some(record) = table.get_mut(&neighbor) else {
            continue;
        };
        if candidate < record.cost {
            log::debug!(
                "relaxed {:?}: cost {} via {:?}",
                record.element,
                candidate,
                working.element(current)
            );
            record.cost = candidate;
            record.predecessor = Some(current);
            record.in_edge = Some(e);
        }
    }
}

/// Removes working-copy edges that run between two finalized vertices and
/// are not the recorded best in-edge of the later-finalized endpoint. Over
/// the whole run this reduces the working copy to a shortest-path tree.
fn prune_cloud_edges<T>(
    working: &mut Graph<T>,
    current: VertexId,
    finalized: &IndexSet<VertexId>,
    table: &IndexMap<VertexId, PathElement<T>>,
) {
    let scan = if working.directedness().is_directed() {
        working.in_edges(current)
    } else {
        working.incident_edges(current)
    };

    for e in scan {
        let edge = *working.edge(e);
        let other = edge.opposite(current);
        if !finalized.contains(&other) {
            continue;
        }
        // 两端都已定稿：较晚定稿的端点决定去留
        let later = if finalized.get_index_of(&edge.start) > finalized.get_index_of(&edge.end) {
            edge.start
        } else {
            edge.end
        };
        if table[&later].in_edge != Some(e) {
            working.remove_edge(e);
        }
    }
}

/// The unfinalized vertex with minimum current cost, ties broken by table
/// iteration order. When only infinite-cost vertices remain the first of
/// them is chosen (unreachable). `None` once everything is finalized.
fn next_to_finalize<T>(
    table: &IndexMap<VertexId, PathElement<T>>,
    finalized: &IndexSet<VertexId>,
) -> Option<VertexId> {
    let mut best: Option<(VertexId, Weight)> = None;
    for (&v, record) in table {
        if finalized.contains(&v) {
            continue;
        }
        match best {
            Some((_, cost)) if record.cost >= cost => {}
            _ => best = Some((v, record.cost)),
        }
    }
    best.map(|(v, _)| v)
}
