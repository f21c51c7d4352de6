//! 图容器：竞技场存储 + 成员列表，提供邻接查询、变更与连通性检查.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::graph::ids::{EdgeId, VertexId};
use crate::graph::index_vec::IndexVec;
use crate::graph::structure::{DfsColor, Directedness, Edge, Vertex, Weight};

/// Small inline list of edge handles, most vertices touch only a few edges.
pub type EdgeList = SmallVec<[EdgeId; 4]>;
/// Small inline list of vertex handles.
pub type VertexList = SmallVec<[VertexId; 4]>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("connectivity is only defined for undirected graphs")]
    ConnectivityUndirectedOnly,
}

/// A generic weighted graph, directed or undirected.
///
/// Vertices and edges live in append-only arenas and are addressed by
/// stable integer handles; the graph itself is a pair of membership lists
/// over those arenas. `Clone` copies the membership lists and the arena
/// contents while keeping every handle valid and comparable across copies,
/// so removing a vertex or edge from a copy never disturbs the original's
/// membership. 删除只改成员列表，竞技场条目永不回收。
#[derive(Clone, Serialize, Deserialize)]
pub struct Graph<T> {
    vertices: IndexVec<VertexId, Vertex<T>>,
    edges: IndexVec<EdgeId, Edge>,
    vertex_members: Vec<VertexId>,
    edge_members: Vec<EdgeId>,
    directedness: Directedness,
}

impl<T> fmt::Debug for Graph<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directedness", &self.directedness)
            .field("vertices", &self.vertex_members)
            .field("edges", &self.edge_members)
            .finish()
    }
}

impl<T> Graph<T> {
    pub fn new(directedness: Directedness) -> Self {
        Self {
            vertices: IndexVec::new(),
            edges: IndexVec::new(),
            vertex_members: Vec::new(),
            edge_members: Vec::new(),
            directedness,
        }
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_members.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_members.is_empty()
    }

    /// Appends a new vertex. No duplicate check: equal elements still make
    /// distinct vertices.
    pub fn insert_vertex(&mut self, element: T) -> VertexId {
        let id = self.vertices.push(Vertex::new(element));
        self.vertex_members.push(id);
        id
    }

    /// Appends a new edge tagged with the graph's directedness. Endpoint
    /// membership is the caller's responsibility and is not validated.
    pub fn insert_edge(&mut self, v: VertexId, w: VertexId, weight: Weight) -> EdgeId {
        let id = self
            .edges
            .push(Edge::new(v, w, weight, self.directedness));
        self.edge_members.push(id);
        id
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertex_members.contains(&v)
    }

    pub fn contains_edge(&self, e: EdgeId) -> bool {
        self.edge_members.contains(&e)
    }

    /// Member vertex handles in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_members.iter().copied()
    }

    /// Member edge handles in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_members.iter().copied()
    }

    pub fn get_vertex(&self, v: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(v)
    }

    pub fn get_edge(&self, e: EdgeId) -> Option<&Edge> {
        self.edges.get(e)
    }

    /// Arena access by handle. Panics on a handle foreign to this graph
    /// family, like any index.
    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e]
    }

    pub fn element(&self, v: VertexId) -> &T {
        &self.vertices[v].element
    }

    /// The element is the only mutable part of a vertex.
    pub fn element_mut(&mut self, v: VertexId) -> &mut T {
        &mut self.vertices[v].element
    }

    /// First member vertex whose element equals `element`.
    pub fn find_vertex(&self, element: &T) -> Option<VertexId>
    where
        T: PartialEq,
    {
        self.vertices()
            .find(|&v| self.vertices[v].element == *element)
    }

    /// Member edges starting at `v` (handle equality of the endpoint).
    pub fn out_edges(&self, v: VertexId) -> EdgeList {
        self.edges()
            .filter(|&e| self.edges[e].start == v)
            .collect()
    }

    /// Member edges ending at `v`.
    pub fn in_edges(&self, v: VertexId) -> EdgeList {
        self.edges().filter(|&e| self.edges[e].end == v).collect()
    }

    /// Member edges where `v` is either endpoint.
    pub fn incident_edges(&self, v: VertexId) -> EdgeList {
        self.edges().filter(|&e| self.edges[e].touches(v)).collect()
    }

    /// De-duplicated neighbor set: out-neighbors first, then in-neighbors
    /// not already present.
    pub fn adjacent_vertices(&self, v: VertexId) -> VertexList {
        let mut neighbors = VertexList::new();
        for e in self.edges() {
            let edge = &self.edges[e];
            if edge.start == v && !neighbors.contains(&edge.end) {
                neighbors.push(edge.end);
            }
        }
        for e in self.edges() {
            let edge = &self.edges[e];
            if edge.end == v && !neighbors.contains(&edge.start) {
                neighbors.push(edge.start);
            }
        }
        neighbors
    }

    /// True if any member edge connects `v` and `w`, in either direction.
    pub fn are_adjacent(&self, v: VertexId, w: VertexId) -> bool {
        self.edges().any(|e| {
            let edge = &self.edges[e];
            (edge.start == v && edge.end == w) || (edge.start == w && edge.end == v)
        })
    }

    /// Removes `v` and every member edge incident to it. Arena entries are
    /// untouched, so handles held by copies stay valid.
    pub fn remove_vertex(&mut self, v: VertexId) {
        self.vertex_members.retain(|&m| m != v);
        let edges = &self.edges;
        self.edge_members.retain(|&e| !edges[e].touches(v));
    }

    /// Removes the first membership entry matching `e` by handle identity.
    pub fn remove_edge(&mut self, e: EdgeId) {
        if let Some(pos) = self.edge_members.iter().position(|&m| m == e) {
            self.edge_members.remove(pos);
        }
    }

    /// Sum of member edge weights.
    pub fn total_weight(&self) -> Weight {
        self.edges().map(|e| self.edges[e].weight).sum()
    }

    /// A new graph over the same vertex set with no edges. Vertex handles
    /// carry over unchanged; edges inserted into the copy get fresh handles.
    pub fn edgeless_copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            vertices: self.vertices.clone(),
            edges: IndexVec::new(),
            vertex_members: self.vertex_members.clone(),
            edge_members: Vec::new(),
            directedness: self.directedness,
        }
    }

    /// Depth-first connectivity check, undirected graphs only. The empty
    /// graph is trivially connected.
    ///
    /// Runs iteratively with an explicit stack of (vertex, neighbors,
    /// cursor) frames; a vertex counts as reached once it turns Black.
    pub fn is_connected(&self) -> Result<bool, GraphError> {
        if self.directedness.is_directed() {
            return Err(GraphError::ConnectivityUndirectedOnly);
        }
        let Some(&start) = self.vertex_members.first() else {
            return Ok(true);
        };

        let mut colors: IndexVec<VertexId, DfsColor> = IndexVec::with_capacity(self.vertices.len());
        for _ in 0..self.vertices.len() {
            colors.push(DfsColor::White);
        }

        let mut stack: Vec<(VertexId, VertexList, usize)> = Vec::new();
        colors[start] = DfsColor::Gray;
        stack.push((start, self.adjacent_vertices(start), 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, neighbors, cursor) = (frame.0, &frame.1, frame.2);
            if cursor < neighbors.len() {
                let next = neighbors[cursor];
                frame.2 += 1;
                if colors.get(next) == Some(&DfsColor::White) {
                    colors[next] = DfsColor::Gray;
                    stack.push((next, self.adjacent_vertices(next), 0));
                }
            } else {
                colors[vertex] = DfsColor::Black;
                stack.pop();
            }
        }

        Ok(self
            .vertex_members
            .iter()
            .all(|&v| colors[v] == DfsColor::Black))
    }

    /// 第一条匹配的边胜出；无向图两个方向都算匹配。
    fn weight_between(&self, v: VertexId, w: VertexId) -> Option<Weight> {
        self.edges()
            .find(|&e| {
                let edge = &self.edges[e];
                (edge.start == v && edge.end == w)
                    || (!self.directedness.is_directed() && edge.start == w && edge.end == v)
            })
            .map(|e| self.edges[e].weight)
    }

    /// Renders the graph as a dash-framed adjacency matrix: a header row of
    /// vertex labels, then one row per vertex with the edge weight or `0`
    /// per column.
    pub fn to_adjacency_matrix(&self) -> String
    where
        T: fmt::Display,
    {
        let border = "-".repeat(8 * (self.num_vertices() + 1));
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');

        let header = self
            .vertices()
            .map(|v| self.vertices[v].element.to_string())
            .join("\t");
        out.push_str(&format!(" \t{header}\n"));

        for v in self.vertices() {
            let row = self
                .vertices()
                .map(|w| {
                    self.weight_between(v, w)
                        .map_or_else(|| "0".to_string(), |weight| weight.to_string())
                })
                .join("\t");
            out.push_str(&format!("{}\t{row}\n", self.vertices[v].element));
        }

        out.push_str(&border);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> (Graph<String>, [VertexId; 4]) {
        let mut graph = Graph::new(Directedness::Undirected);
        let a = graph.insert_vertex("A".to_string());
        let b = graph.insert_vertex("B".to_string());
        let c = graph.insert_vertex("C".to_string());
        let d = graph.insert_vertex("D".to_string());
        graph.insert_edge(a, b, 1);
        graph.insert_edge(b, c, 2);
        graph.insert_edge(a, c, 4);
        graph.insert_edge(c, d, 3);
        (graph, [a, b, c, d])
    }

    #[test]
    fn adjacency_queries() {
        let (graph, [a, b, c, d]) = diamond();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 4);

        assert_eq!(graph.out_edges(a).len(), 2);
        assert_eq!(graph.in_edges(c).len(), 2);
        assert_eq!(graph.incident_edges(c).len(), 3);

        let neighbors = graph.adjacent_vertices(c);
        assert_eq!(neighbors.as_slice(), &[d, b, a]);

        assert!(graph.are_adjacent(a, b));
        assert!(graph.are_adjacent(b, a));
        assert!(!graph.are_adjacent(b, d));
    }

    #[test]
    fn equal_elements_make_distinct_vertices() {
        let mut graph = Graph::new(Directedness::Undirected);
        let first = graph.insert_vertex("X".to_string());
        let second = graph.insert_vertex("X".to_string());
        assert_ne!(first, second);
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.find_vertex(&"X".to_string()), Some(first));
    }

    #[test]
    fn remove_vertex_drops_incident_edges() {
        let (mut graph, [_, _, c, _]) = diamond();
        graph.remove_vertex(c);
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 1);
        assert!(!graph.contains_vertex(c));
    }

    #[test]
    fn remove_edge_is_membership_only() {
        let (mut graph, [a, b, _, _]) = diamond();
        let e = graph.out_edges(a)[0];
        graph.remove_edge(e);
        assert_eq!(graph.num_edges(), 3);
        assert!(!graph.contains_edge(e));
        // 竞技场条目仍可解析
        assert_eq!(graph.edge(e).start, a);
        assert_eq!(graph.edge(e).end, b);
    }

    #[test]
    fn copies_diverge_in_membership_but_share_handles() {
        let (graph, [a, _, c, _]) = diamond();
        let mut copy = graph.clone();
        copy.remove_vertex(c);
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(copy.num_vertices(), 3);
        assert!(graph.contains_vertex(c));
        assert_eq!(copy.element(a), graph.element(a));
    }

    #[test]
    fn connectivity_on_directed_graph_is_an_error() {
        let graph: Graph<String> = Graph::new(Directedness::Directed);
        assert!(matches!(
            graph.is_connected(),
            Err(GraphError::ConnectivityUndirectedOnly)
        ));
    }

    #[test]
    fn empty_graph_is_trivially_connected() {
        let graph: Graph<String> = Graph::new(Directedness::Undirected);
        assert!(graph.is_connected().unwrap());
    }

    #[test]
    fn connectivity_detects_isolated_vertex() {
        let (mut graph, _) = diamond();
        assert!(graph.is_connected().unwrap());
        graph.insert_vertex("E".to_string());
        assert!(!graph.is_connected().unwrap());
    }

    #[test]
    fn edgeless_copy_keeps_vertex_handles() {
        let (graph, [a, b, _, _]) = diamond();
        let mut mst = graph.edgeless_copy();
        assert_eq!(mst.num_vertices(), 4);
        assert_eq!(mst.num_edges(), 0);
        mst.insert_edge(a, b, 1);
        assert!(mst.are_adjacent(a, b));
        assert_eq!(graph.num_edges(), 4);
    }

    #[test]
    fn adjacency_matrix_is_symmetric_for_undirected() {
        let (graph, _) = diamond();
        let matrix = graph.to_adjacency_matrix();
        let lines: Vec<&str> = matrix.lines().collect();
        assert!(lines[0].chars().all(|c| c == '-'));
        assert_eq!(lines[1], " \tA\tB\tC\tD");
        assert_eq!(lines[2], "A\t0\t1\t4\t0");
        assert_eq!(lines[3], "B\t1\t0\t2\t0");
        assert_eq!(lines[4], "C\t4\t2\t0\t3");
        assert_eq!(lines[5], "D\t0\t0\t3\t0");
    }

    #[test]
    fn directed_matrix_keeps_orientation() {
        let mut graph = Graph::new(Directedness::Directed);
        let a = graph.insert_vertex("A".to_string());
        let b = graph.insert_vertex("B".to_string());
        graph.insert_edge(a, b, 5);
        let matrix = graph.to_adjacency_matrix();
        let lines: Vec<&str> = matrix.lines().collect();
        assert_eq!(lines[2], "A\t0\t5");
        assert_eq!(lines[3], "B\t0\t0");
    }
}
