//! 图的静态结构元素：顶点、边、方向标记与遍历着色.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::ids::VertexId;

/// Edge weights are non-negative by construction.
pub type Weight = u64;

/// Sentinel for "no path found yet". All cost arithmetic saturates so the
/// sentinel is absorbing.
pub const INFINITE_COST: Weight = Weight::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Directedness {
    Directed,
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

/// A vertex wraps one element. Identity is the [`VertexId`] handle, never
/// value equality of the element: two vertices with equal elements are
/// distinct nodes unless they share a handle.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Vertex<T> {
    pub element: T,
}

impl<T> Vertex<T> {
    pub fn new(element: T) -> Self {
        Self { element }
    }
}

impl<T> fmt::Debug for Vertex<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&self.element).finish()
    }
}

/// An ordered endpoint pair plus weight. The directedness tag is copied
/// from the owning graph at creation time. Immutable once created.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    pub weight: Weight,
    pub directedness: Directedness,
}

impl Edge {
    pub fn new(start: VertexId, end: VertexId, weight: Weight, directedness: Directedness) -> Self {
        Self {
            start,
            end,
            weight,
            directedness,
        }
    }

    /// 给定一个端点，返回另一个端点（自环返回同一顶点）。
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if self.start == vertex {
            self.end
        } else {
            self.start
        }
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Depth-first traversal coloring: White = unvisited, Gray = on the stack,
/// Black = fully explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DfsColor {
    White,
    Gray,
    Black,
}
