//! 图算法：最小生成树与单源最短路径.
//!
//! Both algorithms take the input graph by shared reference and return a
//! derived structure: [`kruskal::run_kruskal`] a fresh spanning-tree graph
//! over the same vertex set, [`dijkstra::run_dijkstras`] a per-vertex cost
//! table plus its pruned shortest-path tree. Neither mutates the caller's
//! graph.
pub mod dijkstra;
pub mod kruskal;

pub use dijkstra::{run_dijkstras, DijkstraError, PathElement, ShortestPaths};
pub use kruskal::{run_kruskal, KruskalError};
