//! # 加权图核心定义（Weighted Graph）
//!
//! 设顶点集合 `V` 与边集合 `E ⊆ V × V`，每条边带权 `w(e) ∈ ℕ`。图在构造
//! 时固定方向标记（有向 | 无向），其每条边在创建时复制该标记。对任意顶点
//! `v ∈ V`：
//!
//! * **出边** `δ⁺(v) = { (v, u) ∈ E }`，**入边** `δ⁻(v) = { (u, v) ∈ E }`；
//! * **关联边** `δ(v) = δ⁺(v) ∪ δ⁻(v)`，无向语义下二者不加区分；
//! * 无向图 **连通** 当且仅当从任一顶点出发的深度优先遍历能将所有顶点
//!   染黑（White → Gray → Black）。
//!
//! 顶点与边存放在只增竞技场中，以稳定整数句柄寻址；图本身只是句柄的成员
//! 列表。克隆一个图得到成员列表的副本，句柄跨副本保持有效，删除操作只改
//! 成员列表。
//!
//! 提供的核心 API 支持：
//! * 顶点/边插入与删除、邻接查询、连通性检查；
//! * 邻接矩阵文本渲染；
//! * 图定义文本文法解析与 JSON 序列化。
//!
//! ## 示例
//!
//! ```rust
//! use graphalg::graph::*;
//!
//! let mut graph = Graph::new(Directedness::Undirected);
//! let a = graph.insert_vertex("A".to_string());
//! let b = graph.insert_vertex("B".to_string());
//! let c = graph.insert_vertex("C".to_string());
//!
//! graph.insert_edge(a, b, 1);
//! graph.insert_edge(b, c, 2);
//!
//! assert!(graph.are_adjacent(a, b));
//! assert!(!graph.are_adjacent(a, c));
//! assert!(graph.is_connected().unwrap());
//! assert_eq!(graph.total_weight(), 3);
//! ```

pub mod core;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod structure;

pub use self::core::{EdgeList, Graph, GraphError, VertexList};
pub use ids::{EdgeId, VertexId};
pub use index_vec::{Idx, IndexVec};
pub use io::{load_graph, parse_graph, read_json, write_json, FormatError, IoError};
pub use structure::{DfsColor, Directedness, Edge, Vertex, Weight, INFINITE_COST};
