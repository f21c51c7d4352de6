//! I/O 支持：图定义文本文法解析与 JSON 快照接口.
use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::graph::core::Graph;
use crate::graph::ids::VertexId;
use crate::graph::structure::{Directedness, Weight};

/// Malformed graph-definition input. Recoverable by retrying with a
/// different file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing header line")]
    MissingHeader,
    #[error("vertex count {0:?} is not a representable non-negative integer")]
    VertexCount(String),
    #[error("graph type must be D or U, got {0:?}")]
    GraphType(String),
    #[error("weight {0:?} is not a positive integer")]
    Weight(String),
    #[error("vertex {0:?} does not exist in the graph")]
    UnknownVertex(String),
    #[error("unexpected number of values on line {line_no}: {count}")]
    TokenCount { line_no: usize, count: usize },
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the graph-definition grammar.
///
/// Line 1 is `<numVertices> <unused> <D|U>`. Vertices are auto-named `A`,
/// `B`, `C`, ... in sequence. Every further non-blank line is either
/// `<start> <end> <weight>` (adds a weighted edge) or a single vertex name
/// (designates the shortest-path source; the last designation wins).
pub fn parse_graph(text: &str) -> Result<(Graph<String>, Option<VertexId>), FormatError> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines.next().ok_or(FormatError::MissingHeader)?;
    let header_tokens: Vec<&str> = header.split_whitespace().collect();
    if header_tokens.len() < 3 {
        return Err(FormatError::TokenCount {
            line_no: 1,
            count: header_tokens.len(),
        });
    }

    let num_vertices: usize = header_tokens[0]
        .parse()
        .map_err(|_| FormatError::VertexCount(header_tokens[0].to_string()))?;
    let directedness = match header_tokens[2] {
        "D" => Directedness::Directed,
        "U" => Directedness::Undirected,
        other => return Err(FormatError::GraphType(other.to_string())),
    };

    let mut graph = Graph::new(directedness);
    for i in 0..num_vertices {
        let name = u32::try_from(i)
            .ok()
            .and_then(|i| ('A' as u32).checked_add(i))
            .and_then(char::from_u32)
            .ok_or_else(|| FormatError::VertexCount(header_tokens[0].to_string()))?;
        graph.insert_vertex(name.to_string());
    }

    let mut source = None;
    for (idx, line) in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [start, end, weight] => {
                let weight: Weight = weight
                    .parse()
                    .ok()
                    .filter(|&w| w > 0)
                    .ok_or_else(|| FormatError::Weight(weight.to_string()))?;
                let start = resolve(&graph, start)?;
                let end = resolve(&graph, end)?;
                graph.insert_edge(start, end, weight);
            }
            [name] => {
                source = Some(resolve(&graph, name)?);
            }
            _ => {
                return Err(FormatError::TokenCount {
                    line_no: idx + 1,
                    count: tokens.len(),
                });
            }
        }
    }

    Ok((graph, source))
}

fn resolve(graph: &Graph<String>, name: &str) -> Result<VertexId, FormatError> {
    graph
        .find_vertex(&name.to_string())
        .ok_or_else(|| FormatError::UnknownVertex(name.to_string()))
}

/// Reads and parses a graph-definition file. A missing file surfaces as
/// [`IoError::Io`] with `ErrorKind::NotFound`, distinct from format errors.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<(Graph<String>, Option<VertexId>), IoError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_graph(&text)?)
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let content = to_json_string(value)?;
    fs::write(path, content)?;
    Ok(())
}

pub fn read_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T, IoError> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAMOND: &str = "4 7 U\nA B 1\nB C 2\nA C 4\nC D 3\nA\n";

    #[test]
    fn parses_vertices_edges_and_source() {
        let (graph, source) = parse_graph(DIAMOND).unwrap();
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.directedness(), Directedness::Undirected);

        let a = graph.find_vertex(&"A".to_string()).unwrap();
        assert_eq!(source, Some(a));

        let b = graph.find_vertex(&"B".to_string()).unwrap();
        assert!(graph.are_adjacent(a, b));
    }

    #[test]
    fn directed_header_token() {
        let (graph, source) = parse_graph("2 0 D\nA B 3\n").unwrap();
        assert_eq!(graph.directedness(), Directedness::Directed);
        assert_eq!(source, None);
    }

    #[test]
    fn rejects_bad_vertex_count() {
        assert_eq!(
            parse_graph("x 0 U\n").unwrap_err(),
            FormatError::VertexCount("x".to_string())
        );
    }

    #[test]
    fn rejects_bad_graph_type() {
        assert_eq!(
            parse_graph("2 0 X\n").unwrap_err(),
            FormatError::GraphType("X".to_string())
        );
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert_eq!(
            parse_graph("2 0 U\nA B 0\n").unwrap_err(),
            FormatError::Weight("0".to_string())
        );
        assert_eq!(
            parse_graph("2 0 U\nA B -3\n").unwrap_err(),
            FormatError::Weight("-3".to_string())
        );
    }

    #[test]
    fn rejects_unknown_vertex() {
        assert_eq!(
            parse_graph("2 0 U\nA Z 1\n").unwrap_err(),
            FormatError::UnknownVertex("Z".to_string())
        );
        assert_eq!(
            parse_graph("2 0 U\nZ\n").unwrap_err(),
            FormatError::UnknownVertex("Z".to_string())
        );
    }

    #[test]
    fn rejects_wrong_token_arity() {
        assert_eq!(
            parse_graph("2 0 U\nA B 1 9\n").unwrap_err(),
            FormatError::TokenCount {
                line_no: 2,
                count: 4
            }
        );
    }

    #[test]
    fn matrix_round_trip_reflects_declared_edges() {
        let (graph, _) = parse_graph(DIAMOND).unwrap();
        let matrix = graph.to_adjacency_matrix();
        let lines: Vec<&str> = matrix.lines().collect();
        assert_eq!(lines[2], "A\t0\t1\t4\t0");
        assert_eq!(lines[3], "B\t1\t0\t2\t0");
        assert_eq!(lines[4], "C\t4\t2\t0\t3");
        assert_eq!(lines[5], "D\t0\t0\t3\t0");
    }

    #[test]
    fn json_round_trip() {
        let (graph, _) = parse_graph(DIAMOND).unwrap();
        let json = to_json_string(&graph).unwrap();
        let back: Graph<String> = from_json_str(&json).unwrap();
        assert_eq!(back.num_vertices(), 4);
        assert_eq!(back.num_edges(), 4);
        assert_eq!(back.total_weight(), graph.total_weight());
    }
}
