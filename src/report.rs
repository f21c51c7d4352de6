use std::fmt;
use std::hash::Hash;
use std::io::Write;

use itertools::Itertools;
use serde::Serialize;

use crate::algo::ShortestPaths;
use crate::graph::{Graph, Weight, INFINITE_COST};

/// One rendered shortest-path row.
#[derive(Debug, Clone, Serialize)]
pub struct PathRow {
    pub element: String,
    pub path: Option<Vec<String>>,
    pub cost: Weight,
}

/// Human-readable listing of the paths to every vertex from the start.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub start: String,
    pub rows: Vec<PathRow>,
}

impl PathReport {
    pub fn from_paths<T>(paths: &ShortestPaths<T>) -> Self
    where
        T: Eq + Hash + Clone + fmt::Display,
    {
        let rows = paths
            .table
            .iter()
            .map(|(element, record)| PathRow {
                element: element.to_string(),
                path: paths
                    .path_to(element)
                    .map(|path| path.iter().map(ToString::to_string).collect()),
                cost: record.cost,
            })
            .collect();
        Self {
            start: paths.start().to_string(),
            rows,
        }
    }

    pub fn save_to_file(&self, file_path: &str) -> std::io::Result<()> {
        let mut file = std::fs::File::create(file_path)?;
        writeln!(file, "{}", self)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Paths to each vertex starting from vertex {}:",
            self.start
        )?;
        for row in &self.rows {
            match &row.path {
                Some(path) => {
                    writeln!(f, "{}: {}  -  {}", row.element, path.iter().join("  "), row.cost)?;
                }
                None => {
                    debug_assert_eq!(row.cost, INFINITE_COST);
                    writeln!(f, "{}: unreachable from vertex {}", row.element, self.start)?;
                }
            }
        }
        Ok(())
    }
}

/// Selected edges and total weight of a minimum spanning tree.
#[derive(Debug, Clone, Serialize)]
pub struct MstReport {
    pub edges: Vec<(String, String, Weight)>,
    pub total_weight: Weight,
}

impl MstReport {
    pub fn from_tree<T>(tree: &Graph<T>) -> Self
    where
        T: fmt::Display,
    {
        let edges = tree
            .edges()
            .map(|e| {
                let edge = tree.edge(e);
                (
                    tree.element(edge.start).to_string(),
                    tree.element(edge.end).to_string(),
                    edge.weight,
                )
            })
            .collect();
        Self {
            edges,
            total_weight: tree.total_weight(),
        }
    }

    pub fn save_to_file(&self, file_path: &str) -> std::io::Result<()> {
        let mut file = std::fs::File::create(file_path)?;
        writeln!(file, "{}", self)
    }
}

impl fmt::Display for MstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimum spanning tree:")?;
        for (start, end, weight) in &self.edges {
            writeln!(f, "{start} - {end}  ({weight})")?;
        }
        writeln!(f, "Total weight: {}", self.total_weight)
    }
}
