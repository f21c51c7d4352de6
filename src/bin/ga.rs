use anyhow::{bail, Context, Result};
use log::debug;

use graphalg::algo::{run_dijkstras, run_kruskal};
use graphalg::graph::{load_graph, write_json, Graph, VertexId};
use graphalg::options::{AlgorithmKind, Options};
use graphalg::report::{MstReport, PathReport};

fn main() -> Result<()> {
    if std::env::var("GRAPH_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("GRAPH_LOG")
            .write_style("GRAPH_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options::parse_from_args(&args)?;
    debug!("options: {options:?}");

    let (graph, designated) = load_graph(&options.input)
        .with_context(|| format!("failed to load graph from {}", options.input))?;

    if !options.no_matrix {
        println!("Graph as an adjacency matrix:");
        println!("{}", graph.to_adjacency_matrix());
    }

    let mut snapshot = serde_json::Map::new();

    if matches!(
        options.algorithm,
        AlgorithmKind::Dijkstra | AlgorithmKind::Both
    ) {
        let start = resolve_start(&graph, designated, options.start.as_deref())?;
        let paths = run_dijkstras(&graph, start)?;
        let report = PathReport::from_paths(&paths);
        println!("{report}");
        snapshot.insert("shortest_paths".into(), serde_json::to_value(&report)?);
    }

    if matches!(
        options.algorithm,
        AlgorithmKind::Kruskal | AlgorithmKind::Both
    ) {
        let tree = run_kruskal(&graph)?;
        let report = MstReport::from_tree(&tree);
        println!("{report}");
        snapshot.insert(
            "minimum_spanning_tree".into(),
            serde_json::to_value(&report)?,
        );
    }

    if let Some(path) = &options.output {
        write_json(path, &snapshot)
            .with_context(|| format!("failed to write snapshot to {path}"))?;
        log::info!("snapshot written to {path}");
    }

    Ok(())
}

fn resolve_start(
    graph: &Graph<String>,
    designated: Option<VertexId>,
    override_name: Option<&str>,
) -> Result<VertexId> {
    if let Some(name) = override_name {
        return graph
            .find_vertex(&name.to_string())
            .with_context(|| format!("start vertex {name:?} does not exist in the graph"));
    }
    match designated {
        Some(v) => Ok(v),
        None => bail!("no start vertex: designate one in the input file or pass --start"),
    }
}
