//! Parsing Options.
//! `--algorithm {kind}` or `-a`, plus input file, start override and
//! snapshot output path.

use clap::{Arg, ArgAction, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgorithmKind {
    Dijkstra,
    Kruskal,
    Both,
}

fn make_options_parser() -> clap::Command {
    let parser = Command::new("ga")
        .no_binary_name(true)
        .version("v0.1.0")
        .arg(
            Arg::new("input")
                .help("Path to the graph definition file")
                .required(true),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("The algorithm to run")
                .default_value("both")
                .value_parser(["dijkstra", "kruskal", "both"]),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .help("Start vertex for the shortest-path run, overriding the file designation"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where a JSON snapshot of the results will be stored"),
        )
        .arg(
            Arg::new("no-matrix")
                .long("no-matrix")
                .action(ArgAction::SetTrue)
                .help("Skip printing the adjacency matrix"),
        );
    parser
}

#[derive(Debug)]
pub struct Options {
    pub input: String,
    pub algorithm: AlgorithmKind,
    pub start: Option<String>,
    pub output: Option<String>,
    pub no_matrix: bool,
}

impl Options {
    pub fn parse_from_args(flags: &[String]) -> Result<Self, clap::Error> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let algorithm = match matches.get_one::<String>("algorithm").map(String::as_str) {
            Some("dijkstra") => AlgorithmKind::Dijkstra,
            Some("kruskal") => AlgorithmKind::Kruskal,
            _ => AlgorithmKind::Both,
        };

        let input = matches.get_one::<String>("input").unwrap().to_string();

        Ok(Options {
            input,
            algorithm,
            start: matches.get_one::<String>("start").cloned(),
            output: matches.get_one::<String>("output").cloned(),
            no_matrix: matches.get_flag("no-matrix"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = Options::parse_from_args(&args(&["graphs/input.txt"])).unwrap();
        assert_eq!(options.input, "graphs/input.txt");
        assert_eq!(options.algorithm, AlgorithmKind::Both);
        assert_eq!(options.start, None);
        assert!(!options.no_matrix);
    }

    #[test]
    fn test_parse_algorithm_and_output() {
        let options = Options::parse_from_args(&args(&[
            "input.txt",
            "-a",
            "kruskal",
            "-o",
            "snapshot.json",
            "--no-matrix",
        ]))
        .unwrap();
        assert_eq!(options.algorithm, AlgorithmKind::Kruskal);
        assert_eq!(options.output.as_deref(), Some("snapshot.json"));
        assert!(options.no_matrix);
    }

    #[test]
    fn test_parse_unknown_algorithm_err() {
        let options = Options::parse_from_args(&args(&["input.txt", "-a", "prim"]));
        assert!(options.is_err());
    }

    #[test]
    fn test_parse_missing_input_err() {
        let options = Options::parse_from_args(&args(&["-a", "kruskal"]));
        assert!(options.is_err());
    }
}
