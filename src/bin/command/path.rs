use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use linkpath::graph::LinkGraph;
use linkpath::query::QueryEngine;

use crate::command::{decode, print_report};

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Specify the vertex list file.
    #[arg(short, long, value_name = "VERTEX_FILE")]
    vertices: PathBuf,
    /// Specify the edge list file.
    #[arg(short, long, value_name = "EDGE_FILE")]
    edges: PathBuf,
    /// Specify an intermediate vertex the path must pass through.
    #[arg(short, long, value_name = "VERTEX")]
    through: Option<String>,
    /// The start vertex name.
    start: String,
    /// The end vertex name.
    end: String,
}

pub fn path(args: PathArgs) {
    let graph = Arc::new(LinkGraph::from_files(&args.vertices, &args.edges).unwrap());
    let engine = QueryEngine::new(graph);
    let (banner, path) = match &args.through {
        Some(mid) => (
            format!(
                "Path from {} through {} to {}",
                decode(&args.start),
                decode(mid),
                decode(&args.end)
            ),
            engine.path_through(&args.start, mid, &args.end).unwrap(),
        ),
        None => (
            format!("Path from {} to {}", decode(&args.start), decode(&args.end)),
            engine.path(&args.start, &args.end).unwrap(),
        ),
    };
    print_report(&banner, path);
}
