use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use linkpath::graph::LinkGraph;
use linkpath::query::QueryEngine;
use rand::seq::SliceRandom;

use crate::command::{decode, print_report};

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Specify the vertex list file.
    #[arg(short, long, value_name = "VERTEX_FILE")]
    vertices: PathBuf,
    /// Specify the edge list file.
    #[arg(short, long, value_name = "EDGE_FILE")]
    edges: PathBuf,
    /// Route the path through a third randomly sampled vertex.
    #[arg(short, long)]
    use_intermediate_node: bool,
}

pub fn random(args: RandomArgs) {
    let graph = Arc::new(LinkGraph::from_files(&args.vertices, &args.edges).unwrap());
    let engine = QueryEngine::new(graph.clone());

    // independent samples, repeats allowed
    let names: Vec<&str> = graph.vertex_names().collect();
    let mut rng = rand::thread_rng();
    let mut sample = || *names.choose(&mut rng).unwrap();
    let start = sample();
    let mid = sample();
    let end = sample();

    let (banner, path) = if args.use_intermediate_node {
        (
            format!(
                "Path from {} through {} to {}",
                decode(start),
                decode(mid),
                decode(end)
            ),
            engine.path_through(start, mid, end).unwrap(),
        )
    } else {
        (
            format!("Path from {} to {}", decode(start), decode(end)),
            engine.path(start, end).unwrap(),
        )
    };
    print_report(&banner, path);
}
