use std::path::PathBuf;

use clap::Args;
use linkpath::common::VertexId;
use linkpath::graph::LinkGraph;

use crate::command::decode;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Specify the vertex list file.
    #[arg(short, long, value_name = "VERTEX_FILE")]
    vertices: PathBuf,
    /// Specify the edge list file.
    #[arg(short, long, value_name = "EDGE_FILE")]
    edges: PathBuf,
}

pub fn stats(args: StatsArgs) {
    let graph = LinkGraph::from_files(&args.vertices, &args.edges).unwrap();
    println!("vertices: {}", graph.vertex_count());
    println!("edges: {}", graph.edge_count());

    let busiest = (0..graph.vertex_count() as VertexId)
        .map(|id| (graph.out_degree(id), id))
        .max();
    if let Some((degree, id)) = busiest {
        let name = graph.vertex_name(id).unwrap();
        println!("max out-degree: {degree} ({})", decode(name));
    }
}
