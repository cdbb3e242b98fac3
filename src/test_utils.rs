use std::path::PathBuf;

use crate::graph::{LinkGraph, LinkGraphBuilder};

fn build_graph(vertices: &[&str], edges: &[(&str, &str)]) -> LinkGraph {
    let builder = vertices
        .iter()
        .try_fold(LinkGraphBuilder::new(), |builder, name| {
            builder.add_vertex(name)
        })
        .unwrap();
    edges
        .iter()
        .try_fold(builder, |builder, (from, to)| builder.add_edge(from, to))
        .unwrap()
        .build()
        .unwrap()
}

/// A, B, C, D with a long chain A -> B -> C -> D and a direct A -> D.
pub fn build_diamond_graph() -> LinkGraph {
    build_graph(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")],
    )
}

/// A -> B -> C, no shortcut.
pub fn build_chain_graph() -> LinkGraph {
    build_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C")])
}

/// X and Y with no edges at all.
pub fn build_disconnected_graph() -> LinkGraph {
    build_graph(&["X", "Y"], &[])
}

/// Loads the article/link fixture files shipped under `resources/`.
pub fn build_sample_graph() -> LinkGraph {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/sample");
    LinkGraph::from_files(dir.join("articles.tsv"), dir.join("links.tsv")).unwrap()
}
