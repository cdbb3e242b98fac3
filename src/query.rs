use std::sync::Arc;

use crate::common::VertexId;
use crate::error::LinkGraphResult;
use crate::graph::LinkGraph;
use crate::search::PathSearcher;

/// Name-level query surface. Resolves vertex names through the graph
/// before delegating to [`PathSearcher`] and maps result ids back to
/// names, so callers never touch vertex ids.
///
/// Unknown names fail with [`crate::LinkGraphError::UnknownVertex`]
/// before any traversal; a missing path is reported as `None` (or `-1`
/// for lengths), never as an error.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    graph: Arc<LinkGraph>,
    searcher: PathSearcher,
}

impl QueryEngine {
    pub fn new(graph: Arc<LinkGraph>) -> Self {
        let searcher = PathSearcher::new(graph.clone());
        Self { graph, searcher }
    }

    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    /// Shortest path from `start` to `end` as vertex names.
    pub fn path(&self, start: &str, end: &str) -> LinkGraphResult<Option<Vec<String>>> {
        let start = self.graph.vertex_id(start)?;
        let end = self.graph.vertex_id(end)?;
        Ok(self
            .searcher
            .search(start, end)
            .map(|path| self.resolve_names(path)))
    }

    /// Shortest path from `start` to `end` passing through `mid`, per
    /// the composition rule of [`PathSearcher::search_through`].
    pub fn path_through(
        &self,
        start: &str,
        mid: &str,
        end: &str,
    ) -> LinkGraphResult<Option<Vec<String>>> {
        let start = self.graph.vertex_id(start)?;
        let mid = self.graph.vertex_id(mid)?;
        let end = self.graph.vertex_id(end)?;
        Ok(self
            .searcher
            .search_through(start, mid, end)
            .map(|path| self.resolve_names(path)))
    }

    /// Number of edges on the shortest path, `-1` when no path exists.
    /// Zero occurs only for `start == end`.
    pub fn path_length(&self, start: &str, end: &str) -> LinkGraphResult<i64> {
        let start = self.graph.vertex_id(start)?;
        let end = self.graph.vertex_id(end)?;
        Ok(self
            .searcher
            .search(start, end)
            .map_or(-1, |path| path.len() as i64 - 1))
    }

    fn resolve_names(&self, path: Vec<VertexId>) -> Vec<String> {
        path.into_iter()
            .map(|id| self.graph.vertex_name(id).unwrap().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkGraphError;
    use crate::test_utils::{
        build_chain_graph, build_diamond_graph, build_disconnected_graph, build_sample_graph,
    };

    fn engine_for(graph: LinkGraph) -> QueryEngine {
        QueryEngine::new(Arc::new(graph))
    }

    fn names(path: &[&str]) -> Option<Vec<String>> {
        Some(path.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_direct_edge_wins() {
        let engine = engine_for(build_diamond_graph());
        assert_eq!(engine.path("A", "D").unwrap(), names(&["A", "D"]));
        assert_eq!(engine.path_length("A", "D").unwrap(), 1);
    }

    #[test]
    fn test_chain() {
        let engine = engine_for(build_chain_graph());
        assert_eq!(engine.path("A", "C").unwrap(), names(&["A", "B", "C"]));
        assert_eq!(engine.path_length("A", "C").unwrap(), 2);
    }

    #[test]
    fn test_no_path_is_absent_not_error() {
        let engine = engine_for(build_disconnected_graph());
        assert_eq!(engine.path("X", "Y").unwrap(), None);
        assert_eq!(engine.path_length("X", "Y").unwrap(), -1);
    }

    #[test]
    fn test_self_path_for_every_vertex() {
        let engine = engine_for(build_diamond_graph());
        for name in ["A", "B", "C", "D"] {
            assert_eq!(engine.path(name, name).unwrap(), names(&[name]));
            assert_eq!(engine.path_length(name, name).unwrap(), 0);
        }
    }

    #[test]
    fn test_waypoint_forces_longer_route() {
        let engine = engine_for(build_diamond_graph());
        assert_eq!(
            engine.path_through("A", "C", "D").unwrap(),
            names(&["A", "B", "C", "D"])
        );
        // the unconstrained path is the single A -> D edge
        assert_eq!(engine.path_length("A", "D").unwrap(), 1);
    }

    #[test]
    fn test_waypoint_composition_rule() {
        let engine = engine_for(build_diamond_graph());
        let head = engine.path("A", "C").unwrap().unwrap();
        let tail = engine.path("C", "D").unwrap().unwrap();
        let mut expected = head;
        expected.extend(tail.into_iter().skip(1));
        assert_eq!(engine.path_through("A", "C", "D").unwrap(), Some(expected));
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let engine = engine_for(build_diamond_graph());
        let err = engine.path("A", "Nope").unwrap_err();
        assert!(matches!(err, LinkGraphError::UnknownVertex(name) if name == "Nope"));
        let err = engine.path_length("Nope", "A").unwrap_err();
        assert!(matches!(err, LinkGraphError::UnknownVertex(_)));
        let err = engine.path_through("A", "Nope", "D").unwrap_err();
        assert!(matches!(err, LinkGraphError::UnknownVertex(_)));
    }

    #[test]
    fn test_sample_graph_queries() {
        let engine = engine_for(build_sample_graph());
        assert_eq!(
            engine
                .path(
                    "Rust_(programming_language)",
                    "Garbage_collection_(computer_science)"
                )
                .unwrap(),
            names(&[
                "Rust_(programming_language)",
                "Memory_safety",
                "Garbage_collection_(computer_science)"
            ])
        );
        assert_eq!(
            engine
                .path_length("Mozilla", "Rust_(programming_language)")
                .unwrap(),
            2
        );
        // nothing links to Concurrency_(computer_science)
        assert_eq!(
            engine
                .path("Mozilla", "Concurrency_(computer_science)")
                .unwrap(),
            None
        );
    }
}
