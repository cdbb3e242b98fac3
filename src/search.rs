use std::collections::VecDeque;
use std::sync::Arc;

use crate::common::{VertexId, INVALID_VERTEX_ID};
use crate::graph::LinkGraph;

/// Breadth-first shortest-path search over an immutable [`LinkGraph`].
///
/// Every call allocates its own frontier and predecessor table, so one
/// searcher (or many, sharing the graph) may run queries from
/// concurrent threads without coordination.
#[derive(Debug, Clone)]
pub struct PathSearcher {
    graph: Arc<LinkGraph>,
}

impl PathSearcher {
    pub fn new(graph: Arc<LinkGraph>) -> Self {
        Self { graph }
    }

    /// Returns a minimum-edge path from `start` to `end` as a sequence
    /// of vertex ids, or `None` when `end` is unreachable. Ids outside
    /// the graph are treated as unreachable.
    pub fn search(&self, start: VertexId, end: VertexId) -> Option<Vec<VertexId>> {
        let num_vertices = self.graph.vertex_count();
        if (start as usize) >= num_vertices || (end as usize) >= num_vertices {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        // Predecessor table doubling as the discovered set: INVALID
        // means undiscovered, the start vertex is its own predecessor.
        let mut predecessors = vec![INVALID_VERTEX_ID; num_vertices];
        let mut frontier = VecDeque::new();
        predecessors[start as usize] = start;
        frontier.push_back(start);

        'bfs: while let Some(vertex) = frontier.pop_front() {
            for &neighbor in self.graph.neighbors(vertex) {
                if predecessors[neighbor as usize] != INVALID_VERTEX_ID {
                    continue;
                }
                predecessors[neighbor as usize] = vertex;
                if neighbor == end {
                    break 'bfs;
                }
                frontier.push_back(neighbor);
            }
        }
        if predecessors[end as usize] == INVALID_VERTEX_ID {
            return None;
        }

        let mut path = vec![end];
        let mut vertex = end;
        while vertex != start {
            vertex = predecessors[vertex as usize];
            path.push(vertex);
        }
        path.reverse();
        Some(path)
    }

    /// Composes two independent searches into a path that visits `mid`
    /// as the designated waypoint: `search(start, mid)` followed by
    /// `search(mid, end)` with the duplicated waypoint dropped.
    ///
    /// The result is the shortest path subject to splitting at `mid`.
    /// A globally shorter route through `mid` could exist via another
    /// visit order; this simplification is intentional and callers
    /// should not expect global optimality.
    pub fn search_through(
        &self,
        start: VertexId,
        mid: VertexId,
        end: VertexId,
    ) -> Option<Vec<VertexId>> {
        let mut path = self.search(start, mid)?;
        let tail = self.search(mid, end)?;
        path.extend(tail.into_iter().skip(1));
        Some(path)
    }
}
