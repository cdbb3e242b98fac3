use itertools::Itertools;

use crate::common::VertexId;
use crate::error::{LinkGraphError, LinkGraphResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Csr {
    offsets: Vec<usize>,
    neighbors: Vec<VertexId>,
}

impl Csr {
    pub fn get_num_edges(&self) -> usize {
        self.neighbors.len()
    }

    pub fn neighbors(&self, vertex_id: VertexId) -> &[VertexId] {
        if vertex_id as usize + 1 >= self.offsets.len() {
            return &[];
        }
        let start = self.offsets[vertex_id as usize];
        let end = self.offsets[vertex_id as usize + 1];
        &self.neighbors[start..end]
    }

    /// Builds the adjacency structure from edges sorted by source id.
    /// Duplicate edges are kept as-is.
    pub fn from_sorted_edges(
        num_vertices: usize,
        edges: &[(VertexId, VertexId)],
    ) -> LinkGraphResult<Self> {
        let mut offsets = vec![0; num_vertices + 1];
        let neighbors = edges.iter().map(|(_, dst)| *dst).collect();

        let mut current_vertex_id = 0;
        let mut current_offset = 0;

        for (src, neighbors) in &edges.iter().chunk_by(|(src, _)| *src) {
            if src < current_vertex_id {
                return Err(LinkGraphError::Graph("edges are not sorted".into()));
            }
            if src as usize >= num_vertices {
                let err = format!("vertex id {src} out of range for {num_vertices} vertices");
                return Err(LinkGraphError::Graph(err));
            }
            for vertex_id in current_vertex_id..=src {
                offsets[vertex_id as usize] = current_offset;
            }
            current_vertex_id = src + 1;
            current_offset += neighbors.count();
        }
        offsets
            .iter_mut()
            .skip(current_vertex_id as usize)
            .for_each(|offset| *offset = current_offset);
        Ok(Self { offsets, neighbors })
    }
}
