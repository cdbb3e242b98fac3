use crate::common::{NameMap, VertexId, INVALID_VERTEX_ID};
use crate::error::{LinkGraphError, LinkGraphResult};

use self::csr::Csr;

mod csr;
mod load;

/// A directed, unweighted graph over named vertices. Built once through
/// [`LinkGraphBuilder`] or [`LinkGraph::from_files`] and immutable
/// thereafter, so shared references may be used from any number of
/// threads while queries run.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    names: NameMap,
    csr: Csr,
}

impl LinkGraph {
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.csr.get_num_edges()
    }

    /// Resolves a vertex name to its dense id.
    pub fn vertex_id(&self, name: &str) -> LinkGraphResult<VertexId> {
        self.names
            .get_by_left(name)
            .copied()
            .ok_or_else(|| LinkGraphError::UnknownVertex(name.to_string()))
    }

    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.names.get_by_right(&id).map(String::as_str)
    }

    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.names.left_values().map(String::as_str)
    }

    /// Ids reachable by one outgoing edge from `id`, in sorted order.
    /// Duplicate edges appear with their multiplicity.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.csr.neighbors(id)
    }

    pub fn out_degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkGraphBuilder {
    names: NameMap,
    edges: Vec<(VertexId, VertexId)>,
}

impl LinkGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.names.contains_left(name)
    }

    /// Registers a new vertex under the next sequential id.
    pub fn add_vertex(mut self, name: &str) -> LinkGraphResult<Self> {
        if self.names.contains_left(name) {
            return Err(LinkGraphError::DuplicateVertex(name.to_string()));
        }
        let id = self.names.len();
        if id >= INVALID_VERTEX_ID as usize {
            return Err(LinkGraphError::Graph("vertex id space exhausted".into()));
        }
        self.names.insert(name.to_string(), id as VertexId);
        Ok(self)
    }

    /// Stages a directed edge between two registered vertices.
    pub fn add_edge(mut self, from: &str, to: &str) -> LinkGraphResult<Self> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.edges.push((from, to));
        Ok(self)
    }

    pub fn build(mut self) -> LinkGraphResult<LinkGraph> {
        self.edges.sort_unstable();
        let csr = Csr::from_sorted_edges(self.names.len(), &self.edges)?;
        Ok(LinkGraph {
            names: self.names,
            csr,
        })
    }

    fn resolve(&self, name: &str) -> LinkGraphResult<VertexId> {
        self.names
            .get_by_left(name)
            .copied()
            .ok_or_else(|| LinkGraphError::UnknownVertex(name.to_string()))
    }
}
