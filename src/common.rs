use bimap::BiHashMap;

/// Dense vertex id, contiguous from 0 in registration order.
pub type VertexId = u32;

/// Bijective vertex name <-> id mapping.
pub type NameMap = BiHashMap<String, VertexId>;

/// Sentinel for "no vertex". Doubles as the "undiscovered" marker in
/// per-search predecessor tables.
pub const INVALID_VERTEX_ID: VertexId = VertexId::MAX;
