//! Undirected edge set over mesh vertices.
//!
//! [`EdgeGraph`] assigns a stable integer identifier to each unordered
//! vertex pair at first insertion. The half-edge builder inserts one pair
//! per corner while scanning the face buffer; insertion is idempotent, so
//! the two (or more) half-edges sharing an undirected edge all resolve to
//! the same [`EdgeId`].

use std::collections::HashMap;

use crate::mesh::{EdgeId, VertexId};

/// An undirected vertex-pair to edge-id map.
///
/// Edge ids are assigned densely in insertion order, so the graph can
/// also be used as an edge enumeration: `endpoints` is defined for every
/// id in `[0, edge_count())`.
#[derive(Debug, Clone, Default)]
pub struct EdgeGraph {
    ids: HashMap<(VertexId, VertexId), EdgeId>,
    endpoints: Vec<(VertexId, VertexId)>,
}

impl EdgeGraph {
    /// Create a new empty edge graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an unordered pair to a canonical key.
    #[inline]
    fn key(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
        if u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }

    /// Insert the edge `{u, v}` and return its id.
    ///
    /// Idempotent: inserting a pair already present returns the existing
    /// id without creating a new edge.
    pub fn insert(&mut self, u: VertexId, v: VertexId) -> EdgeId {
        let key = Self::key(u, v);
        if let Some(&e) = self.ids.get(&key) {
            return e;
        }
        let e = EdgeId::new(self.endpoints.len());
        self.ids.insert(key, e);
        self.endpoints.push(key);
        e
    }

    /// Look up the id of the edge `{u, v}`, if it has been inserted.
    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.ids.get(&Self::key(u, v)).copied()
    }

    /// Get the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Get the endpoint vertices of an edge, in canonical (ascending) order.
    pub fn endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        if !e.is_valid() {
            return None;
        }
        self.endpoints.get(e.index()).copied()
    }

    /// Iterate over all edges with their endpoints, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, VertexId, VertexId)> + '_ {
        self.endpoints
            .iter()
            .enumerate()
            .map(|(i, &(u, v))| (EdgeId::new(i), u, v))
    }
}
