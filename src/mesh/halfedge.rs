//! Half-edge adjacency over a flat corner buffer.
//!
//! [`HalfEdgeMesh`] consumes the same sentinel-delimited corner buffer as
//! [`FaceIndex`](super::FaceIndex) plus an empty [`EdgeGraph`] and builds
//! the full half-edge adjacency: per-corner face assignment, twin pairing,
//! and per-edge incident-corner lists.
//!
//! # Structure
//!
//! - Every non-sentinel buffer position is a **corner** and identifies the
//!   half-edge running from its vertex to the next corner's vertex within
//!   the same face (wrapping at the face end).
//! - Two half-edges over the same undirected edge are paired as **twins**.
//!   On an edge with more than two incident half-edges the corners pair
//!   off two at a time in discovery order; an odd leftover has no twin.
//!   Twin pairing is therefore always mutual when present.
//! - A CSR table maps every edge to the ordered list of its incident
//!   corners, so "how many half-edges touch edge `e`" and "the `j`-th one"
//!   are O(1).
//!
//! Face sizes live in an explicit per-face table, so `next` and `prev` at
//! face boundaries are plain lookups. This keeps two-corner faces correct;
//! a forward scan for the face separator would silently assume faces of
//! three or more corners.

use crate::error::{MeshError, Result};
use crate::graph::EdgeGraph;

use super::buffer::{self, FaceRuns, FACE_SENTINEL};
use super::index::{CornerId, EdgeId, FaceId, VertexId};

/// Half-edge adjacency built from a face-vertex corner buffer.
///
/// All derived state is fixed at construction; the structure is read-only
/// afterwards. Query-time bad arguments (out-of-range or sentinel
/// positions) recover locally with `None` or zero and never panic.
#[derive(Debug, Clone)]
pub struct HalfEdgeMesh {
    num_vertices: usize,
    coord: Vec<i32>,
    runs: FaceRuns,
    /// Twin corner per buffer slot; invalid at sentinels and on unpaired
    /// (boundary or leftover singular) half-edges.
    twin: Vec<CornerId>,
    /// Undirected edge per buffer slot; invalid at sentinels.
    corner_edge: Vec<EdgeId>,
    graph: EdgeGraph,
    /// CSR offsets into `edge_corners`, one entry per edge plus one.
    first_edge_corner: Vec<u32>,
    /// Corners incident to each edge, in discovery order.
    edge_corners: Vec<CornerId>,
}

impl HalfEdgeMesh {
    /// Build the half-edge adjacency from a vertex count, corner buffer,
    /// and an empty edge graph.
    ///
    /// The graph is taken over and populated with one edge per unordered
    /// vertex pair appearing in the buffer; it is retained for endpoint
    /// and edge-id queries. A non-empty graph is rejected, since stale
    /// edge ids would corrupt the incidence tables.
    pub fn build(vertex_count: usize, coord_index: &[i32], mut graph: EdgeGraph) -> Result<Self> {
        buffer::validate(vertex_count, coord_index)?;
        if graph.edge_count() != 0 {
            return Err(MeshError::GraphNotEmpty {
                edges: graph.edge_count(),
            });
        }

        let runs = FaceRuns::parse(coord_index);
        let num_corners = coord_index.len();

        // Pass 1: insert edges, assign corners to edges, count incidence.
        // Edge ids are issued densely, so a fresh id always equals the
        // current length of the incidence table.
        let mut corner_edge = vec![EdgeId::invalid(); num_corners];
        let mut incidence: Vec<u32> = Vec::new();
        for f in 0..runs.num_faces() {
            let start = runs.start[f] as usize;
            let size = runs.size[f] as usize;
            for j in 0..size {
                let c = start + j;
                let src = VertexId::new(coord_index[c] as usize);
                let dst = VertexId::new(coord_index[start + (j + 1) % size] as usize);
                let e = graph.insert(src, dst);
                if e.index() == incidence.len() {
                    incidence.push(1);
                } else {
                    incidence[e.index()] += 1;
                }
                corner_edge[c] = e;
            }
        }

        // Pass 2: twin pairing. One pending slot per edge: the first
        // corner seen waits there; the next corner pairs with it and
        // clears the slot. Pairing is always mutual, and on a singular
        // edge the third corner simply starts a new pending round.
        let mut twin = vec![CornerId::invalid(); num_corners];
        let mut pending = vec![CornerId::invalid(); graph.edge_count()];
        for (c, &e) in corner_edge.iter().enumerate() {
            if !e.is_valid() {
                continue;
            }
            let slot = &mut pending[e.index()];
            if slot.is_valid() {
                twin[c] = *slot;
                twin[slot.index()] = CornerId::new(c);
                *slot = CornerId::invalid();
            } else {
                *slot = CornerId::new(c);
            }
        }

        // Pass 3: CSR edge-to-corner lists from the incidence counts,
        // filled in discovery order via per-edge cursors.
        let num_edges = graph.edge_count();
        let mut first_edge_corner = vec![0u32; num_edges + 1];
        for e in 0..num_edges {
            first_edge_corner[e + 1] = first_edge_corner[e] + incidence[e];
        }
        let mut cursor: Vec<u32> = first_edge_corner[..num_edges].to_vec();
        let mut edge_corners = vec![CornerId::invalid(); num_corners - runs.num_faces()];
        for (c, &e) in corner_edge.iter().enumerate() {
            if !e.is_valid() {
                continue;
            }
            edge_corners[cursor[e.index()] as usize] = CornerId::new(c);
            cursor[e.index()] += 1;
        }

        Ok(Self {
            num_vertices: vertex_count,
            coord: coord_index.to_vec(),
            runs,
            twin,
            corner_edge,
            graph,
            first_edge_corner,
            edge_corners,
        })
    }

    /// Build with a freshly created edge graph.
    pub fn from_coord_index(vertex_count: usize, coord_index: &[i32]) -> Result<Self> {
        Self::build(vertex_count, coord_index, EdgeGraph::new())
    }

    // ==================== Counts ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.runs.num_faces()
    }

    /// Get the number of buffer slots, sentinel positions included.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.coord.len()
    }

    /// Get the number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Access the underlying edge graph.
    #[inline]
    pub fn graph(&self) -> &EdgeGraph {
        &self.graph
    }

    // ==================== Half-edge queries ====================

    #[inline]
    fn valid_corner(&self, c: CornerId) -> bool {
        c.is_valid() && c.index() < self.coord.len() && self.coord[c.index()] != FACE_SENTINEL
    }

    /// Get the face owning a half-edge.
    pub fn face(&self, c: CornerId) -> Option<FaceId> {
        if !self.valid_corner(c) {
            return None;
        }
        self.runs.corner_face[c.index()].ok()
    }

    /// Get the source vertex of a half-edge.
    pub fn src(&self, c: CornerId) -> Option<VertexId> {
        if !self.valid_corner(c) {
            return None;
        }
        Some(VertexId::new(self.coord[c.index()] as usize))
    }

    /// Get the destination vertex of a half-edge.
    pub fn dst(&self, c: CornerId) -> Option<VertexId> {
        self.src(self.next(c)?)
    }

    /// Get the next half-edge around the face, wrapping from the last
    /// corner back to the face's first corner.
    pub fn next(&self, c: CornerId) -> Option<CornerId> {
        let f = self.face(c)?;
        let start = self.runs.start[f.index()] as usize;
        let size = self.runs.size[f.index()] as usize;
        if c.index() + 1 == start + size {
            Some(CornerId::new(start))
        } else {
            Some(CornerId::new(c.index() + 1))
        }
    }

    /// Get the previous half-edge around the face, wrapping from the
    /// face's first corner to its last.
    pub fn prev(&self, c: CornerId) -> Option<CornerId> {
        let f = self.face(c)?;
        let start = self.runs.start[f.index()] as usize;
        let size = self.runs.size[f.index()] as usize;
        if c.index() == start {
            Some(CornerId::new(start + size - 1))
        } else {
            Some(CornerId::new(c.index() - 1))
        }
    }

    /// Get the twin half-edge, if this half-edge is paired.
    ///
    /// Boundary half-edges have no twin; on a singular edge the corners
    /// pair off two at a time in discovery order, so an odd leftover has
    /// no twin either.
    pub fn twin(&self, c: CornerId) -> Option<CornerId> {
        if !self.valid_corner(c) {
            return None;
        }
        self.twin[c.index()].ok()
    }

    /// Get the undirected edge a half-edge runs along.
    pub fn corner_edge(&self, c: CornerId) -> Option<EdgeId> {
        if !self.valid_corner(c) {
            return None;
        }
        self.corner_edge[c.index()].ok()
    }

    // ==================== Edge queries ====================

    #[inline]
    fn valid_edge(&self, e: EdgeId) -> bool {
        e.is_valid() && e.index() < self.num_edges()
    }

    /// Get the number of half-edges incident to an edge, or 0 for an
    /// unknown edge.
    pub fn edge_half_edge_count(&self, e: EdgeId) -> usize {
        if !self.valid_edge(e) {
            return 0;
        }
        (self.first_edge_corner[e.index() + 1] - self.first_edge_corner[e.index()]) as usize
    }

    /// Get the `j`-th half-edge incident to an edge, in discovery order.
    pub fn edge_half_edge(&self, e: EdgeId, j: usize) -> Option<CornerId> {
        if j >= self.edge_half_edge_count(e) {
            return None;
        }
        Some(self.edge_corners[self.first_edge_corner[e.index()] as usize + j])
    }

    /// Get the endpoint vertices of an edge.
    pub fn edge_endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        self.graph.endpoints(e)
    }

    /// Look up the edge between two vertices, if present in the mesh.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.graph.edge(u, v)
    }
}
