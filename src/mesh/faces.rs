//! Face indexing over a flat corner buffer.
//!
//! [`FaceIndex`] splits a sentinel-delimited corner buffer into per-face
//! corner ranges and answers face and corner queries without building any
//! adjacency. It is the lightweight companion to
//! [`HalfEdgeMesh`](super::HalfEdgeMesh) for code that only needs face
//! membership.
//!
//! Corner identifiers are positions in the input buffer, so they agree
//! with the half-edge identifiers used by the rest of the crate. Sentinel
//! slots occupy positions but are never valid corners.

use crate::error::Result;

use super::buffer::{self, FaceRuns, FACE_SENTINEL};
use super::index::{CornerId, FaceId, VertexId};

/// Per-face view of a flat corner buffer, with no adjacency.
///
/// Construction validates the buffer and fails with a typed
/// [`MeshError`](crate::error::MeshError) on any structural violation.
/// Query-time bad arguments never fail; they return `None` or zero.
#[derive(Debug, Clone)]
pub struct FaceIndex {
    num_vertices: usize,
    coord: Vec<i32>,
    runs: FaceRuns,
}

impl FaceIndex {
    /// Build a face index from a vertex count and corner buffer.
    pub fn new(vertex_count: usize, coord_index: &[i32]) -> Result<Self> {
        buffer::validate(vertex_count, coord_index)?;
        Ok(Self {
            num_vertices: vertex_count,
            coord: coord_index.to_vec(),
            runs: FaceRuns::parse(coord_index),
        })
    }

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

    /// Check that a corner position refers to an actual corner, not a
    /// sentinel slot or a position outside the buffer.
    #[inline]
    fn valid_corner(&self, c: CornerId) -> bool {
        c.is_valid() && c.index() < self.coord.len() && self.coord[c.index()] != FACE_SENTINEL
    }

    /// Get the number of corners of a face, or 0 for an unknown face.
    pub fn face_size(&self, f: FaceId) -> usize {
        if !f.is_valid() {
            return 0;
        }
        self.runs.size.get(f.index()).map_or(0, |&s| s as usize)
    }

    /// Get the first corner of a face.
    pub fn face_first_corner(&self, f: FaceId) -> Option<CornerId> {
        if !f.is_valid() {
            return None;
        }
        let &start = self.runs.start.get(f.index())?;
        Some(CornerId::new(start as usize))
    }

    /// Get the `j`-th vertex of a face.
    pub fn face_vertex(&self, f: FaceId, j: usize) -> Option<VertexId> {
        if !f.is_valid() || j >= self.face_size(f) {
            return None;
        }
        let start = self.runs.start[f.index()] as usize;
        Some(VertexId::new(self.coord[start + j] as usize))
    }

    /// Get the face owning a corner.
    pub fn corner_face(&self, c: CornerId) -> Option<FaceId> {
        if !self.valid_corner(c) {
            return None;
        }
        self.runs.corner_face[c.index()].ok()
    }

    /// Get the next corner within the same face, wrapping from the last
    /// corner back to the face's first corner.
    pub fn next_corner(&self, c: CornerId) -> Option<CornerId> {
        let f = self.corner_face(c)?;
        let start = self.runs.start[f.index()] as usize;
        let size = self.runs.size[f.index()] as usize;
        if c.index() + 1 == start + size {
            Some(CornerId::new(start))
        } else {
            Some(CornerId::new(c.index() + 1))
        }
    }
}
