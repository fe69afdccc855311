//! Core mesh topology structures.
//!
//! This module provides the three layered components built from a flat,
//! sentinel-delimited corner buffer:
//!
//! - [`FaceIndex`] - per-face corner ranges, no adjacency
//! - [`HalfEdgeMesh`] - twin pairing and per-edge half-edge lists
//! - [`PolygonMesh`] - boundary/regular/singular classification
//!
//! Construction is strictly bottom-up: a [`HalfEdgeMesh`] is built from
//! the buffer and an empty [`EdgeGraph`](crate::graph::EdgeGraph), and a
//! [`PolygonMesh`] classifies a completed mesh with a throwaway
//! [`Partition`](crate::partition::Partition). Queries flow top-down.
//!
//! # Index types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - a vertex
//! - [`CornerId`] - a corner, which doubles as a half-edge
//! - [`FaceId`] - a face
//! - [`EdgeId`] - a full undirected edge
//!
//! # Input format
//!
//! The corner buffer is a sequence of `i32` values: vertex indices in
//! `[0, vertex_count)`, with [`FACE_SENTINEL`] (`-1`) closing each face.
//!
//! ```
//! use polytopo::mesh::HalfEdgeMesh;
//!
//! // Two triangles sharing the edge 0-2.
//! let mesh = HalfEdgeMesh::from_coord_index(4, &[0, 1, 2, -1, 0, 2, 3, -1]).unwrap();
//! assert_eq!(mesh.num_faces(), 2);
//! assert_eq!(mesh.num_edges(), 5);
//! ```

mod buffer;
mod faces;
mod halfedge;
mod index;
mod manifold;

pub use buffer::FACE_SENTINEL;
pub use faces::FaceIndex;
pub use halfedge::HalfEdgeMesh;
pub use index::{CornerId, EdgeId, FaceId, VertexId};
pub use manifold::PolygonMesh;
