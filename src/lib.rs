//! # Polytopo
//!
//! Half-edge topology and manifold classification for polygonal meshes.
//!
//! Polytopo builds a half-edge representation of a polygonal mesh from a
//! flat face-vertex index buffer - the `coordIndex` convention, where
//! vertex indices are separated by `-1` sentinels marking face ends - and
//! classifies the mesh's topological regularity. It is pure topology:
//! no coordinates, no file formats, no triangulation.
//!
//! ## Features
//!
//! - **Half-edge adjacency**: twin pairing, `next`/`prev` cycling, and
//!   per-edge incident half-edge lists, built in a single scan
//! - **Non-manifold aware**: boundary, regular, and singular edges and
//!   vertices are all representable and classified, never rejected
//! - **Type-safe indices**: vertices, corners, faces, and edges each get
//!   their own index type
//! - **Uniform error policy**: structural problems fail construction with
//!   a typed error; bad query arguments recover locally with `None`
//!
//! ## Quick Start
//!
//! ```
//! use polytopo::prelude::*;
//!
//! // Two triangles sharing the edge 0-2.
//! let coord_index = [0, 1, 2, -1, 0, 2, 3, -1];
//! let mesh = HalfEdgeMesh::from_coord_index(4, &coord_index).unwrap();
//!
//! assert_eq!(mesh.num_faces(), 2);
//! assert_eq!(mesh.num_edges(), 5);
//!
//! // The shared edge carries two half-edges, paired as twins.
//! let shared = mesh.edge_between(VertexId::new(0), VertexId::new(2)).unwrap();
//! assert_eq!(mesh.edge_half_edge_count(shared), 2);
//!
//! // Classify the whole surface.
//! let surface = PolygonMesh::new(mesh);
//! assert!(surface.is_regular());
//! assert!(surface.has_boundary());
//! ```
//!
//! ## Half-edge traversal
//!
//! Every non-sentinel corner of the buffer is a half-edge, identified by
//! its buffer position:
//!
//! ```
//! use polytopo::prelude::*;
//!
//! let mesh = HalfEdgeMesh::from_coord_index(3, &[0, 1, 2, -1]).unwrap();
//! let c = CornerId::new(2); // half-edge 2 -> 0, last corner of the face
//!
//! assert_eq!(mesh.src(c), Some(VertexId::new(2)));
//! assert_eq!(mesh.dst(c), Some(VertexId::new(0)));
//! assert_eq!(mesh.next(c), Some(CornerId::new(0)));
//! assert_eq!(mesh.twin(c), None); // boundary
//! ```
//!
//! ## Face indexing without adjacency
//!
//! When only face membership is needed, [`FaceIndex`](mesh::FaceIndex)
//! splits the same buffer without building any adjacency:
//!
//! ```
//! use polytopo::mesh::{FaceIndex, FaceId};
//!
//! let faces = FaceIndex::new(5, &[0, 1, 2, -1, 0, 2, 3, 4, -1]).unwrap();
//! assert_eq!(faces.num_faces(), 2);
//! assert_eq!(faces.face_size(FaceId::new(1)), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod graph;
pub mod mesh;
pub mod partition;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types:
///
/// ```
/// use polytopo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::graph::EdgeGraph;
    pub use crate::mesh::{
        CornerId, EdgeId, FaceId, FaceIndex, HalfEdgeMesh, PolygonMesh, VertexId, FACE_SENTINEL,
    };
    pub use crate::partition::Partition;
}
