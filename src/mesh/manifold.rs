//! Manifold classification of a half-edge mesh.
//!
//! [`PolygonMesh`] wraps a completed [`HalfEdgeMesh`] and classifies every
//! edge and vertex as boundary, regular, or singular, deciding whether the
//! mesh as a whole is a regular (manifold) surface.
//!
//! # Classification
//!
//! Edges classify directly by incidence: one incident half-edge is
//! boundary, two is regular, three or more is singular.
//!
//! Vertices need the gluing relation. Across every regular edge with
//! half-edges `a` and `b`, the corners `next(a)` and `b` represent the
//! same vertex seen from the two sides, as do `next(b)` and `a`; joining
//! those pairs in a corner partition works for either relative face
//! orientation. A vertex whose corners end up in more than one part is
//! singular (the "bowtie" case). Edges with one or three-plus incident
//! half-edges contribute no gluing: boundary edges have nothing to glue,
//! and singular edges are deliberately left unresolved so each fan around
//! them stays a separate part.

use crate::error::{MeshError, Result};
use crate::partition::Partition;

use super::halfedge::HalfEdgeMesh;
use super::index::{CornerId, EdgeId, FaceId, VertexId};

/// A half-edge mesh with boundary/regular/singular classification of its
/// vertices and edges.
///
/// The corner partition used for vertex classification is consumed during
/// construction and discarded; only the per-vertex part counts and
/// boundary flags are retained.
#[derive(Debug, Clone)]
pub struct PolygonMesh {
    mesh: HalfEdgeMesh,
    is_boundary_vertex: Vec<bool>,
    parts_per_vertex: Vec<u32>,
}

impl PolygonMesh {
    /// Classify a completed half-edge mesh, creating the corner partition
    /// internally.
    pub fn new(mesh: HalfEdgeMesh) -> Self {
        let partition = Partition::new(mesh.num_corners());
        Self::classify(mesh, partition)
    }

    /// Classify using a caller-supplied partition, which must be fresh
    /// and sized to the mesh's corner count.
    pub fn with_partition(mesh: HalfEdgeMesh, partition: Partition) -> Result<Self> {
        if partition.len() != mesh.num_corners() {
            return Err(MeshError::PartitionSizeMismatch {
                expected: mesh.num_corners(),
                actual: partition.len(),
            });
        }
        Ok(Self::classify(mesh, partition))
    }

    fn classify(mesh: HalfEdgeMesh, mut partition: Partition) -> Self {
        let num_vertices = mesh.num_vertices();
        let num_edges = mesh.num_edges();
        let num_corners = mesh.num_corners();

        // 1) Boundary marking: an edge with a single incident half-edge
        //    puts both its endpoint vertices on the boundary.
        let mut is_boundary_vertex = vec![false; num_vertices];
        for e in (0..num_edges).map(EdgeId::new) {
            if mesh.edge_half_edge_count(e) == 1 {
                if let Some((u, v)) = mesh.edge_endpoints(e) {
                    is_boundary_vertex[u.index()] = true;
                    is_boundary_vertex[v.index()] = true;
                }
            }
        }

        // 2) Corner gluing across regular edges.
        for e in (0..num_edges).map(EdgeId::new) {
            if mesh.edge_half_edge_count(e) != 2 {
                continue;
            }
            let (Some(a), Some(b)) = (mesh.edge_half_edge(e, 0), mesh.edge_half_edge(e, 1)) else {
                continue;
            };
            let (Some(a_next), Some(b_next)) = (mesh.next(a), mesh.next(b)) else {
                continue;
            };
            partition.join(a_next.index(), b.index());
            partition.join(b_next.index(), a.index());
        }

        // 3) Part counting: one increment per partition representative,
        //    charged to the representative corner's source vertex. The
        //    sentinel slots remain singletons but carry no vertex, so
        //    they are skipped here.
        let mut parts_per_vertex = vec![0u32; num_vertices];
        let mut seen = vec![false; num_corners];
        for c in (0..num_corners).map(CornerId::new) {
            let Some(v) = mesh.src(c) else { continue };
            let rep = partition.find(c.index());
            if !seen[rep] {
                seen[rep] = true;
                parts_per_vertex[v.index()] += 1;
            }
        }

        Self {
            mesh,
            is_boundary_vertex,
            parts_per_vertex,
        }
    }

    /// Access the underlying half-edge mesh.
    #[inline]
    pub fn mesh(&self) -> &HalfEdgeMesh {
        &self.mesh
    }

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.mesh.num_vertices()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.mesh.num_faces()
    }

    /// Get the number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.mesh.num_edges()
    }

    // ==================== Edge classification ====================

    /// Check whether an edge has exactly one incident half-edge.
    pub fn is_boundary_edge(&self, e: EdgeId) -> bool {
        self.mesh.edge_half_edge_count(e) == 1
    }

    /// Check whether an edge has exactly two incident half-edges.
    pub fn is_regular_edge(&self, e: EdgeId) -> bool {
        self.mesh.edge_half_edge_count(e) == 2
    }

    /// Check whether an edge has three or more incident half-edges.
    pub fn is_singular_edge(&self, e: EdgeId) -> bool {
        self.mesh.edge_half_edge_count(e) >= 3
    }

    // ==================== Vertex classification ====================

    /// Check whether a vertex is incident to at least one boundary edge.
    pub fn is_boundary_vertex(&self, v: VertexId) -> bool {
        v.is_valid() && self.is_boundary_vertex.get(v.index()).copied().unwrap_or(false)
    }

    /// Check whether a vertex's corners split into more than one glued
    /// part (a non-manifold vertex).
    pub fn is_singular_vertex(&self, v: VertexId) -> bool {
        self.vertex_part_count(v) > 1
    }

    /// Get the number of glued corner parts around a vertex.
    ///
    /// Regular and boundary vertices have exactly one part; isolated
    /// vertices have zero.
    pub fn vertex_part_count(&self, v: VertexId) -> usize {
        if !v.is_valid() {
            return 0;
        }
        self.parts_per_vertex.get(v.index()).map_or(0, |&n| n as usize)
    }

    // ==================== Whole-mesh predicates ====================

    /// Check whether the mesh is a regular (manifold) surface: no
    /// singular edge and no singular vertex.
    pub fn is_regular(&self) -> bool {
        for e in (0..self.num_edges()).map(EdgeId::new) {
            if self.is_singular_edge(e) {
                return false;
            }
        }
        for v in (0..self.num_vertices()).map(VertexId::new) {
            if self.is_singular_vertex(v) {
                return false;
            }
        }
        true
    }

    /// Check whether any boundary edge exists.
    pub fn has_boundary(&self) -> bool {
        (0..self.num_edges()).map(EdgeId::new).any(|e| self.is_boundary_edge(e))
    }

    // ==================== Edge-face incidence ====================

    /// Get the number of faces incident to an edge.
    pub fn num_edge_faces(&self, e: EdgeId) -> usize {
        self.mesh.edge_half_edge_count(e)
    }

    /// Get the `j`-th face incident to an edge, in discovery order.
    pub fn edge_face(&self, e: EdgeId, j: usize) -> Option<FaceId> {
        self.mesh.face(self.mesh.edge_half_edge(e, j)?)
    }

    /// Check whether a face is incident to an edge.
    pub fn is_edge_face(&self, e: EdgeId, f: FaceId) -> bool {
        if !f.is_valid() {
            return false;
        }
        (0..self.num_edge_faces(e)).any(|j| self.edge_face(e, j) == Some(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(vertex_count: usize, coord_index: &[i32]) -> PolygonMesh {
        PolygonMesh::new(HalfEdgeMesh::from_coord_index(vertex_count, coord_index).unwrap())
    }

    #[test]
    fn test_two_triangles_shared_edge() {
        let surface = classify(4, &[0, 1, 2, -1, 0, 2, 3, -1]);
        assert_eq!(surface.num_faces(), 2);
        assert_eq!(surface.num_edges(), 5);

        let shared = surface
            .mesh()
            .edge_between(VertexId::new(0), VertexId::new(2))
            .unwrap();
        assert!(surface.is_regular_edge(shared));
        assert!(!surface.is_boundary_edge(shared));

        for (u, v) in [(0, 1), (1, 2), (0, 3), (2, 3)] {
            let e = surface
                .mesh()
                .edge_between(VertexId::new(u), VertexId::new(v))
                .unwrap();
            assert!(surface.is_boundary_edge(e));
        }

        assert!(surface.has_boundary());
        assert!(surface.is_regular());
        for v in 0..4 {
            assert!(surface.is_boundary_vertex(VertexId::new(v)));
            assert_eq!(surface.vertex_part_count(VertexId::new(v)), 1);
        }
    }

    #[test]
    fn test_single_triangle() {
        let surface = classify(3, &[0, 1, 2, -1]);
        assert_eq!(surface.num_faces(), 1);
        assert_eq!(surface.num_edges(), 3);
        for e in 0..3 {
            assert!(surface.is_boundary_edge(EdgeId::new(e)));
        }
        assert!(surface.is_regular());
        assert!(surface.has_boundary());
    }

    #[test]
    fn test_closed_tetrahedron() {
        let surface = classify(
            4,
            &[0, 2, 1, -1, 0, 1, 3, -1, 1, 2, 3, -1, 2, 0, 3, -1],
        );
        assert_eq!(surface.num_edges(), 6);
        for e in 0..6 {
            assert!(surface.is_regular_edge(EdgeId::new(e)));
        }
        assert!(!surface.has_boundary());
        assert!(surface.is_regular());
        for v in 0..4 {
            assert!(!surface.is_boundary_vertex(VertexId::new(v)));
            assert_eq!(surface.vertex_part_count(VertexId::new(v)), 1);
        }
    }

    #[test]
    fn test_bowtie_vertex_is_singular() {
        // Four triangle fans meeting only at vertex 0.
        let surface = classify(
            9,
            &[0, 1, 2, -1, 0, 3, 4, -1, 0, 5, 6, -1, 0, 7, 8, -1],
        );
        assert_eq!(surface.vertex_part_count(VertexId::new(0)), 4);
        assert!(surface.is_singular_vertex(VertexId::new(0)));
        assert!(!surface.is_singular_vertex(VertexId::new(1)));
        assert!(!surface.is_regular());
        // Every edge is still boundary or regular; the defect is the vertex.
        for e in 0..surface.num_edges() {
            assert!(!surface.is_singular_edge(EdgeId::new(e)));
        }
    }

    #[test]
    fn test_three_triangles_sharing_an_edge() {
        let surface = classify(5, &[0, 1, 2, -1, 0, 1, 3, -1, 0, 1, 4, -1]);
        let e = surface
            .mesh()
            .edge_between(VertexId::new(0), VertexId::new(1))
            .unwrap();
        assert_eq!(surface.num_edge_faces(e), 3);
        assert!(surface.is_singular_edge(e));
        assert!(!surface.is_regular());
        // The shared edge is not glued, so each fan stays its own part.
        assert_eq!(surface.vertex_part_count(VertexId::new(0)), 3);
        assert_eq!(surface.vertex_part_count(VertexId::new(1)), 3);
    }

    #[test]
    fn test_edge_face_incidence() {
        let surface = classify(4, &[0, 1, 2, -1, 0, 2, 3, -1]);
        let shared = surface
            .mesh()
            .edge_between(VertexId::new(0), VertexId::new(2))
            .unwrap();
        assert_eq!(surface.edge_face(shared, 0), Some(FaceId::new(0)));
        assert_eq!(surface.edge_face(shared, 1), Some(FaceId::new(1)));
        assert_eq!(surface.edge_face(shared, 2), None);
        assert!(surface.is_edge_face(shared, FaceId::new(0)));
        assert!(surface.is_edge_face(shared, FaceId::new(1)));

        let boundary = surface
            .mesh()
            .edge_between(VertexId::new(0), VertexId::new(1))
            .unwrap();
        assert!(surface.is_edge_face(boundary, FaceId::new(0)));
        assert!(!surface.is_edge_face(boundary, FaceId::new(1)));
        assert!(!surface.is_edge_face(boundary, FaceId::invalid()));
    }

    #[test]
    fn test_isolated_vertex_does_not_break_regularity() {
        // Vertex 3 is never referenced: zero parts, not singular.
        let surface = classify(4, &[0, 1, 2, -1]);
        assert_eq!(surface.vertex_part_count(VertexId::new(3)), 0);
        assert!(!surface.is_singular_vertex(VertexId::new(3)));
        assert!(surface.is_regular());
    }

    #[test]
    fn test_with_partition_checks_size() {
        let mesh = HalfEdgeMesh::from_coord_index(3, &[0, 1, 2, -1]).unwrap();
        let err = PolygonMesh::with_partition(mesh.clone(), Partition::new(3)).unwrap_err();
        assert_eq!(
            err,
            crate::error::MeshError::PartitionSizeMismatch { expected: 4, actual: 3 }
        );
        let surface = PolygonMesh::with_partition(mesh, Partition::new(4)).unwrap();
        assert!(surface.is_regular());
    }

    #[test]
    fn test_query_recovery_on_bad_arguments() {
        let surface = classify(3, &[0, 1, 2, -1]);
        assert!(!surface.is_boundary_edge(EdgeId::new(42)));
        assert!(!surface.is_regular_edge(EdgeId::invalid()));
        assert!(!surface.is_singular_edge(EdgeId::new(42)));
        assert!(!surface.is_boundary_vertex(VertexId::new(42)));
        assert!(!surface.is_singular_vertex(VertexId::invalid()));
        assert_eq!(surface.vertex_part_count(VertexId::new(42)), 0);
        assert_eq!(surface.num_edge_faces(EdgeId::new(42)), 0);
        assert_eq!(surface.edge_face(EdgeId::new(42), 0), None);
        assert!(!surface.is_edge_face(EdgeId::new(42), FaceId::new(0)));
    }
}
