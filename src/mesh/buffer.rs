//! Validation and face-run parsing for the flat corner buffer.
//!
//! The input wire format is a sequence of `i32` values, each either a
//! vertex index in `[0, vertex_count)` or [`FACE_SENTINEL`] closing the
//! current face. Both [`FaceIndex`](super::FaceIndex) and
//! [`HalfEdgeMesh`](super::HalfEdgeMesh) validate with the same rules, so
//! a buffer accepted by one is accepted by the other.

use crate::error::{MeshError, Result};

use super::index::FaceId;

/// Buffer value that closes the current face.
pub const FACE_SENTINEL: i32 = -1;

/// Validate a corner buffer against a vertex count.
///
/// Rules:
/// - every non-sentinel entry is a vertex index in `[0, vertex_count)`;
/// - every face has at least two corners;
/// - no empty runs (consecutive sentinels or a leading sentinel);
/// - a non-empty buffer ends with a sentinel (no unterminated face).
///
/// An empty buffer is valid and describes zero faces.
pub(crate) fn validate(vertex_count: usize, coord_index: &[i32]) -> Result<()> {
    let mut face = 0usize;
    let mut run = 0usize;
    for (i, &v) in coord_index.iter().enumerate() {
        if v == FACE_SENTINEL {
            match run {
                0 => return Err(MeshError::MalformedSentinel { position: i }),
                1 => return Err(MeshError::DegenerateFace { face, size: run }),
                _ => {}
            }
            face += 1;
            run = 0;
        } else if v < 0 || v as usize >= vertex_count {
            return Err(MeshError::InvalidVertexIndex { corner: i, vertex: v });
        } else {
            run += 1;
        }
    }
    if run != 0 {
        return Err(MeshError::MalformedSentinel {
            position: coord_index.len(),
        });
    }
    Ok(())
}

/// Per-face layout of a validated corner buffer.
///
/// Face sizes are kept in an explicit table indexed by face, so `next`
/// and `prev` at face ends are plain lookups rather than buffer scans.
#[derive(Debug, Clone, Default)]
pub(crate) struct FaceRuns {
    /// First corner position of each face.
    pub start: Vec<u32>,
    /// Corner count of each face.
    pub size: Vec<u32>,
    /// Owning face per buffer slot; invalid at sentinel slots.
    pub corner_face: Vec<FaceId>,
}

impl FaceRuns {
    /// Split a validated buffer into face runs.
    pub fn parse(coord_index: &[i32]) -> Self {
        let mut runs = FaceRuns {
            corner_face: Vec::with_capacity(coord_index.len()),
            ..Default::default()
        };
        let mut start = 0u32;
        for (i, &v) in coord_index.iter().enumerate() {
            if v == FACE_SENTINEL {
                runs.corner_face.push(FaceId::invalid());
                runs.start.push(start);
                runs.size.push(i as u32 - start);
                start = i as u32 + 1;
            } else {
                runs.corner_face.push(FaceId::new(runs.start.len()));
            }
        }
        runs
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.start.len()
    }
}
