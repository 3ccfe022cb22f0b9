//! Serial implementation of face replication

use super::traits::{ReplicateOps, rotated_copy};
use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::{Point3, Rotation3};
use std::fmt::Debug;
use std::sync::OnceLock;

/// Serial implementation of `ReplicateOps`
pub struct SerialReplicateOps;

impl SerialReplicateOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialReplicateOps {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Debug + Send + Sync> ReplicateOps<S> for SerialReplicateOps {
    fn replicate(
        &self,
        points: &[Point3<Real>],
        triangles: &[[usize; 3]],
        rotations: &[Rotation3<Real>],
        metadata: Option<S>,
    ) -> Mesh<S> {
        let mut vertices = Vec::with_capacity(points.len() * rotations.len());
        let mut all_triangles = Vec::with_capacity(triangles.len() * rotations.len());

        for (face, rotation) in rotations.iter().enumerate() {
            let (face_points, face_triangles) = rotated_copy(points, triangles, rotation, face);
            vertices.extend(face_points);
            all_triangles.extend(face_triangles);
            tracing::trace!(face = face + 1, "replicated face");
        }

        Mesh {
            vertices,
            triangles: all_triangles,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }
}
