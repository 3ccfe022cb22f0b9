//! Parallel implementation of face replication

use super::traits::{ReplicateOps, rotated_copy};
use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::{Point3, Rotation3};
use rayon::prelude::*;
use std::fmt::Debug;
use std::sync::OnceLock;

/// Parallel implementation of `ReplicateOps`: one rayon task per face.
pub struct ParallelReplicateOps;

impl ParallelReplicateOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelReplicateOps {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Debug + Send + Sync> ReplicateOps<S> for ParallelReplicateOps {
    fn replicate(
        &self,
        points: &[Point3<Real>],
        triangles: &[[usize; 3]],
        rotations: &[Rotation3<Real>],
        metadata: Option<S>,
    ) -> Mesh<S> {
        // collect() keeps face order
        let copies: Vec<(Vec<Point3<Real>>, Vec<[usize; 3]>)> = rotations
            .par_iter()
            .enumerate()
            .map(|(face, rotation)| rotated_copy(points, triangles, rotation, face))
            .collect();

        let mut vertices = Vec::with_capacity(points.len() * rotations.len());
        let mut all_triangles = Vec::with_capacity(triangles.len() * rotations.len());
        for (face_points, face_triangles) in copies {
            vertices.extend(face_points);
            all_triangles.extend(face_triangles);
        }

        Mesh {
            vertices,
            triangles: all_triangles,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }
}
