//! Trait defining face replication for dependency inversion

use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::{Point3, Rotation3};
use std::fmt::Debug;

/// Replicates one indexed face under a sequence of rotations.
pub trait ReplicateOps<S: Clone + Debug + Send + Sync> {
    /// Build a mesh holding one rotated copy of `points` per entry of
    /// `rotations`, concatenated in order.
    ///
    /// Copy `k` occupies vertices `k * points.len() .. (k + 1) * points.len()`
    /// and its triangles are `triangles` offset by `k * points.len()`.
    fn replicate(
        &self,
        points: &[Point3<Real>],
        triangles: &[[usize; 3]],
        rotations: &[Rotation3<Real>],
        metadata: Option<S>,
    ) -> Mesh<S>;
}

/// One rotated copy of a face, with indices shifted into slot `face`.
pub(crate) fn rotated_copy(
    points: &[Point3<Real>],
    triangles: &[[usize; 3]],
    rotation: &Rotation3<Real>,
    face: usize,
) -> (Vec<Point3<Real>>, Vec<[usize; 3]>) {
    let offset = face * points.len();
    (
        points.iter().map(|p| rotation * p).collect(),
        triangles.iter().map(|tri| tri.map(|i| i + offset)).collect(),
    )
}
