//! Mesh construction errors

use crate::float_types::Real;
use nalgebra::Point3;

/// Everything that can abort building or validating a [`Mesh`](crate::mesh::Mesh).
///
/// None of these are retryable: construction is deterministic, so the same
/// inputs fail the same way every time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// (InvalidSampleStep) The sampling resolution is not a positive integer.
    /// Raised by argument validation, never by the mesher itself.
    #[error("(InvalidSampleStep) sample step must be a positive integer, got {0:?}")]
    InvalidSampleStep(String),

    /// (GeometricInfeasibility) The target radius cannot be reached along the
    /// ray through a sample point.
    #[error(
        "(GeometricInfeasibility) face {face}, point {index} at {point}: target radius unreachable (discriminant {discriminant})"
    )]
    GeometricInfeasibility {
        face: usize,
        index: usize,
        point: Point3<Real>,
        discriminant: Real,
    },

    /// (DegenerateTopology) `step` is too small to produce a single triangle
    #[error("(DegenerateTopology) sample step {step} produces no triangles")]
    DegenerateTopology { step: usize },

    /// (InvalidWarp) The warp exponent is not a finite positive number
    #[error("(InvalidWarp) warp exponent must be finite and positive, got {0}")]
    InvalidWarp(Real),

    /// (IndexOutOfRange) A triangle references a vertex that does not exist
    #[error("(IndexOutOfRange) triangle {triangle} references vertex {index}, but the mesh has {len} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: usize,
        len: usize,
    },

    /// (RepeatedIndex) A triangle uses the same vertex twice
    #[error("(RepeatedIndex) triangle {triangle} repeats a vertex index")]
    RepeatedIndex { triangle: usize },

    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),

    /// Indicates an inconsistency while building a parry triangle mesh
    #[error(transparent)]
    TriMesh(#[from] crate::float_types::parry3d::shape::TriMeshBuilderError),
}
