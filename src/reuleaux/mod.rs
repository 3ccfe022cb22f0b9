//! Reuleaux tetrahedron meshing.
//!
//! ## **Construction**
//! 1. **Sample**: lay a warped barycentric lattice over the base face of the
//!    unit-sphere tetrahedron ([`sampler`])
//! 2. **Inflate**: push every lattice point out along its ray until it is one
//!    edge length away from the opposite vertex ([`inflate`])
//! 3. **Replicate**: rotate the curved face into the other three positions and
//!    concatenate the copies ([`replicate`], [`rotation`])
//!
//! Face `k` (0-based) owns vertices `k * points_per_face(step) ..` and its
//! triangles reference only those vertices. Boundary points are duplicated
//! between adjacent faces; [`Mesh::welded`] merges them into a closed solid.

pub mod inflate;
pub mod replicate;
pub mod rotation;
pub mod sampler;
pub mod tetrahedron;

use crate::errors::MeshError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use nalgebra::Point3;
use replicate::{DefaultReplicateOps, ReplicateOps};
use sampler::SampleGrid;
use std::fmt::Debug;
use std::ops::Range;

/// Number of faces of the solid
pub const FACE_COUNT: usize = 4;

/// Vertices in one face for sampling resolution `step`.
#[inline]
pub const fn points_per_face(step: usize) -> usize {
    sampler::lattice_len(step)
}

/// Vertex index range owned by `face` (0-based) in an assembled mesh.
pub const fn face_vertex_range(step: usize, face: usize) -> Range<usize> {
    let n = points_per_face(step);
    face * n..(face + 1) * n
}

/// Center of the spherical cap forming `face` (0-based): the tetrahedron
/// vertex opposite that face after replication.
pub fn face_reference(face: usize) -> Point3<Real> {
    rotation::face_rotations()[face] * tetrahedron::base_reference()
}

/// Sample and inflate the base face.
///
/// ## Errors
/// [`MeshError::DegenerateTopology`] for `step == 0`;
/// [`MeshError::GeometricInfeasibility`] if a point cannot be inflated.
pub fn curved_face(step: usize) -> Result<SampleGrid, MeshError> {
    let [v1, v2, v3] = tetrahedron::base_face();
    let mut grid = sampler::sample_triangle(v1, v2, v3, step, tetrahedron::WARP)?;
    inflate::inflate(
        &mut grid.points,
        &tetrahedron::base_reference(),
        tetrahedron::edge_length(),
        1,
    )?;
    Ok(grid)
}

/// Build the Reuleaux tetrahedron with an explicit replication strategy.
pub fn reuleaux_tetrahedron_with<S, R>(
    step: usize,
    ops: &R,
    metadata: Option<S>,
) -> Result<Mesh<S>, MeshError>
where
    S: Clone + Debug + Send + Sync,
    R: ReplicateOps<S>,
{
    let face = curved_face(step)?;
    let mesh = ops.replicate(
        &face.points,
        &face.triangles,
        &rotation::face_rotations(),
        metadata,
    );

    tracing::debug!(
        step,
        vertices = mesh.vertices.len(),
        triangles = mesh.triangles.len(),
        "assembled Reuleaux tetrahedron"
    );
    Ok(mesh)
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// **Reuleaux tetrahedron** around the regular tetrahedron inscribed in
    /// the unit sphere.
    ///
    /// Each of the four faces is a spherical patch of radius √(8/3) (the edge
    /// length) centered on the opposite tetrahedron vertex. `step` is the
    /// number of sample intervals along each face edge, conventionally a power
    /// of two. The result has `4 (step+1)(step+2)/2` vertices and `4 step²`
    /// triangles, all wound counter-clockwise seen from outside.
    ///
    /// Scale the result to get a different width:
    /// ```
    /// # use reuleaux::mesh::Mesh;
    /// let solid = Mesh::<()>::reuleaux_tetrahedron(8, None)?.scale(2.0);
    /// assert_eq!(solid.vertices.len(), 180);
    /// assert_eq!(solid.triangles.len(), 256);
    /// # Ok::<(), reuleaux::errors::MeshError>(())
    /// ```
    ///
    /// ## Errors
    /// [`MeshError::DegenerateTopology`] when `step == 0`.
    pub fn reuleaux_tetrahedron(step: usize, metadata: Option<S>) -> Result<Mesh<S>, MeshError> {
        reuleaux_tetrahedron_with(step, &DefaultReplicateOps::new(), metadata)
    }
}
