//! The regular tetrahedron inscribed in the unit sphere that every Reuleaux
//! tetrahedron in this crate is built around.

use crate::float_types::Real;
use nalgebra::Point3;

/// 2√2/3, the radius of the circle the three lower vertices sit on
const LOWER_RING_RADIUS: Real = 0.942_809_041_582_063_365_867_792_482_806_465;
/// √2/3
const HALF_LOWER_RING_RADIUS: Real = 0.471_404_520_791_031_682_933_896_241_403_233;
/// √(2/3)
const LOWER_RING_HALF_CHORD: Real = 0.816_496_580_927_726_032_732_428_024_901_964;
/// z of the three lower vertices
const LOWER_RING_Z: Real = -1.0 / 3.0;

/// Vertices of the unit-sphere tetrahedron.
///
/// `[0]` is the pole. `[1]`, `[2]`, `[3]` lie at z = -1/3 with azimuths 4π/3,
/// 0 and 2π/3. The base face is `[0], [1], [2]`, listed counter-clockwise as
/// seen from outside, and `[3]` is the vertex opposite it.
pub const TETRAHEDRON: [[Real; 3]; 4] = [
    [0.0, 0.0, 1.0],
    [-HALF_LOWER_RING_RADIUS, -LOWER_RING_HALF_CHORD, LOWER_RING_Z],
    [LOWER_RING_RADIUS, 0.0, LOWER_RING_Z],
    [-HALF_LOWER_RING_RADIUS, LOWER_RING_HALF_CHORD, LOWER_RING_Z],
];

/// Edge length of the unit-sphere tetrahedron, √(8/3). This is also the
/// radius of every spherical face and the width of the solid.
pub const EDGE_LENGTH: Real = 1.632_993_161_855_452_065_464_856_049_803_928;

/// Warp exponent applied to the barycentric sample lattice
pub const WARP: Real = 0.85;

#[inline]
pub fn vertex(index: usize) -> Point3<Real> {
    let [x, y, z] = TETRAHEDRON[index];
    Point3::new(x, y, z)
}

/// The three corners of the face that gets sampled and inflated.
pub fn base_face() -> [Point3<Real>; 3] {
    [vertex(0), vertex(1), vertex(2)]
}

/// The vertex opposite the base face; the center of its spherical cap.
pub fn base_reference() -> Point3<Real> {
    vertex(3)
}

/// Euclidean distance between the pole and the first lower vertex.
/// Agrees with [`EDGE_LENGTH`] to rounding.
pub fn edge_length() -> Real {
    (vertex(0) - vertex(1)).norm()
}
