//! Rotations that carry the base face onto the other three faces.

use crate::float_types::{FRAC_PI_3, Real, TAU};
use nalgebra::{Rotation3, Vector3};

/// Right-handed rotation by `angle` radians about the X axis.
pub fn rotation_x(angle: Real) -> Rotation3<Real> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle)
}

/// Right-handed rotation by `angle` radians about the Y axis.
pub fn rotation_y(angle: Real) -> Rotation3<Real> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle)
}

/// Right-handed rotation by `angle` radians about the Z axis.
pub fn rotation_z(angle: Real) -> Rotation3<Real> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle)
}

/// The third-turn about the pole axis that maps face 1 to face 2 and face 2
/// to face 3.
pub fn third_turn() -> Rotation3<Real> {
    rotation_z(TAU / 3.0)
}

/// Tilt applied to face 3 to produce face 4: a turn of `-acos(-1/3)` about Y
/// (bringing face 3's opposite vertex up to the pole) followed by π/3 about Z
/// (aligning the bottom face with the lower vertices).
pub fn bottom_tilt() -> Rotation3<Real> {
    let tetrahedral_angle = (-1.0 as Real / 3.0).acos();
    rotation_z(FRAC_PI_3) * rotation_y(-tetrahedral_angle)
}

/// Cumulative rotation for each of the four faces, in face order.
/// The first is the identity.
pub fn face_rotations() -> [Rotation3<Real>; 4] {
    let first = Rotation3::identity();
    let second = third_turn() * first;
    let third = third_turn() * second;
    let fourth = bottom_tilt() * third;
    [first, second, third, fourth]
}
