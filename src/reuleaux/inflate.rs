//! Radial inflation of a flat face onto a sphere around its opposite vertex.
//!
//! Each point `U` is scaled to `t U` with `‖t U - X‖ = ρ`, i.e.
//! ```text
//! ‖U‖² t² - 2 (U·X) t + (‖X‖² - ρ²) = 0
//! ```
//! and the larger root is taken so the face bulges away from `X`.

use crate::errors::MeshError;
use crate::float_types::Real;
use nalgebra::Point3;

/// Scale factor moving `point` along its ray from the origin until it sits at
/// distance `radius` from `reference`.
///
/// Returns the larger root of the quadratic, computed without cancellation:
/// with `h = U·X` and quarter-discriminant `D = h² - ‖U‖² (‖X‖² - ρ²)`,
/// `t = (h + √D) / ‖U‖²` when `h ≥ 0`, else `t = (‖X‖² - ρ²) / (h - √D)`.
///
/// ## Errors
/// `Err(D)` with the offending discriminant when no real, finite root exists.
pub fn inflation_factor(
    point: &Point3<Real>,
    reference: &Point3<Real>,
    radius: Real,
) -> Result<Real, Real> {
    let a = point.coords.norm_squared();
    let h = point.coords.dot(&reference.coords);
    let c = reference.coords.norm_squared() - radius * radius;
    let discriminant = h * h - a * c;

    if !(discriminant >= 0.0) || a == 0.0 {
        return Err(discriminant);
    }

    let root = discriminant.sqrt();
    let t = if h >= 0.0 { (h + root) / a } else { c / (h - root) };

    if t.is_finite() { Ok(t) } else { Err(discriminant) }
}

/// Inflate `points` in place onto the sphere of `radius` around `reference`.
/// `face` is only used to label errors.
///
/// ## Errors
/// [`MeshError::GeometricInfeasibility`] naming the first point whose ray
/// never reaches the sphere.
pub fn inflate(
    points: &mut [Point3<Real>],
    reference: &Point3<Real>,
    radius: Real,
    face: usize,
) -> Result<(), MeshError> {
    for (index, point) in points.iter_mut().enumerate() {
        let t = inflation_factor(point, reference, radius).map_err(|discriminant| {
            MeshError::GeometricInfeasibility {
                face,
                index,
                point: *point,
                discriminant,
            }
        })?;
        *point = Point3::from(point.coords * t);
    }
    Ok(())
}
