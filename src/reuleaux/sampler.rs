//! Barycentric sample lattice over a flat triangle.
//!
//! ## **Lattice Layout**
//! ```text
//! m = step      *
//!              * *
//!             * * *
//! m = 0      * * * *      n = 0 .. step - m along each row
//! ```
//! Point `(m, n)` has barycentric weights `(m, n, step - m - n) / step`
//! against the corners `(V1, V2, V0)`. Rows are emitted with `m` as the outer
//! loop, so row `m` starts at linear index `m (2 step + 3 - m) / 2`.

use crate::errors::MeshError;
use crate::float_types::Real;
use hashbrown::HashSet;
use nalgebra::Point3;

/// Flat sample of one face: lattice points, the weights that produced them,
/// and the triangles connecting them.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    /// Sampling resolution (number of intervals along each edge)
    pub step: usize,
    /// Lattice points in row-major `(m, n)` order
    pub points: Vec<Point3<Real>>,
    /// Warped barycentric weights `(b1, b2, b3)` of each point
    pub barycentric: Vec<[Real; 3]>,
    /// Triangles over `points`, winding the same way as the input corners
    pub triangles: Vec<[usize; 3]>,
}

/// Number of lattice points for `step`: (step+1)(step+2)/2.
#[inline]
pub const fn lattice_len(step: usize) -> usize {
    (step + 1) * (step + 2) / 2
}

/// Linear index of lattice point `(m, n)`, `m + n <= step`.
#[inline]
pub const fn lattice_index(m: usize, n: usize, step: usize) -> usize {
    m * (2 * step + 3 - m) / 2 + n
}

/// Raise each weight to `warp` and shift the excess back proportionally to
/// the linear weights, so the result still sums to one.
pub fn warp_barycentric(linear: [Real; 3], warp: Real) -> [Real; 3] {
    let powered = linear.map(|l| l.powf(warp));
    let excess = powered.iter().sum::<Real>() - 1.0;
    [
        powered[0] - excess * linear[0],
        powered[1] - excess * linear[1],
        powered[2] - excess * linear[2],
    ]
}

/// Triangle topology over the lattice of `step`.
///
/// For each pair of adjacent rows `(m, m + 1)` this emits the upward
/// triangles `(m,n) (m+1,n) (m,n+1)` and the downward triangles
/// `(m+1,n) (m+1,n+1) (m,n+1)`. Triangles are then deduplicated on their
/// sorted index triple, keeping the first one seen with its winding intact.
pub fn lattice_triangles(step: usize) -> Vec<[usize; 3]> {
    let idx = |m: usize, n: usize| lattice_index(m, n, step);
    let mut raw = Vec::with_capacity(step * step);

    for m in 0..step {
        for n in 0..(step - m) {
            raw.push([idx(m, n), idx(m + 1, n), idx(m, n + 1)]);
        }
        for n in 0..(step - m).saturating_sub(1) {
            raw.push([idx(m + 1, n), idx(m + 1, n + 1), idx(m, n + 1)]);
        }
    }

    let mut seen: HashSet<[usize; 3]> = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .filter(|tri| {
            let mut key = *tri;
            key.sort_unstable();
            seen.insert(key)
        })
        .collect()
}

/// Sample the flat triangle `(v0, v1, v2)` on a warped barycentric lattice.
///
/// Produces `lattice_len(step)` points and exactly `step²` triangles.
///
/// ## Errors
/// - [`MeshError::DegenerateTopology`] when `step == 0`
/// - [`MeshError::InvalidWarp`] when `warp` is not finite and positive
pub fn sample_triangle(
    v0: Point3<Real>,
    v1: Point3<Real>,
    v2: Point3<Real>,
    step: usize,
    warp: Real,
) -> Result<SampleGrid, MeshError> {
    if step == 0 {
        return Err(MeshError::DegenerateTopology { step });
    }
    if !(warp.is_finite() && warp > 0.0) {
        return Err(MeshError::InvalidWarp(warp));
    }

    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let denom = step as Real;

    let mut points = Vec::with_capacity(lattice_len(step));
    let mut barycentric = Vec::with_capacity(lattice_len(step));
    for m in 0..=step {
        for n in 0..=(step - m) {
            let linear = [
                m as Real / denom,
                n as Real / denom,
                (step - m - n) as Real / denom,
            ];
            let b = warp_barycentric(linear, warp);
            points.push(v0 + e1 * b[0] + e2 * b[1]);
            barycentric.push(b);
        }
    }

    let triangles = lattice_triangles(step);
    tracing::trace!(
        step,
        points = points.len(),
        triangles = triangles.len(),
        "sampled triangle lattice"
    );

    Ok(SampleGrid {
        step,
        points,
        barycentric,
        triangles,
    })
}
