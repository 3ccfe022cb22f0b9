//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use reuleaux::float_types::{PI, Real};
use reuleaux::mesh::Mesh;
use reuleaux::reuleaux::face_vertex_range;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The vertices owned by `face` (0-based) in an assembled solid.
pub fn face_points(mesh: &Mesh<()>, step: usize, face: usize) -> &[Point3<Real>] {
    &mesh.vertices[face_vertex_range(step, face)]
}

/// How many points of `a` have a partner in `b` closer than `eps`.
pub fn coincident_count(a: &[Point3<Real>], b: &[Point3<Real>], eps: Real) -> usize {
    a.iter()
        .filter(|p| b.iter().any(|q| (*p - q).norm() < eps))
        .count()
}

/// Analytic volume of a Reuleaux tetrahedron of width `s`.
pub fn reuleaux_volume(s: Real) -> Real {
    let sqrt2 = (2.0 as Real).sqrt();
    s.powi(3) / 12.0 * (3.0 * sqrt2 - 49.0 * PI + 162.0 * sqrt2.atan())
}

/// A closed, outward-wound unit right tetrahedron.
pub fn corner_tetrahedron() -> Mesh<()> {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let triangles = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]];
    Mesh::from_parts(vertices, triangles, None).unwrap()
}
