mod support;

use approx::assert_relative_eq;
use hashbrown::HashSet;
use reuleaux::errors::MeshError;
use reuleaux::float_types::Real;
use reuleaux::mesh::Mesh;
use reuleaux::reuleaux::{
    FACE_COUNT, curved_face, face_reference, face_vertex_range, points_per_face,
    replicate::SerialReplicateOps, reuleaux_tetrahedron_with, rotation::third_turn,
    tetrahedron::EDGE_LENGTH,
};
use support::{coincident_count, face_points, reuleaux_volume};

fn solid(step: usize) -> Mesh<()> {
    Mesh::<()>::reuleaux_tetrahedron(step, None).unwrap()
}

#[test]
fn counting_invariants_hold_across_resolutions() {
    for step in [1, 2, 3, 4, 5, 7, 8, 16, 32] {
        let mesh = solid(step);
        assert_eq!(mesh.vertices.len(), 4 * (step + 1) * (step + 2) / 2, "step {step}");
        assert_eq!(mesh.triangles.len(), 4 * step * step, "step {step}");
        assert!(mesh.validate().is_ok(), "step {step}");
    }
}

#[test]
fn step_eight_has_180_vertices_and_256_triangles() {
    let mesh = solid(8);
    assert_eq!(mesh.vertex_count(), 180);
    assert_eq!(mesh.triangle_count(), 256);
}

#[test]
fn single_face_topology_has_no_duplicates() {
    for step in [1, 2, 6, 32] {
        let face = curved_face(step).unwrap();
        assert_eq!(face.points.len(), points_per_face(step));
        assert_eq!(face.triangles.len(), step * step);

        let mut seen = HashSet::new();
        for tri in &face.triangles {
            assert!(tri.iter().all(|&i| i < face.points.len()));
            let mut key = *tri;
            key.sort_unstable();
            assert!(seen.insert(key), "duplicate triangle {tri:?} at step {step}");
        }
    }
}

#[test]
fn barycentric_weights_sum_to_one() {
    let face = curved_face(32).unwrap();
    for weights in &face.barycentric {
        assert_relative_eq!(weights.iter().sum::<Real>(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn every_point_is_one_width_from_its_cap_center() {
    let step = 32;
    let mesh = solid(step);
    for face in 0..FACE_COUNT {
        let center = face_reference(face);
        for p in face_points(&mesh, step, face) {
            assert_relative_eq!((p - center).norm(), EDGE_LENGTH, epsilon = 1e-9);
        }
    }
}

#[test]
fn triangles_stay_inside_their_face() {
    let step = 5;
    let mesh = solid(step);
    for (k, chunk) in mesh.triangles.chunks(step * step).enumerate() {
        let range = face_vertex_range(step, k);
        for tri in chunk {
            assert!(tri.iter().all(|i| range.contains(i)));
        }
    }
}

#[test]
fn adjacent_faces_share_one_edge_of_points() {
    for step in [1, 4, 9] {
        let mesh = solid(step);
        for a in 0..FACE_COUNT {
            for b in (a + 1)..FACE_COUNT {
                let shared = coincident_count(
                    face_points(&mesh, step, a),
                    face_points(&mesh, step, b),
                    1e-9,
                );
                assert_eq!(shared, step + 1, "faces {a} and {b} at step {step}");
            }
        }
    }
}

#[test]
fn third_turn_maps_face_one_onto_face_two() {
    let step = 8;
    let mesh = solid(step);
    let turned = mesh.rotate(&third_turn());
    let face_one_turned = face_points(&turned, step, 0);
    let face_two = face_points(&mesh, step, 1);
    for (p, q) in face_one_turned.iter().zip(face_two) {
        assert_relative_eq!(p, q, epsilon = 1e-9);
    }
}

#[test]
fn scaling_multiplies_every_distance() {
    let k = 2.5;
    let mesh = solid(8);
    let scaled = mesh.scale(k);
    assert_eq!(scaled.triangles, mesh.triangles);

    let n = mesh.vertices.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let before = (mesh.vertices[i] - mesh.vertices[j]).norm();
            let after = (scaled.vertices[i] - scaled.vertices[j]).norm();
            assert_relative_eq!(after, k * before, epsilon = 1e-9);
        }
    }
}

#[test]
fn welded_solid_is_a_closed_sphere() {
    for step in [1, 2, 8, 32] {
        let welded = solid(step).welded();
        assert_eq!(
            welded.vertices.len(),
            4 * points_per_face(step) - 6 * step - 2,
            "step {step}"
        );
        assert_eq!(welded.triangles.len(), 4 * step * step);
        assert!(welded.is_closed());

        let analysis = welded.analyze_manifold();
        assert!(analysis.is_manifold, "step {step}: {analysis:?}");
        assert_eq!(analysis.euler_characteristic, 2);
        assert_eq!(analysis.isolated_vertices, 0);
    }
}

#[test]
fn unwelded_solid_is_open() {
    let step = 4;
    let mesh = solid(step);
    assert!(!mesh.is_closed());
    // each face keeps its own three sides of `step` edges
    assert_eq!(mesh.analyze_manifold().boundary_edges, 4 * 3 * step);
}

#[test]
fn normals_point_away_from_the_center() {
    let mesh = solid(8);
    for i in 0..mesh.triangles.len() {
        let [a, b, c] = mesh.triangle_positions(i);
        let centroid = (a.coords + b.coords + c.coords) / 3.0;
        assert!(mesh.triangle_normal(i).dot(&centroid) > 0.0, "triangle {i}");
    }
}

#[test]
fn volume_approaches_the_analytic_value() {
    let exact = reuleaux_volume(EDGE_LENGTH);
    let coarse = solid(8).volume();
    let fine = solid(32).volume();
    assert!(coarse > 0.0 && coarse < fine && fine < exact);
    assert!((exact - fine) / exact < 0.01, "fine {fine} exact {exact}");
}

#[test]
fn solid_stays_within_one_width_of_every_vertex() {
    let mesh = solid(16);
    for face in 0..FACE_COUNT {
        let vertex = face_reference(face);
        for p in &mesh.vertices {
            assert!((p - vertex).norm() <= EDGE_LENGTH + 1e-9);
        }
    }
}

#[test]
fn explicit_serial_strategy_matches_default() {
    let step = 6;
    let default = solid(step);
    let serial: Mesh<()> =
        reuleaux_tetrahedron_with(step, &SerialReplicateOps::new(), None).unwrap();
    assert_eq!(default.triangles, serial.triangles);
    for (p, q) in default.vertices.iter().zip(&serial.vertices) {
        assert_relative_eq!(p, q, epsilon = 1e-12);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_replication_matches_serial() {
    use reuleaux::reuleaux::replicate::ParallelReplicateOps;

    let step = 16;
    let serial: Mesh<()> =
        reuleaux_tetrahedron_with(step, &SerialReplicateOps::new(), None).unwrap();
    let parallel: Mesh<()> =
        reuleaux_tetrahedron_with(step, &ParallelReplicateOps::new(), None).unwrap();
    assert_eq!(serial.triangles, parallel.triangles);
    assert_eq!(serial.vertices, parallel.vertices);
}

#[test]
fn zero_step_fails_fast() {
    assert!(matches!(
        Mesh::<()>::reuleaux_tetrahedron(0, None),
        Err(MeshError::DegenerateTopology { step: 0 })
    ));
}

#[test]
fn metadata_is_carried_through() {
    let mesh = Mesh::reuleaux_tetrahedron(2, Some("shell")).unwrap();
    assert_eq!(mesh.metadata, Some("shell"));
    assert_eq!(mesh.scale(3.0).metadata, Some("shell"));
}
