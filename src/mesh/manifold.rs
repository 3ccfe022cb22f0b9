//! Edge-based topology analysis for `Mesh`

use crate::mesh::Mesh;
use hashbrown::{HashMap, HashSet};
use std::fmt::Debug;

/// Topological summary of a triangle mesh.
///
/// ## **Properties Reported**
/// 1. **Edge Manifold**: each edge shared by exactly 2 triangles
/// 2. **Orientation Consistency**: every directed edge appears at most once
/// 3. **Boundary Detection**: edges with a single triangle
/// 4. **Euler Characteristic**: χ = V - E + F (2 for a closed sphere-like solid)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifoldAnalysis {
    /// Whether the mesh is a closed, consistently oriented 2-manifold
    pub is_manifold: bool,
    /// Number of boundary edges (0 for closed manifolds)
    pub boundary_edges: usize,
    /// Number of non-manifold edges (shared by >2 triangles)
    pub non_manifold_edges: usize,
    /// Number of vertices no triangle references
    pub isolated_vertices: usize,
    /// Whether adjacent triangles traverse their shared edge in opposite directions
    pub consistent_orientation: bool,
    /// Euler characteristic (V - E + F), counting only referenced vertices
    pub euler_characteristic: i64,
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Analyze edge sharing, winding consistency and the Euler characteristic.
    ///
    /// Vertices are compared by index, so coincident but unwelded vertices
    /// count as distinct; weld first to analyze an assembled solid.
    pub fn analyze_manifold(&self) -> ManifoldAnalysis {
        let mut edge_faces: HashMap<(usize, usize), usize> = HashMap::new();
        let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
        let mut referenced: HashSet<usize> = HashSet::new();

        for tri in &self.triangles {
            for i in 0..3 {
                let (a, b) = (tri[i], tri[(i + 1) % 3]);
                // Canonical edge representation (smaller index first)
                let edge = if a < b { (a, b) } else { (b, a) };
                *edge_faces.entry(edge).or_insert(0) += 1;
                *directed.entry((a, b)).or_insert(0) += 1;
                referenced.insert(a);
            }
        }

        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        for &count in edge_faces.values() {
            match count {
                1 => boundary_edges += 1,
                2 => {},
                _ => non_manifold_edges += 1,
            }
        }

        let consistent_orientation = directed.values().all(|&count| count == 1);
        let isolated_vertices = (0..self.vertices.len())
            .filter(|i| !referenced.contains(i))
            .count();
        let euler_characteristic = referenced.len() as i64 - edge_faces.len() as i64
            + self.triangles.len() as i64;

        ManifoldAnalysis {
            is_manifold: !self.triangles.is_empty()
                && boundary_edges == 0
                && non_manifold_edges == 0
                && consistent_orientation,
            boundary_edges,
            non_manifold_edges,
            isolated_vertices,
            consistent_orientation,
            euler_characteristic,
        }
    }

    /// Check if the mesh is a closed, consistently oriented 2-manifold
    pub fn is_manifold(&self) -> bool {
        self.analyze_manifold().is_manifold
    }
}
