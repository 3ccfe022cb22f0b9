//! `Mesh` struct: an indexed triangle mesh with shared vertex positions.

use crate::errors::MeshError;
use crate::float_types::{
    Real,
    parry3d::{bounding_volume::Aabb, shape::TriMesh},
    tolerance,
};
use hashbrown::{HashMap, HashSet};
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};
use std::{fmt::Debug, sync::OnceLock};

/// Edge and orientation analysis
pub mod manifold;

/// Multiple of [`tolerance`] per unit of mesh extent used by [`Mesh::welded`].
pub const WELD_TOLERANCE_FACTOR: Real = 1e3;

/// An indexed triangle mesh.
/// - `S` is the generic metadata type, stored as `Option<S>`.
///
/// Every index stored in `triangles` refers to a position in `vertices`.
/// Triangles wind counter-clockwise when seen from the side their normal
/// points to.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Vertex positions, referenced by index from `triangles`
    pub vertices: Vec<Point3<Real>>,

    /// Triangles as triples of vertex indices
    pub triangles: Vec<[usize; 3]>,

    /// Lazily calculated AABB that spans `vertices`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Returns a new empty Mesh
    pub const fn new() -> Self {
        Mesh {
            vertices: Vec::new(),
            triangles: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Build a mesh from raw vertex and triangle arrays, rejecting any triangle
    /// that points outside `vertices` or repeats an index.
    pub fn from_parts(
        vertices: Vec<Point3<Real>>,
        triangles: Vec<[usize; 3]>,
        metadata: Option<S>,
    ) -> Result<Self, MeshError> {
        let mesh = Mesh {
            vertices,
            triangles,
            bounding_box: OnceLock::new(),
            metadata,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Check the index invariant and that all coordinates are finite.
    pub fn validate(&self) -> Result<(), MeshError> {
        if let Some(bad) = self
            .vertices
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(MeshError::InvalidCoordinate(*bad));
        }

        let len = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i >= len) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    len,
                });
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::RepeatedIndex { triangle });
            }
        }
        Ok(())
    }

    /// The three corner positions of triangle `index`.
    pub fn triangle_positions(&self, index: usize) -> [Point3<Real>; 3] {
        self.triangles[index].map(|i| self.vertices[i])
    }

    /// Unit normal of triangle `index` following its winding, or zero for a
    /// triangle with no area.
    pub fn triangle_normal(&self, index: usize) -> Vector3<Real> {
        let [a, b, c] = self.triangle_positions(index);
        (b - a)
            .cross(&(c - a))
            .try_normalize(Real::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Returns an [`Aabb`] spanning all vertices (cached after first call).
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            if self.vertices.is_empty() {
                return Aabb::new(Point3::origin(), Point3::origin());
            }
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
            for p in &self.vertices {
                mins = mins.inf(p);
                maxs = maxs.sup(p);
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to every vertex.
    /// The triangle list is carried over untouched.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        Mesh {
            vertices: self
                .vertices
                .iter()
                .map(|p| matrix.transform_point(p))
                .collect(),
            triangles: self.triangles.clone(),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// Apply a rotation to every vertex.
    pub fn rotate(&self, rotation: &Rotation3<Real>) -> Self {
        Mesh {
            vertices: self.vertices.iter().map(|p| rotation * p).collect(),
            triangles: self.triangles.clone(),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// Uniformly scale about the origin. Every distance in the mesh is
    /// multiplied by `factor`.
    pub fn scale(&self, factor: Real) -> Self {
        self.transform(&Matrix4::new_scaling(factor))
    }

    /// Returns a new Mesh translated by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.transform(&Translation3::new(x, y, z).to_homogeneous())
    }

    /// Reverse the winding of every triangle.
    pub fn flip(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    /// Sum of all triangle areas.
    pub fn surface_area(&self) -> Real {
        (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.triangle_positions(i);
                (b - a).cross(&(c - a)).norm() * 0.5
            })
            .sum()
    }

    /// Signed enclosed volume (divergence theorem over origin-based
    /// tetrahedra). Positive when the mesh is closed and wound outward.
    pub fn volume(&self) -> Real {
        (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.triangle_positions(i);
                a.coords.dot(&b.coords.cross(&c.coords)) / 6.0
            })
            .sum()
    }

    /// Count the unique undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().collect::<HashSet<_>>().len()
    }

    /// A mesh is closed when every edge is shared by exactly two triangles.
    ///
    /// Replicated faces carry their own copies of boundary vertices, so a
    /// freshly assembled solid only reports closed after
    /// [`weld_vertices`](Self::weld_vertices).
    pub fn is_closed(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in self.edges() {
            *edge_count.entry(edge).or_insert(0) += 1;
        }
        edge_count.values().all(|&count| count == 2)
    }

    /// Undirected edges (smaller index first), one per triangle side.
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.triangles.iter().flat_map(|tri| {
            (0..3).map(move |i| {
                let (a, b) = (tri[i], tri[(i + 1) % 3]);
                if a < b { (a, b) } else { (b, a) }
            })
        })
    }

    /// Merge vertices closer than `epsilon`, keeping the first occurrence of
    /// each cluster in its original order. Triangles that collapse to fewer
    /// than three distinct vertices are dropped.
    pub fn weld_vertices(&self, epsilon: Real) -> Self {
        let epsilon = epsilon.max(Real::EPSILON);
        let cell_of = |p: &Point3<Real>| {
            (
                (p.x / epsilon).floor() as i64,
                (p.y / epsilon).floor() as i64,
                (p.z / epsilon).floor() as i64,
            )
        };

        let mut grid: HashMap<(i64, i64, i64), Vec<usize>> = HashMap::new();
        let mut welded: Vec<Point3<Real>> = Vec::new();
        let mut remap = Vec::with_capacity(self.vertices.len());

        for p in &self.vertices {
            let (cx, cy, cz) = cell_of(p);
            let mut found = None;
            'search: for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        if let Some(bucket) = grid.get(&(cx + dx, cy + dy, cz + dz)) {
                            if let Some(&hit) =
                                bucket.iter().find(|&&k| (welded[k] - p).norm() < epsilon)
                            {
                                found = Some(hit);
                                break 'search;
                            }
                        }
                    }
                }
            }

            let index = match found {
                Some(hit) => hit,
                None => {
                    let k = welded.len();
                    welded.push(*p);
                    grid.entry((cx, cy, cz)).or_default().push(k);
                    k
                },
            };
            remap.push(index);
        }

        let triangles = self
            .triangles
            .iter()
            .map(|tri| tri.map(|i| remap[i]))
            .filter(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2])
            .collect();

        tracing::debug!(
            before = self.vertices.len(),
            after = welded.len(),
            epsilon,
            "welded coincident vertices"
        );

        Mesh {
            vertices: welded,
            triangles,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// [`weld_vertices`](Self::weld_vertices) at the crate tolerance scaled to
    /// the mesh size.
    pub fn welded(&self) -> Self {
        let extent = self.bounding_box().extents().norm().max(1.0);
        self.weld_vertices(tolerance() * WELD_TOLERANCE_FACTOR * extent)
    }

    /// Convert this Mesh to a Parry `TriMesh`.
    /// Useful for collision detection or mass properties.
    ///
    /// ## Errors
    /// If Parry returns a `TriMeshBuilderError`
    pub fn to_trimesh(&self) -> Result<TriMesh, MeshError> {
        let indices = self
            .triangles
            .iter()
            .map(|tri| tri.map(|i| i as u32))
            .collect();
        Ok(TriMesh::new(self.vertices.clone(), indices)?)
    }
}
