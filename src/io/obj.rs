use crate::mesh::Mesh;
use std::fmt::Debug;
use std::fmt::Write;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Export to Wavefront OBJ.
    ///
    /// Vertices are written in mesh order and faces use OBJ's 1-based
    /// indices, so face line `k` names vertices `tri + 1`.
    pub fn to_obj(&self, name: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "o {name}");
        for p in &self.vertices {
            let _ = writeln!(out, "v {:.9} {:.9} {:.9}", p.x, p.y, p.z);
        }
        for [a, b, c] in &self.triangles {
            let _ = writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1);
        }
        out
    }
}
