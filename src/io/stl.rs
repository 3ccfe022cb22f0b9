use crate::mesh::Mesh;
use core2::io::Cursor;
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Export to ASCII STL
    /// Convert this Mesh to an **ASCII STL** string with the given `name`.
    ///
    /// ```rust
    /// # use reuleaux::mesh::Mesh;
    /// let mesh = Mesh::<()>::reuleaux_tetrahedron(2, None).unwrap();
    /// let text = mesh.to_stl_ascii("my_solid");
    /// assert!(text.starts_with("solid my_solid"));
    /// ```
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("solid {name}\n"));

        for index in 0..self.triangles.len() {
            let n = self.triangle_normal(index);
            out.push_str(&format!(
                "  facet normal {:.6} {:.6} {:.6}\n",
                n.x, n.y, n.z
            ));
            out.push_str("    outer loop\n");
            for p in self.triangle_positions(index) {
                out.push_str(&format!(
                    "      vertex {:.6} {:.6} {:.6}\n",
                    p.x, p.y, p.z
                ));
            }
            out.push_str("    endloop\n");
            out.push_str("  endfacet\n");
        }

        out.push_str(&format!("endsolid {name}\n"));
        out
    }

    /// Export to BINARY STL (returns `Vec<u8>`)
    ///
    /// Convert this Mesh to a **binary STL** byte vector. The binary header
    /// carries no name, so `_name` is accepted only for symmetry with
    /// [`to_stl_ascii`](Self::to_stl_ascii).
    #[allow(clippy::unnecessary_cast)]
    pub fn to_stl_binary(&self, _name: &str) -> std::io::Result<Vec<u8>> {
        use stl_io::{Normal, Triangle, Vertex, write_stl};

        let triangles: Vec<Triangle> = (0..self.triangles.len())
            .map(|index| {
                let n = self.triangle_normal(index);
                Triangle {
                    normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                    vertices: self
                        .triangle_positions(index)
                        .map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
                }
            })
            .collect();

        let mut cursor = Cursor::new(Vec::new());
        write_stl(&mut cursor, triangles.iter())?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use crate::mesh::Mesh;

    #[test]
    fn binary_stl_has_header_count_and_records() {
        let mesh = Mesh::<()>::reuleaux_tetrahedron(3, None).unwrap();
        let bytes = mesh.to_stl_binary("r").unwrap();
        // 80-byte header, u32 count, 50 bytes per facet
        assert_eq!(bytes.len(), 84 + 50 * mesh.triangles.len());
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count as usize, 36);
    }

    #[test]
    fn binary_stl_reads_back() {
        let mesh = Mesh::<()>::reuleaux_tetrahedron(2, None).unwrap();
        let bytes = mesh.to_stl_binary("r").unwrap();
        let mut reader = std::io::Cursor::new(bytes);
        let indexed = stl_io::read_stl(&mut reader).unwrap();
        assert_eq!(indexed.faces.len(), mesh.triangles.len());
    }

    #[test]
    fn ascii_stl_lists_every_facet() {
        let mesh = Mesh::<()>::reuleaux_tetrahedron(4, None).unwrap();
        let text = mesh.to_stl_ascii("reuleaux");
        assert!(text.starts_with("solid reuleaux\n"));
        assert!(text.ends_with("endsolid reuleaux\n"));
        assert_eq!(text.matches("facet normal").count(), 64);
        assert_eq!(text.matches("vertex ").count(), 3 * 64);
    }
}
