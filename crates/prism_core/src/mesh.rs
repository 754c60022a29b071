//! Indexed triangle meshes.
//!
//! Scene files can describe a surface as shared vertex positions plus triangle
//! indices. The renderer expands a mesh into independent triangles, carrying
//! per-vertex normals along when smooth shading is requested.

use prism_math::{Vec3Ext, Vector3};

use crate::error::SceneError;

/// A mesh consisting of vertex positions, optional normals, and triangle indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Vertex positions (one per vertex)
    pub positions: Vec<Vector3>,

    /// Vertex normals (optional - computed by `ensure_normals`)
    pub normals: Option<Vec<Vector3>>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh, checking that the indices form whole triangles that
    /// reference existing vertices.
    pub fn new(
        positions: Vec<Vector3>,
        indices: Vec<u32>,
        normals: Option<Vec<Vector3>>,
    ) -> Result<Self, SceneError> {
        if indices.len() % 3 != 0 {
            return Err(SceneError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(SceneError::InvalidMesh(format!(
                "index {} out of range for {} vertices",
                bad,
                positions.len()
            )));
        }
        if positions.iter().any(|p| !p.is_finite()) {
            return Err(SceneError::NonFiniteVector {
                name: "mesh.positions",
            });
        }

        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// Faces are counter-clockwise, so each face contributes
    /// `cross(p1 - p0, p2 - p0)`, weighted by its area. Vertices that only
    /// touch degenerate faces fall back to +Y.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vector3::ZERO; self.positions.len()];

        for face in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];
            let p0 = self.positions[i0];
            let face_normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            *normal = normal.checked_normalize().unwrap_or(Vector3::Y);
        }

        self.normals = Some(normals);
    }

    /// Ensure the mesh has one normal per vertex, computing them if necessary.
    pub fn ensure_normals(&mut self) {
        let should_compute = match &self.normals {
            None => true,
            Some(normals) => normals.len() != self.positions.len(),
        };

        if should_compute {
            if let Some(normals) = &self.normals {
                log::debug!(
                    "Normals array length ({}) doesn't match vertex count ({}), computing smooth normals",
                    normals.len(),
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex positions of every triangle.
    pub fn triangle_vertices(&self) -> impl Iterator<Item = [Vector3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|face| {
            [
                self.positions[face[0] as usize],
                self.positions[face[1] as usize],
                self.positions[face[2] as usize],
            ]
        })
    }

    /// Vertex normals of every triangle, if the mesh has a normal per vertex.
    pub fn triangle_normals(&self) -> Option<impl Iterator<Item = [Vector3; 3]> + '_> {
        let normals = self
            .normals
            .as_ref()
            .filter(|n| n.len() == self.positions.len())?;

        Some(self.indices.chunks_exact(3).map(move |face| {
            [
                normals[face[0] as usize],
                normals[face[1] as usize],
                normals[face[2] as usize],
            ]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        // Unit square in the XY plane facing +Z
        Mesh::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_vertices().count(), 2);
    }

    #[test]
    fn test_compute_normals_ccw() {
        let mut mesh = quad();
        assert!(mesh.triangle_normals().is_none());

        mesh.ensure_normals();
        for n in mesh.normals.as_ref().unwrap() {
            assert!(n.abs_diff_eq(Vector3::Z, 1e-12));
        }
        assert_eq!(mesh.triangle_normals().unwrap().count(), 2);
    }

    #[test]
    fn test_ensure_normals_replaces_mismatched() {
        let mut mesh = quad();
        mesh.normals = Some(vec![Vector3::X]);
        mesh.ensure_normals();
        assert_eq!(mesh.normals.as_ref().unwrap().len(), 4);
    }

    #[test]
    fn test_invalid_indices() {
        let positions = vec![Vector3::ZERO, Vector3::X, Vector3::Y];
        assert!(matches!(
            Mesh::new(positions.clone(), vec![0, 1], None),
            Err(SceneError::InvalidMesh(_))
        ));
        assert!(matches!(
            Mesh::new(positions, vec![0, 1, 3], None),
            Err(SceneError::InvalidMesh(_))
        ));
    }

    #[test]
    fn test_degenerate_face_normal_fallback() {
        let mut mesh = Mesh::new(
            vec![Vector3::ZERO, Vector3::X, Vector3::X * 2.0],
            vec![0, 1, 2],
            None,
        )
        .unwrap();
        mesh.compute_normals();
        assert_eq!(mesh.normals.unwrap(), vec![Vector3::Y; 3]);
    }
}
