//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use prism_core::{Material, SceneError};
use prism_math::{Interval, Ray, Vector3};

use crate::hittable::{HitRecord, Intersectable};

/// Determinants smaller than this mean the ray runs parallel to the plane
/// (or the triangle has no area).
const PARALLEL_EPSILON: f64 = 1e-12;

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertices, counter-clockwise when seen from the front
    v0: Vector3,
    v1: Vector3,
    v2: Vector3,
    /// Per-vertex shading normals (unit length), if smooth shaded
    vertex_normals: Option<[Vector3; 3]>,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new flat-shaded triangle from three vertices.
    ///
    /// Degenerate (zero-area) triangles are accepted; they are never hit.
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            vertex_normals: None,
            material,
        }
    }

    /// Create a triangle with per-vertex normals (for smooth shading).
    pub fn with_vertex_normals(
        v0: Vector3,
        v1: Vector3,
        v2: Vector3,
        normals: [Vector3; 3],
        material: Material,
    ) -> Result<Self, SceneError> {
        let mut unit = [Vector3::ZERO; 3];
        for (dst, n) in unit.iter_mut().zip(normals) {
            *dst = n.try_normalize().ok_or(SceneError::NonFiniteVector {
                name: "triangle.normals",
            })?;
        }

        Ok(Self {
            vertex_normals: Some(unit),
            ..Self::new(v0, v1, v2, material)
        })
    }

    pub fn vertices(&self) -> [Vector3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        triangle_area(self.v0, self.v1, self.v2)
    }

    /// Geometric unit normal, `None` for a degenerate triangle.
    pub fn face_normal(&self) -> Option<Vector3> {
        (self.v1 - self.v0).cross(self.v2 - self.v0).try_normalize()
    }

    /// Barycentric coordinates of a point in the triangle's plane, as area ratios.
    ///
    /// Each weight is the area of the sub-triangle opposite its vertex over
    /// the full area. Points outside the triangle get weights that no longer
    /// sum to 1. Returns `None` for a degenerate triangle.
    pub fn barycentric(&self, point: Vector3) -> Option<Vector3> {
        let area = self.area();
        if area < PARALLEL_EPSILON {
            return None;
        }

        Some(Vector3::new(
            triangle_area(point, self.v1, self.v2) / area,
            triangle_area(self.v0, point, self.v2) / area,
            triangle_area(self.v0, self.v1, point) / area,
        ))
    }

    /// Interpolated vertex normal for barycentric weights, if smooth shaded.
    fn shading_normal(&self, weights: Vector3) -> Option<Vector3> {
        let [n0, n1, n2] = self.vertex_normals?;
        (n0 * weights.x + n1 * weights.y + n2 * weights.z).try_normalize()
    }
}

fn triangle_area(a: Vector3, b: Vector3, c: Vector3) -> f64 {
    0.5 * (b - a).cross(c - a).length()
}

impl Intersectable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let pvec = ray.direction.cross(edge2);
        let det = edge1.dot(pvec);

        // Ray is parallel to triangle
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin - self.v0;
        let u = tvec.dot(pvec) * inv_det;

        // Check if intersection is outside triangle (u parameter)
        if !Interval::UNIT.contains(u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.direction.dot(qvec) * inv_det;

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        if !ray_t.surrounds(t) {
            return None;
        }

        let weights = Vector3::new(1.0 - u - v, u, v);
        let face_normal = edge1.cross(edge2).normalize();

        // Sidedness comes from the geometry, not the interpolated normal
        let mut rec = HitRecord::new(ray, t, face_normal, &self.material).with_barycentric(weights);
        if let Some(shading) = self.shading_normal(weights) {
            rec = rec.with_shading_normal(ray, shading);
        }
        Some(rec)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
