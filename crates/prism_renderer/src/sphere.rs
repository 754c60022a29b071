//! Sphere primitive for ray tracing.

use prism_core::{Material, SceneError};
use prism_math::{solve_quadratic, Interval, Ray, Vector3};

use crate::hittable::{HitRecord, Intersectable};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and the material valid.
    pub fn new(center: Vector3, radius: f64, material: Material) -> Result<Self, SceneError> {
        if !center.is_finite() {
            return Err(SceneError::NonFiniteVector {
                name: "sphere.center",
            });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::NonPositiveRadius(radius));
        }
        material.validate()?;

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vector3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalize()
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let (t0, t1) = solve_quadratic(a, b, c)?;

        // Nearest root in range; the far root covers rays starting inside
        let t = if ray_t.surrounds(t0) {
            t0
        } else if ray_t.surrounds(t1) {
            t1
        } else {
            return None;
        };

        let point = ray.at(t);
        Some(HitRecord::new(ray, t, self.normal_at(point), &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn unit_sphere_at(center: Vector3) -> Sphere {
        Sphere::new(center, 1.0, Material::default()).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Vector3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vector3::ZERO, Vector3::NEG_Z);

        let rec = sphere.intersect(&ray, Interval::beyond(EPS)).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-9);
        assert!(rec.point.abs_diff_eq(Vector3::new(0.0, 0.0, -4.0), 1e-9));
        assert!(rec.normal.abs_diff_eq(Vector3::Z, 1e-9));
        assert!(rec.front_face);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vector3::new(0.0, 0.0, -5.0));

        // Ray pointing away from sphere
        let ray = Ray::new(Vector3::ZERO, Vector3::Y);
        assert!(sphere.intersect(&ray, Interval::beyond(EPS)).is_none());

        // Sphere entirely behind the origin
        let ray = Ray::new(Vector3::ZERO, Vector3::Z);
        assert!(sphere.intersect(&ray, Interval::beyond(EPS)).is_none());
    }

    #[test]
    fn test_sphere_tangent() {
        let sphere = unit_sphere_at(Vector3::new(0.0, 1.0, -5.0));
        let ray = Ray::new(Vector3::ZERO, Vector3::NEG_Z);

        let rec = sphere.intersect(&ray, Interval::beyond(EPS)).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_from_inside() {
        let sphere = unit_sphere_at(Vector3::ZERO);
        let ray = Ray::new(Vector3::ZERO, Vector3::X);

        let rec = sphere.intersect(&ray, Interval::beyond(EPS)).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-9);
        // Back face: normal flipped towards the center
        assert!(!rec.front_face);
        assert!(rec.normal.abs_diff_eq(Vector3::NEG_X, 1e-9));
    }

    #[test]
    fn test_sphere_ignores_hits_within_epsilon() {
        let sphere = unit_sphere_at(Vector3::new(0.0, 0.0, -5.0));
        // Starting on the near surface, heading in: the surface itself is skipped
        let ray = Ray::new(Vector3::new(0.0, 0.0, -4.0), Vector3::NEG_Z);

        let rec = sphere.intersect(&ray, Interval::beyond(EPS)).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_respects_max() {
        let sphere = unit_sphere_at(Vector3::new(0.0, 0.0, -5.0));
        let ray = Ray::new(Vector3::ZERO, Vector3::NEG_Z);

        assert!(sphere.intersect(&ray, Interval::new(EPS, 3.0)).is_none());
    }

    #[test]
    fn test_sphere_invalid_radius() {
        for radius in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                Sphere::new(Vector3::ZERO, radius, Material::default()),
                Err(SceneError::NonPositiveRadius(_))
            ));
        }
    }

    #[test]
    fn test_sphere_invalid_material() {
        let material = Material::default().with_transparency(1.2, 1.5);
        assert!(Sphere::new(Vector3::ZERO, 1.0, material).is_err());
    }
}
