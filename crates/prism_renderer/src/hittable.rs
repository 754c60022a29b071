//! Intersectable trait and HitRecord for ray-primitive intersection.

use prism_core::Material;
use prism_math::{Interval, Ray, Vector3};

use crate::{Sphere, Triangle};

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub point: Vector3,
    /// Unit surface normal at the intersection (always points against the ray)
    pub normal: Vector3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material of the hit primitive
    pub material: &'a Material,
    /// Barycentric weights (w0, w1, w2) of the hit, for triangles
    pub barycentric: Option<Vector3>,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the ray parameter and the surface's outward normal.
    pub fn new(ray: &Ray, t: f64, outward_normal: Vector3, material: &'a Material) -> Self {
        let mut rec = Self {
            point: ray.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            material,
            barycentric: None,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Attach barycentric weights.
    pub fn with_barycentric(mut self, weights: Vector3) -> Self {
        self.barycentric = Some(weights);
        self
    }

    /// Replace the normal with an interpolated shading normal.
    ///
    /// `front_face` stays as decided by the geometric normal. The shading
    /// normal is flipped onto the same side as the stored normal, and if it
    /// would still point along the ray the geometric normal is kept, so
    /// offsets along the normal never cross the surface.
    pub fn with_shading_normal(mut self, ray: &Ray, shading_normal: Vector3) -> Self {
        let oriented = if shading_normal.dot(self.normal) < 0.0 {
            -shading_normal
        } else {
            shading_normal
        };
        if oriented.dot(ray.direction) < 0.0 {
            self.normal = oriented;
        }
        self
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vector3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction.dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Geometry a ray can be tested against.
pub trait Intersectable: Send + Sync {
    /// Nearest intersection with `ray` whose parameter lies strictly inside `ray_t`.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Material the surface is shaded with.
    fn material(&self) -> &Material;
}

/// The closed set of primitives a scene is built from.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Intersectable for Primitive {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray, ray_t),
            Primitive::Triangle(triangle) => triangle.intersect(ray, ray_t),
        }
    }

    fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Triangle(triangle) => triangle.material(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}
