//! Renderable scene and the recursive Whitted tracer.
//!
//! A [`Scene`] owns its primitives, lights and camera. It is built once,
//! validated up front, and is read-only (and shared across threads) while
//! rendering.

use prism_core::{
    check_color, CameraOptions, Material, Mesh, PointLight, PrimitiveDesc, RenderSettings,
    SceneDescription, SceneError,
};
use prism_math::{reflect, refract, Color, Interval, Ray, Vector3};

use crate::{Camera, HitRecord, Intersectable, Primitive, Sphere, Triangle};

/// A scene ready for rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<PointLight>,
    pub camera: Camera,
    /// Ambient light intensity (RGB)
    pub ambient: Color,
    /// Color returned by rays that leave the scene
    pub background: Color,
    pub max_depth: u32,
    /// Acne epsilon: minimum hit distance and surface offset for spawned rays
    pub epsilon: f64,
    pub gamma: f64,
}

impl Scene {
    /// Create an empty scene with a black background and no ambient light.
    pub fn new(settings: &RenderSettings, camera: &CameraOptions) -> Result<Self, SceneError> {
        let camera = Camera::new(camera, settings)?;

        Ok(Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            camera,
            ambient: Color::ZERO,
            background: Color::ZERO,
            max_depth: settings.max_depth,
            epsilon: settings.epsilon,
            gamma: settings.gamma,
        })
    }

    /// Set the ambient light intensity. Channels must be finite and non-negative.
    pub fn with_ambient(mut self, ambient: Color) -> Result<Self, SceneError> {
        check_color("ambient", ambient)?;
        self.ambient = ambient;
        Ok(self)
    }

    /// Set the background color. Channels must be finite and non-negative.
    pub fn with_background(mut self, background: Color) -> Result<Self, SceneError> {
        check_color("background", background)?;
        self.background = background;
        Ok(self)
    }

    /// Build a scene from a description, rejecting any invalid input.
    pub fn from_description(desc: &SceneDescription) -> Result<Self, SceneError> {
        desc.validate()?;

        let mut scene = Scene::new(&desc.settings, &desc.camera)?
            .with_ambient(desc.ambient)?
            .with_background(desc.background)?;

        for light in &desc.lights {
            scene.add_light(light.clone())?;
        }
        for primitive in &desc.primitives {
            let material = desc.resolve_material(primitive.material())?;
            scene.add_description(primitive, material)?;
        }

        log::debug!(
            "Built scene: {} primitives, {} lights, max depth {}",
            scene.primitives.len(),
            scene.lights.len(),
            scene.max_depth
        );
        Ok(scene)
    }

    fn add_description(
        &mut self,
        primitive: &PrimitiveDesc,
        material: Material,
    ) -> Result<(), SceneError> {
        match primitive {
            PrimitiveDesc::Sphere { center, radius, .. } => {
                self.add_primitive(Sphere::new(*center, *radius, material)?)
            }
            PrimitiveDesc::Triangle {
                vertices: [v0, v1, v2],
                normals,
                ..
            } => {
                let triangle = match normals {
                    Some(normals) => {
                        Triangle::with_vertex_normals(*v0, *v1, *v2, *normals, material)?
                    }
                    None => Triangle::new(*v0, *v1, *v2, material),
                };
                self.add_primitive(triangle)
            }
            PrimitiveDesc::Mesh {
                positions,
                indices,
                normals,
                smooth,
                ..
            } => {
                let mut mesh = Mesh::new(positions.clone(), indices.clone(), normals.clone())?;
                self.add_mesh(&mut mesh, *smooth, &material)
            }
        }
    }

    /// Add a primitive. Its material is validated first.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) -> Result<(), SceneError> {
        let primitive = primitive.into();
        primitive.material().validate()?;
        if let Primitive::Triangle(triangle) = &primitive {
            if triangle.vertices().iter().any(|v| !v.is_finite()) {
                return Err(SceneError::NonFiniteVector {
                    name: "triangle.vertices",
                });
            }
        }

        self.primitives.push(primitive);
        Ok(())
    }

    /// Add every triangle of a mesh, interpolating vertex normals when `smooth`.
    pub fn add_mesh(
        &mut self,
        mesh: &mut Mesh,
        smooth: bool,
        material: &Material,
    ) -> Result<(), SceneError> {
        if !smooth {
            for [v0, v1, v2] in mesh.triangle_vertices() {
                self.add_primitive(Triangle::new(v0, v1, v2, material.clone()))?;
            }
            return Ok(());
        }

        mesh.ensure_normals();
        let normals: Vec<[Vector3; 3]> = match mesh.triangle_normals() {
            Some(normals) => normals.collect(),
            None => Vec::new(),
        };
        for ([v0, v1, v2], n) in mesh.triangle_vertices().zip(normals) {
            self.add_primitive(Triangle::with_vertex_normals(
                v0,
                v1,
                v2,
                n,
                material.clone(),
            )?)?;
        }
        Ok(())
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) -> Result<(), SceneError> {
        light.validate()?;
        self.lights.push(light);
        Ok(())
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Nearest intersection along `ray` within `ray_t`.
    ///
    /// Linear scan over every primitive. Each hit shrinks the search range,
    /// so on equal distances the primitive added first wins.
    pub fn closest_hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut range = ray_t;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray, range) {
                range = range.with_max(hit.t);
                closest = Some(hit);
            }
        }

        closest
    }

    /// Whether anything intersects `ray` within `ray_t`. Stops at the first hit.
    pub fn is_occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.intersect(ray, ray_t).is_some())
    }

    /// Whether a light at `light_position` reaches `point` unobstructed.
    ///
    /// The shadow ray starts one epsilon off the surface along `normal`, and
    /// only occluders strictly between the point and the light count.
    pub fn is_point_illuminated(
        &self,
        point: Vector3,
        normal: Vector3,
        light_position: Vector3,
    ) -> bool {
        let to_light = light_position - point;
        let distance = to_light.length();
        let Some(direction) = to_light.try_normalize() else {
            // Light sits on the surface
            return true;
        };

        let shadow_ray = Ray::new(point + self.epsilon * normal, direction);
        !self.is_occluded(&shadow_ray, Interval::new(self.epsilon, distance))
    }

    /// Local Phong shading at a hit: ambient plus diffuse and specular from every visible light.
    ///
    /// The result is unclamped.
    pub fn local_intensity(&self, ray: &Ray, hit: &HitRecord<'_>) -> Color {
        let material = hit.material;
        let view = -ray.direction;
        let mut intensity = material.ambient * material.color * self.ambient;

        for light in &self.lights {
            if !self.is_point_illuminated(hit.point, hit.normal, light.position) {
                continue;
            }
            let Some(to_light) = (light.position - hit.point).try_normalize() else {
                continue;
            };

            let n_dot_l = hit.normal.dot(to_light).max(0.0);
            intensity += material.diffuse * material.color * light.intensity * n_dot_l;

            // No highlight when the mirror direction faces away, even for shininess 0
            let r_dot_v = reflect(-to_light, hit.normal).dot(view);
            if r_dot_v > 0.0 {
                intensity +=
                    material.specular * light.intensity * r_dot_v.powf(material.shininess);
            }
        }

        intensity
    }

    /// Color seen along `ray` with `depth` bounces left.
    ///
    /// Depth 0 returns the background without testing the scene. Each
    /// reflection or refraction recurses with `depth - 1`.
    pub fn trace_ray(&self, ray: &Ray, depth: u32) -> Color {
        if depth == 0 {
            return self.background;
        }

        let Some(hit) = self.closest_hit(ray, Interval::beyond(self.epsilon)) else {
            return self.background;
        };

        let material = hit.material;
        let mut color = self.local_intensity(ray, &hit);

        if material.reflectivity > 0.0 {
            color += material.reflectivity * self.trace_reflection(ray, &hit, depth);
        }
        if material.transparency > 0.0 {
            color += material.transparency * self.trace_refraction(ray, &hit, depth);
        }

        color
    }

    /// Mirror bounce, leaving from just above the surface.
    fn trace_reflection(&self, ray: &Ray, hit: &HitRecord<'_>, depth: u32) -> Color {
        let reflected = Ray::new(
            hit.point + self.epsilon * hit.normal,
            reflect(ray.direction, hit.normal),
        );
        self.trace_ray(&reflected, depth - 1)
    }

    /// Transmitted ray, leaving from just below the surface.
    ///
    /// A front-face hit enters the material (ratio 1 / ior); a back-face hit
    /// leaves it (ratio ior), with the normal already flipped to face the ray.
    /// Total internal reflection sends the transmitted share along the mirror
    /// direction instead.
    fn trace_refraction(&self, ray: &Ray, hit: &HitRecord<'_>, depth: u32) -> Color {
        let ior = hit.material.ior;
        let eta_ratio = if hit.front_face { 1.0 / ior } else { ior };

        match refract(ray.direction, hit.normal, eta_ratio) {
            Some(direction) => {
                let refracted = Ray::new(hit.point - self.epsilon * hit.normal, direction);
                self.trace_ray(&refracted, depth - 1)
            }
            None => self.trace_reflection(ray, hit, depth),
        }
    }
}
