//! Scene description types for Prism.
//!
//! This module defines what a scene file contains: render settings, the
//! camera pose, materials, point lights and primitives. The types are plain
//! data; the renderer turns a validated [`SceneDescription`] into its own
//! intersectable representation.

use std::collections::BTreeMap;

use prism_math::{Color, Vector3};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SceneError;

/// Phong-style surface description with specular transport coefficients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse color (RGB, linear, may exceed 1 for HDR)
    pub color: Color,

    /// Ambient coefficient (0-1)
    pub ambient: f64,

    /// Diffuse coefficient (0-1)
    pub diffuse: f64,

    /// Specular coefficient (0-1)
    pub specular: f64,

    /// Phong exponent for the specular highlight
    pub shininess: f64,

    /// Share of a mirror-reflected ray added to the color (0-1)
    pub reflectivity: f64,

    /// Share of a refracted ray added to the color (0-1)
    pub transparency: f64,

    /// Index of refraction of the material's interior
    pub ior: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5), // Grey default
            ambient: 1.0,
            diffuse: 1.0,
            specular: 0.0,
            shininess: 32.0,
            reflectivity: 0.0,
            transparency: 0.0,
            ior: 1.0,
        }
    }
}

impl Material {
    /// Create a matte material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the local shading coefficients.
    pub fn with_phong(mut self, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    /// Set the mirror reflection coefficient.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the transmission coefficient and index of refraction.
    pub fn with_transparency(mut self, transparency: f64, ior: f64) -> Self {
        self.transparency = transparency;
        self.ior = ior;
        self
    }

    /// Check every coefficient is in range.
    pub fn validate(&self) -> Result<(), SceneError> {
        check_color("material.color", self.color)?;

        for (name, value) in [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("reflectivity", self.reflectivity),
            ("transparency", self.transparency),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SceneError::CoefficientOutOfRange { name, value });
            }
        }

        if !self.shininess.is_finite() || self.shininess < 0.0 {
            return Err(SceneError::InvalidShininess(self.shininess));
        }
        if !self.ior.is_finite() || self.ior <= 0.0 {
            return Err(SceneError::InvalidIor(self.ior));
        }

        Ok(())
    }
}

/// A point light. Emits `intensity` (RGB) equally in all directions, no falloff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vector3,
    #[serde(deserialize_with = "scalar_or_rgb")]
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vector3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// A white light of the given strength.
    pub fn white(position: Vector3, intensity: f64) -> Self {
        Self::new(position, Color::splat(intensity))
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        check_finite("light.position", self.position)?;
        check_color("light.intensity", self.intensity)
    }
}

/// Pinhole camera pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    /// Camera position
    pub eye: Vector3,
    /// Point the camera looks at
    pub target: Vector3,
    /// Approximate up direction; re-orthogonalized against the view direction
    pub up: Vector3,
    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: Vector3::ZERO,
            target: Vector3::NEG_Z,
            up: Vector3::Y,
            fov: 90.0,
        }
    }
}

impl CameraOptions {
    pub fn new(eye: Vector3, target: Vector3) -> Self {
        Self {
            eye,
            target,
            ..Default::default()
        }
    }

    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = up;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        check_finite("camera.eye", self.eye)?;
        check_finite("camera.target", self.target)?;
        check_finite("camera.up", self.up)?;
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::InvalidFov(self.fov));
        }
        Ok(())
    }
}

/// Render configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum number of reflection/refraction bounces
    pub max_depth: u32,
    /// Display gamma applied after tone mapping
    pub gamma: f64,
    /// Acne epsilon: minimum hit distance and surface offset for secondary rays
    pub epsilon: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: 3,
            gamma: 2.2,
            epsilon: 1e-6,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(SceneError::InvalidGamma(self.gamma));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SceneError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

/// A material given inline or by name from the scene's material table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    Named(String),
    Inline(Material),
}

impl Default for MaterialRef {
    fn default() -> Self {
        MaterialRef::Inline(Material::default())
    }
}

impl From<Material> for MaterialRef {
    fn from(material: Material) -> Self {
        MaterialRef::Inline(material)
    }
}

/// A primitive as written in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDesc {
    Sphere {
        center: Vector3,
        radius: f64,
        #[serde(default)]
        material: MaterialRef,
    },
    Triangle {
        vertices: [Vector3; 3],
        /// Per-vertex shading normals
        #[serde(default)]
        normals: Option<[Vector3; 3]>,
        #[serde(default)]
        material: MaterialRef,
    },
    /// Indexed triangle mesh, expanded to triangles by the renderer.
    Mesh {
        positions: Vec<Vector3>,
        indices: Vec<u32>,
        #[serde(default)]
        normals: Option<Vec<Vector3>>,
        /// Interpolate vertex normals (computed when missing) instead of flat shading
        #[serde(default)]
        smooth: bool,
        #[serde(default)]
        material: MaterialRef,
    },
}

impl PrimitiveDesc {
    pub fn material(&self) -> &MaterialRef {
        match self {
            PrimitiveDesc::Sphere { material, .. }
            | PrimitiveDesc::Triangle { material, .. }
            | PrimitiveDesc::Mesh { material, .. } => material,
        }
    }
}

/// Everything needed to render one image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub settings: RenderSettings,
    pub camera: CameraOptions,
    /// Ambient light intensity (RGB)
    #[serde(deserialize_with = "scalar_or_rgb")]
    pub ambient: Color,
    /// Color of rays that escape the scene
    #[serde(deserialize_with = "scalar_or_rgb")]
    pub background: Color,
    pub lights: Vec<PointLight>,
    pub primitives: Vec<PrimitiveDesc>,
    /// Named materials referenced by primitives
    pub materials: BTreeMap<String, Material>,
}

impl SceneDescription {
    /// Look up a primitive's material.
    pub fn resolve_material(&self, material: &MaterialRef) -> Result<Material, SceneError> {
        match material {
            MaterialRef::Inline(material) => Ok(material.clone()),
            MaterialRef::Named(name) => self
                .materials
                .get(name)
                .cloned()
                .ok_or_else(|| SceneError::UnknownMaterial(name.clone())),
        }
    }

    /// Validate the scene-wide settings, lights and material references.
    ///
    /// Geometry is checked again by the renderer's constructors.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.settings.validate()?;
        self.camera.validate()?;
        check_color("ambient", self.ambient)?;
        check_color("background", self.background)?;

        for light in &self.lights {
            light.validate()?;
        }
        for material in self.materials.values() {
            material.validate()?;
        }
        for primitive in &self.primitives {
            self.resolve_material(primitive.material())?.validate()?;
        }

        Ok(())
    }
}

fn check_finite(name: &'static str, v: Vector3) -> Result<(), SceneError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFiniteVector { name })
    }
}

/// Reject colors with a negative or non-finite channel.
pub fn check_color(name: &'static str, c: Color) -> Result<(), SceneError> {
    if c.is_finite() && c.min_element() >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidColor { name })
    }
}

/// Accept either a single number (grey) or an `[r, g, b]` triple.
fn scalar_or_rgb<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Intensity {
        Scalar(f64),
        Rgb(Color),
    }

    Ok(match Intensity::deserialize(deserializer)? {
        Intensity::Scalar(s) => Color::splat(s),
        Intensity::Rgb(c) => c,
    })
}
