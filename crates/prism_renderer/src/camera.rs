//! Pinhole camera for primary ray generation.

use prism_core::{CameraOptions, RenderSettings, SceneError};
use prism_math::{look_at, DMat4, Ray, Vector3};

/// Camera generating one primary ray per pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    eye: Vector3,
    /// Camera-to-world transform (columns: right, up, forward, eye)
    cam_to_world: DMat4,
    /// tan(fov / 2)
    scale: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Build the camera for the given pose and image resolution.
    pub fn new(options: &CameraOptions, settings: &RenderSettings) -> Result<Self, SceneError> {
        options.validate()?;
        settings.validate()?;

        let cam_to_world = look_at(options.eye, options.target, options.up)?;

        Ok(Self {
            image_width: settings.width,
            image_height: settings.height,
            eye: options.eye,
            cam_to_world,
            scale: (options.fov.to_radians() / 2.0).tan(),
            aspect_ratio: settings.aspect_ratio(),
        })
    }

    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    pub fn cam_to_world(&self) -> DMat4 {
        self.cam_to_world
    }

    /// Screen-plane coordinates of the center of pixel (x, y), one unit in front of the eye.
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn ndc(&self, x: u32, y: u32) -> (f64, f64) {
        let ndc_x = (2.0 * (x as f64 + 0.5) / self.image_width as f64 - 1.0)
            * self.aspect_ratio
            * self.scale;
        let ndc_y = (1.0 - 2.0 * (y as f64 + 0.5) / self.image_height as f64) * self.scale;
        (ndc_x, ndc_y)
    }

    /// Generate the primary ray through the center of pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let (ndc_x, ndc_y) = self.ndc(x, y);
        let target = self
            .cam_to_world
            .transform_point3(Vector3::new(ndc_x, ndc_y, 1.0));

        // The forward component is always 1, so the direction is never zero
        Ray::new(self.eye, (target - self.eye).normalize())
    }
}
