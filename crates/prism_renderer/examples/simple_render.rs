//! Simple Whitted example.
//!
//! Builds a small scene in code (a mirror sphere, a glass sphere and a
//! matte floor) and saves it as PNG.

use prism_core::{CameraOptions, Material, PointLight, RenderSettings, SceneError};
use prism_renderer::{postprocess, render, Color, Scene, Sphere, Triangle, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    let start = std::time::Instant::now();
    let mut image = render(&scene);
    postprocess(&mut image, scene.gamma);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    image.to_rgb8().save(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, SceneError> {
    let settings = RenderSettings::default()
        .with_resolution(800, 450)
        .with_max_depth(5);
    let camera = CameraOptions::new(Vector3::new(0.0, 1.0, 4.0), Vector3::new(0.0, 0.5, -3.0))
        .with_fov(60.0);

    let mut scene = Scene::new(&settings, &camera)?
        .with_ambient(Color::splat(0.1))?
        .with_background(Color::new(0.5, 0.7, 1.0))?;

    // Floor: two large triangles
    let floor = Material::new(Color::new(0.8, 0.8, 0.8)).with_phong(0.3, 0.8, 0.0, 1.0);
    let corners = [
        Vector3::new(-20.0, 0.0, 20.0),
        Vector3::new(20.0, 0.0, 20.0),
        Vector3::new(20.0, 0.0, -20.0),
        Vector3::new(-20.0, 0.0, -20.0),
    ];
    scene.add_primitive(Triangle::new(corners[0], corners[1], corners[2], floor.clone()))?;
    scene.add_primitive(Triangle::new(corners[0], corners[2], corners[3], floor))?;

    let mirror = Material::new(Color::new(0.9, 0.9, 0.9))
        .with_phong(0.05, 0.1, 0.8, 200.0)
        .with_reflectivity(0.8);
    scene.add_primitive(Sphere::new(Vector3::new(-1.2, 1.0, -3.0), 1.0, mirror)?)?;

    let glass = Material::new(Color::ONE)
        .with_phong(0.0, 0.05, 0.9, 300.0)
        .with_transparency(0.9, 1.5);
    scene.add_primitive(Sphere::new(Vector3::new(1.2, 1.0, -2.5), 1.0, glass)?)?;

    let red = Material::new(Color::new(0.8, 0.1, 0.1)).with_phong(0.3, 0.9, 0.4, 32.0);
    scene.add_primitive(Sphere::new(Vector3::new(0.3, 0.5, -5.0), 0.5, red)?)?;

    scene.add_light(PointLight::white(Vector3::new(5.0, 8.0, 2.0), 0.9))?;
    scene.add_light(PointLight::new(
        Vector3::new(-6.0, 4.0, 0.0),
        Color::new(0.2, 0.2, 0.35),
    ))?;

    Ok(scene)
}
