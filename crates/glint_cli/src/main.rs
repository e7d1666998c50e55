//! Renders a single frame to a PNG file.
//!
//! Usage: `glint_cli [scene.json] [output.png]`
//!
//! With no scene file, a built-in demo scene is rendered.

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use glint_renderer::{render, Camera, Color, Material, Plane, Scene, Sphere, Vec3};

mod scene_file;

use scene_file::SceneFile;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let scene_path = args.next();
    let output_path = args.next().unwrap_or_else(|| "render.png".to_string());

    let (scene, camera) = match &scene_path {
        Some(path) => {
            log::info!("loading scene from {}", path);
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read scene file {}", path))?;
            SceneFile::from_json(&text)
                .with_context(|| format!("failed to parse scene file {}", path))?
                .build()?
        }
        None => {
            log::info!("no scene file given, rendering the built-in demo scene");
            demo_scene()?
        }
    };

    let start = Instant::now();
    let image = render(&camera, &scene);
    log::info!("rendered in {:.2?}", start.elapsed());

    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba())
        .context("framebuffer size mismatch")?;
    buffer
        .save(&output_path)
        .with_context(|| format!("failed to write {}", output_path))?;
    log::info!("saved {}", output_path);

    Ok(())
}

/// The demo scene: a red and a blue sphere over a slightly reflective gray
/// floor, lit by two point lights high to either side.
fn demo_scene() -> Result<(Scene, Camera)> {
    let mut scene = Scene::default();

    scene.add_point_light(Vec3::new(-600.0, 1000.0, 0.0));
    scene.add_point_light(Vec3::new(600.0, 1000.0, 0.0));

    scene.add_geometry(
        Sphere::new(Vec3::new(0.0, 0.0, -500.0), 20.0)?,
        Material::new(Color::new(255.0, 0.0, 0.0), Color::splat(180.0), 0.0),
    );
    scene.add_geometry(
        Sphere::new(Vec3::new(40.0, 0.0, -530.0), 20.0)?,
        Material::new(Color::new(0.0, 0.0, 190.0), Color::splat(180.0), 0.0),
    );
    scene.add_geometry(
        Plane::new(Vec3::Y, Vec3::new(0.0, -20.0, 0.0))?,
        Material::new(Color::splat(80.0), Color::ZERO, 0.3),
    );

    // A 200x200 image plane at distance 400 from the eye
    let vfov = 2.0 * (100.0_f32 / 400.0).atan().to_degrees();
    let mut camera = Camera::new()
        .with_resolution(800, 800)
        .with_position(
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::new(0.0, 0.0, -600.0),
            Vec3::Y,
        )
        .with_lens(vfov, 400.0);
    camera.initialize();

    Ok((scene, camera))
}
