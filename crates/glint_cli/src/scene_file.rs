//! JSON scene description.
//!
//! A scene file carries the image size, camera, background, point lights,
//! and a list of tagged surface descriptions, each with its material:
//!
//! ```json
//! {
//!   "image": { "width": 800, "height": 800 },
//!   "camera": { "look_from": [0, 100, 0], "look_at": [0, 0, -600], "vfov": 28.0, "focus_dist": 400 },
//!   "lights": [[-600, 1000, 0]],
//!   "surfaces": [
//!     { "type": "sphere", "center": [0, 0, -500], "radius": 20,
//!       "material": { "diffuse": [255, 0, 0], "specular": [180, 180, 180] } },
//!     { "type": "plane", "normal": [0, 1, 0], "point": [0, -20, 0],
//!       "material": { "diffuse": [80, 80, 80], "mirror": 0.3 } }
//!   ]
//! }
//! ```

use anyhow::Result;
use serde::Deserialize;

use glint_renderer::{Camera, Material, Plane, Scene, Sphere, Vec3, DEFAULT_BACKGROUND};

/// Top-level scene description.
#[derive(Debug, Deserialize)]
pub struct SceneFile {
    pub image: ImageDesc,
    pub camera: CameraDesc,
    #[serde(default)]
    pub background: Option<[f32; 3]>,
    #[serde(default)]
    pub lights: Vec<[f32; 3]>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceDesc>,
}

/// Output image dimensions.
#[derive(Debug, Deserialize)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
}

/// Pinhole camera parameters.
#[derive(Debug, Deserialize)]
pub struct CameraDesc {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    #[serde(default = "default_vup")]
    pub vup: [f32; 3],
    /// Vertical field of view in degrees
    pub vfov: f32,
    #[serde(default = "default_focus_dist")]
    pub focus_dist: f32,
}

fn default_vup() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_focus_dist() -> f32 {
    1.0
}

/// A surface plus the material it is shaded with.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SurfaceDesc {
    Sphere {
        center: [f32; 3],
        radius: f32,
        material: MaterialDesc,
    },
    Plane {
        normal: [f32; 3],
        point: [f32; 3],
        material: MaterialDesc,
    },
}

/// Blinn-Phong coefficients, 0-255 scale for the color channels.
#[derive(Debug, Deserialize)]
pub struct MaterialDesc {
    pub diffuse: [f32; 3],
    #[serde(default)]
    pub specular: [f32; 3],
    #[serde(default)]
    pub mirror: f32,
}

impl MaterialDesc {
    fn build(&self) -> Material {
        Material::new(
            Vec3::from_array(self.diffuse),
            Vec3::from_array(self.specular),
            self.mirror,
        )
    }
}

impl SceneFile {
    /// Parse a scene description from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the runtime scene and camera.
    ///
    /// Degenerate surface parameters (non-positive radius, zero-length
    /// normal) are rejected here, before anything is rendered.
    pub fn build(&self) -> Result<(Scene, Camera)> {
        let background = self
            .background
            .map(Vec3::from_array)
            .unwrap_or(DEFAULT_BACKGROUND);
        let mut scene = Scene::new(background);

        for &light in &self.lights {
            scene.add_point_light(Vec3::from_array(light));
        }

        for surface in &self.surfaces {
            match surface {
                SurfaceDesc::Sphere {
                    center,
                    radius,
                    material,
                } => {
                    let sphere = Sphere::new(Vec3::from_array(*center), *radius)?;
                    scene.add_geometry(sphere, material.build());
                }
                SurfaceDesc::Plane {
                    normal,
                    point,
                    material,
                } => {
                    let plane = Plane::new(Vec3::from_array(*normal), Vec3::from_array(*point))?;
                    scene.add_geometry(plane, material.build());
                }
            }
        }

        let mut camera = Camera::new()
            .with_resolution(self.image.width, self.image.height)
            .with_position(
                Vec3::from_array(self.camera.look_from),
                Vec3::from_array(self.camera.look_at),
                Vec3::from_array(self.camera.vup),
            )
            .with_lens(self.camera.vfov, self.camera.focus_dist);
        camera.initialize();

        Ok((scene, camera))
    }
}
