//! Single-frame render loop and framebuffer.

use glint_math::Interval;

use crate::camera::Camera;
use crate::material::Color;
use crate::scene::{Scene, CHANNEL_MAX};

/// Convert a shaded color (0-255 scale per channel) to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = color.x.clamp(0.0, CHANNEL_MAX) as u8;
    let g = color.y.clamp(0.0, CHANNEL_MAX) as u8;
    let b = color.z.clamp(0.0, CHANNEL_MAX) as u8;
    [r, g, b, 255]
}

/// Compute the color of a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32) -> Color {
    let ray = camera.get_ray(x, y);
    scene.shade(&ray, Interval::new(0.0, f32::INFINITY))
}

/// Framebuffer for storing render output, row-major from the top-left.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the scene to a framebuffer, one primary ray per pixel.
///
/// Deliberately single-threaded: every pixel's recursion tree runs to
/// completion before the next starts.
pub fn render(camera: &Camera, scene: &Scene) -> Framebuffer {
    log::info!(
        "rendering {}x{} ({} surfaces, {} lights)",
        camera.image_width,
        camera.image_height,
        scene.primitive_count(),
        scene.light_count()
    );

    let mut image = Framebuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y);
            image.set(x, y, color);
        }
    }

    image
}
