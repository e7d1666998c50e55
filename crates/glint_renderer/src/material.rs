//! Blinn-Phong material coefficients.

use glint_math::Vec3;

/// Color type alias (RGB values on a 0-255 scale)
pub type Color = Vec3;

/// Per-surface reflectance coefficients.
///
/// - `diffuse` (kd): diffuse reflectance per channel, 0-255 scale
/// - `specular` (ks): specular reflectance per channel
/// - `mirror` (km): fraction of ray energy re-traced as a perfect reflection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub mirror: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(diffuse: Color, specular: Color, mirror: f32) -> Self {
        Self {
            diffuse,
            specular,
            mirror,
        }
    }

    /// A matte material: diffuse only, no highlight, no reflection.
    pub fn matte(diffuse: Color) -> Self {
        Self::new(diffuse, Color::ZERO, 0.0)
    }

    /// A perfect mirror: all ray energy goes into the reflection bounce.
    pub fn full_mirror() -> Self {
        Self::new(Color::ZERO, Color::ZERO, 1.0)
    }
}
