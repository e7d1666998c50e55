//! Scene: surface list, point lights, and the recursive shading algorithm.

use glint_math::{Interval, Ray, Vec3};

use crate::geometry::{Geometry, HitRecord};
use crate::material::{Color, Material};

/// Number of reflection bounces evaluated beyond the primary ray.
pub const MAX_REFLECTION_DEPTH: u32 = 2;

/// Flat ambient coefficient applied to the diffuse color at every hit.
pub const AMBIENT: f32 = 0.4;

/// Blinn-Phong shininess exponent.
pub const SHININESS: f32 = 100.0;

/// Minimum t for shadow rays, so a surface does not shadow itself.
pub const SHADOW_BIAS: f32 = 1e-4;

/// Minimum t for reflection rays.
pub const REFLECTION_BIAS: f32 = 1e-2;

/// Upper bound of a color channel.
pub const CHANNEL_MAX: f32 = 255.0;

/// Background color returned when a primary ray hits nothing.
pub const DEFAULT_BACKGROUND: Color = Color::new(20.0, 20.0, 20.0);

/// A geometry instance paired with the material it is shaded with.
struct Primitive {
    geometry: Box<dyn Geometry>,
    material: Material,
}

/// The renderable scene.
///
/// Built once before rendering; read-only while rays are traced. Surfaces
/// and lights are kept in insertion order, which is stable within a render.
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Vec3>,
    background: Color,
}

impl Scene {
    /// Create an empty scene with the given background color.
    pub fn new(background: Color) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            background,
        }
    }

    /// Add a point light at the given world-space position.
    pub fn add_point_light(&mut self, position: Vec3) {
        self.lights.push(position);
    }

    /// Add a surface together with its material.
    ///
    /// Taking the material here, rather than as a separate attach step,
    /// makes a material-less surface unrepresentable.
    pub fn add_geometry<G: Geometry + 'static>(&mut self, geometry: G, material: Material) {
        self.primitives.push(Primitive {
            geometry: Box::new(geometry),
            material,
        });
    }

    /// Background color for primary rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of surfaces in the scene.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Number of point lights in the scene.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Compute the color seen along a ray.
    ///
    /// This is the shading entry point; the driver calls it once per primary
    /// ray with `range = [0, +inf)`. Returned components are in
    /// `[0, CHANNEL_MAX]`.
    pub fn shade(&self, ray: &Ray, range: Interval) -> Color {
        self.shade_rec(ray, range, 0)
    }

    /// Recursive worker behind [`shade`](Self::shade).
    ///
    /// `depth` counts reflection bounces: 0 for the primary ray. Keeping it
    /// a required parameter of the private entry point means no call site
    /// can accidentally reset it.
    fn shade_rec(&self, ray: &Ray, range: Interval, depth: u32) -> Color {
        if depth == MAX_REFLECTION_DEPTH {
            return Color::ZERO;
        }

        let Some((material, hit)) = self.closest_hit(ray, range) else {
            // A missed secondary ray contributes no light.
            if depth == 0 {
                return self.background;
            }
            return Color::ZERO;
        };

        let mut color = AMBIENT * material.diffuse;

        for &light in &self.lights {
            // Unnormalized direction is fine for the occlusion test.
            let shadow_dir = light - hit.point;
            let shadow_ray = Ray::new(hit.point, shadow_dir);

            // A blocked light ends the whole loop: lights after it in the
            // list contribute nothing at this point either.
            if self.occluded(&shadow_ray) {
                break;
            }

            let light_vec = shadow_dir.normalize();
            let view_vec = (ray.origin() - hit.point).normalize();
            let half_vec = (light_vec + view_vec).normalize();

            let diffuse = material.diffuse * hit.normal.dot(light_vec).max(0.0);
            // Clamp before powf: a negative base with this exponent is NaN.
            let specular = material.specular * hit.normal.dot(half_vec).max(0.0).powf(SHININESS);
            color += diffuse + specular;
        }

        let d = ray.direction().normalize();
        let reflected = d - 2.0 * d.dot(hit.normal) * hit.normal;
        let reflection_ray = Ray::new(hit.point, reflected);
        color += material.mirror
            * self.shade_rec(
                &reflection_ray,
                Interval::new(REFLECTION_BIAS, f32::INFINITY),
                depth + 1,
            );

        color.clamp(Vec3::ZERO, Vec3::splat(CHANNEL_MAX))
    }

    /// Find the closest intersection along the ray within `range`.
    ///
    /// The search interval shrinks as closer hits are found, so a later
    /// surface can only replace the current closest hit, never a farther
    /// one.
    fn closest_hit(&self, ray: &Ray, range: Interval) -> Option<(&Material, HitRecord)> {
        let mut narrowed = range;
        let mut closest = None;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.geometry.hit(ray, narrowed) {
                narrowed = narrowed.with_max(hit.t);
                closest = Some((&primitive.material, hit));
            }
        }

        closest
    }

    /// True if any surface blocks the ray from `SHADOW_BIAS` onward.
    ///
    /// The upper bound is open-ended, so a surface beyond the light still
    /// counts as an occluder.
    fn occluded(&self, ray: &Ray) -> bool {
        let range = Interval::new(SHADOW_BIAS, f32::INFINITY);
        self.primitives
            .iter()
            .any(|primitive| primitive.geometry.hit(ray, range).is_some())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}
