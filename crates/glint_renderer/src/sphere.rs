//! Sphere primitive.

use crate::geometry::{Geometry, GeometryError, HitRecord};
use glint_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be positive and finite; anything else is rejected at
    /// construction so that no degenerate primitive reaches the scene.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }

        Ok(Self { center, radius })
    }

    /// Center of the sphere.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Geometry for Sphere {
    fn hit(&self, ray: &Ray, range: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        // Zero-length direction would divide the root by ~0
        if a < f32::EPSILON {
            return None;
        }

        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Near root only; the far root is never reported, so a ray starting
        // inside the sphere sees no hit from it.
        let t = (h - discriminant.sqrt()) / a;
        if !range.contains(t) {
            return None;
        }

        let point = ray.at(t);
        let normal = (point - self.center) / self.radius;

        Some(HitRecord::new(point, normal, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_head_on() {
        // From (0, 0, 5r) toward the origin: enters at distance 5r - r = 4r.
        let r = 2.0;
        let sphere = Sphere::new(Vec3::ZERO, r).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0 * r), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.0, f32::INFINITY))
            .expect("ray aimed at sphere center must hit");

        assert!((rec.t - 4.0 * r).abs() < 1e-4);
        assert!((rec.normal - Vec3::Z).length() < 1e-4);
        assert!((rec.point - Vec3::new(0.0, 0.0, r)).length() < 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5).unwrap();

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::new(0.0, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_interval_bounds_inclusive() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        // Geometric hit at t = 4

        // Exact bounds are accepted on both ends
        assert!(sphere.hit(&ray, Interval::new(4.0, 10.0)).is_some());
        assert!(sphere.hit(&ray, Interval::new(0.0, 4.0)).is_some());

        // Strictly outside on either side is rejected
        assert!(sphere.hit(&ray, Interval::new(4.1, 10.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(0.0, 3.9)).is_none());
    }

    #[test]
    fn test_sphere_no_far_root() {
        // Ray starting at the center: the near root is behind the origin and
        // the far root is never reported.
        let sphere = Sphere::new(Vec3::ZERO, 1.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(sphere.hit(&ray, Interval::new(0.0, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_degenerate_direction() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

        assert!(sphere.hit(&ray, Interval::new(0.0, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0),
            Err(GeometryError::InvalidRadius(0.0))
        );
        assert_eq!(
            Sphere::new(Vec3::ZERO, -1.0),
            Err(GeometryError::InvalidRadius(-1.0))
        );
        assert!(Sphere::new(Vec3::ZERO, f32::NAN).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::INFINITY).is_err());
    }
}
