//! Infinite plane primitive.

use crate::geometry::{Geometry, GeometryError, HitRecord};
use glint_math::{Interval, Ray, Vec3};

/// An infinite plane, defined by a unit normal and a reference point on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
}

impl Plane {
    /// Create a new plane.
    ///
    /// The normal may be given at any nonzero finite length; it is stored
    /// normalized. A zero or non-finite normal is rejected at construction.
    pub fn new(normal: Vec3, point: Vec3) -> Result<Self, GeometryError> {
        if !normal.is_finite() || normal.length_squared() < f32::EPSILON {
            return Err(GeometryError::DegenerateNormal);
        }

        Ok(Self {
            normal: normal.normalize(),
            point,
        })
    }

    /// Unit normal of the plane.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Reference point on the plane.
    pub fn point(&self) -> Vec3 {
        self.point
    }
}

impl Geometry for Plane {
    fn hit(&self, ray: &Ray, range: Interval) -> Option<HitRecord> {
        let denom = ray.direction().dot(self.normal);
        // Ray parallel (or near-parallel) to the plane
        if denom.abs() < f32::EPSILON {
            return None;
        }

        let t = (self.point.dot(self.normal) - ray.origin().dot(self.normal)) / denom;
        if !range.contains(t) {
            return None;
        }

        // The stored normal, never flipped toward the ray
        Some(HitRecord::new(ray.at(t), self.normal, t))
    }
}
