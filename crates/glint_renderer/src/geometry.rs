//! Geometry trait and HitRecord for ray-surface intersection.

use glint_math::{Interval, Ray, Vec3};
use thiserror::Error;

/// Errors that can occur when constructing a primitive.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("plane normal must have nonzero finite length")]
    DegenerateNormal,
}

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// World-space point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection point.
    ///
    /// Oriented outward from the primitive's defining geometry, NOT flipped
    /// toward the incoming ray.
    pub normal: Vec3,
    /// Parameter t where the intersection occurs (point = origin + t * direction)
    pub t: f32,
}

impl HitRecord {
    /// Create a new hit record.
    pub fn new(point: Vec3, normal: Vec3, t: f32) -> Self {
        Self { point, normal, t }
    }
}

/// Trait for surfaces that can be intersected by rays.
pub trait Geometry: Send + Sync {
    /// Test if a ray hits this surface within the given closed interval.
    ///
    /// Both interval endpoints are valid hit parameters. Returns the hit
    /// record for the nearest reportable intersection, or None.
    fn hit(&self, ray: &Ray, range: Interval) -> Option<HitRecord>;
}
