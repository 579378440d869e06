//! Surface trait and Hit record for ray-object intersection.

use crate::material::Material;
use parallax_math::{Interval, Ray, Vec3};

/// Record of the closest ray-surface intersection found so far.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection
    pub normal: Vec3,
    /// Distance along the ray where the intersection occurs
    pub t: f32,
    /// Material at the intersection point
    pub material: Material,
}

impl Default for Hit {
    fn default() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: f32::MAX,
            material: Material::default(),
        }
    }
}

/// Trait for surfaces that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Test the ray against this surface within `ray_t`.
    ///
    /// Returns true and fills in the hit record when this surface produces
    /// a hit inside the interval. `ray_t.max` carries the closest distance
    /// found so far; implementations only write `rec` when they beat it.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Hit) -> bool;
}
