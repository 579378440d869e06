//! Surface materials and lights.

use parallax_math::{Vec3, Vec4};

/// Phong-style surface description.
///
/// `albedo` weights the diffuse, specular, reflected and refracted
/// contributions in that order. The weights are free-floating (they need not
/// sum to 1); overexposure is resolved by tone mapping after the render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub refractive_index: f32,
    pub albedo: Vec4,
    pub diffuse_color: Vec3,
    pub specular_exponent: f32,
}

impl Material {
    /// Create a new material.
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Vec3,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }
}

impl Default for Material {
    /// Placeholder for hit records before any surface has been found.
    /// Never shaded: callers read material fields only after a confirmed hit.
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Vec3::ZERO,
            specular_exponent: 0.0,
        }
    }
}

/// A point light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
