//! Sphere primitive.

use crate::{
    material::Material,
    surface::{Hit, Surface},
};
use parallax_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Nearest non-negative distance along the ray, if any.
    ///
    /// Assumes a unit-length direction. When the origin is inside the
    /// sphere the far root is returned.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius * self.radius {
            return None;
        }
        let thc = (self.radius * self.radius - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// Entry and exit distances along the ray.
    ///
    /// The entry distance may be negative (origin inside the sphere); the
    /// query fails only when the ray misses entirely or the whole sphere
    /// lies behind the origin.
    pub fn intersect_both(&self, ray: &Ray) -> Option<(f32, f32)> {
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius * self.radius {
            return None;
        }
        let thc = (self.radius * self.radius - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        if t1 < 0.0 {
            return None;
        }
        Some((t0, t1))
    }
}

impl Surface for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Hit) -> bool {
        let Some(t) = self.intersect(ray) else {
            return false;
        };
        if !ray_t.surrounds(t) {
            return false;
        }

        rec.t = t;
        rec.point = ray.at(t);
        rec.normal = (rec.point - self.center).normalize();
        rec.material = self.material;
        true
    }
}
