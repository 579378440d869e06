//! Bounded checkerboard plane primitive.

use crate::{
    material::Material,
    surface::{Hit, Surface},
};
use parallax_math::{Interval, Ray, Vec3, Vec4};

/// A horizontal plane carrying a checkerboard, clipped to a rectangle.
///
/// The checker cells are 2 units wide; the diffuse color alternates between
/// the two shades with the parity of `floor(x/2) + floor(z/2)`.
pub struct CheckerPlane {
    /// Plane equation y = height
    height: f32,
    /// The board spans |x| < half_width
    half_width: f32,
    /// The board spans z_min < z < z_max
    z_min: f32,
    z_max: f32,
    /// Even-parity and odd-parity cell colors
    shades: [Vec3; 2],
}

/// Rays closer to horizontal than this never test the plane.
const MIN_SLOPE: f32 = 1e-3;

impl CheckerPlane {
    /// Create a checkerboard plane.
    pub fn new(height: f32, half_width: f32, z_min: f32, z_max: f32, shades: [Vec3; 2]) -> Self {
        Self {
            height,
            half_width,
            z_min,
            z_max,
            shades,
        }
    }

    /// Matte material shared by every cell; only the diffuse color varies.
    fn cell_material(&self, point: Vec3) -> Material {
        let parity =
            ((0.5 * point.x).floor() as i32 + (0.5 * point.z).floor() as i32) & 1;
        Material::new(
            1.0,
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            self.shades[parity as usize],
            0.0,
        )
    }
}

impl Surface for CheckerPlane {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Hit) -> bool {
        if ray.direction().y.abs() <= MIN_SLOPE {
            return false;
        }

        let t = (self.height - ray.origin().y) / ray.direction().y;
        if t <= 0.0 || !ray_t.surrounds(t) {
            return false;
        }

        let point = ray.at(t);
        if point.x.abs() >= self.half_width || point.z <= self.z_min || point.z >= self.z_max {
            return false;
        }

        rec.t = t;
        rec.point = point;
        rec.normal = Vec3::Y;
        rec.material = self.cell_material(point);
        true
    }
}
