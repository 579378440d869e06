//! Hollow-sphere pair with a silhouette cutout.

use crate::{
    sphere::Sphere,
    surface::{Hit, Surface},
};
use parallax_math::{Interval, Ray};

/// A large shell sphere with a circular opening cut by a smaller sphere.
///
/// Where the cutout's silhouette overlaps the shell, the ray passes through
/// the opening and shades the cutout's far wall from the inside (inverted
/// normal); everywhere else the shell shades normally. The containment tests
/// guarantee that at most one of the two writes the record for a given ray.
pub struct PortalPair {
    cutout: Sphere,
    shell: Sphere,
}

impl PortalPair {
    /// Create a portal pair from the cutout (small) and shell (large) spheres.
    pub fn new(cutout: Sphere, shell: Sphere) -> Self {
        Self { cutout, shell }
    }
}

impl Surface for PortalPair {
    /// The cutout stage keys its guard on the *entry* distance but records
    /// the *exit* point, so the recorded `rec.t` can exceed the incoming
    /// `ray_t.max`; callers must take `rec.t` as the new running minimum.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Hit) -> bool {
        let mut closest = ray_t.max;
        let mut hit_anything = false;

        // Entry through the cutout silhouette: shade the cutout's far wall
        // when it lies within the shell volume.
        if let Some((t_enter, t_exit)) = self.cutout.intersect_both(ray) {
            if t_enter < closest {
                let exit_point = ray.at(t_exit);
                if exit_point.distance(self.shell.center) <= self.shell.radius {
                    closest = t_exit;
                    rec.t = t_exit;
                    rec.point = exit_point;
                    rec.normal = -(exit_point - self.cutout.center).normalize();
                    rec.material = self.cutout.material;
                    hit_anything = true;
                }
            }
        }

        // Shell proper, excluding the opening.
        if let Some(t) = self.shell.intersect(ray) {
            if t < closest {
                let point = ray.at(t);
                if point.distance(self.cutout.center) >= self.cutout.radius {
                    rec.t = t;
                    rec.point = point;
                    rec.normal = (point - self.shell.center).normalize();
                    rec.material = self.shell.material;
                    hit_anything = true;
                }
            }
        }

        hit_anything
    }
}
