//! Scene assembly and the closest-hit resolver.

use crate::{
    material::Light,
    mesh::MeshSurface,
    plane::CheckerPlane,
    portal::PortalPair,
    sphere::Sphere,
    surface::{Hit, Surface},
};
use parallax_core::EnvMap;
use parallax_math::{Interval, Ray};

/// Hits at or beyond this distance count as misses.
pub const SCENE_HORIZON: f32 = 1000.0;

/// Everything a ray can see.
///
/// Built once before rendering and shared read-only across all render
/// workers; nothing here mutates during a frame.
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    mesh: Option<MeshSurface>,
    portal: Option<PortalPair>,
    plane: Option<CheckerPlane>,
    env: EnvMap,
}

impl Scene {
    /// Create a scene from its sphere list, lights, and background.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, env: EnvMap) -> Self {
        Self {
            spheres,
            lights,
            mesh: None,
            portal: None,
            plane: None,
            env,
        }
    }

    /// Add the triangle-mesh fixture.
    pub fn with_mesh(mut self, mesh: MeshSurface) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Add the portal sphere pair fixture.
    pub fn with_portal(mut self, portal: PortalPair) -> Self {
        self.portal = Some(portal);
        self
    }

    /// Add the checkerboard plane fixture.
    pub fn with_plane(mut self, plane: CheckerPlane) -> Self {
        self.plane = Some(plane);
        self
    }

    /// The scene's lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// The background environment map.
    pub fn environment(&self) -> &EnvMap {
        &self.env
    }

    /// Closest hit across every primitive category.
    ///
    /// Categories are tested in a fixed order (spheres, mesh, portal pair,
    /// plane) against a single running minimum, so the nearest surface wins
    /// regardless of category or list position.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut rec = Hit::default();
        let mut hit_anything = false;
        let mut ray_t = Interval::new(0.0, f32::MAX);

        for sphere in &self.spheres {
            if sphere.hit(ray, ray_t, &mut rec) {
                hit_anything = true;
                ray_t.max = rec.t;
            }
        }
        if let Some(mesh) = &self.mesh {
            if mesh.hit(ray, ray_t, &mut rec) {
                hit_anything = true;
                ray_t.max = rec.t;
            }
        }
        if let Some(portal) = &self.portal {
            if portal.hit(ray, ray_t, &mut rec) {
                hit_anything = true;
                ray_t.max = rec.t;
            }
        }
        if let Some(plane) = &self.plane {
            if plane.hit(ray, ray_t, &mut rec) {
                hit_anything = true;
                ray_t.max = rec.t;
            }
        }

        (hit_anything && rec.t < SCENE_HORIZON).then_some(rec)
    }
}
