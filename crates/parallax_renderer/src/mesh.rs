//! Triangle mesh surface.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection. The
//! whole mesh shades with a single material; normals are flat per face,
//! computed from the edge vectors.

use crate::{
    material::Material,
    surface::{Hit, Surface},
};
use parallax_math::{Interval, Ray, Vec3};

/// A triangle mesh with one material for every face.
pub struct MeshSurface {
    triangles: Vec<[Vec3; 3]>,
    material: Material,
}

impl MeshSurface {
    /// Create a mesh surface from triangle corner positions.
    pub fn new(triangles: Vec<[Vec3; 3]>, material: Material) -> Self {
        Self {
            triangles,
            material,
        }
    }

    /// Build from an indexed mesh.
    pub fn from_mesh(mesh: &parallax_core::Mesh, material: Material) -> Self {
        Self::new(mesh.triangles().collect(), material)
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Möller-Trumbore ray-triangle intersection.
///
/// Returns the distance along the ray, or None when the ray is parallel to
/// the triangle plane, the hit lies outside the triangle, or the triangle
/// is behind the origin.
fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let pvec = ray.direction().cross(edge2);
    let det = edge1.dot(pvec);
    if det.abs() < 1e-8 {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin() - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction().dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t <= 0.0 {
        return None;
    }
    Some(t)
}

impl Surface for MeshSurface {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut Hit) -> bool {
        let mut hit_anything = false;
        let mut closest = ray_t.max;

        for tri in &self.triangles {
            let Some(t) = ray_triangle_intersect(ray, tri[0], tri[1], tri[2]) else {
                continue;
            };
            if !Interval::new(ray_t.min, closest).surrounds(t) {
                continue;
            }

            closest = t;
            rec.t = t;
            rec.point = ray.at(t);
            rec.normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize();
            rec.material = self.material;
            hit_anything = true;
        }

        hit_anything
    }
}
