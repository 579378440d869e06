//! Recursive Whitted-style shading.
//!
//! `cast_ray` resolves the nearest surface, shades it with Phong diffuse and
//! specular terms under hard shadows, and recurses for the reflected and
//! refracted contributions. Rays that exceed the depth limit or hit nothing
//! sample the environment map.

use crate::scene::Scene;
use parallax_math::{Ray, Vec3};

/// Recursion limit for reflection/refraction bounces.
pub const MAX_DEPTH: u32 = 4;

/// Offset applied to secondary-ray origins to avoid self-occlusion.
const SURFACE_BIAS: f32 = 1e-3;

/// Mirror `incident` about `normal`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Bend `incident` through a surface into a medium of index `eta_t`,
/// arriving from a medium of index `eta_i` (Snell's law).
///
/// When the ray arrives from inside the medium, the normal is flipped and
/// the indices swapped; the corrected cosine is then positive, so this
/// recurses exactly once. Under total internal reflection the fixed
/// direction (1, 0, 0) is returned and the tracer follows it anyway; the
/// direction has no physical meaning, it only keeps the recursion total.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        return refract(incident, -normal, eta_i, eta_t);
    }
    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::X
    } else {
        incident * eta + normal * (eta * cosi - k.sqrt())
    }
}

/// Nudge a secondary-ray origin off the surface, on whichever side the new
/// direction leaves through.
#[inline]
fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * SURFACE_BIAS
    } else {
        point + normal * SURFACE_BIAS
    }
}

/// Compute the color seen along a ray.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32) -> Vec3 {
    let hit = if depth > MAX_DEPTH {
        None
    } else {
        scene.intersect(ray)
    };
    let Some(hit) = hit else {
        return scene.environment().sample_direction(ray.direction());
    };

    let dir = ray.direction();
    let material = hit.material;

    let reflect_dir = reflect(dir, hit.normal).normalize();
    let refract_dir = refract(dir, hit.normal, material.refractive_index, 1.0).normalize();
    let reflect_ray = Ray::new(offset_origin(hit.point, hit.normal, reflect_dir), reflect_dir);
    let refract_ray = Ray::new(offset_origin(hit.point, hit.normal, refract_dir), refract_dir);
    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1);
    let refract_color = cast_ray(&refract_ray, scene, depth + 1);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;
    for light in scene.lights() {
        let light_dir = (light.position - hit.point).normalize();
        let light_distance = (light.position - hit.point).length();

        // Hard shadow: any occluder strictly nearer than the light kills
        // this light's whole contribution.
        let shadow_origin = offset_origin(hit.point, hit.normal, light_dir);
        let shadow_ray = Ray::new(shadow_origin, light_dir);
        if let Some(occluder) = scene.intersect(&shadow_ray) {
            if (occluder.point - shadow_origin).length() < light_distance {
                continue;
            }
        }

        diffuse_intensity += light.intensity * light_dir.dot(hit.normal).max(0.0);
        specular_intensity += light.intensity
            * (-reflect(-light_dir, hit.normal).dot(dir))
                .max(0.0)
                .powf(material.specular_exponent);
    }

    material.diffuse_color * diffuse_intensity * material.albedo.x
        + Vec3::ONE * specular_intensity * material.albedo.y
        + reflect_color * material.albedo.z
        + refract_color * material.albedo.w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Light, Material};
    use crate::sphere::Sphere;
    use parallax_core::EnvMap;
    use parallax_math::Vec4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_reflect_unit_and_involution() {
        let d = Vec3::new(1.0, -2.0, 3.0).normalize();
        let n = Vec3::new(0.0, 1.0, 1.0).normalize();

        let r = reflect(d, n);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(approx(reflect(r, n), d));
    }

    #[test]
    fn test_refract_normal_incidence_equal_indices() {
        let d = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, 1.0);

        assert!(approx(refract(d, n, 1.0, 1.0), d));
    }

    #[test]
    fn test_refract_from_inside_swaps_media() {
        // Leaving the denser medium at normal incidence: no bending
        let d = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, -1.0);

        assert!(approx(refract(d, n, 1.5, 1.0), d));
    }

    #[test]
    fn test_refract_total_internal_reflection_fallback() {
        // Grazing exit from glass into air
        let d = Vec3::new(1.0, 0.0, -0.2).normalize();
        let n = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(refract(d, n, 1.0, 1.5), Vec3::X);
    }

    fn env_gradient() -> EnvMap {
        // Distinct texel per slot so sampling mistakes are visible
        let pixels = (0..12).map(|i| Vec3::splat(i as f32 / 12.0)).collect();
        EnvMap::new(4, 3, pixels)
    }

    #[test]
    fn test_depth_limit_returns_environment() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::new(1.0, Vec4::new(0.6, 0.3, 0.1, 0.0), Vec3::X, 50.0),
        );
        let scene = Scene::new(vec![sphere], vec![], env_gradient());

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let expected = scene.environment().sample_direction(ray.direction());

        // One past the limit: the sphere is ignored even though the ray hits it
        let color = cast_ray(&ray, &scene, MAX_DEPTH + 1);
        assert!(approx(color, expected));
    }

    #[test]
    fn test_miss_returns_environment_sample() {
        let scene = Scene::new(vec![], vec![], env_gradient());
        let dir = Vec3::new(0.3, 0.4, 0.5).normalize();
        let ray = Ray::new(Vec3::ZERO, dir);

        let expected = scene.environment().sample_direction(dir);
        assert!(approx(cast_ray(&ray, &scene, 0), expected));
    }

    #[test]
    fn test_diffuse_only_sphere_hand_computed() {
        // Sphere straight ahead, light between camera and sphere, no other
        // occluders: the color is exactly the diffuse color times the cosine
        // term (here 1), with zero reflect/refract contribution.
        let diffuse_color = Vec3::new(0.4, 0.4, 0.3);
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), diffuse_color, 50.0),
        );
        let light = Light::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let black = EnvMap::new(2, 2, vec![Vec3::ZERO; 4]);
        let scene = Scene::new(vec![sphere], vec![light], black);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = cast_ray(&ray, &scene, 0);
        assert!(approx(color, diffuse_color));
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let diffuse_color = Vec3::new(0.4, 0.4, 0.3);
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), diffuse_color, 50.0),
        );
        // Small blocker between the surface and the light
        let blocker = Sphere::new(
            Vec3::new(0.0, 0.0, -6.0),
            0.5,
            Material::new(1.0, Vec4::new(1.0, 0.0, 0.0, 0.0), Vec3::ZERO, 0.0),
        );
        let light = Light::new(Vec3::new(0.0, 0.0, -4.0), 1.0);
        let black = EnvMap::new(2, 2, vec![Vec3::ZERO; 4]);
        let scene = Scene::new(vec![sphere, blocker], vec![light], black);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = cast_ray(&ray, &scene, 0);
        assert!(approx(color, Vec3::ZERO));
    }
}
