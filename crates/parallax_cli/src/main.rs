//! Offline stereo renderer.
//!
//! Loads the environment map and the model, renders the fixed scene once
//! for each eye, and writes the red/cyan anaglyph composite to disk.
//!
//! Usage: `parallax [envmap] [model.obj] [output.jpg]`

use std::f32::consts::PI;
use std::time::Instant;

use anyhow::{Context, Result};
use parallax_core::{load_obj, EnvMap};
use parallax_math::{Vec3, Vec4};
use parallax_renderer::{
    compose, render, Camera, CheckerPlane, Light, Material, MeshSurface, PortalPair, Scene,
    Sphere,
};

// Output geometry
const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;
const FOV: f32 = PI / 3.0;

// Stereo geometry
const EYE_SEPARATION: f32 = 0.2;
/// Horizontal offset between the two eyes' overlapping extents, in pixels
const STEREO_OFFSET: u32 = 60;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let envmap_path = args.next().unwrap_or_else(|| "envmap.jpg".to_string());
    let model_path = args.next().unwrap_or_else(|| "duck.obj".to_string());
    let output_path = args.next().unwrap_or_else(|| "out.jpg".to_string());

    let env = EnvMap::load(&envmap_path)
        .with_context(|| format!("cannot load environment map {envmap_path}"))?;
    log::info!("environment map: {}x{}", env.width(), env.height());

    let mesh = load_obj(&model_path).with_context(|| format!("cannot load model {model_path}"))?;
    log::info!("model: {} triangles", mesh.triangle_count());

    let scene = build_scene(env, &mesh);
    let camera = Camera::new(WIDTH + STEREO_OFFSET, HEIGHT, FOV, EYE_SEPARATION);

    let start = Instant::now();
    let (left, right) = render(&camera, &scene);
    log::info!("rendered both eyes in {:?}", start.elapsed());

    let image = compose(&left, &right, STEREO_OFFSET);
    image
        .save_jpeg(&output_path)
        .with_context(|| format!("cannot write {output_path}"))?;
    log::info!("wrote {} ({}x{})", output_path, image.width, image.height);

    Ok(())
}

/// The fixed scene: four spheres, the mesh, the portal pair, the
/// checkerboard, three lights.
fn build_scene(env: EnvMap, mesh: &parallax_core::Mesh) -> Scene {
    let ivory = Material::new(
        1.0,
        Vec4::new(0.6, 0.3, 0.1, 0.0),
        Vec3::new(0.4, 0.4, 0.3),
        50.0,
    );
    let glass = Material::new(
        1.5,
        Vec4::new(0.0, 0.5, 0.1, 0.8),
        Vec3::new(0.6, 0.7, 0.8),
        125.0,
    );
    let rubber = Material::new(
        1.0,
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Vec3::new(0.3, 0.1, 0.1),
        10.0,
    );
    let mirror = Material::new(
        1.0,
        Vec4::new(0.0, 10.0, 0.8, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        1425.0,
    );
    let gray_rubber = Material::new(
        1.0,
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Vec3::new(0.15, 0.15, 0.15),
        10.0,
    );
    let dark_gray_rubber = Material::new(
        1.0,
        Vec4::new(0.9, 0.1, 0.0, 0.0),
        Vec3::new(0.12, 0.12, 0.12),
        10.0,
    );

    let spheres = vec![
        Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory),
        Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass),
        Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, rubber),
        Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror),
    ];

    let lights = vec![
        Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
        Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
        Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
    ];

    let portal = PortalPair::new(
        Sphere::new(Vec3::new(-5.5, 4.9, -16.0), 0.9, gray_rubber),
        Sphere::new(Vec3::new(-8.0, 5.0, -18.0), 3.0, dark_gray_rubber),
    );

    let plane = CheckerPlane::new(
        -4.0,
        10.0,
        -30.0,
        -10.0,
        [Vec3::new(0.3, 0.2, 0.1), Vec3::new(0.3, 0.3, 0.3)],
    );

    Scene::new(spheres, lights, env)
        .with_mesh(MeshSurface::from_mesh(mesh, glass))
        .with_portal(portal)
        .with_plane(plane)
}
