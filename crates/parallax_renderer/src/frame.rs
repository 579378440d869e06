//! Framebuffers and the parallel frame driver.

use rayon::prelude::*;

use crate::{
    camera::Camera,
    scene::Scene,
    tile::{generate_tiles, render_tile, TILE_SIZE},
};
use parallax_math::Vec3;

/// Linear-color render target, one slot per pixel.
///
/// Each pixel is written exactly once per render pass, then the buffer is
/// consumed by the compositor.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the left and right eye views of the scene.
///
/// Tiles render concurrently; each pixel's pair of shading evaluations
/// reads only the shared immutable scene, so the only synchronization is
/// the join before the tiles are blitted back.
pub fn render(camera: &Camera, scene: &Scene) -> (Framebuffer, Framebuffer) {
    let tiles = generate_tiles(camera.width(), camera.height(), TILE_SIZE);
    log::info!(
        "rendering {}x{} ({} tiles)",
        camera.width(),
        camera.height(),
        tiles.len()
    );

    let results: Vec<_> = tiles
        .par_iter()
        .map(|tile| render_tile(*tile, camera, scene))
        .collect();

    let mut left = Framebuffer::new(camera.width(), camera.height());
    let mut right = Framebuffer::new(camera.width(), camera.height());
    for result in results {
        let tile = result.tile;
        for (i, [l, r]) in result.pixels.into_iter().enumerate() {
            let x = tile.x + i as u32 % tile.width;
            let y = tile.y + i as u32 / tile.width;
            left.set(x, y, l);
            right.set(x, y, r);
        }
    }

    (left, right)
}
