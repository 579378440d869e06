//! Tile-based work splitting for the parallel frame driver.
//!
//! The image is divided into rectangular tiles that render independently;
//! each tile shades both eye views for its pixels and hands the results
//! back for blitting after the parallel join.

use crate::{camera::Camera, scene::Scene, tracer::cast_ray};
use parallax_math::{Ray, Vec3};

/// A rectangular region of the image rendered by one task.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default tile size in pixels.
pub const TILE_SIZE: u32 = 64;

/// Generate the tile grid for an image, row-major.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            let th = tile_size.min(height - y);
            tiles.push(Tile::new(x, y, tw, th));
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Pixel colors produced for one tile, row-major within the tile.
///
/// Each entry is the pair (left eye, right eye) for one pixel.
pub struct TileResult {
    pub tile: Tile,
    pub pixels: Vec<[Vec3; 2]>,
}

/// Render both eye views for every pixel of a tile.
pub fn render_tile(tile: Tile, camera: &Camera, scene: &Scene) -> TileResult {
    let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);

    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let dir = camera.pixel_direction(tile.x + local_x, tile.y + local_y);
            let left = cast_ray(&Ray::new(camera.left_origin(), dir), scene, 0);
            let right = cast_ray(&Ray::new(camera.right_origin(), dir), scene, 0);
            pixels.push([left, right]);
        }
    }

    TileResult { tile, pixels }
}
