//! Panoramic environment map.
//!
//! Decoded once at startup and shared read-only with every render worker.
//! Rays that miss the whole scene sample it by direction via the usual
//! spherical mapping.

use std::f32::consts::PI;
use std::path::Path;

use parallax_math::Vec3;
use thiserror::Error;

/// Errors that can occur while loading the environment map.
#[derive(Error, Debug)]
pub enum EnvMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("environment map must be 8-bit RGB, got {0:?}")]
    UnsupportedFormat(image::ColorType),
}

/// A panoramic background image, addressed by ray direction.
#[derive(Clone, Debug)]
pub struct EnvMap {
    width: usize,
    height: usize,
    /// Linear colors in 0-1 range, row-major
    pixels: Vec<Vec3>,
}

impl EnvMap {
    /// Create an environment map from pre-decoded pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<Vec3>) -> Self {
        assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode an environment map from an image file.
    ///
    /// The render cannot proceed without a background, so anything but a
    /// 3-channel 8-bit image is a fatal startup error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvMapError> {
        let img = image::open(path.as_ref())?;
        if img.color() != image::ColorType::Rgb8 {
            return Err(EnvMapError::UnsupportedFormat(img.color()));
        }

        let rgb = img.into_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0)
            .collect();

        log::debug!(
            "loaded environment map {}: {}x{}",
            path.as_ref().display(),
            width,
            height
        );
        Ok(Self::new(width as usize, height as usize, pixels))
    }

    /// Map width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample the texel a unit direction maps to.
    ///
    /// Spherical mapping: the polar angle selects the row, the azimuth the
    /// column. Callers pass unit vectors; no further bounds handling is
    /// applied.
    pub fn sample_direction(&self, dir: Vec3) -> Vec3 {
        let theta = (dir.y / dir.length()).acos();
        let phi = dir.z.atan2(dir.x);
        let i = ((phi + PI) / (2.0 * PI) * (self.width as f32 - 1.0)) as usize;
        let j = (theta / PI * (self.height as f32 - 1.0)) as usize;
        self.pixels[j * self.width + i]
    }
}
