//! Tone mapping and red/cyan stereo compositing.
//!
//! The two eye views look at horizontal extents `delta` pixels apart; the
//! composite keeps only the overlap, encoding the left eye's luminance in
//! the red channel and the right eye's in the blue channel.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::frame::Framebuffer;
use parallax_math::Vec3;

/// Scale a color down so its brightest channel is at most 1.
///
/// Colors already inside the unit cube pass through unchanged; tone mapping
/// never brightens.
pub fn tone_map(color: Vec3) -> Vec3 {
    let max = color.x.max(color.y).max(color.z);
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Mean of the three channels.
fn luminance(color: Vec3) -> f32 {
    (color.x + color.y + color.z) / 3.0
}

/// A composited anaglyph image, 8-bit RGB.
pub struct AnaglyphImage {
    pub width: u32,
    pub height: u32,
    /// RGB triples, row-major
    pub data: Vec<u8>,
}

impl AnaglyphImage {
    /// Encode as JPEG.
    pub fn save_jpeg(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, 100);
        encoder.encode(&self.data, self.width, self.height, image::ColorType::Rgb8)
    }
}

/// Composite the two eye views into one red/cyan anaglyph.
///
/// The left eye reads column `i + delta`, the right eye column `i`; the
/// output is the rendered width minus `delta`, dropping the non-overlapping
/// margin.
pub fn compose(left: &Framebuffer, right: &Framebuffer, delta: u32) -> AnaglyphImage {
    assert_eq!(left.width(), right.width());
    assert_eq!(left.height(), right.height());
    assert!(delta < left.width());

    let width = left.width() - delta;
    let height = left.height();
    let mut data = Vec::with_capacity((width * height * 3) as usize);

    for j in 0..height {
        for i in 0..width {
            let l = tone_map(left.get(i + delta, j));
            let r = tone_map(right.get(i, j));

            data.push((255.0 * luminance(l)).round() as u8);
            data.push(0);
            data.push((255.0 * luminance(r)).round() as u8);
        }
    }

    AnaglyphImage {
        width,
        height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_map_leaves_unit_colors_alone() {
        let c = Vec3::new(0.2, 0.5, 1.0);
        assert_eq!(tone_map(c), c);
        assert_eq!(tone_map(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_tone_map_scales_overexposure_down() {
        let mapped = tone_map(Vec3::new(2.0, 1.0, 0.0));
        assert!((mapped - Vec3::new(1.0, 0.5, 0.0)).length() < 1e-5);

        // Brightest channel lands exactly at 1
        let max = mapped.x.max(mapped.y).max(mapped.z);
        assert!((max - 1.0).abs() < 1e-5);
    }

    fn constant_buffer(width: u32, height: u32, color: Vec3) -> Framebuffer {
        let mut fb = Framebuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                fb.set(x, y, color);
            }
        }
        fb
    }

    #[test]
    fn test_compose_constant_buffers() {
        // Left luminance 0.4, right tone-maps to (1, 0.5, 0.5) -> 2/3
        let left = constant_buffer(6, 2, Vec3::new(0.2, 0.4, 0.6));
        let right = constant_buffer(6, 2, Vec3::new(2.0, 1.0, 1.0));

        let image = compose(&left, &right, 2);
        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
        assert_eq!(image.data.len(), 4 * 2 * 3);

        for pixel in image.data.chunks(3) {
            assert_eq!(pixel[0], (255.0f32 * 0.4).round() as u8);
            assert_eq!(pixel[1], 0);
            assert_eq!(pixel[2], (255.0f32 * (2.0 / 3.0)).round() as u8);
        }
    }

    #[test]
    fn test_compose_reads_offset_columns() {
        // Left buffer marks column 3; with delta 3 it lands in output column 0
        let mut left = constant_buffer(5, 1, Vec3::ZERO);
        left.set(3, 0, Vec3::ONE);
        let right = constant_buffer(5, 1, Vec3::ZERO);

        let image = compose(&left, &right, 3);
        assert_eq!(image.width, 2);
        assert_eq!(image.data[0], 255);
        assert_eq!(image.data[3], 0);
    }
}
