//! Binary occupancy masks sampled from logo images
//!
//! A [`RasterMask`] is built once per logo-processing pass by downsampling
//! the source image to a bounded resolution and thresholding its alpha
//! channel. It is never mutated after construction.

use image::{imageops, imageops::FilterType, RgbaImage};
use tracing::debug;

/// Sources smaller than this on either side are too small to trace
pub const MIN_SOURCE_DIM: u32 = 6;
/// The longer mask side never exceeds this
pub const MAX_MASK_DIM: u32 = 520;
/// Mask dimensions are clamped up to this floor after scaling
pub const MIN_MASK_DIM: u32 = 36;

/// Alpha above this counts as opaque when building the mask
const MASK_ALPHA_THRESHOLD: u8 = 24;
/// Alpha above this counts as content when cropping
const CONTENT_ALPHA_THRESHOLD: u8 = 20;

/// A dense binary occupancy grid (1 = opaque/foreground)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterMask {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RasterMask {
    /// Build a mask by downsampling and alpha-thresholding a source image.
    ///
    /// Returns `None` when the source is smaller than 6x6; the caller is
    /// expected to degrade to its static fallback. The longer side is scaled
    /// down to at most 520 pixels (never scaled up beyond the source scale),
    /// and the result is clamped to at least 36 pixels per side.
    pub fn from_image(source: &RgbaImage) -> Option<Self> {
        let (source_width, source_height) = source.dimensions();
        if source_width < MIN_SOURCE_DIM || source_height < MIN_SOURCE_DIM {
            debug!(
                source_width,
                source_height, "logo source below minimum traceable size"
            );
            return None;
        }

        let scale = (MAX_MASK_DIM as f64 / source_width.max(source_height) as f64).min(1.0);
        let width = MIN_MASK_DIM.max((source_width as f64 * scale).round() as u32);
        let height = MIN_MASK_DIM.max((source_height as f64 * scale).round() as u32);

        // Scratch surface, dropped as soon as the pixels are thresholded.
        let scratch = imageops::resize(source, width, height, FilterType::Triangle);

        let pixels = scratch
            .pixels()
            .map(|p| u8::from(p.0[3] > MASK_ALPHA_THRESHOLD))
            .collect();

        Some(Self {
            width: width as usize,
            height: height as usize,
            pixels,
        })
    }

    /// Build a mask directly from occupancy values.
    ///
    /// Returns `None` when the pixel buffer does not match the dimensions.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width.checked_mul(height)? {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy test; coordinates off the mask count as unfilled
    pub fn is_filled(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.pixels[y as usize * self.width + x as usize] == 1
    }
}

/// Crop an image to the bounding box of its visible (alpha > 20) content,
/// with a small proportional padding.
///
/// Returns `None` when the source is smaller than 4x4 or fully transparent.
pub fn crop_to_content(source: &RgbaImage) -> Option<RgbaImage> {
    let (source_width, source_height) = source.dimensions();
    if source_width < 4 || source_height < 4 {
        return None;
    }

    let mut min_x = source_width;
    let mut min_y = source_height;
    let mut max_x: i64 = -1;
    let mut max_y: i64 = -1;

    for (x, y, pixel) in source.enumerate_pixels() {
        if pixel.0[3] > CONTENT_ALPHA_THRESHOLD {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x as i64);
            max_y = max_y.max(y as i64);
        }
    }

    if max_x < min_x as i64 || max_y < min_y as i64 {
        debug!("logo source has no visible content to crop to");
        return None;
    }

    let pad = 8.max((source_width.max(source_height) as f64 * 0.02).floor() as u32);
    let crop_x = min_x.saturating_sub(pad);
    let crop_y = min_y.saturating_sub(pad);
    let crop_width = (max_x as u32 - min_x + 1 + pad * 2).min(source_width - crop_x);
    let crop_height = (max_y as u32 - min_y + 1 + pad * 2).min(source_height - crop_y);

    Some(imageops::crop_imm(source, crop_x, crop_y, crop_width, crop_height).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_square_image(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn rejects_sources_below_minimum() {
        let tiny = solid_square_image(4);
        assert!(RasterMask::from_image(&tiny).is_none());

        let just_under = RgbaImage::from_pixel(5, 100, Rgba([0, 0, 0, 255]));
        assert!(RasterMask::from_image(&just_under).is_none());
    }

    #[test]
    fn keeps_source_resolution_within_cap() {
        let img = solid_square_image(40);
        let mask = RasterMask::from_image(&img).unwrap();
        assert_eq!(mask.width(), 40);
        assert_eq!(mask.height(), 40);
        assert!(mask.is_filled(0, 0));
        assert!(mask.is_filled(39, 39));
        assert!(!mask.is_filled(40, 0));
        assert!(!mask.is_filled(-1, 0));
    }

    #[test]
    fn caps_long_side_at_520() {
        let img = RgbaImage::from_pixel(1040, 520, Rgba([0, 0, 0, 255]));
        let mask = RasterMask::from_image(&img).unwrap();
        assert_eq!(mask.width(), 520);
        assert_eq!(mask.height(), 260);
    }

    #[test]
    fn clamps_small_sources_to_floor() {
        let img = solid_square_image(10);
        let mask = RasterMask::from_image(&img).unwrap();
        assert_eq!(mask.width(), MIN_MASK_DIM as usize);
        assert_eq!(mask.height(), MIN_MASK_DIM as usize);
    }

    #[test]
    fn thresholds_alpha() {
        let mut img = solid_square_image(40);
        for pixel in img.pixels_mut() {
            pixel.0[3] = 24; // at the threshold, counts as transparent
        }
        let mask = RasterMask::from_image(&img).unwrap();
        assert!(!mask.is_filled(20, 20));
    }

    #[test]
    fn from_pixels_validates_length() {
        assert!(RasterMask::from_pixels(3, 3, vec![0; 9]).is_some());
        assert!(RasterMask::from_pixels(3, 3, vec![0; 8]).is_none());
    }

    #[test]
    fn crop_finds_content_box() {
        let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 0]));
        for y in 40..60 {
            for x in 30..70 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let cropped = crop_to_content(&img).unwrap();
        // Content is 40x20 plus 8px padding on each side.
        assert_eq!(cropped.dimensions(), (56, 36));
    }

    #[test]
    fn crop_rejects_empty_and_tiny_sources() {
        let empty = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 0]));
        assert!(crop_to_content(&empty).is_none());

        let tiny = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        assert!(crop_to_content(&tiny).is_none());
    }
}
