//! I/O helpers for images, label maps, and JSON.
//!
//! - `load_image`: read a PNG/JPEG/etc. keeping its channel count.
//! - `save_grayscale_image`: write a single-channel [`Image`] to a PNG.
//! - `save_label_image`: render a [`RoiMap`] to a color-coded PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::Image;
use crate::roi::RoiMap;
use image::{DynamicImage, GenericImageView, ImageBuffer, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, preserving its channel layout.
///
/// Exotic sample formats (16-bit, float) are converted to 8-bit RGBA; the
/// common 8-bit layouts pass through untouched.
pub fn load_image(path: &Path) -> Result<Image, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let (w, h) = img.dimensions();
    let (channels, data) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other => (4, other.to_rgba8().into_raw()),
    };
    Image::from_raw(w as usize, h as usize, channels, data)
        .ok_or_else(|| format!("Decoded buffer size mismatch for {}", path.display()))
}

/// Save a single-channel image to a grayscale PNG.
pub fn save_grayscale_image(image: &Image, path: &Path) -> Result<(), String> {
    if image.channels != 1 {
        return Err(format!(
            "Expected a single-channel image, got {} channels",
            image.channels
        ));
    }
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, image.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Render a label map to a color PNG for visual inspection.
///
/// Unassigned pixels come out black; maxima regions cycle through a fixed
/// palette by ID and minima regions use the complementary colors.
pub fn save_label_image(map: &RoiMap, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(map.width as u32, map.height as u32);
    for y in 0..map.height {
        for x in 0..map.width {
            out.put_pixel(x as u32, y as u32, Rgb(label_color(map.label_at(x, y))));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

const LABEL_PALETTE: [[u8; 3]; 12] = [
    [230, 25, 75],
    [60, 180, 75],
    [255, 225, 25],
    [0, 130, 200],
    [245, 130, 48],
    [145, 30, 180],
    [70, 240, 240],
    [240, 50, 230],
    [210, 245, 60],
    [250, 190, 212],
    [0, 128, 128],
    [220, 190, 255],
];

fn label_color(label: i32) -> [u8; 3] {
    if label == 0 {
        return [0, 0, 0];
    }
    let base = LABEL_PALETTE[(label.unsigned_abs() as usize - 1) % LABEL_PALETTE.len()];
    if label > 0 {
        base
    } else {
        [255 - base[0], 255 - base[1], 255 - base[2]]
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
