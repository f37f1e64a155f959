#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod filters;
pub mod image;
pub mod roi;

// --- High-level re-exports -------------------------------------------------

// Main entry points: extraction + results.
pub use crate::roi::{extract_image_roi_map, extract_roi_map, RoiMap, RoiOptions};

// Error and detail types callers commonly match on.
pub use crate::roi::{Polarity, QueueKind, RegionArea, RoiError};

// Image containers used on both sides of the call.
pub use crate::image::{GrayView, Image, PixelSource};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use roi_mapper::prelude::*;
///
/// let (w, h) = (5usize, 5usize);
/// let mut gray = vec![0u8; w * h];
/// gray[2 * w + 2] = 9;
/// let img = GrayView { w, h, stride: w, data: &gray };
///
/// let map = extract_roi_map(&img, &RoiOptions::default()).unwrap();
/// assert_eq!(map.positive_regions, 1);
/// ```
pub mod prelude {
    pub use crate::image::{GrayView, Image, PixelSource};
    pub use crate::roi::extract_roi_map;
    pub use crate::{RoiMap, RoiOptions};
}
