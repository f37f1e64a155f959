//! Per-pixel preprocessing filters.
//!
//! These cover the preparation steps the extractor needs: collapsing color
//! input to one channel and simple point operations on the result. Every
//! filter returns a new [`crate::image::Image`] and leaves its input alone.

pub mod gray;
pub mod point;

pub use self::gray::grayscale;
pub use self::point::{invert, threshold};
