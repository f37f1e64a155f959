//! Owned 8-bit image with interleaved channels in row-major layout.
//!
//! This is the decoding-side container: whatever `image::open` produces is
//! normalized into it with the channel count preserved. The ROI extractor
//! itself only accepts single-channel data, obtained either directly or via
//! [`crate::filters::grayscale`].

use super::gray::GrayView;

#[derive(Clone, Debug)]
pub struct Image {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Samples per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
    pub channels: usize,
    /// Interleaved samples in row-major order, `w * h * channels` long
    pub data: Vec<u8>,
}

impl Image {
    /// Construct a zero-initialized buffer of size `w × h × channels`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        debug_assert!(channels >= 1);
        Self {
            w,
            h,
            channels,
            data: vec![0; w * h * channels],
        }
    }

    /// Wrap an existing buffer; `None` when its length does not match.
    pub fn from_raw(w: usize, h: usize, channels: usize, data: Vec<u8>) -> Option<Self> {
        (channels >= 1 && data.len() == w * h * channels).then_some(Self { w, h, channels, data })
    }

    /// Convert (x, y) to the linear index of the pixel's first sample.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * self.channels
    }

    /// Samples of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.idx(x, y);
        &self.data[start..start + self.channels]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * self.channels;
        &self.data[start..start + self.w * self.channels]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w * self.channels;
        let end = start + self.w * self.channels;
        &mut self.data[start..end]
    }

    /// Borrow the pixels as a grayscale view; `None` unless single-channel.
    pub fn as_gray_view(&self) -> Option<GrayView<'_>> {
        (self.channels == 1).then(|| GrayView {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        })
    }
}
