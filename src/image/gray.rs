/// Borrowed 8-bit grayscale view over caller-owned pixels.
///
/// `stride` lets the view address a sub-rectangle of a larger buffer; for a
/// tightly packed image it equals `w`.
#[derive(Clone, Debug)]
pub struct GrayView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // samples between rows
    pub data: &'a [u8],
}

impl<'a> GrayView<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<'a> crate::image::traits::PixelSource for GrayView<'a> {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn value(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.stride + x] as i32
    }
}
