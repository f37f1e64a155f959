/// Read-only single-channel pixel grid consumed by the ROI extractor.
///
/// The grid is owned by the caller and never mutated by the toolkit; the
/// extractor only reads samples through [`value`](PixelSource::value).
/// Implementations promise that `value(x, y)` is defined for every
/// `x < width()`, `y < height()` and stays constant for the lifetime of the
/// borrow.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Sample value at `(x, y)`. Only in-bounds coordinates are passed.
    fn value(&self, x: usize, y: usize) -> i32;

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}
