//! Point operations applied per pixel.

use crate::image::Image;

/// Invert every color sample, leaving alpha channels untouched.
pub fn invert(image: &Image) -> Image {
    map_color_samples(image, |v| 255 - v)
}

/// Binarize color samples at `level`: values at or above map to 255.
pub fn threshold(image: &Image, level: u8) -> Image {
    map_color_samples(image, |v| if v >= level { 255 } else { 0 })
}

fn map_color_samples(image: &Image, op: impl Fn(u8) -> u8) -> Image {
    let color = image.channels - alpha_channels(image.channels);
    let mut out = image.clone();
    for px in out.data.chunks_exact_mut(image.channels) {
        for v in &mut px[..color] {
            *v = op(*v);
        }
    }
    out
}

// Layouts with 2 or 4 samples carry a trailing alpha sample.
#[inline]
fn alpha_channels(channels: usize) -> usize {
    match channels {
        2 | 4 => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_preserves_alpha() {
        let rgba = Image::from_raw(1, 1, 4, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(invert(&rgba).data, vec![245, 235, 225, 40]);
    }

    #[test]
    fn invert_is_involutive() {
        let gray = Image::from_raw(3, 1, 1, vec![0, 128, 255]).unwrap();
        assert_eq!(invert(&invert(&gray)).data, gray.data);
    }

    #[test]
    fn threshold_binarizes_inclusive() {
        let gray = Image::from_raw(3, 1, 1, vec![0, 100, 200]).unwrap();
        assert_eq!(threshold(&gray, 100).data, vec![0, 255, 255]);
    }
}
