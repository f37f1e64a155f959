//! Color to grayscale conversion.

use crate::image::Image;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// BT.601 luma weights, scaled by 1000.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Collapse an image to a single luminance channel.
///
/// RGB and RGBA inputs are weighted per BT.601; gray+alpha keeps the gray
/// sample and drops alpha. Single-channel input is returned as a copy.
pub fn grayscale(image: &Image) -> Image {
    if image.channels == 1 {
        return image.clone();
    }
    if image.w == 0 || image.h == 0 {
        return Image {
            w: image.w,
            h: image.h,
            channels: 1,
            data: Vec::new(),
        };
    }

    let mut data = vec![0u8; image.w * image.h];
    let row_samples = image.w * image.channels;
    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(image.w)
            .zip(image.data.par_chunks(row_samples))
            .for_each(|(dst, src)| luma_row(dst, src, image.channels));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (dst, src) in data.chunks_mut(image.w).zip(image.data.chunks(row_samples)) {
            luma_row(dst, src, image.channels);
        }
    }

    Image {
        w: image.w,
        h: image.h,
        channels: 1,
        data,
    }
}

fn luma_row(dst: &mut [u8], src: &[u8], channels: usize) {
    if channels == 2 {
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(2)) {
            *d = px[0];
        }
    } else {
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(channels)) {
            let weighted =
                LUMA_R * px[0] as u32 + LUMA_G * px[1] as u32 + LUMA_B * px[2] as u32 + 500;
            *d = (weighted / 1000) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_weights_follow_bt601() {
        let rgb = Image::from_raw(2, 1, 3, vec![255, 0, 0, 255, 255, 255]).unwrap();
        let gray = grayscale(&rgb);
        assert_eq!(gray.channels, 1);
        assert_eq!(gray.data, vec![76, 255]);
    }

    #[test]
    fn gray_alpha_keeps_gray_sample() {
        let ga = Image::from_raw(2, 1, 2, vec![7, 200, 130, 0]).unwrap();
        assert_eq!(grayscale(&ga).data, vec![7, 130]);
    }

    #[test]
    fn single_channel_passes_through() {
        let gray = Image::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grayscale(&gray).data, gray.data);
    }
}
