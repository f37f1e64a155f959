/// Generates a uniform grayscale buffer.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates a full-frame pyramid: intensity drops by 4 per Chebyshev ring
/// away from the center, so every off-summit pixel has a strictly higher
/// neighbor and no flat plain forms anywhere.
pub fn pyramid_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let cx = (width / 2) as i32;
    let cy = (height / 2) as i32;
    let max_d = cx.max(width as i32 - 1 - cx).max(cy).max(height as i32 - 1 - cy);
    assert!(4 * max_d < 200, "grid too large for the 8-bit ramp");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let d = (x as i32 - cx).abs().max((y as i32 - cy).abs());
            img[y * width + x] = (200 - 4 * d) as u8;
        }
    }
    img
}

/// Generates a cone rising by 16 per Chebyshev ring toward `(cx, cy)`,
/// reaching zero `radius` rings out, on a zero background.
pub fn cone_u8(width: usize, height: usize, cx: usize, cy: usize, radius: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(radius <= 15, "cone height must fit in 8 bits");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let d = (x as i32 - cx as i32).abs().max((y as i32 - cy as i32).abs());
            let v = 16 * (radius as i32 - d).max(0);
            img[y * width + x] = v as u8;
        }
    }
    img
}

/// Generates a deterministic egg-crate surface with repeating ridges,
/// plateaus, and border-touching flats. Useful for property-style checks
/// that need many commits and rollbacks in one pass.
pub fn egg_crate_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let ridge_x = ((x % 11) as i32 - 5).abs();
            let ridge_y = ((y % 7) as i32 - 3).abs();
            img[y * width + x] = ((ridge_x + ridge_y) * 28) as u8;
        }
    }
    img
}
