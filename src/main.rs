use roi_mapper::{extract_roi_map, GrayView, RoiOptions};

fn main() {
    // Demo stub: labels the catchment of one synthetic summit
    let w = 64usize;
    let h = 48usize;
    let stride = w; // tightly packed
    let mut gray = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let d = (x as i32 - 32).abs().max((y as i32 - 24).abs());
            gray[y * stride + x] = (200 - 4 * d) as u8;
        }
    }
    let img = GrayView {
        w,
        h,
        stride,
        data: &gray,
    };

    match extract_roi_map(&img, &RoiOptions::default()) {
        Ok(map) => println!(
            "maxima={} minima={} ({}x{})",
            map.positive_regions, map.negative_regions, map.width, map.height
        ),
        Err(err) => eprintln!("extraction failed: {err}"),
    }
}
