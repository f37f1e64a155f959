mod common;

use common::synthetic_image::{egg_crate_u8, pyramid_u8, uniform_u8};
use roi_mapper::{extract_roi_map, GrayView, RoiOptions};

fn view(w: usize, h: usize, data: &[u8]) -> GrayView<'_> {
    GrayView {
        w,
        h,
        stride: w,
        data,
    }
}

#[test]
fn pyramid_summit_claims_every_pixel() {
    let (w, h) = (64usize, 48usize);
    let buffer = pyramid_u8(w, h);
    let map = extract_roi_map(&view(w, h, &buffer), &RoiOptions::default()).unwrap();

    assert_eq!(map.positive_regions, 1);
    assert_eq!(map.negative_regions, 0);
    assert!(
        map.labels.iter().all(|&l| l == 1),
        "the whole frame drains to the only summit"
    );
}

#[test]
fn uniform_image_has_no_regions() {
    let (w, h) = (32usize, 32usize);
    let buffer = uniform_u8(w, h, 128);
    let map = extract_roi_map(&view(w, h, &buffer), &RoiOptions::default()).unwrap();

    assert_eq!(map.region_count(), 0);
    assert!(map.labels.iter().all(|&l| l == 0));
}

#[test]
fn labels_stay_within_the_committed_range() {
    let (w, h) = (64usize, 48usize);
    let buffer = egg_crate_u8(w, h);
    let map = extract_roi_map(&view(w, h, &buffer), &RoiOptions::default()).unwrap();

    assert!(map.positive_regions > 1, "expected several summits");
    assert_eq!(map.negative_regions, 0);
    let top = map.positive_regions as i32;
    assert!(
        map.labels.iter().all(|&l| (0..=top).contains(&l)),
        "labels must lie in 0..={top}"
    );
    // contiguous IDs: every committed region keeps at least its summit
    for area in map.region_areas() {
        assert!(area.pixels >= 1, "region {} lost all pixels", area.label);
    }
}

#[test]
fn minima_of_inverted_surface_mirror_the_maxima() {
    let (w, h) = (64usize, 48usize);
    let buffer = egg_crate_u8(w, h);
    let inverted: Vec<u8> = buffer.iter().map(|&v| 255 - v).collect();

    let maxima = extract_roi_map(&view(w, h, &buffer), &RoiOptions::default()).unwrap();
    let minima = extract_roi_map(
        &view(w, h, &inverted),
        &RoiOptions::default().with_invert(true),
    )
    .unwrap();

    assert_eq!(minima.negative_regions, maxima.positive_regions);
    assert_eq!(minima.positive_regions, 0);
    for (inv, max) in minima.labels.iter().zip(maxima.labels.iter()) {
        assert_eq!(*inv, -*max, "minima labels must mirror maxima labels");
    }
}

#[test]
fn four_connectivity_preserves_label_invariants() {
    let (w, h) = (64usize, 48usize);
    let buffer = egg_crate_u8(w, h);
    let map = extract_roi_map(
        &view(w, h, &buffer),
        &RoiOptions::default().with_corner(false),
    )
    .unwrap();

    assert_eq!(map.negative_regions, 0);
    let top = map.positive_regions as i32;
    assert!(map.labels.iter().all(|&l| (0..=top).contains(&l)));
    for area in map.region_areas() {
        assert!(area.pixels >= 1, "region {} lost all pixels", area.label);
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let (w, h) = (48usize, 40usize);
    let buffer = egg_crate_u8(w, h);
    let first = extract_roi_map(&view(w, h, &buffer), &RoiOptions::default()).unwrap();
    let second = extract_roi_map(&view(w, h, &buffer), &RoiOptions::default()).unwrap();

    assert_eq!(first.labels, second.labels);
    assert_eq!(first.positive_regions, second.positive_regions);
}
