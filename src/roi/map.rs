use serde::Serialize;

/// Label map produced by one extraction pass.
///
/// `labels` is row-major with one entry per source pixel. Zero means the
/// pixel belongs to no region; maxima regions are numbered `1..=positive_regions`
/// and minima regions `-1..=-negative_regions`, each in commit order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMap {
    /// Grid width in pixels
    pub width: usize,
    /// Grid height in pixels
    pub height: usize,
    /// Row-major region labels, one per pixel
    pub labels: Vec<i32>,
    /// Number of committed maxima regions
    pub positive_regions: usize,
    /// Number of committed minima regions
    pub negative_regions: usize,
}

impl RoiMap {
    pub(super) fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            labels: vec![0; width * height],
            positive_regions: 0,
            negative_regions: 0,
        }
    }

    #[inline]
    pub fn label_at(&self, x: usize, y: usize) -> i32 {
        self.labels[y * self.width + x]
    }

    /// Total committed regions across both polarities.
    pub fn region_count(&self) -> usize {
        self.positive_regions + self.negative_regions
    }

    /// Pixel area of every committed region, maxima first, ordered by ID.
    pub fn region_areas(&self) -> Vec<RegionArea> {
        let mut positive = vec![0usize; self.positive_regions];
        let mut negative = vec![0usize; self.negative_regions];
        for &label in &self.labels {
            if label > 0 {
                positive[label as usize - 1] += 1;
            } else if label < 0 {
                negative[label.unsigned_abs() as usize - 1] += 1;
            }
        }
        let mut areas = Vec::with_capacity(positive.len() + negative.len());
        areas.extend(
            positive
                .into_iter()
                .enumerate()
                .map(|(i, pixels)| RegionArea {
                    label: (i + 1) as i32,
                    pixels,
                }),
        );
        areas.extend(
            negative
                .into_iter()
                .enumerate()
                .map(|(i, pixels)| RegionArea {
                    label: -((i + 1) as i32),
                    pixels,
                }),
        );
        areas
    }
}

/// Pixel count of one labeled region.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionArea {
    pub label: i32,
    pub pixels: usize,
}
