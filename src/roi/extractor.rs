use super::error::{QueueKind, RoiError};
use super::map::RoiMap;
use super::options::{Polarity, RoiOptions};
use super::queue::PixelQueue;
use crate::image::PixelSource;

const NEIGH_OFFSETS_4: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const NEIGH_OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// How one traversal step classifies the neighbors it examines.
#[derive(Clone, Copy)]
enum Expansion {
    /// Flat walk confirming a candidate summit; variations are taken against
    /// the plateau's anchor value.
    Plateau { anchor: i32 },
    /// Flood fill of a committed region; variations are taken against the
    /// dequeued parent's own value.
    Growth,
}

pub(super) struct RoiExtractor<'a, S: PixelSource> {
    source: &'a S,
    width: usize,
    height: usize,
    polarity: Polarity,
    only_top: bool,
    offsets: &'static [(isize, isize)],
    labels: Vec<i32>,
    processed: Vec<u8>,
    variations: Vec<i32>,
    plateau: PixelQueue,
    growth: PixelQueue,
    tentative: Vec<usize>,
    committed: usize,
}

impl<'a, S: PixelSource> RoiExtractor<'a, S> {
    pub(super) fn new(source: &'a S, options: &RoiOptions) -> Self {
        let width = source.width();
        let height = source.height();
        debug_assert!(
            width >= 3 && height >= 3,
            "extractor needs an interior to scan, got {width}x{height}"
        );
        let n = width * height;
        Self {
            source,
            width,
            height,
            polarity: options.polarity(),
            only_top: options.only_top,
            offsets: if options.allow_corner {
                &NEIGH_OFFSETS_8
            } else {
                &NEIGH_OFFSETS_4
            },
            labels: vec![0; n],
            processed: vec![0u8; n],
            variations: vec![0; n],
            plateau: PixelQueue::with_limit(n),
            growth: PixelQueue::with_limit(n),
            tentative: Vec::with_capacity(64),
            committed: 0,
        }
    }

    pub(super) fn extract(mut self) -> Result<RoiMap, RoiError> {
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let idx = y * self.width + x;
                if self.processed[idx] != 0 {
                    continue;
                }
                if !self.is_candidate(x, y) {
                    continue;
                }
                self.process_candidate(idx)?;
            }
        }
        Ok(self.into_map())
    }

    /// True when no tested neighbor strictly exceeds `(x, y)` under the
    /// current polarity. Candidacy tests mark nothing; all interior pixels
    /// keep their shot at seeding until a traversal reaches them.
    fn is_candidate(&self, x: usize, y: usize) -> bool {
        let value = self.source.value(x, y);
        self.offsets.iter().all(|&(dx, dy)| {
            let xn = (x as isize + dx) as usize;
            let yn = (y as isize + dy) as usize;
            self.polarity.delta(self.source.value(xn, yn), value) <= 0
        })
    }

    fn process_candidate(&mut self, idx: usize) -> Result<(), RoiError> {
        let label = self.polarity.label(self.committed + 1);
        if self.resolve_plateau(idx, label)? {
            self.committed += 1;
            if !self.only_top {
                self.grow(label)?;
            }
        }
        Ok(())
    }

    /// Walks the candidate's flat set breadth-first and decides its fate.
    ///
    /// Every equal-valued pixel reachable from the seed is provisionally
    /// labeled and drained exactly once, even after the walk is already
    /// known invalid; a partially consumed plateau could otherwise commit a
    /// remnant of itself through a later seed. Strictly lower neighbors are
    /// handed to the growth queue. Returns whether the plateau committed.
    fn resolve_plateau(&mut self, seed: usize, label: i32) -> Result<bool, RoiError> {
        debug_assert!(self.plateau.is_empty());
        let anchor = self.value_at(seed);
        let growth_mark = self.growth.len();
        let mut valid = true;

        self.tentative.clear();
        self.processed[seed] = 1;
        self.assign(seed, label);
        self.push_plateau(seed, label)?;

        while let Some(idx) = self.plateau.pop() {
            debug_assert_eq!(
                self.variations[idx], 0,
                "plateau member with non-zero variation"
            );
            if self.on_border(idx) {
                // cannot be proven surrounded
                valid = false;
            }
            valid &= self.expand(idx, label, Expansion::Plateau { anchor })?;
        }

        if valid {
            return Ok(true);
        }
        self.revert(growth_mark);
        Ok(false)
    }

    /// Flood fill from the committed frontier, absorbing non-increasing
    /// neighbors into the region.
    fn grow(&mut self, label: i32) -> Result<(), RoiError> {
        while let Some(idx) = self.growth.pop() {
            self.expand(idx, label, Expansion::Growth)?;
        }
        Ok(())
    }

    /// Examines the unprocessed neighbors of `idx`, marking each one
    /// processed and recording its variation before classifying it. Returns
    /// false when a neighbor disproves a plateau.
    fn expand(&mut self, idx: usize, label: i32, mode: Expansion) -> Result<bool, RoiError> {
        let x = idx % self.width;
        let y = idx / self.width;
        let reference = match mode {
            Expansion::Plateau { anchor } => anchor,
            Expansion::Growth => self.value_at(idx),
        };
        let offsets = self.offsets;
        let mut valid = true;

        for &(dx, dy) in offsets {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 0 || yn < 0 || xn >= self.width as isize || yn >= self.height as isize {
                continue;
            }
            let neighbor_idx = yn as usize * self.width + xn as usize;
            if self.processed[neighbor_idx] != 0 {
                continue;
            }
            self.processed[neighbor_idx] = 1;
            let variation = self
                .polarity
                .delta(self.source.value(xn as usize, yn as usize), reference);
            self.variations[neighbor_idx] = variation;

            match mode {
                Expansion::Plateau { .. } => {
                    if variation > 0 {
                        // a flat top with a higher neighbor is no extremum
                        valid = false;
                    } else if variation == 0 {
                        self.assign(neighbor_idx, label);
                        self.push_plateau(neighbor_idx, label)?;
                    } else if !self.only_top {
                        self.assign(neighbor_idx, label);
                        self.push_growth(neighbor_idx, label)?;
                    }
                }
                Expansion::Growth => {
                    if variation <= 0 {
                        self.labels[neighbor_idx] = label;
                        self.push_growth(neighbor_idx, label)?;
                    }
                }
            }
        }
        Ok(valid)
    }

    /// Undoes a failed plateau walk: every label it assigned goes back to 0
    /// and the growth entries it appended are discarded. Processed flags
    /// survive, so the flat set is never re-seeded.
    fn revert(&mut self, growth_mark: usize) {
        for &idx in &self.tentative {
            self.labels[idx] = 0;
        }
        self.tentative.clear();
        self.growth.truncate(growth_mark);
    }

    fn assign(&mut self, idx: usize, label: i32) {
        debug_assert_eq!(self.labels[idx], 0, "pixel relabeled without a revert");
        debug_assert!(
            (label > 0) == (self.polarity == Polarity::Maxima),
            "label sign disagrees with search polarity"
        );
        self.labels[idx] = label;
        self.tentative.push(idx);
    }

    fn push_plateau(&mut self, idx: usize, label: i32) -> Result<(), RoiError> {
        let limit = self.plateau.limit();
        self.plateau.push(idx).map_err(|_| RoiError::QueueCapacity {
            queue: QueueKind::Plateau,
            limit,
            region: label,
        })
    }

    fn push_growth(&mut self, idx: usize, label: i32) -> Result<(), RoiError> {
        let limit = self.growth.limit();
        self.growth.push(idx).map_err(|_| RoiError::QueueCapacity {
            queue: QueueKind::Growth,
            limit,
            region: label,
        })
    }

    #[inline]
    fn value_at(&self, idx: usize) -> i32 {
        self.source.value(idx % self.width, idx / self.width)
    }

    #[inline]
    fn on_border(&self, idx: usize) -> bool {
        let x = idx % self.width;
        let y = idx / self.width;
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    fn into_map(self) -> RoiMap {
        let (positive_regions, negative_regions) = match self.polarity {
            Polarity::Maxima => (self.committed, 0),
            Polarity::Minima => (0, self.committed),
        };
        RoiMap {
            width: self.width,
            height: self.height,
            labels: self.labels,
            positive_regions,
            negative_regions,
        }
    }
}
