use serde::{Deserialize, Serialize};

/// Options controlling extremum search and catchment growth.
///
/// - `allow_corner`: Use the full 8-neighborhood (diagonals included) for
///   every adjacency test instead of the 4 edge neighbors.
/// - `only_top`: Stop after plateau confirmation and label only the summit
///   pixels, skipping catchment growth.
/// - `invert`: Search for local minima instead of maxima; minima regions
///   receive negative labels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoiOptions {
    /// Include the four diagonal neighbors in adjacency tests.
    pub allow_corner: bool,
    /// Label summit plateaus only, without growing their catchments.
    pub only_top: bool,
    /// Search for minima; committed regions get negative labels.
    pub invert: bool,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self {
            allow_corner: true,
            only_top: false,
            invert: false,
        }
    }
}

impl RoiOptions {
    pub fn with_corner(mut self, allow_corner: bool) -> Self {
        self.allow_corner = allow_corner;
        self
    }

    pub fn with_only_top(mut self, only_top: bool) -> Self {
        self.only_top = only_top;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn polarity(&self) -> Polarity {
        if self.invert {
            Polarity::Minima
        } else {
            Polarity::Maxima
        }
    }
}

/// Search direction threaded through every sample comparison.
///
/// Minima search negates no pixel data; instead all comparisons go through
/// [`Polarity::delta`], so "exceeds" uniformly means "further out in the
/// search direction".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Maxima,
    Minima,
}

impl Polarity {
    /// Signed variation of `value` against `reference`: positive when `value`
    /// lies strictly beyond `reference` in the search direction.
    #[inline]
    pub fn delta(self, value: i32, reference: i32) -> i32 {
        match self {
            Polarity::Maxima => value - reference,
            Polarity::Minima => reference - value,
        }
    }

    /// Label for the `ordinal`-th committed region (1-based).
    #[inline]
    pub fn label(self, ordinal: usize) -> i32 {
        match self {
            Polarity::Maxima => ordinal as i32,
            Polarity::Minima => -(ordinal as i32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_orients_both_polarities() {
        assert_eq!(Polarity::Maxima.delta(7, 4), 3);
        assert_eq!(Polarity::Maxima.delta(4, 7), -3);
        assert_eq!(Polarity::Minima.delta(7, 4), -3);
        assert_eq!(Polarity::Minima.delta(4, 7), 3);
    }

    #[test]
    fn labels_carry_the_polarity_sign() {
        assert_eq!(Polarity::Maxima.label(2), 2);
        assert_eq!(Polarity::Minima.label(2), -2);
    }
}
