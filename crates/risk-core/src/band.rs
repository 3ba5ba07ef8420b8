//! Threshold band tables shared by the four scorers
//!
//! Each scorer classifies its score through an ordered table of
//! cutpoints evaluated first to last, with a catch-all band above the
//! final bound. Keeping the inclusive/exclusive flag explicit on every
//! cutpoint makes the boundary semantics testable per scorer instead
//! of being buried in comparison operators.

use crate::RiskBand;

/// A single upper cutpoint in an ordered band table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutpoint {
    /// Upper bound of the band
    pub upper: f64,
    /// Whether a score exactly equal to `upper` falls inside this band
    pub inclusive: bool,
    /// Band assigned to scores under (or at) the bound
    pub band: RiskBand,
}

/// Ordered band table mapping a score to a [`RiskBand`]
///
/// Evaluation is first-match; with strictly ascending cutpoints this
/// partitions the score line with no gaps and no overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationBands {
    /// Cutpoints in ascending order of `upper`
    pub cutpoints: &'static [Cutpoint],
    /// Band for any score above the last cutpoint
    pub above: RiskBand,
}

impl ClassificationBands {
    /// Classify a score. Total: every value maps to exactly one band.
    pub fn classify(&self, value: f64) -> RiskBand {
        for cut in self.cutpoints {
            if value < cut.upper || (cut.inclusive && value == cut.upper) {
                return cut.band;
            }
        }
        self.above
    }

    /// Invariant check: cutpoints strictly ascending
    pub fn is_ordered(&self) -> bool {
        self.cutpoints.windows(2).all(|pair| pair[0].upper < pair[1].upper)
    }
}
