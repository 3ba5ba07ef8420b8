//! Seeded demo trend data
//!
//! Decorative case-count series for the public health tracker charts.
//! The walk is a deterministic function of an explicit seed; beyond
//! that determinism, nothing here is part of the clinical contract.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// First year of the demo series
pub const FIRST_YEAR: u32 = 2013;
/// Last year of the demo series (inclusive)
pub const LAST_YEAR: u32 = 2022;

/// Health issues charted by the original tracker
pub const DEFAULT_ISSUES: &[&str] = &[
    "Diabetes",
    "Heart Disease",
    "Cancer",
    "Tuberculosis",
    "Malaria",
    "Dengue",
    "Hypertension",
];

/// One point of a demo trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: u32,
    pub issue: String,
    pub cases_thousands: i32,
}

/// Generate the default demo series from an explicit seed
pub fn demo_trend(seed: u64) -> Vec<TrendPoint> {
    demo_trend_for(seed, DEFAULT_ISSUES)
}

/// Generate a demo series for a custom issue list
///
/// Each issue starts at a base level in 100-300 thousand cases and
/// takes a yearly step of -10..=+10, matching the shape of the
/// original tracker's charts.
pub fn demo_trend_for(seed: u64, issues: &[&str]) -> Vec<TrendPoint> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(issues.len() * (LAST_YEAR - FIRST_YEAR + 1) as usize);

    for issue in issues {
        let mut level: i32 = rng.gen_range(100..=300);
        for year in FIRST_YEAR..=LAST_YEAR {
            level += rng.gen_range(-10..=10);
            points.push(TrendPoint {
                year,
                issue: (*issue).to_string(),
                cases_thousands: level,
            });
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_a_seed() {
        assert_eq!(demo_trend(42), demo_trend(42));
        assert_ne!(demo_trend(42), demo_trend(43));
    }

    #[test]
    fn test_series_shape() {
        let points = demo_trend(7);
        assert_eq!(points.len(), DEFAULT_ISSUES.len() * 10);
        assert!(points.iter().all(|p| (FIRST_YEAR..=LAST_YEAR).contains(&p.year)));

        // Yearly steps stay within the +/-10 walk
        for series in points.chunks(10) {
            for pair in series.windows(2) {
                assert!((pair[1].cases_thousands - pair[0].cases_thousands).abs() <= 10);
            }
        }
    }

    #[test]
    fn test_custom_issue_list() {
        let points = demo_trend_for(1, &["Influenza"]);
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| p.issue == "Influenza"));
    }
}
