//! Oncology risk scoring
//!
//! Simplified WHO/IARC-style additive point score. The alcohol
//! threshold is gender-specific: more than 7 drinks/week for men,
//! more than 14 for women.

use serde::{Deserialize, Serialize};

use crate::band::{ClassificationBands, Cutpoint};
use crate::{limits, Gender, RiskBand, RiskError, RiskResult, ScoreValue};

/// Band table: score 0-2 Low, 3-5 Moderate, above 5 High
pub const ONCOLOGY_BANDS: ClassificationBands = ClassificationBands {
    cutpoints: &[
        Cutpoint { upper: 2.0, inclusive: true, band: RiskBand::Low },
        Cutpoint { upper: 5.0, inclusive: true, band: RiskBand::Moderate },
    ],
    above: RiskBand::High,
};

/// Intake record for an oncology risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OncologyInput {
    /// Age in years
    pub age: u32,
    pub gender: Gender,
    /// Family history of cancer
    pub family_history: bool,
    /// Cumulative smoking exposure in pack-years
    pub smoking_pack_years: u32,
    /// Alcohol consumption in drinks per week
    pub alcohol_drinks_per_week: u32,
    /// Body mass index, entered directly
    pub bmi: f64,
    /// Days per week with physical activity (0-7)
    pub activity_days_per_week: u32,
}

impl OncologyInput {
    /// Check every numeric field against its plausible clinical range
    pub fn validate(&self) -> Result<(), RiskError> {
        limits::AGE.check_u32(self.age)?;
        limits::SMOKING_PACK_YEARS.check_u32(self.smoking_pack_years)?;
        limits::ALCOHOL_DRINKS_PER_WEEK.check_u32(self.alcohol_drinks_per_week)?;
        limits::BMI.check_f64(self.bmi)?;
        limits::ACTIVITY_DAYS_PER_WEEK.check_u32(self.activity_days_per_week)?;
        Ok(())
    }

    /// Compute the additive point score and its classification
    pub fn assess(&self) -> RiskResult {
        let mut score: u32 = 0;

        if self.age > 50 {
            score += 2;
        }
        if self.family_history {
            score += 2;
        }
        if self.smoking_pack_years > 20 {
            score += 3;
        }

        let alcohol_threshold = match self.gender {
            Gender::Male => 7,
            Gender::Female => 14,
        };
        if self.alcohol_drinks_per_week > alcohol_threshold {
            score += 1;
        }

        if self.bmi > 30.0 {
            score += 1;
        }
        if self.activity_days_per_week < 3 {
            score += 1;
        }

        RiskResult::new(
            ScoreValue::Points(score),
            ONCOLOGY_BANDS.classify(score as f64),
        )
    }
}
