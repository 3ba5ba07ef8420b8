//! Ocular risk scoring
//!
//! Diabetic retinopathy / glaucoma point score. HbA1c and diabetes
//! duration only contribute points inside the diabetes branch; both
//! checks are independent of each other.

use serde::{Deserialize, Serialize};

use crate::band::{ClassificationBands, Cutpoint};
use crate::{limits, RiskBand, RiskError, RiskResult, ScoreValue};

/// Band table: score 0-2 Low, 3-4 Moderate, above 4 High
pub const OCULAR_BANDS: ClassificationBands = ClassificationBands {
    cutpoints: &[
        Cutpoint { upper: 2.0, inclusive: true, band: RiskBand::Low },
        Cutpoint { upper: 4.0, inclusive: true, band: RiskBand::Moderate },
    ],
    above: RiskBand::High,
};

/// Intake record for an ocular risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcularInput {
    /// Diagnosed diabetes
    pub has_diabetes: bool,
    /// HbA1c percentage; only scored when `has_diabetes` is set
    pub hba1c_percent: f64,
    /// Years since the diabetes diagnosis; only scored when
    /// `has_diabetes` is set
    pub years_with_diabetes: u32,
    /// Intraocular pressure in mmHg
    pub intraocular_pressure_mm_hg: u32,
    /// Family history of glaucoma
    pub family_history_glaucoma: bool,
    /// Diagnosed hypertension
    pub has_hypertension: bool,
}

impl OcularInput {
    /// Check every numeric field against its plausible clinical range
    pub fn validate(&self) -> Result<(), RiskError> {
        limits::HBA1C_PERCENT.check_f64(self.hba1c_percent)?;
        limits::YEARS_WITH_DIABETES.check_u32(self.years_with_diabetes)?;
        limits::INTRAOCULAR_PRESSURE_MM_HG.check_u32(self.intraocular_pressure_mm_hg)?;
        Ok(())
    }

    /// Compute the additive point score and its classification
    pub fn assess(&self) -> RiskResult {
        let mut score: u32 = 0;

        if self.has_diabetes {
            if self.hba1c_percent > 7.0 {
                score += 2;
            }
            if self.years_with_diabetes > 10 {
                score += 2;
            }
        }

        if self.has_hypertension {
            score += 1;
        }
        if self.family_history_glaucoma {
            score += 1;
        }
        if self.intraocular_pressure_mm_hg > 21 {
            score += 2;
        }

        RiskResult::new(
            ScoreValue::Points(score),
            OCULAR_BANDS.classify(score as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> OcularInput {
        OcularInput {
            has_diabetes: false,
            hba1c_percent: 5.5,
            years_with_diabetes: 0,
            intraocular_pressure_mm_hg: 15,
            family_history_glaucoma: false,
            has_hypertension: false,
        }
    }

    #[test]
    fn test_zero_score_is_low() {
        let result = baseline().assess();
        assert_eq!(result.score, ScoreValue::Points(0));
        assert_eq!(result.classification, RiskBand::Low);
    }

    #[test]
    fn test_reference_diabetic_profile() {
        // Diabetic, HbA1c 8 (+2), 5 years, normal pressure -> 2, Low
        let input = OcularInput {
            has_diabetes: true,
            hba1c_percent: 8.0,
            years_with_diabetes: 5,
            intraocular_pressure_mm_hg: 18,
            family_history_glaucoma: false,
            has_hypertension: false,
        };
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(2));
        assert_eq!(result.classification, RiskBand::Low);
    }

    #[test]
    fn test_diabetes_branch_gates_hba1c_and_duration() {
        // Same HbA1c and duration score nothing without the diagnosis
        let mut input = baseline();
        input.hba1c_percent = 9.0;
        input.years_with_diabetes = 20;
        assert_eq!(input.assess().score, ScoreValue::Points(0));

        input.has_diabetes = true;
        assert_eq!(input.assess().score, ScoreValue::Points(4));
    }

    #[test]
    fn test_branch_conditions_are_independent() {
        let mut input = baseline();
        input.has_diabetes = true;
        input.hba1c_percent = 6.5;
        input.years_with_diabetes = 11;
        // duration alone
        assert_eq!(input.assess().score, ScoreValue::Points(2));
        input.hba1c_percent = 7.1;
        input.years_with_diabetes = 10;
        // hba1c alone
        assert_eq!(input.assess().score, ScoreValue::Points(2));
    }

    #[test]
    fn test_pressure_threshold() {
        let mut input = baseline();
        input.intraocular_pressure_mm_hg = 21;
        assert_eq!(input.assess().score, ScoreValue::Points(0));
        input.intraocular_pressure_mm_hg = 22;
        assert_eq!(input.assess().score, ScoreValue::Points(2));
    }

    #[test]
    fn test_classification_boundaries() {
        // 3 points: hypertension + pressure -> Moderate
        let mut input = baseline();
        input.has_hypertension = true;
        input.intraocular_pressure_mm_hg = 25;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(3));
        assert_eq!(result.classification, RiskBand::Moderate);

        // 4 points: add family history -> still Moderate
        input.family_history_glaucoma = true;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(4));
        assert_eq!(result.classification, RiskBand::Moderate);

        // 6 points: add long-standing diabetes -> High
        input.has_diabetes = true;
        input.years_with_diabetes = 12;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(6));
        assert_eq!(result.classification, RiskBand::High);
    }

    #[test]
    fn test_max_score_is_eight() {
        let input = OcularInput {
            has_diabetes: true,
            hba1c_percent: 12.0,
            years_with_diabetes: 30,
            intraocular_pressure_mm_hg: 35,
            family_history_glaucoma: true,
            has_hypertension: true,
        };
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(8));
        assert_eq!(result.classification, RiskBand::High);
    }
}
