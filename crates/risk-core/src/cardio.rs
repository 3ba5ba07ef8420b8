//! Cardiovascular risk scoring
//!
//! Log-linear approximation of a 10-year event-risk model. The
//! coefficients and the 0.88936 base are preserved literally from the
//! source heuristic; they are not calibrated against any canonical
//! ASCVD model. Classification applies to the unrounded percentage.

use serde::{Deserialize, Serialize};

use crate::band::{ClassificationBands, Cutpoint};
use crate::{limits, Gender, RiskBand, RiskError, RiskResult, ScoreValue};

/// Band table on the risk percentage: < 5 Low, 5-7.5 Moderate, above High
pub const CARDIO_BANDS: ClassificationBands = ClassificationBands {
    cutpoints: &[
        Cutpoint { upper: 5.0, inclusive: false, band: RiskBand::Low },
        Cutpoint { upper: 7.5, inclusive: true, band: RiskBand::Moderate },
    ],
    above: RiskBand::High,
};

/// Survival base of the log-linear model
const RISK_BASE: f64 = 0.88936;

/// Intake record for a cardiovascular risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardiovascularInput {
    /// Age in years
    pub age: u32,
    /// Collected on the intake form but not used by the formula
    pub gender: Gender,
    /// Total cholesterol in mg/dL
    pub total_cholesterol_mg_dl: u32,
    /// HDL cholesterol in mg/dL
    pub hdl_mg_dl: u32,
    /// Systolic blood pressure in mmHg
    pub systolic_bp_mm_hg: u32,
    /// Current smoker
    pub is_smoker: bool,
    /// Diagnosed diabetes
    pub has_diabetes: bool,
}

impl CardiovascularInput {
    /// Check every numeric field against its plausible clinical range
    pub fn validate(&self) -> Result<(), RiskError> {
        limits::AGE.check_u32(self.age)?;
        limits::TOTAL_CHOLESTEROL_MG_DL.check_u32(self.total_cholesterol_mg_dl)?;
        limits::HDL_MG_DL.check_u32(self.hdl_mg_dl)?;
        limits::SYSTOLIC_BP_MM_HG.check_u32(self.systolic_bp_mm_hg)?;
        Ok(())
    }

    /// Linear predictor feeding the survival exponent
    fn exponent(&self) -> f64 {
        let mut x = self.age as f64 * 0.08
            + self.total_cholesterol_mg_dl as f64 * 0.003
            - self.hdl_mg_dl as f64 * 0.004
            + self.systolic_bp_mm_hg as f64 * 0.01;
        if self.is_smoker {
            x += 0.5;
        }
        if self.has_diabetes {
            x += 0.4;
        }
        x
    }

    /// Compute the 10-year risk percentage and its classification
    pub fn assess(&self) -> RiskResult {
        let risk_percent = (1.0 - RISK_BASE.powf(self.exponent())) * 100.0;
        RiskResult::new(
            ScoreValue::Percent(risk_percent),
            CARDIO_BANDS.classify(risk_percent),
        )
    }
}
