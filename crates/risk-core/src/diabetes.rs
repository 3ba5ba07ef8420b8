//! Diabetes risk scoring
//!
//! FINDRISC-style additive point score over age, BMI, waist
//! circumference, activity, family history, and fasting glucose.
//! HbA1c is collected on the intake form but carries no points.

use serde::{Deserialize, Serialize};

use crate::band::{ClassificationBands, Cutpoint};
use crate::{limits, RiskBand, RiskError, RiskResult, ScoreValue};

/// Band table: score < 7 Low, 7-14 Moderate, above 14 High
pub const DIABETES_BANDS: ClassificationBands = ClassificationBands {
    cutpoints: &[
        Cutpoint { upper: 7.0, inclusive: false, band: RiskBand::Low },
        Cutpoint { upper: 14.0, inclusive: true, band: RiskBand::Moderate },
    ],
    above: RiskBand::High,
};

/// Intake record for a diabetes risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiabetesInput {
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
    /// Waist circumference in centimeters
    pub waist_cm: u32,
    /// Days per week with physical activity (0-7)
    pub activity_days_per_week: u32,
    /// Family history of diabetes
    pub family_history: bool,
    /// Fasting blood glucose in mg/dL
    pub fasting_glucose_mg_dl: u32,
    /// HbA1c percentage; collected but not scored
    pub hba1c_percent: f64,
}

impl DiabetesInput {
    /// Body mass index derived from weight and height
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }

    /// Check every numeric field against its plausible clinical range
    pub fn validate(&self) -> Result<(), RiskError> {
        limits::AGE.check_u32(self.age)?;
        limits::WEIGHT_KG.check_f64(self.weight_kg)?;
        limits::HEIGHT_M.check_f64(self.height_m)?;
        limits::WAIST_CM.check_u32(self.waist_cm)?;
        limits::ACTIVITY_DAYS_PER_WEEK.check_u32(self.activity_days_per_week)?;
        limits::FASTING_GLUCOSE_MG_DL.check_u32(self.fasting_glucose_mg_dl)?;
        limits::HBA1C_PERCENT.check_f64(self.hba1c_percent)?;
        Ok(())
    }

    /// Compute the additive point score and its classification
    pub fn assess(&self) -> RiskResult {
        let mut score: u32 = 0;

        if (45..=54).contains(&self.age) {
            score += 2;
        } else if self.age > 54 {
            score += 3;
        }

        let bmi = self.bmi();
        if bmi > 30.0 {
            score += 3;
        } else if bmi >= 25.0 {
            score += 1;
        }

        if self.waist_cm >= 94 {
            score += 3;
        }
        if self.activity_days_per_week < 4 {
            score += 2;
        }
        if self.family_history {
            score += 3;
        }

        if (100..=125).contains(&self.fasting_glucose_mg_dl) {
            score += 5;
        } else if self.fasting_glucose_mg_dl >= 126 {
            score += 10;
        }

        RiskResult::new(
            ScoreValue::Points(score),
            DIABETES_BANDS.classify(score as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> DiabetesInput {
        // Scores zero points: young, lean, active, no history, normoglycemic
        DiabetesInput {
            age: 30,
            weight_kg: 70.0,
            height_m: 1.80,
            waist_cm: 80,
            activity_days_per_week: 5,
            family_history: false,
            fasting_glucose_mg_dl: 90,
            hba1c_percent: 5.0,
        }
    }

    #[test]
    fn test_zero_score_is_low() {
        let result = baseline().assess();
        assert_eq!(result.score, ScoreValue::Points(0));
        assert_eq!(result.classification, RiskBand::Low);
        assert_eq!(result.display_label, "Low Risk");
    }

    #[test]
    fn test_age_points() {
        let mut input = baseline();
        input.age = 44;
        assert_eq!(input.assess().score, ScoreValue::Points(0));
        input.age = 45;
        assert_eq!(input.assess().score, ScoreValue::Points(2));
        input.age = 54;
        assert_eq!(input.assess().score, ScoreValue::Points(2));
        input.age = 55;
        assert_eq!(input.assess().score, ScoreValue::Points(3));
    }

    #[test]
    fn test_bmi_points() {
        let mut input = baseline();
        input.height_m = 2.0; // bmi = weight / 4, exact in binary
        input.weight_kg = 99.0; // bmi 24.75
        assert_eq!(input.assess().score, ScoreValue::Points(0));
        input.weight_kg = 100.0; // bmi 25.0, lower edge of the +1 band
        assert_eq!(input.assess().score, ScoreValue::Points(1));
        input.weight_kg = 120.0; // bmi 30.0, still the +1 band
        assert_eq!(input.assess().score, ScoreValue::Points(1));
        input.weight_kg = 121.0; // bmi > 30
        assert_eq!(input.assess().score, ScoreValue::Points(3));
    }

    #[test]
    fn test_waist_and_activity_points() {
        let mut input = baseline();
        input.waist_cm = 93;
        assert_eq!(input.assess().score, ScoreValue::Points(0));
        input.waist_cm = 94;
        assert_eq!(input.assess().score, ScoreValue::Points(3));

        input.activity_days_per_week = 3;
        assert_eq!(input.assess().score, ScoreValue::Points(5));
        input.activity_days_per_week = 4;
        assert_eq!(input.assess().score, ScoreValue::Points(3));
    }

    #[test]
    fn test_glucose_points() {
        let mut input = baseline();
        input.fasting_glucose_mg_dl = 99;
        assert_eq!(input.assess().score, ScoreValue::Points(0));
        input.fasting_glucose_mg_dl = 100;
        assert_eq!(input.assess().score, ScoreValue::Points(5));
        input.fasting_glucose_mg_dl = 125;
        assert_eq!(input.assess().score, ScoreValue::Points(5));
        input.fasting_glucose_mg_dl = 126;
        assert_eq!(input.assess().score, ScoreValue::Points(10));
    }

    #[test]
    fn test_classification_boundaries() {
        // age 55 (+3), family history (+3) -> 6 points, Low
        let mut input = baseline();
        input.age = 55;
        input.family_history = true;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(6));
        assert_eq!(result.classification, RiskBand::Low);

        // exactly 7: age 45 (+2), family history (+3), no activity (+2)
        let mut input = baseline();
        input.age = 45;
        input.family_history = true;
        input.activity_days_per_week = 0;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(7));
        assert_eq!(result.classification, RiskBand::Moderate);

        // 14 points: age 55 (+3), waist (+3), family (+3), glucose 100 (+5)
        let mut input = baseline();
        input.age = 55;
        input.waist_cm = 94;
        input.family_history = true;
        input.fasting_glucose_mg_dl = 100;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(14));
        assert_eq!(result.classification, RiskBand::Moderate);

        // 15 points: same plus bmi 25 (+1)
        input.height_m = 2.0;
        input.weight_kg = 100.0;
        let result = input.assess();
        assert_eq!(result.score, ScoreValue::Points(15));
        assert_eq!(result.classification, RiskBand::High);
    }

    #[test]
    fn test_hba1c_carries_no_points() {
        let mut input = baseline();
        input.hba1c_percent = 14.0;
        assert_eq!(input.assess().score, ScoreValue::Points(0));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut input = baseline();
        input.height_m = 0.9;
        assert!(input.validate().is_err());
        input.height_m = 1.8;
        assert!(input.validate().is_ok());
    }
}
