//! Clinically plausible closed ranges for intake fields
//!
//! One constant per numeric field collected by the four intake forms.
//! The scorers themselves never range-check; callers (the CLI, or any
//! embedding application) run `validate()` on an input record before
//! assessing it.

use crate::RiskError;

/// Closed range `[min, max]` for a named intake field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeLimit {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl RangeLimit {
    /// Check a float field against the range
    pub fn check_f64(&self, value: f64) -> Result<(), RiskError> {
        if value < self.min || value > self.max {
            return Err(RiskError::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Check an integer field against the range
    pub fn check_u32(&self, value: u32) -> Result<(), RiskError> {
        self.check_f64(value as f64)
    }
}

pub const AGE: RangeLimit = RangeLimit { field: "age", min: 18.0, max: 120.0 };
pub const WEIGHT_KG: RangeLimit = RangeLimit { field: "weight_kg", min: 30.0, max: 300.0 };
pub const HEIGHT_M: RangeLimit = RangeLimit { field: "height_m", min: 1.0, max: 2.5 };
pub const WAIST_CM: RangeLimit = RangeLimit { field: "waist_cm", min: 50.0, max: 200.0 };
pub const ACTIVITY_DAYS_PER_WEEK: RangeLimit =
    RangeLimit { field: "activity_days_per_week", min: 0.0, max: 7.0 };
pub const FASTING_GLUCOSE_MG_DL: RangeLimit =
    RangeLimit { field: "fasting_glucose_mg_dl", min: 50.0, max: 300.0 };
pub const HBA1C_PERCENT: RangeLimit =
    RangeLimit { field: "hba1c_percent", min: 3.0, max: 15.0 };
pub const TOTAL_CHOLESTEROL_MG_DL: RangeLimit =
    RangeLimit { field: "total_cholesterol_mg_dl", min: 100.0, max: 400.0 };
pub const HDL_MG_DL: RangeLimit = RangeLimit { field: "hdl_mg_dl", min: 20.0, max: 100.0 };
pub const SYSTOLIC_BP_MM_HG: RangeLimit =
    RangeLimit { field: "systolic_bp_mm_hg", min: 90.0, max: 200.0 };
pub const SMOKING_PACK_YEARS: RangeLimit =
    RangeLimit { field: "smoking_pack_years", min: 0.0, max: 100.0 };
pub const ALCOHOL_DRINKS_PER_WEEK: RangeLimit =
    RangeLimit { field: "alcohol_drinks_per_week", min: 0.0, max: 50.0 };
pub const BMI: RangeLimit = RangeLimit { field: "bmi", min: 15.0, max: 50.0 };
pub const INTRAOCULAR_PRESSURE_MM_HG: RangeLimit =
    RangeLimit { field: "intraocular_pressure_mm_hg", min: 5.0, max: 40.0 };
pub const YEARS_WITH_DIABETES: RangeLimit =
    RangeLimit { field: "years_with_diabetes", min: 0.0, max: 50.0 };
