//! Health Risk Core - Deterministic Risk Scoring Library
//!
//! Pure Rust implementation of four independent health risk scorers
//! for clinical decision support:
//!
//! - Diabetes (FINDRISC-style additive point score)
//! - Cardiovascular (log-linear 10-year event-risk percentage)
//! - Oncology (simplified WHO/IARC-style point score)
//! - Ocular (diabetic retinopathy / glaucoma point score)
//!
//! Every scorer is a pure function from an immutable input record to a
//! [`RiskResult`]: a numeric score plus a three-tier [`RiskBand`]
//! classification. There is no I/O, no shared state, and no failure
//! mode for in-range inputs; range checking is a separate, explicit
//! step ([`DiabetesInput::validate`] and friends).
//!
//! The formulas are illustrative approximations of public clinical
//! heuristics. This is not a validated medical device.
//!
//! # Example
//!
//! ```rust
//! use health_risk_core::{DiabetesInput, RiskBand};
//!
//! let input = DiabetesInput {
//!     age: 52,
//!     weight_kg: 88.0,
//!     height_m: 1.75,
//!     waist_cm: 96,
//!     activity_days_per_week: 2,
//!     family_history: true,
//!     fasting_glucose_mg_dl: 110,
//!     hba1c_percent: 5.9,
//! };
//!
//! input.validate().unwrap();
//! let result = input.assess();
//!
//! assert_eq!(result.classification, RiskBand::High);
//! println!("{}: {}", result.score, result.display_label);
//! ```

pub mod band;
pub mod cardio;
pub mod diabetes;
pub mod limits;
pub mod ocular;
pub mod oncology;

#[cfg(feature = "demo")]
pub mod trend;

// Re-export commonly used types for convenience
pub use band::{ClassificationBands, Cutpoint};
pub use cardio::CardiovascularInput;
pub use diabetes::DiabetesInput;
pub use ocular::OcularInput;
pub use oncology::OncologyInput;

use serde::{Deserialize, Serialize};

/// Three-tier risk classification shared by all scorers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    /// Low risk - routine follow-up
    Low,
    /// Moderate risk - lifestyle counselling / closer monitoring
    Moderate,
    /// High risk - clinical work-up recommended
    High,
}

impl RiskBand {
    /// Display label as shown to the patient
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
        }
    }

    /// One-line interpretation
    pub fn description(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low risk - maintain current habits, routine screening",
            RiskBand::Moderate => "Moderate risk - lifestyle changes and follow-up advised",
            RiskBand::High => "High risk - clinical evaluation recommended",
        }
    }
}

/// Biological gender as collected by the intake forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: '{}'", other)),
        }
    }
}

/// Raw score produced by a scorer: either an additive point total or a
/// percentage (cardiovascular 10-year risk)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreValue {
    /// Integer point total
    Points(u32),
    /// Unrounded percentage; rounded to one decimal at display time only
    Percent(f64),
}

impl ScoreValue {
    /// The raw numeric value (unrounded for percentages)
    pub fn value(&self) -> f64 {
        match self {
            ScoreValue::Points(p) => *p as f64,
            ScoreValue::Percent(p) => *p,
        }
    }
}

impl std::fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValue::Points(p) => write!(f, "{} points", p),
            ScoreValue::Percent(p) => write!(f, "{:.1}%", p),
        }
    }
}

/// Outcome of a single assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Numeric score (points or percentage)
    pub score: ScoreValue,
    /// Three-tier classification derived from the score
    pub classification: RiskBand,
    /// Display label for the classification (e.g. "Moderate Risk")
    pub display_label: String,
}

impl RiskResult {
    pub(crate) fn new(score: ScoreValue, classification: RiskBand) -> Self {
        RiskResult {
            score,
            classification,
            display_label: classification.label().to_string(),
        }
    }
}

/// A single assessment request, tagged with its category
///
/// This is the one entry point a presentation layer needs: deserialize
/// a tagged record, `validate`, `assess`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum AssessmentRequest {
    Diabetes(DiabetesInput),
    Cardiovascular(CardiovascularInput),
    Oncology(OncologyInput),
    Ocular(OcularInput),
}

impl AssessmentRequest {
    /// Category name matching the serde tag
    pub fn category(&self) -> &'static str {
        match self {
            AssessmentRequest::Diabetes(_) => "diabetes",
            AssessmentRequest::Cardiovascular(_) => "cardiovascular",
            AssessmentRequest::Oncology(_) => "oncology",
            AssessmentRequest::Ocular(_) => "ocular",
        }
    }

    /// Check every numeric field against its plausible clinical range
    pub fn validate(&self) -> Result<(), RiskError> {
        match self {
            AssessmentRequest::Diabetes(input) => input.validate(),
            AssessmentRequest::Cardiovascular(input) => input.validate(),
            AssessmentRequest::Oncology(input) => input.validate(),
            AssessmentRequest::Ocular(input) => input.validate(),
        }
    }

    /// Run the matching scorer
    pub fn assess(&self) -> RiskResult {
        match self {
            AssessmentRequest::Diabetes(input) => input.assess(),
            AssessmentRequest::Cardiovascular(input) => input.assess(),
            AssessmentRequest::Oncology(input) => input.assess(),
            AssessmentRequest::Ocular(input) => input.assess(),
        }
    }
}

/// Errors that can occur around the scoring core
///
/// The scorers themselves are total over their declared domain; errors
/// arise only from range validation at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskError {
    /// A numeric field is outside its clinically plausible closed range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl std::fmt::Display for RiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{} = {} is outside the plausible range [{}, {}]",
                    field, value, min, max
                )
            }
        }
    }
}

impl std::error::Error for RiskError {}
