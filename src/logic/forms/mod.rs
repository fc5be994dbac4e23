//! Form Records
//!
//! One explicit record per form. Raw user input is parsed and validated here,
//! before anything reaches the backend or the risk engine.

pub mod heart;
pub mod stress;
pub mod requests;

use thiserror::Error;
use validator::ValidationErrors;

pub use heart::HeartRiskForm;
pub use requests::{Credentials, NutritionGoal, NutritionRequest, StressCoachRequest, StressTopic};
pub use stress::{BmiCategory, Gender, StressForm};

/// Form errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// Fields that are not numbers
    #[error("Invalid data format. Please check all fields. ({})", .0.join(", "))]
    InvalidNumbers(Vec<String>),

    /// Fields outside their allowed range
    #[error("Some values are out of range. Please check: {}", .0.join(", "))]
    OutOfRange(Vec<String>),

    /// Anything else (missing text, malformed value)
    #[error("{0}")]
    Invalid(String),
}

/// Field names with validation errors, in the given form order
pub(crate) fn failed_fields(errors: &ValidationErrors, order: &[&str]) -> Vec<String> {
    let failed: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|name| name.to_string())
        .collect();

    order
        .iter()
        .filter(|name| failed.iter().any(|f| f.as_str() == **name))
        .map(|name| name.to_string())
        .collect()
}
