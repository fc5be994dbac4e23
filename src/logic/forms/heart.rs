//! Heart-risk form

use validator::Validate;

use super::{failed_fields, FormError};
use crate::logic::risk::ClinicalInputs;

/// Raw heart-risk form as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartRiskForm {
    pub age: String,
    pub trestbps: String,
    pub chol: String,
    pub thalach: String,
    pub oldpeak: String,
    pub cp: String,
    pub ca: String,
    pub thal: String,
}

impl Default for HeartRiskForm {
    fn default() -> Self {
        Self {
            age: "63".to_string(),
            trestbps: "145".to_string(),
            chol: "233".to_string(),
            thalach: "150".to_string(),
            oldpeak: "2.3".to_string(),
            cp: "3".to_string(),
            ca: "0".to_string(),
            thal: "1".to_string(),
        }
    }
}

impl HeartRiskForm {
    /// Update one field by name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let slot = match name {
            "age" => &mut self.age,
            "trestbps" => &mut self.trestbps,
            "chol" => &mut self.chol,
            "thalach" => &mut self.thalach,
            "oldpeak" => &mut self.oldpeak,
            "cp" => &mut self.cp,
            "ca" => &mut self.ca,
            "thal" => &mut self.thal,
            other => return Err(FormError::Invalid(format!("Unknown field: {}", other))),
        };
        *slot = value.into();
        Ok(())
    }

    /// Parse every field, then range-check.
    ///
    /// All non-numeric fields are reported together, in form order.
    pub fn parse(&self) -> Result<ClinicalInputs, FormError> {
        let mut invalid = Vec::new();

        let age = number(&self.age, "age", &mut invalid);
        let trestbps = number(&self.trestbps, "trestbps", &mut invalid);
        let chol = number(&self.chol, "chol", &mut invalid);
        let thalach = number(&self.thalach, "thalach", &mut invalid);
        let oldpeak = number(&self.oldpeak, "oldpeak", &mut invalid);
        let cp = code(&self.cp, "cp", &mut invalid);
        let ca = code(&self.ca, "ca", &mut invalid);
        let thal = code(&self.thal, "thal", &mut invalid);

        if !invalid.is_empty() {
            return Err(FormError::InvalidNumbers(invalid));
        }

        let inputs = ClinicalInputs {
            age,
            trestbps,
            chol,
            thalach,
            oldpeak,
            cp,
            ca,
            thal,
        };

        inputs
            .validate()
            .map_err(|e| FormError::OutOfRange(failed_fields(&e, &ClinicalInputs::FIELDS)))?;

        Ok(inputs)
    }
}

fn number(raw: &str, name: &str, invalid: &mut Vec<String>) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            invalid.push(name.to_string());
            0.0
        }
    }
}

fn code(raw: &str, name: &str, invalid: &mut Vec<String>) -> u8 {
    raw.trim().parse::<u8>().unwrap_or_else(|_| {
        invalid.push(name.to_string());
        0
    })
}
