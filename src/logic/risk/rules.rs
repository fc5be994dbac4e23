//! Risk Rules & Thresholds
//!
//! Tier thresholds and the ordered factor rule tables.
//! No classification logic here - only constants and the declarative rules.

use super::types::{ClinicalInputs, Severity};

// ============================================================================
// TIER THRESHOLDS (percent, strict >)
// ============================================================================

pub const CRITICAL_ABOVE: f64 = 90.0;
pub const VERY_HIGH_ABOVE: f64 = 70.0;
pub const HIGH_ABOVE: f64 = 50.0;
pub const BORDERLINE_ABOVE: f64 = 30.0;

/// Probability at or above which risk factors (not positives) are listed
pub const FACTOR_RISK_MIN: f64 = 0.30;

// ============================================================================
// FACTOR THRESHOLDS
// ============================================================================

pub const TYPICAL_ANGINA_CP: u8 = 0;
pub const REVERSIBLE_DEFECT_THAL: u8 = 3;
pub const VESSELS_ABOVE: u8 = 1;
pub const OLDPEAK_ABOVE: f64 = 2.0;
pub const LOW_THALACH_BELOW: f64 = 130.0;
pub const EXCELLENT_THALACH_ABOVE: f64 = 160.0;
pub const AGE_ABOVE: f64 = 55.0;
pub const TRESTBPS_ABOVE: f64 = 140.0;
pub const CHOL_ABOVE: f64 = 240.0;

// ============================================================================
// RULE TABLES
// ============================================================================

/// One row of a factor table: when `applies` holds, emit `message` at `severity`
#[derive(Clone, Copy)]
pub struct FactorRule {
    pub name: &'static str,
    pub severity: Severity,
    pub applies: fn(&ClinicalInputs) -> bool,
    pub message: fn(&ClinicalInputs) -> String,
}

impl std::fmt::Debug for FactorRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorRule")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .finish()
    }
}

/// Evaluated when probability < FACTOR_RISK_MIN
pub static POSITIVE_RULES: [FactorRule; 2] = [
    FactorRule {
        name: "healthy_indicators",
        severity: Severity::Good,
        applies: |_| true,
        message: |_| {
            "Your key indicators (like Chest Pain Type, Thal, and CA) are all in a healthy range."
                .to_string()
        },
    },
    FactorRule {
        name: "excellent_heart_rate",
        severity: Severity::Good,
        applies: |i| i.thalach > EXCELLENT_THALACH_ABOVE,
        message: |i| {
            format!(
                "Your Max Heart Rate ({}) is excellent, indicating good cardiac fitness.",
                i.thalach
            )
        },
    },
];

/// Evaluated when probability >= FACTOR_RISK_MIN. Every row is checked.
pub static RISK_RULES: [FactorRule; 8] = [
    FactorRule {
        name: "typical_angina",
        severity: Severity::High,
        applies: |i| i.cp == TYPICAL_ANGINA_CP,
        message: |_| {
            "Chest Pain Type 0 (Typical Angina) is the strongest predictor of high risk."
                .to_string()
        },
    },
    FactorRule {
        name: "reversible_defect",
        severity: Severity::High,
        applies: |i| i.thal == REVERSIBLE_DEFECT_THAL,
        message: |_| {
            "A Thal test result of 3 (Reversible Defect) is a critical risk indicator.".to_string()
        },
    },
    FactorRule {
        name: "blocked_vessels",
        severity: Severity::High,
        applies: |i| i.ca > VESSELS_ABOVE,
        message: |i| {
            format!(
                "Having {} major vessels blocked (CA) is a significant risk factor.",
                i.ca
            )
        },
    },
    FactorRule {
        name: "high_oldpeak",
        severity: Severity::High,
        applies: |i| i.oldpeak > OLDPEAK_ABOVE,
        message: |i| {
            format!(
                "An Oldpeak of {} is high, which often indicates significant heart stress.",
                i.oldpeak
            )
        },
    },
    FactorRule {
        name: "low_heart_rate",
        severity: Severity::Medium,
        applies: |i| i.thalach < LOW_THALACH_BELOW,
        message: |i| {
            format!(
                "A low Max Heart Rate ({}) during a stress test can be a sign of poor cardiac fitness.",
                i.thalach
            )
        },
    },
    FactorRule {
        name: "age",
        severity: Severity::Low,
        applies: |i| i.age > AGE_ABOVE,
        message: |i| format!("Age ({}) is a contributing risk factor.", i.age),
    },
    FactorRule {
        name: "resting_bp",
        severity: Severity::Low,
        applies: |i| i.trestbps > TRESTBPS_ABOVE,
        message: |i| format!("Your Resting BP ({}) is elevated.", i.trestbps),
    },
    FactorRule {
        name: "cholesterol",
        severity: Severity::Low,
        applies: |i| i.chol > CHOL_ABOVE,
        message: |i| format!("Your Cholesterol level ({}) is high.", i.chol),
    },
];

/// Rule table that applies at the given probability
pub fn rules_for(probability: f64) -> &'static [FactorRule] {
    if probability < FACTOR_RISK_MIN {
        &POSITIVE_RULES
    } else {
        &RISK_RULES
    }
}
