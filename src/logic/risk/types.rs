//! Risk Types
//!
//! Core types for risk explanation.
//! No logic here - only data structures and their display attributes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::logic::history::FeatureMap;

// ============================================================================
// RISK TIER
// ============================================================================

/// Qualitative risk bucket derived from a probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Critical,
    VeryHigh,
    High,
    Borderline,
    Low,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Critical => "Critical Risk",
            RiskTier::VeryHigh => "Very High Risk",
            RiskTier::High => "High Risk",
            RiskTier::Borderline => "Borderline",
            RiskTier::Low => "Low Risk",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Critical => "Your results indicate a critical risk. Please consult a medical professional immediately.",
            RiskTier::VeryHigh => "Your results indicate a very high risk. We recommend scheduling a consultation with your doctor.",
            RiskTier::High => "Your results indicate a high risk. Please monitor your health and consider speaking with a doctor.",
            RiskTier::Borderline => "Your risk is borderline. This is a good time to focus on positive lifestyle changes.",
            RiskTier::Low => "Your results indicate a low risk. Keep up your healthy lifestyle!",
        }
    }

    /// Presentation style tag
    pub fn style(&self) -> &'static str {
        match self {
            RiskTier::Critical => "risk-critical",
            RiskTier::VeryHigh => "risk-very-high",
            RiskTier::High => "risk-high",
            RiskTier::Borderline => "risk-borderline",
            RiskTier::Low => "risk-low",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Borderline => 1,
            RiskTier::High => 2,
            RiskTier::VeryHigh => 3,
            RiskTier::Critical => 4,
        }
    }

    /// Critical results offer a "find a doctor near you" action
    pub fn offers_doctor_search(&self) -> bool {
        matches!(self, RiskTier::Critical)
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// FACTOR SEVERITY
// ============================================================================

/// Severity of an explanatory factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Presentation style tag (`factor-<severity>`)
    pub fn style(&self) -> &'static str {
        match self {
            Severity::Good => "factor-good",
            Severity::High => "factor-high",
            Severity::Medium => "factor-medium",
            Severity::Low => "factor-low",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Severity::Good)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK FACTOR
// ============================================================================

/// One human-readable explanation tied to an input threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub text: String,
    pub severity: Severity,
}

// ============================================================================
// CLINICAL INPUTS
// ============================================================================

/// The eight clinical fields sent to the heart-risk model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClinicalInputs {
    /// Age (years)
    #[validate(range(min = 1.0, max = 120.0))]
    pub age: f64,
    /// Resting blood pressure (mm Hg)
    #[validate(range(min = 50.0, max = 250.0))]
    pub trestbps: f64,
    /// Serum cholesterol (mg/dl)
    #[validate(range(min = 100.0, max = 600.0))]
    pub chol: f64,
    /// Maximum heart rate achieved
    #[validate(range(min = 60.0, max = 220.0))]
    pub thalach: f64,
    /// ST depression induced by exercise
    #[validate(range(min = 0.0, max = 10.0))]
    pub oldpeak: f64,
    /// Chest pain type (0 = typical angina .. 3 = asymptomatic)
    #[validate(range(max = 3))]
    pub cp: u8,
    /// Number of major vessels colored by fluoroscopy
    #[validate(range(max = 4))]
    pub ca: u8,
    /// Thalassemia test result (3 = reversible defect)
    #[validate(range(max = 3))]
    pub thal: u8,
}

impl ClinicalInputs {
    /// Field names in form order
    pub const FIELDS: [&'static str; 8] =
        ["age", "trestbps", "chol", "thalach", "oldpeak", "cp", "ca", "thal"];

    /// Flatten into the name -> number map stored with each prediction
    pub fn to_feature_map(&self) -> FeatureMap {
        [
            ("age", self.age),
            ("trestbps", self.trestbps),
            ("chol", self.chol),
            ("thalach", self.thalach),
            ("oldpeak", self.oldpeak),
            ("cp", f64::from(self.cp)),
            ("ca", f64::from(self.ca)),
            ("thal", f64::from(self.thal)),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
    }

    /// Rebuild from a stored feature map.
    ///
    /// None when a field is missing, a code is not a whole number, or any
    /// value is outside the form's ranges.
    pub fn from_feature_map(map: &FeatureMap) -> Option<Self> {
        let get = |name: &str| map.get(name).copied();
        let code = |name: &str| {
            get(name)
                .filter(|v| v.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(v))
                .map(|v| v as u8)
        };

        let inputs = Self {
            age: get("age")?,
            trestbps: get("trestbps")?,
            chol: get("chol")?,
            thalach: get("thalach")?,
            oldpeak: get("oldpeak")?,
            cp: code("cp")?,
            ca: code("ca")?,
            thal: code("thal")?,
        };
        inputs.validate().ok()?;
        Some(inputs)
    }
}

impl Default for ClinicalInputs {
    fn default() -> Self {
        Self {
            age: 63.0,
            trestbps: 145.0,
            chol: 233.0,
            thalach: 150.0,
            oldpeak: 2.3,
            cp: 3,
            ca: 0,
            thal: 1,
        }
    }
}
