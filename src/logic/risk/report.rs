//! Risk Report
//!
//! Bundles tier + factors into what the result screen renders.

use serde::Serialize;

use super::classifier::{classify_tier, derive_factors};
use super::rules::FACTOR_RISK_MIN;
use super::types::{ClinicalInputs, RiskFactor, RiskTier};

pub const DISCLAIMER: &str = "This is not medical advice. These are the factors your score is based on. \
Please consult a doctor to understand your results.";

/// Everything needed to display one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub probability: f64,
    pub tier: RiskTier,
    pub factors: Vec<RiskFactor>,
}

/// Classify and explain a prediction
pub fn explain(inputs: &ClinicalInputs, probability: f64) -> RiskReport {
    RiskReport {
        probability,
        tier: classify_tier(probability),
        factors: derive_factors(inputs, probability),
    }
}

impl RiskReport {
    /// Percentage with two decimals, e.g. "45.00"
    pub fn percent_text(&self) -> String {
        format!("{:.2}", self.probability * 100.0)
    }

    pub fn is_elevated(&self) -> bool {
        self.probability >= FACTOR_RISK_MIN
    }

    pub fn factors_heading(&self) -> &'static str {
        if self.is_elevated() {
            "Your Primary Risk Factors"
        } else {
            "Your Positive Factors"
        }
    }

    pub fn disclaimer(&self) -> Option<&'static str> {
        self.is_elevated().then_some(DISCLAIMER)
    }
}

/// Maps search for doctors around a location (offered on Critical results)
pub fn doctor_search_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://www.google.com/maps/search/doctors+near+me/@{},{},15z",
        latitude, longitude
    )
}

impl std::fmt::Display for RiskReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Prediction Result")?;
        writeln!(f, "  {} %  Probability of High Risk", self.percent_text())?;
        writeln!(f, "  [{}] {}", self.tier.label(), self.tier.message())?;

        // No factors -> render nothing for the factor card
        if self.factors.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{}", self.factors_heading())?;
        for factor in &self.factors {
            let marker = if factor.severity.is_good() { "✔" } else { "⚠" };
            writeln!(f, "  {} ({}) {}", marker, factor.severity, factor.text)?;
        }
        if let Some(disclaimer) = self.disclaimer() {
            writeln!(f)?;
            writeln!(f, "{}", disclaimer)?;
        }
        Ok(())
    }
}
