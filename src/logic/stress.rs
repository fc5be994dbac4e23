//! Stress Result
//!
//! Maps the stress model's label to what the result card shows.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// Parse the backend label. Unknown labels display as Low.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "High Stress" => StressLevel::High,
            "Moderate Stress" => StressLevel::Moderate,
            "Low Stress" => StressLevel::Low,
            other => {
                tracing::warn!("Unknown stress level {:?}, showing as low", other);
                StressLevel::Low
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low Stress",
            StressLevel::Moderate => "Moderate Stress",
            StressLevel::High => "High Stress",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            StressLevel::Low => "stress-low",
            StressLevel::Moderate => "stress-moderate",
            StressLevel::High => "stress-high",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StressLevel::Low => "Your stress level appears to be low. Keep up the good work!",
            StressLevel::Moderate => "Your stress level appears to be moderate. It's a good time to focus on some wellness activities.",
            StressLevel::High => "Your stress level appears to be high. Please consider talking to a professional and using our AI Stress Coach for tips.",
        }
    }
}

/// Stress prediction as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressResult {
    /// Label exactly as returned by the backend
    pub label: String,
    pub level: StressLevel,
}

impl StressResult {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            level: StressLevel::from_label(&label),
            label,
        }
    }
}

impl std::fmt::Display for StressResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Prediction Result")?;
        writeln!(f, "  {}", self.label)?;
        writeln!(f, "  {}", self.level.message())?;
        writeln!(f)?;
        writeln!(f, "Not sure what to do next? Get a personalized plan from the AI Stress Coach:")?;
        writeln!(f, "  healthprism coach --topic work")
    }
}
