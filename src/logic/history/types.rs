//! History Types
//!
//! Data structures only - no persistence logic.

use std::collections::BTreeMap;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Feature name -> submitted value
pub type FeatureMap = BTreeMap<String, f64>;

// ============================================================================
// PREDICTION RECORD
// ============================================================================

/// One past prediction. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Predicted risk (0.0 - 1.0)
    #[serde(alias = "probability_high_risk")]
    pub probability: f64,
    /// Exact form submission that produced the probability
    #[serde(default)]
    pub inputs: FeatureMap,
    /// Creation time (ISO-8601)
    pub timestamp: DateTime<Utc>,
}

impl PredictionRecord {
    /// New record stamped with the current time (millisecond precision,
    /// so the persisted text reproduces the same value)
    pub fn new(probability: f64, inputs: FeatureMap) -> Self {
        Self {
            probability,
            inputs,
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }

    /// Finite and within [0, 1]
    pub fn is_valid_probability(probability: f64) -> bool {
        (0.0..=1.0).contains(&probability)
    }

    /// Probability as a percentage
    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

// ============================================================================
// STATS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryStats {
    pub total_records: usize,
    pub max_records: usize,
    pub average_probability: Option<f64>,
    pub highest_probability: Option<f64>,
    pub lowest_probability: Option<f64>,
    pub newest: Option<DateTime<Utc>>,
    pub oldest: Option<DateTime<Utc>>,
}
