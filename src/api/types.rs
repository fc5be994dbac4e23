//! Backend request/response types

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::logic::history::FeatureMap;

// ============================================================================
// CHAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub from: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            from: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            from: Sender::User,
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatbotRequest<'a> {
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
pub struct ChatbotResponse {
    pub answer: String,
}

// ============================================================================
// PREDICTIONS
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(deserialize_with = "numeric")]
    pub probability_high_risk: f64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StressResponse {
    pub stress_level: String,
}

/// One prediction stored server-side for the logged-in user
#[derive(Debug, Clone, Deserialize)]
pub struct ServerPrediction {
    pub id: i64,
    #[serde(deserialize_with = "numeric")]
    pub probability: f64,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub inputs: FeatureMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerHistory {
    pub username: String,
    #[serde(default)]
    pub history: Vec<ServerPrediction>,
}

// ============================================================================
// PLANNERS
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MealPlanResponse {
    pub meal_plan: String,
}

#[derive(Debug, Deserialize)]
pub struct StressPlanResponse {
    pub stress_plan: String,
}

// ============================================================================
// AUTH
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accept a JSON number or a numeric string. NaN and infinities are rejected.
fn numeric<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Number(f64),
        Text(String),
    }

    let value = match Numeric::deserialize(deserializer)? {
        Numeric::Number(n) => n,
        Numeric::Text(s) => s.trim().parse().map_err(serde::de::Error::custom)?,
    };

    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!("not a finite number: {}", value)));
    }
    Ok(value)
}
