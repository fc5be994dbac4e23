//! Planner, coach and auth request forms

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{failed_fields, FormError};

// ============================================================================
// NUTRITION PLANNER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutritionGoal {
    #[serde(rename = "lower cholesterol")]
    LowerCholesterol,
    #[serde(rename = "lose weight")]
    LoseWeight,
    #[serde(rename = "general heart health")]
    GeneralHeartHealth,
    #[serde(rename = "build muscle")]
    BuildMuscle,
}

impl NutritionGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionGoal::LowerCholesterol => "lower cholesterol",
            NutritionGoal::LoseWeight => "lose weight",
            NutritionGoal::GeneralHeartHealth => "general heart health",
            NutritionGoal::BuildMuscle => "build muscle",
        }
    }
}

impl FromStr for NutritionGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "lower cholesterol" => Ok(NutritionGoal::LowerCholesterol),
            "lose weight" => Ok(NutritionGoal::LoseWeight),
            "general heart health" => Ok(NutritionGoal::GeneralHeartHealth),
            "build muscle" => Ok(NutritionGoal::BuildMuscle),
            other => Err(format!("unknown goal: {}", other)),
        }
    }
}

/// Meal-plan request, tailored by the latest heart-risk score when known
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct NutritionRequest {
    #[validate(range(min = 1, max = 120))]
    pub age: u32,
    pub goal: NutritionGoal,
    #[validate(length(max = 200))]
    pub restrictions: String,
    #[serde(rename = "riskScore")]
    pub risk_score: Option<f64>,
}

impl NutritionRequest {
    pub fn new(age: u32, goal: NutritionGoal, restrictions: impl Into<String>) -> Self {
        let restrictions = restrictions.into();
        Self {
            age,
            goal,
            restrictions: if restrictions.trim().is_empty() {
                "none".to_string()
            } else {
                restrictions
            },
            risk_score: None,
        }
    }

    pub fn with_risk_score(mut self, risk_score: Option<f64>) -> Self {
        self.risk_score = risk_score;
        self
    }

    pub fn check(&self) -> Result<(), FormError> {
        self.validate()
            .map_err(|e| FormError::OutOfRange(failed_fields(&e, &["age", "restrictions"])))
    }
}

// ============================================================================
// STRESS COACH
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressTopic {
    Work,
    Family,
    Finances,
    #[serde(rename = "Health Concerns")]
    HealthConcerns,
    #[serde(rename = "General Anxiety")]
    GeneralAnxiety,
}

impl FromStr for StressTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "work" => Ok(StressTopic::Work),
            "family" => Ok(StressTopic::Family),
            "finances" => Ok(StressTopic::Finances),
            "health concerns" | "health" => Ok(StressTopic::HealthConcerns),
            "general anxiety" | "anxiety" => Ok(StressTopic::GeneralAnxiety),
            other => Err(format!("unknown topic: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressCoachRequest {
    pub topic: StressTopic,
    #[serde(rename = "riskScore")]
    pub risk_score: Option<f64>,
}

// ============================================================================
// AUTH
// ============================================================================

#[derive(Clone, Serialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn check(&self) -> Result<(), FormError> {
        self.validate()
            .map_err(|_| FormError::Invalid("Username and password are required".to_string()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_payload_shape() {
        let request = NutritionRequest::new(30, NutritionGoal::LowerCholesterol, "")
            .with_risk_score(Some(0.02));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["age"], 30);
        assert_eq!(value["goal"], "lower cholesterol");
        assert_eq!(value["restrictions"], "none");
        assert_eq!(value["riskScore"], 0.02);
    }

    #[test]
    fn test_missing_risk_score_is_null() {
        let request = StressCoachRequest {
            topic: StressTopic::HealthConcerns,
            risk_score: None,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["topic"], "Health Concerns");
        assert!(value["riskScore"].is_null());
    }

    #[test]
    fn test_goal_and_topic_parse() {
        assert_eq!(
            "general-heart-health".parse::<NutritionGoal>().unwrap(),
            NutritionGoal::GeneralHeartHealth
        );
        assert_eq!("anxiety".parse::<StressTopic>().unwrap(), StressTopic::GeneralAnxiety);
        assert!("sleep".parse::<StressTopic>().is_err());
    }

    #[test]
    fn test_nutrition_age_range() {
        let request = NutritionRequest::new(0, NutritionGoal::BuildMuscle, "vegan");
        assert_eq!(
            request.check().unwrap_err(),
            FormError::OutOfRange(vec!["age".into()])
        );
    }

    #[test]
    fn test_credentials_required() {
        assert!(Credentials::new("alice", "secret").check().is_ok());
        assert!(Credentials::new("  ", "secret").check().is_err());
        assert!(Credentials::new("alice", "").check().is_err());
        assert!(!format!("{:?}", Credentials::new("alice", "secret")).contains("secret"));
    }
}
