//! Stress-level form

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{failed_fields, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Normal,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl FromStr for BmiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "normal" => Ok(BmiCategory::Normal),
            "normal weight" => Ok(BmiCategory::NormalWeight),
            "overweight" => Ok(BmiCategory::Overweight),
            "obese" => Ok(BmiCategory::Obese),
            other => Err(format!("unknown BMI category: {}", other)),
        }
    }
}

/// Daily biometrics for the stress model. Keys match the backend's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StressForm {
    #[serde(rename = "Age")]
    #[validate(range(min = 1, max = 120))]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Occupation")]
    #[validate(length(min = 1, max = 100))]
    pub occupation: String,

    /// Hours per night
    #[serde(rename = "Sleep Duration")]
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep_duration: f64,

    /// 1 - 10
    #[serde(rename = "Quality of Sleep")]
    #[validate(range(min = 1, max = 10))]
    pub sleep_quality: u8,

    /// Minutes per day
    #[serde(rename = "Physical Activity Level")]
    #[validate(range(max = 1440))]
    pub physical_activity: u32,

    #[serde(rename = "BMI Category")]
    pub bmi_category: BmiCategory,

    /// "<systolic>/<diastolic>", e.g. "120/80"
    #[serde(rename = "Blood Pressure")]
    pub blood_pressure: String,

    #[serde(rename = "Heart Rate")]
    #[validate(range(min = 20, max = 250))]
    pub heart_rate: u32,

    #[serde(rename = "Daily Steps")]
    #[validate(range(max = 100000))]
    pub daily_steps: u32,
}

impl Default for StressForm {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            occupation: "Doctor".to_string(),
            sleep_duration: 7.0,
            sleep_quality: 8,
            physical_activity: 60,
            bmi_category: BmiCategory::Normal,
            blood_pressure: "120/80".to_string(),
            heart_rate: 70,
            daily_steps: 8000,
        }
    }
}

impl StressForm {
    const FIELDS: [&'static str; 10] = [
        "age",
        "gender",
        "occupation",
        "sleep_duration",
        "sleep_quality",
        "physical_activity",
        "bmi_category",
        "blood_pressure",
        "heart_rate",
        "daily_steps",
    ];

    /// Range checks plus the blood-pressure format
    pub fn check(&self) -> Result<(), FormError> {
        self.validate()
            .map_err(|e| FormError::OutOfRange(failed_fields(&e, &Self::FIELDS)))?;

        if parse_blood_pressure(&self.blood_pressure).is_none() {
            return Err(FormError::Invalid(format!(
                "Blood Pressure must look like 120/80 (got {:?})",
                self.blood_pressure
            )));
        }
        Ok(())
    }
}

/// Split "120/80" into (systolic, diastolic)
pub fn parse_blood_pressure(raw: &str) -> Option<(u32, u32)> {
    let (systolic, diastolic) = raw.trim().split_once('/')?;
    let systolic: u32 = systolic.trim().parse().ok()?;
    let diastolic: u32 = diastolic.trim().parse().ok()?;
    (systolic > diastolic && diastolic > 0).then_some((systolic, diastolic))
}
