//! Backend API Client
//!
//! HTTP client for the HealthPrism backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::types::*;
use crate::config::Config;
use crate::logic::forms::{Credentials, NutritionRequest, StressCoachRequest, StressForm};
use crate::logic::history::PredictionRecord;
use crate::logic::risk::ClinicalInputs;

/// Backend connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            base_url: constants::get_api_url(),
            timeout_seconds: constants::get_timeout_secs(),
        }
    }
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.api_url.clone(),
            timeout_seconds: config.timeout_secs,
        }
    }
}

/// Backend errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Backend API client
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create new client
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            config,
            token: None,
            http_client,
        })
    }

    /// Set or clear the bearer token sent with every request
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    // ------------------------------------------------------------------
    // Predictions
    // ------------------------------------------------------------------

    /// Heart-risk probability for the given inputs
    pub async fn predict(&self, inputs: &ClinicalInputs) -> Result<f64, ApiError> {
        let response: PredictResponse = self.post("/api/predict", inputs).await?;
        let probability = response.probability_high_risk;

        if !PredictionRecord::is_valid_probability(probability) {
            return Err(ApiError::Parse(format!(
                "probability_high_risk out of range: {}",
                probability
            )));
        }
        Ok(probability)
    }

    /// Stress level label ("Low Stress", "Moderate Stress", "High Stress")
    pub async fn predict_stress(&self, form: &StressForm) -> Result<String, ApiError> {
        let response: StressResponse = self.post("/api/predict-stress", form).await?;
        Ok(response.stress_level)
    }

    /// Predictions saved server-side for the logged-in user
    pub async fn prediction_history(&self) -> Result<ServerHistory, ApiError> {
        if self.token.is_none() {
            return Err(ApiError::Unauthorized("Login required".to_string()));
        }
        self.get("/api/prediction-history").await
    }

    // ------------------------------------------------------------------
    // Generated content
    // ------------------------------------------------------------------

    /// Send the whole transcript, get the bot's answer
    pub async fn chatbot(&self, messages: &[ChatMessage]) -> Result<String, ApiError> {
        let response: ChatbotResponse = self
            .post("/api/chatbot", &ChatbotRequest { messages })
            .await?;
        Ok(response.answer)
    }

    pub async fn nutrition_planner(&self, request: &NutritionRequest) -> Result<String, ApiError> {
        let response: MealPlanResponse = self.post("/api/nutrition-planner", request).await?;
        Ok(response.meal_plan)
    }

    pub async fn stress_coach(&self, request: &StressCoachRequest) -> Result<String, ApiError> {
        let response: StressPlanResponse = self.post("/api/stress-coach", request).await?;
        Ok(response.stress_plan)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Returns the access token
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        tracing::info!("Logging in as {}", credentials.username);
        let response: LoginResponse = self.post("/api/login", credentials).await?;
        Ok(response.access_token)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        tracing::info!("Registering user {}", credentials.username);
        self.post("/api/register", credentials).await
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!("POST {}", url);

        let request = self.authorize(self.http_client.post(&url)).json(body);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(path, response).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .authorize(self.http_client.get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        handle_response(path, response).await
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn handle_response<R: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<R, ApiError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()));
    }

    let status = status.as_u16();
    let error_text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&error_text)
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("Request failed with status {}", status));

    tracing::error!("{} failed ({}): {}", path, status, message);

    if status == 401 {
        Err(ApiError::Unauthorized(message))
    } else {
        Err(ApiError::Server { status, message })
    }
}
