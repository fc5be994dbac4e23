//! Application Context
//!
//! Owns the backend client, the local prediction history and the auth
//! session, and wires them into the user-facing flows.

use crate::api::{ApiClient, ApiConfig, ApiError, ChatMessage, ServerHistory};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::logic::conversation::Conversation;
use crate::logic::forms::{
    Credentials, HeartRiskForm, NutritionGoal, NutritionRequest, StressCoachRequest, StressForm,
    StressTopic,
};
use crate::logic::history::{HistoryStore, PredictionRecord};
use crate::logic::risk::{classify_tier, explain, ClinicalInputs, RiskReport};
use crate::logic::session::AuthSession;
use crate::logic::storage::{FileStore, KeyValueStore};
use crate::logic::stress::StressResult;

/// A finished heart-risk prediction
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub record: PredictionRecord,
    pub report: RiskReport,
}

pub struct HealthApp<S: KeyValueStore + Clone> {
    client: ApiClient,
    history: HistoryStore<S>,
    session: AuthSession<S>,
    conversation: Conversation,
}

impl HealthApp<FileStore> {
    /// Open the app on the configured data directory
    pub fn open(config: &Config) -> AppResult<Self> {
        let client = ApiClient::new(ApiConfig::from(config))?;
        let store = FileStore::new(config.data_dir.clone());

        tracing::info!(
            "HealthPrism data in {}, backend at {}",
            config.data_dir.display(),
            config.api_url
        );

        Ok(Self::new(client, store, config.history_limit))
    }
}

impl<S: KeyValueStore + Clone> HealthApp<S> {
    /// Restore history and session from `store`
    pub fn new(mut client: ApiClient, store: S, history_limit: usize) -> Self {
        let history = HistoryStore::initialize(store.clone(), history_limit);
        let session = AuthSession::initialize(store);
        client.set_token(session.token().map(str::to_string));

        Self {
            client,
            history,
            session,
            conversation: Conversation::new(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore<S> {
        &mut self.history
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    // ------------------------------------------------------------------
    // Predictions
    // ------------------------------------------------------------------

    /// Validate the form, ask the backend, record and explain the result.
    ///
    /// Nothing is recorded when the request fails.
    pub async fn predict_heart_risk(&mut self, form: &HeartRiskForm) -> AppResult<PredictionOutcome> {
        let inputs = form.parse()?;
        let probability = self.client.predict(&inputs).await?;

        let record = match self.history.add(probability, inputs.to_feature_map()) {
            Some(record) => record.clone(),
            None => {
                return Err(ApiError::Parse(format!("Invalid probability: {}", probability)).into())
            }
        };
        let report = explain(&inputs, probability);

        tracing::info!(
            "Heart risk prediction: {}% ({})",
            report.percent_text(),
            report.tier
        );

        Ok(PredictionOutcome { record, report })
    }

    pub async fn predict_stress(&self, form: &StressForm) -> AppResult<StressResult> {
        form.check()?;
        let label = self.client.predict_stress(form).await?;
        Ok(StressResult::from_label(label))
    }

    // ------------------------------------------------------------------
    // Generated plans
    // ------------------------------------------------------------------

    /// Meal plan, tailored by the latest heart-risk score when there is one
    pub async fn plan_nutrition(
        &self,
        age: u32,
        goal: NutritionGoal,
        restrictions: &str,
    ) -> AppResult<String> {
        let request =
            NutritionRequest::new(age, goal, restrictions).with_risk_score(self.history.latest());
        request.check()?;
        Ok(self.client.nutrition_planner(&request).await?)
    }

    pub async fn coach_stress(&self, topic: StressTopic) -> AppResult<String> {
        let request = StressCoachRequest {
            topic,
            risk_score: self.history.latest(),
        };
        Ok(self.client.stress_coach(&request).await?)
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// One chatbot turn; see `Conversation::submit`
    pub async fn chat(&mut self, text: &str) -> Option<&ChatMessage> {
        self.conversation.submit(&self.client, text).await
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    pub async fn login(&mut self, credentials: &Credentials) -> AppResult<()> {
        credentials.check()?;
        let token = self.client.login(credentials).await?;

        self.client.set_token(Some(token.clone()));
        if let Err(e) = self.session.store_token(token) {
            tracing::error!("Failed to persist session: {}", e);
        }

        tracing::info!("Logged in as {}", credentials.username);
        Ok(())
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, credentials: &Credentials) -> AppResult<String> {
        credentials.check()?;
        let response = self.client.register(credentials).await?;
        Ok(response
            .message
            .unwrap_or_else(|| "User registered successfully".to_string()))
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.client.set_token(None);
        self.session.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Predictions saved server-side for the logged-in user
    pub async fn server_history(&self) -> AppResult<ServerHistory> {
        if !self.session.is_logged_in() {
            return Err(AppError::NotLoggedIn);
        }
        Ok(self.client.prediction_history().await?)
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    /// Most recent prediction, re-explained. None before the first prediction.
    ///
    /// Records stored without the full set of inputs get a tier but no factors.
    pub fn dashboard(&self) -> Option<RiskReport> {
        let record = self.history.latest_record()?;

        let report = match ClinicalInputs::from_feature_map(&record.inputs) {
            Some(inputs) => explain(&inputs, record.probability),
            None => RiskReport {
                probability: record.probability,
                tier: classify_tier(record.probability),
                factors: Vec::new(),
            },
        };
        Some(report)
    }

    /// Hand back the underlying store
    pub fn shutdown(self) -> S {
        self.history.dispose()
    }
}
