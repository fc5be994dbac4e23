//! Fake backend for client tests
//!
//! Serves the backend routes on 127.0.0.1 with canned, deterministic answers
//! and records every request body.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiConfig};

pub const TOKEN: &str = "token-alice";

type Recorded = Arc<Mutex<Vec<(String, Value)>>>;

pub struct FakeBackend {
    pub base_url: String,
    requests: Recorded,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let requests: Recorded = Arc::default();

        let app = Router::new()
            .route("/api/predict", post(predict))
            .route("/api/predict-stress", post(predict_stress))
            .route("/api/chatbot", post(chatbot))
            .route("/api/nutrition-planner", post(nutrition_planner))
            .route("/api/stress-coach", post(stress_coach))
            .route("/api/login", post(login))
            .route("/api/register", post(register))
            .route("/api/prediction-history", get(prediction_history))
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    /// Last body received on `path`
    pub fn last_body(&self, path: &str) -> Option<Value> {
        self.requests
            .lock()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
    }
}

fn record(state: &Recorded, path: &str, body: &Value) {
    state.lock().push((path.to_string(), body.clone()));
}

async fn predict(State(state): State<Recorded>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "/api/predict", &body);

    let missing: Vec<&str> = ["age", "trestbps", "chol", "thalach", "oldpeak", "cp", "ca", "thal"]
        .into_iter()
        .filter(|f| body.get(*f).is_none())
        .collect();
    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("Missing fields: {:?}", missing) })),
        );
    }

    // Misbehaving model outputs, keyed off extreme ages
    match body["age"].as_f64().unwrap_or(0.0) as u32 {
        119 => {
            return (
                StatusCode::OK,
                Json(json!({ "probability_high_risk": "NaN" })),
            )
        }
        120 => return (StatusCode::OK, Json(json!({ "probability_high_risk": 1.7 }))),
        _ => {}
    }

    let oldpeak = body["oldpeak"].as_f64().unwrap_or(0.0);
    let probability = if oldpeak > 2.0 { 0.45 } else { 0.12 };
    (
        StatusCode::OK,
        Json(json!({ "message": "Prediction successful", "probability_high_risk": probability })),
    )
}

async fn predict_stress(State(state): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    record(&state, "/api/predict-stress", &body);

    let heart_rate = body["Heart Rate"].as_u64().unwrap_or(0);
    let level = match heart_rate {
        0..=75 => "Low Stress",
        76..=90 => "Moderate Stress",
        _ => "High Stress",
    };
    Json(json!({ "stress_level": level }))
}

async fn chatbot(State(state): State<Recorded>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "/api/chatbot", &body);

    let last = body["messages"]
        .as_array()
        .and_then(|m| m.last())
        .and_then(|m| m["text"].as_str())
        .unwrap_or_default()
        .to_string();

    if last == "boom" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "answer": "Sorry, I'm facing a technical issue." })),
        );
    }
    (StatusCode::OK, Json(json!({ "answer": format!("You said: {}", last) })))
}

async fn nutrition_planner(State(state): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    record(&state, "/api/nutrition-planner", &body);
    Json(json!({
        "meal_plan": format!("Plan for {} (risk {})", body["goal"].as_str().unwrap_or("?"), body["riskScore"])
    }))
}

async fn stress_coach(State(state): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    record(&state, "/api/stress-coach", &body);
    Json(json!({
        "stress_plan": format!("1. Breathe. ({})", body["topic"].as_str().unwrap_or("?"))
    }))
}

async fn login(State(state): State<Recorded>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "/api/login", &body);

    if body["username"] == "alice" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({ "access_token": TOKEN })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid username or password" })),
        )
    }
}

async fn register(State(state): State<Recorded>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    record(&state, "/api/register", &body);

    if body["username"] == "quiet" {
        return (StatusCode::CREATED, Json(json!({ "user_id": 2 })));
    }
    if body["username"] == "taken" {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Username already exists" })),
        )
    } else {
        (
            StatusCode::CREATED,
            Json(json!({ "message": "User registered successfully", "user_id": 1 })),
        )
    }
}

async fn prediction_history(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "msg": "Missing Authorization Header" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "username": "alice",
            "history": [
                {
                    "id": 2,
                    "probability": 0.45,
                    "timestamp": "2025-05-02T09:30:00.000001",
                    "inputs": { "age": 63, "oldpeak": 2.3 }
                },
                {
                    "id": 1,
                    "probability": 0.12,
                    "timestamp": "2025-05-01T08:00:00",
                    "inputs": { "age": 63, "oldpeak": 1.0 }
                }
            ]
        })),
    )
}
