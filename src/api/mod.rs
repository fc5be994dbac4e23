//! Backend API
//!
//! Typed client for the HTTP backend that owns the models, text generation
//! and accounts.

pub mod client;
pub mod types;


pub use client::{ApiClient, ApiConfig, ApiError};
pub use types::{ChatMessage, RegisterResponse, Sender, ServerHistory, ServerPrediction};
