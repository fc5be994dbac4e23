//! HealthPrism Client
//!
//! Terminal front-end for the HealthPrism heart-risk and stress backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HEALTHPRISM CLIENT                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  Forms    │  │  Risk     │  │  Conversation /         │ │
//! │  │  (parse + │  │  Engine   │  │  Breathing              │ │
//! │  │  validate)│  │  (rules)  │  │                         │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │   ┌──────────────┐  ┌──────────────┐  ┌──────────────┐     │
//! │   │  ApiClient   │  │ HistoryStore │  │ AuthSession  │     │
//! │   │  (reqwest)   │  │              │  │              │     │
//! │   └──────┬───────┘  └──────┬───────┘  └──────┬───────┘     │
//! │          ▼                 └────────┬────────┘              │
//! │     HTTP backend            KeyValueStore (files)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod logic;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::{HealthApp, PredictionOutcome};
pub use error::{AppError, AppResult};
