//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default backend, only edit this file.

/// Default backend API URL
///
/// Fallback when `HEALTHPRISM_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of prediction records kept on this device
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Directory name under the platform data dir
pub const DATA_DIR_NAME: &str = "healthprism";

/// Storage key for the prediction history
pub const HISTORY_KEY: &str = "predictionHistory";

/// Storage key for the auth token
pub const TOKEN_KEY: &str = "token";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "HealthPrism";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get backend URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("HEALTHPRISM_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("HEALTHPRISM_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Get history retention cap from environment or use default
pub fn get_history_limit() -> usize {
    std::env::var("HEALTHPRISM_HISTORY_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&n: &usize| n > 0)
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
}
