//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (no trailing slash)
    pub api_url: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Directory holding the persisted key-value files
    pub data_dir: PathBuf,

    /// Maximum number of prediction records kept locally
    pub history_limit: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            data_dir: default_data_dir(),
            history_limit: constants::DEFAULT_HISTORY_LIMIT,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: constants::get_api_url(),

            timeout_secs: constants::get_timeout_secs(),

            data_dir: env::var("HEALTHPRISM_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),

            history_limit: constants::get_history_limit(),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Override the backend URL (CLI flag)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the data directory (CLI flag)
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Get default data directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let config = Config::default()
            .with_api_url("http://127.0.0.1:5000/")
            .with_data_dir("/tmp/hp");

        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/hp"));
        assert!(!config.is_production());
    }
}
