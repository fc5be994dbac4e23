//! Error handling

use thiserror::Error;

use crate::api::ApiError;
use crate::logic::forms::FormError;
use crate::logic::storage::StorageError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Input errors
    #[error(transparent)]
    Form(#[from] FormError),

    // Backend errors
    #[error(transparent)]
    Api(#[from] ApiError),

    // Local persistence errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    // Session errors
    #[error("You need to log in first")]
    NotLoggedIn,
}

impl AppError {
    /// Text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            AppError::Form(err) => err.to_string(),
            AppError::NotLoggedIn => self.to_string(),
            AppError::Api(ApiError::Server { message, .. }) => message.clone(),
            AppError::Api(ApiError::Unauthorized(message)) => message.clone(),
            AppError::Api(err) => {
                tracing::error!("Backend error: {}", err);
                "An unexpected error occurred.".to_string()
            }
            AppError::Storage(err) => {
                tracing::error!("Storage error: {}", err);
                "Local storage is unavailable.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_passed_through() {
        let err = AppError::from(ApiError::Server {
            status: 400,
            message: "Missing fields: ['sex']".to_string(),
        });
        assert_eq!(err.user_message(), "Missing fields: ['sex']");
    }

    #[test]
    fn test_network_error_is_generic() {
        let err = AppError::from(ApiError::Network("connection refused".to_string()));
        assert_eq!(err.user_message(), "An unexpected error occurred.");
    }

    #[test]
    fn test_form_error_is_shown_verbatim() {
        let err = AppError::from(FormError::InvalidNumbers(vec!["age".into(), "chol".into()]));
        assert_eq!(
            err.user_message(),
            "Invalid data format. Please check all fields. (age, chol)"
        );
    }
}
