//! Unified error handling for LancePay notifications
//!
//! These errors only surface while wiring the dispatcher up. Once built,
//! the dispatcher turns every failure into a [`crate::domain::DispatchResult`].

use crate::email::EmailProviderError;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Setup error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Email provider error: {0}")]
    Provider(#[from] EmailProviderError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Configuration("from_email: invalid".to_string());
        assert_eq!(err.to_string(), "Configuration error: from_email: invalid");

        let err: AppError = EmailProviderError::NotConfigured.into();
        assert_eq!(err.to_string(), "Email provider error: Email provider not configured");

        let err: AppError = anyhow::anyhow!("Invalid EMAIL_TIMEOUT_SECS").into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
