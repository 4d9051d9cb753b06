//! Email provider trait and error types

use crate::domain::{EmailMessage, EmailSendResult, FailureKind};
use async_trait::async_trait;
use thiserror::Error;

/// Email provider error types
#[derive(Error, Debug)]
pub enum EmailProviderError {
    #[error("Email provider not configured")]
    NotConfigured,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rejected by provider: {0}")]
    Rejected(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Rate limited")]
    RateLimited,
}

impl EmailProviderError {
    /// True when the provider answered with an error instead of the call failing
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::Rejected(_) | Self::RateLimited
        )
    }
}

impl From<&EmailProviderError> for FailureKind {
    fn from(err: &EmailProviderError) -> Self {
        match err {
            EmailProviderError::NotConfigured => FailureKind::NotConfigured,
            e if e.is_soft() => FailureKind::Rejected,
            _ => FailureKind::Fault,
        }
    }
}

/// Trait for email providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email message
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
