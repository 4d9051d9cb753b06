//! Stand-in provider for environments without a Resend API key
//!
//! Never touches the network. Every send is refused with
//! [`EmailProviderError::NotConfigured`] so callers see `success: false`.

use super::provider::{EmailProvider, EmailProviderError};
use crate::domain::{EmailMessage, EmailSendResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct NoopEmailProvider;

#[async_trait]
impl EmailProvider for NoopEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        tracing::warn!(
            to = %message.to,
            subject = %message.subject,
            "RESEND_API_KEY not set, skipping email"
        );
        Err(EmailProviderError::NotConfigured)
    }

    fn provider_name(&self) -> &'static str {
        "noop"
    }
}
