//! Resend email provider implementation
//!
//! Sends through the Resend HTTP API (`POST /emails`).

use super::provider::{EmailProvider, EmailProviderError};
use crate::config::EmailConfig;
use crate::domain::{EmailMessage, EmailSendResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resend email provider
pub struct ResendEmailProvider {
    http_client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Error body returned by Resend on non-2xx responses
#[derive(Deserialize)]
struct ResendErrorBody {
    name: Option<String>,
    message: Option<String>,
}

impl ResendErrorBody {
    fn describe(self) -> Option<String> {
        match (self.name, self.message) {
            (Some(name), Some(message)) => Some(format!("{}: {}", name, message)),
            (Some(only), None) | (None, Some(only)) => Some(only),
            (None, None) => None,
        }
    }
}

impl ResendEmailProvider {
    /// Create a new Resend provider from configuration
    pub fn from_config(config: &EmailConfig) -> Result<Self, EmailProviderError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(EmailProviderError::NotConfigured)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            from: config.sender(),
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_url)
    }

    fn classify_error(status: StatusCode, body: String) -> EmailProviderError {
        let detail = serde_json::from_str::<ResendErrorBody>(&body)
            .ok()
            .and_then(ResendErrorBody::describe)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                EmailProviderError::AuthenticationFailed(detail)
            }
            StatusCode::TOO_MANY_REQUESTS => EmailProviderError::RateLimited,
            _ => EmailProviderError::Rejected(format!("{} - {}", status, detail)),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<EmailSendResult, EmailProviderError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html_body,
        };

        let response = self
            .http_client
            .post(self.emails_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, body));
        }

        // The message is accepted at this point; a missing id is not a failure
        let id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|body| body.id);

        Ok(EmailSendResult::new(id))
    }

    fn provider_name(&self) -> &'static str {
        "resend"
    }
}
