//! Notification dispatcher
//!
//! Renders event payloads and hands them to the configured [`EmailProvider`].
//! Delivery is best-effort: every method resolves to a [`DispatchResult`] and
//! no error, provider failure or panic escapes to the caller.

use crate::config::Config;
use crate::domain::{
    DispatchResult, DisputeCreated, DisputeInitiated, DisputeMessage, DisputeResolved,
    DisputeResponded, EmailMessage, EscrowDisputed, EscrowReleased, FailureKind, InvoiceCreated,
    NotificationEvent, PaymentReceived,
};
use crate::email::{
    EmailProvider, EmailTemplate, NoopEmailProvider, RenderedEmail, ResendEmailProvider,
};
use crate::error::{AppError, Result};
use crate::telemetry::metrics::record_dispatch;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use validator::Validate;

/// Sends LancePay notification emails.
///
/// Each send runs the provider on a spawned task, so it must be awaited
/// inside a Tokio runtime.
#[derive(Clone)]
pub struct NotificationDispatcher {
    provider: Arc<dyn EmailProvider>,
}

impl NotificationDispatcher {
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self { provider }
    }

    /// Build a dispatcher from configuration.
    ///
    /// Without an API key the dispatcher still works but every send is
    /// refused locally and reported as [`FailureKind::NotConfigured`].
    pub fn from_config(config: &Config) -> Result<Self> {
        if !config.email.is_configured() {
            tracing::warn!("RESEND_API_KEY not set, notification emails are disabled");
            return Ok(Self::new(Arc::new(NoopEmailProvider)));
        }

        config
            .email
            .validate()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        let provider = ResendEmailProvider::from_config(&config.email)?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Load configuration from the environment and build a dispatcher
    pub fn from_env() -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Send an arbitrary HTML email
    pub async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> DispatchResult {
        self.deliver("custom", EmailMessage::new(to, subject, html_body))
            .await
    }

    /// Render and send any notification event
    pub async fn dispatch(&self, event: &NotificationEvent) -> DispatchResult {
        self.send_rendered(
            event.event_type(),
            event.recipient(),
            event.invoice_number(),
            event.render(),
        )
        .await
    }

    pub async fn send_payment_received_email(&self, params: &PaymentReceived) -> DispatchResult {
        self.send_rendered(
            "payment_received",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    pub async fn send_invoice_created_email(&self, params: &InvoiceCreated) -> DispatchResult {
        self.send_rendered(
            "invoice_created",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    pub async fn send_escrow_released_email(&self, params: &EscrowReleased) -> DispatchResult {
        self.send_rendered(
            "escrow_released",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    pub async fn send_escrow_disputed_email(&self, params: &EscrowDisputed) -> DispatchResult {
        self.send_rendered(
            "escrow_disputed",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    /// Sends the escrow-disputed email for a newly created dispute
    pub async fn send_dispute_created_email(&self, params: &DisputeCreated) -> DispatchResult {
        let disputed = EscrowDisputed::from(params.clone());
        self.send_rendered(
            "dispute_created",
            &disputed.to,
            &disputed.invoice_number,
            disputed.render(),
        )
        .await
    }

    pub async fn send_dispute_resolved_email(&self, params: &DisputeResolved) -> DispatchResult {
        self.send_rendered(
            "dispute_resolved",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    pub async fn send_dispute_responded_email(&self, params: &DisputeResponded) -> DispatchResult {
        self.send_rendered(
            "dispute_responded",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    pub async fn send_dispute_initiated_email(&self, params: &DisputeInitiated) -> DispatchResult {
        self.send_rendered(
            "dispute_initiated",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    pub async fn send_dispute_message_email(&self, params: &DisputeMessage) -> DispatchResult {
        self.send_rendered(
            "dispute_message",
            &params.to,
            &params.invoice_number,
            params.render(),
        )
        .await
    }

    async fn send_rendered(
        &self,
        event_type: &'static str,
        to: &str,
        invoice_number: &str,
        rendered: RenderedEmail,
    ) -> DispatchResult {
        let span = tracing::info_span!("notification", invoice_number);
        self.deliver(
            event_type,
            EmailMessage::new(to, rendered.subject, rendered.html_body),
        )
        .instrument(span)
        .await
    }

    async fn deliver(&self, event_type: &'static str, message: EmailMessage) -> DispatchResult {
        let started = Instant::now();
        let provider = Arc::clone(&self.provider);
        let to = message.to.clone();

        // Run the provider in its own task so a panic surfaces as a JoinError
        let outcome = tokio::spawn(async move { provider.send(&message).await }).await;

        let result = match outcome {
            Ok(Ok(sent)) => {
                tracing::info!(
                    event_type,
                    to = %to,
                    message_id = ?sent.message_id,
                    "Notification email sent"
                );
                DispatchResult::sent(sent.message_id)
            }
            Ok(Err(e)) => {
                let kind = FailureKind::from(&e);
                match kind {
                    FailureKind::Fault => {
                        tracing::error!(event_type, to = %to, error = %e, "Email send failed")
                    }
                    _ => tracing::warn!(event_type, to = %to, error = %e, "Email error"),
                }
                DispatchResult::failed(kind)
            }
            Err(e) => {
                tracing::error!(event_type, to = %to, error = %e, "Email send failed");
                DispatchResult::failed(FailureKind::Fault)
            }
        };

        record_dispatch(event_type, &result, started.elapsed());
        result
    }
}
