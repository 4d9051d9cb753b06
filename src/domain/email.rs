//! Outbound email types and dispatch outcomes

use serde::Serialize;

/// Email message handed to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl EmailMessage {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}

/// Acknowledgement returned by a provider that accepted a message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailSendResult {
    pub message_id: Option<String>,
}

impl EmailSendResult {
    pub fn new(message_id: Option<String>) -> Self {
        Self { message_id }
    }
}

/// Why a dispatch did not go out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No provider credential; nothing was sent
    NotConfigured,
    /// The provider answered with an error
    Rejected,
    /// The call never produced an answer (transport error, bad setup, panic)
    Fault,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Rejected => "rejected",
            Self::Fault => "fault",
        }
    }
}

/// Outcome of a notification dispatch.
///
/// Callers only need `success`; `failure` is a diagnostic tag and never
/// carries the underlying error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

impl DispatchResult {
    pub fn sent(message_id: Option<String>) -> Self {
        Self {
            success: true,
            message_id,
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind) -> Self {
        Self {
            success: false,
            message_id: None,
            failure: Some(kind),
        }
    }

    /// Label used for logs and metrics
    pub fn outcome(&self) -> &'static str {
        match self.failure {
            None => "sent",
            Some(kind) => kind.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_message() {
        let msg = EmailMessage::new("to@example.com", "Subject", "<p>Hello</p>");

        assert_eq!(msg.to, "to@example.com");
        assert_eq!(msg.subject, "Subject");
        assert_eq!(msg.html_body, "<p>Hello</p>");
    }

    #[test]
    fn test_dispatch_result_sent() {
        let result = DispatchResult::sent(Some("msg-123".to_string()));
        assert!(result.success);
        assert_eq!(result.message_id.as_deref(), Some("msg-123"));
        assert!(result.failure.is_none());
        assert_eq!(result.outcome(), "sent");
    }

    #[test]
    fn test_dispatch_result_failed() {
        let result = DispatchResult::failed(FailureKind::Rejected);
        assert!(!result.success);
        assert!(result.message_id.is_none());
        assert_eq!(result.failure, Some(FailureKind::Rejected));
        assert_eq!(result.outcome(), "rejected");
    }

    #[test]
    fn test_dispatch_result_serialization() {
        let json = serde_json::to_value(DispatchResult::failed(FailureKind::NotConfigured)).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "failure": "not_configured"}));

        let json = serde_json::to_value(DispatchResult::sent(None)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));

        let json = serde_json::to_value(DispatchResult::sent(Some("id-1".to_string()))).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "messageId": "id-1"}));
    }
}
