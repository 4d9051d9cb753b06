//! Notification event payloads
//!
//! One struct per notification kind. Field names follow the camelCase shape
//! the web app emits, so events can be deserialized straight from JSON.

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Accepts `2026-03-05` as well as a full RFC 3339 timestamp such as
/// `2026-03-05T00:00:00.000Z`, which is what a serialized JS `Date` looks like.
/// Timestamps keep the calendar date of their own offset.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
}

/// A freelancer got paid for an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceived {
    pub to: String,
    pub freelancer_name: String,
    pub client_name: String,
    pub invoice_number: String,
    pub amount: f64,
    pub currency: String,
}

/// A client was sent a new invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreated {
    pub to: String,
    pub client_name: Option<String>,
    /// Accepted for parity with the invoice record; not rendered
    pub freelancer_name: Option<String>,
    pub invoice_number: String,
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub payment_link: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub due_date: Option<NaiveDate>,
}

/// Escrowed funds were released to the freelancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowReleased {
    pub to: String,
    pub freelancer_name: Option<String>,
    pub invoice_number: String,
    pub amount: Option<f64>,
    pub client_email: Option<String>,
    pub notes: Option<String>,
}

/// A client disputed an escrowed payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowDisputed {
    pub to: String,
    pub name: Option<String>,
    pub invoice_number: String,
    pub reason: String,
    pub client_email: Option<String>,
    pub requested_action: Option<String>,
}

/// A dispute was opened. Rendered exactly like [`EscrowDisputed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeCreated {
    pub to: String,
    pub name: String,
    pub invoice_number: String,
    pub reason: String,
}

impl From<DisputeCreated> for EscrowDisputed {
    fn from(created: DisputeCreated) -> Self {
        Self {
            to: created.to,
            name: Some(created.name),
            invoice_number: created.invoice_number,
            reason: created.reason,
            client_email: None,
            requested_action: None,
        }
    }
}

/// Action value that carries a partial refund amount
pub const REFUND_PARTIAL_ACTION: &str = "refund_partial";

/// A dispute was closed by an administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeResolved {
    pub to: String,
    pub name: Option<String>,
    pub invoice_number: String,
    pub resolution: String,
    pub action: Option<String>,
    pub refund_amount: Option<f64>,
    pub currency: Option<String>,
}

impl DisputeResolved {
    /// Refund amount to show, if the resolution is a partial refund
    pub fn partial_refund(&self) -> Option<f64> {
        match (self.action.as_deref(), self.refund_amount) {
            (Some(REFUND_PARTIAL_ACTION), Some(amount)) if amount != 0.0 => Some(amount),
            _ => None,
        }
    }
}

/// The other party responded to a dispute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeResponded {
    pub to: String,
    pub name: String,
    pub invoice_number: String,
    pub response: String,
}

/// A dispute was filed, addressed to the party that did not file it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeInitiated {
    pub to: String,
    pub name: Option<String>,
    pub invoice_number: String,
    pub reason: String,
    pub initiated_by: Option<String>,
    pub requested_action: Option<String>,
}

/// A message was posted to a dispute thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeMessage {
    pub to: String,
    pub name: Option<String>,
    pub invoice_number: String,
    pub message: String,
    pub sender_type: Option<String>,
}

/// Every notification the dispatcher knows how to send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    PaymentReceived(PaymentReceived),
    InvoiceCreated(InvoiceCreated),
    EscrowReleased(EscrowReleased),
    EscrowDisputed(EscrowDisputed),
    DisputeCreated(DisputeCreated),
    DisputeResolved(DisputeResolved),
    DisputeResponded(DisputeResponded),
    DisputeInitiated(DisputeInitiated),
    DisputeMessage(DisputeMessage),
}

impl NotificationEvent {
    /// Stable name used in logs and metric labels
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PaymentReceived(_) => "payment_received",
            Self::InvoiceCreated(_) => "invoice_created",
            Self::EscrowReleased(_) => "escrow_released",
            Self::EscrowDisputed(_) => "escrow_disputed",
            Self::DisputeCreated(_) => "dispute_created",
            Self::DisputeResolved(_) => "dispute_resolved",
            Self::DisputeResponded(_) => "dispute_responded",
            Self::DisputeInitiated(_) => "dispute_initiated",
            Self::DisputeMessage(_) => "dispute_message",
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            Self::PaymentReceived(e) => &e.to,
            Self::InvoiceCreated(e) => &e.to,
            Self::EscrowReleased(e) => &e.to,
            Self::EscrowDisputed(e) => &e.to,
            Self::DisputeCreated(e) => &e.to,
            Self::DisputeResolved(e) => &e.to,
            Self::DisputeResponded(e) => &e.to,
            Self::DisputeInitiated(e) => &e.to,
            Self::DisputeMessage(e) => &e.to,
        }
    }

    pub fn invoice_number(&self) -> &str {
        match self {
            Self::PaymentReceived(e) => &e.invoice_number,
            Self::InvoiceCreated(e) => &e.invoice_number,
            Self::EscrowReleased(e) => &e.invoice_number,
            Self::EscrowDisputed(e) => &e.invoice_number,
            Self::DisputeCreated(e) => &e.invoice_number,
            Self::DisputeResolved(e) => &e.invoice_number,
            Self::DisputeResponded(e) => &e.invoice_number,
            Self::DisputeInitiated(e) => &e.invoice_number,
            Self::DisputeMessage(e) => &e.invoice_number,
        }
    }
}
