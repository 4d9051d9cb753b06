//! Email templates for LancePay notifications
//!
//! Each event payload renders itself into a subject line and an HTML body.
//! Rendering is a pure function of the payload: no I/O, no clock, no locale.

mod dispute;
mod escrow;
mod invoice;
pub mod layout;
mod payment;

use crate::domain::NotificationEvent;

/// Rendered email ready for a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
}

/// A payload that knows its subject line and HTML body
pub trait EmailTemplate {
    fn subject(&self) -> String;

    fn html_body(&self) -> String;

    fn render(&self) -> RenderedEmail {
        RenderedEmail {
            subject: self.subject(),
            html_body: self.html_body(),
        }
    }
}

impl NotificationEvent {
    /// Render whichever payload this event carries
    pub fn render(&self) -> RenderedEmail {
        match self {
            Self::PaymentReceived(e) => e.render(),
            Self::InvoiceCreated(e) => e.render(),
            Self::EscrowReleased(e) => e.render(),
            Self::EscrowDisputed(e) => e.render(),
            Self::DisputeCreated(e) => e.render(),
            Self::DisputeResolved(e) => e.render(),
            Self::DisputeResponded(e) => e.render(),
            Self::DisputeInitiated(e) => e.render(),
            Self::DisputeMessage(e) => e.render(),
        }
    }
}
