//! Domain types for LancePay notifications

pub mod email;
pub mod notification;

pub use email::{DispatchResult, EmailMessage, EmailSendResult, FailureKind};
pub use notification::{
    DisputeCreated, DisputeInitiated, DisputeMessage, DisputeResolved, DisputeResponded,
    EscrowDisputed, EscrowReleased, InvoiceCreated, NotificationEvent, PaymentReceived,
    REFUND_PARTIAL_ACTION,
};
