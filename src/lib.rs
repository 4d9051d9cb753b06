//! LancePay Notifications
//!
//! Renders payment, invoice, escrow and dispute events into HTML emails and
//! sends them through Resend. Sending is best-effort: failures are logged and
//! reported as `success: false`, never returned as errors.

pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use domain::{DispatchResult, FailureKind, NotificationEvent};
pub use error::{AppError, Result};
pub use service::NotificationDispatcher;
