//! Email sending functionality for LancePay
//!
//! - `provider`: the [`EmailProvider`] seam and its error type
//! - `resend`: Resend HTTP API client
//! - `noop`: refuses every send when no API key is configured
//! - `templates`: per-event subject and HTML rendering

pub mod noop;
pub mod provider;
pub mod resend;
pub mod templates;

pub use noop::NoopEmailProvider;
pub use provider::{EmailProvider, EmailProviderError};
pub use resend::ResendEmailProvider;
pub use templates::{EmailTemplate, RenderedEmail};
