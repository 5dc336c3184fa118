//! Admin notification delivery for formpost
//!
//! This crate provides:
//! - Rendering of a [`formpost_common::Submission`] into an HTML [`Notification`]
//! - Adapters for the Resend, SendGrid and Mailgun HTTP APIs
//! - A [`Notifier`] that selects exactly one provider from configuration
//! - Typed delivery errors split into temporary and permanent failures

mod error;
mod notifier;
pub mod provider;
mod render;

// Re-export error types
pub use error::{DeliveryError, PermanentError, TemporaryError};
// Re-export core types
pub use notifier::Notifier;
pub use provider::{Provider, ProviderKind, http_client};
pub use render::Notification;
