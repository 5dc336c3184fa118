//! Shared building blocks for formpost.
//!
//! - [`validate`]: email format check used by both form handlers
//! - [`submission`]: the per-request submission record
//! - [`config`]: service, delivery and provider configuration
//! - [`error`]: validation errors surfaced to form submitters
//! - [`logging`]: tracing subscriber setup and the `internal!`/`incoming!`/`outgoing!` macros

pub mod config;
pub mod error;
pub mod logging;
pub mod submission;
pub mod validate;

pub use submission::Submission;
pub use tracing;

/// Lifecycle signal broadcast to long-running tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Shutdown,
}
