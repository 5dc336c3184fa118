//! Typed error handling for provider calls.
//!
//! Provider failures are categorised so the notifier can log them usefully:
//! - Temporary failures (network trouble, 429, 5xx) might succeed later
//! - Permanent failures (other 4xx) will not succeed without a change
//! - Configuration errors mean the provider could not even be called
//!
//! None of these are retried. The notifier collapses them to `false`.

use thiserror::Error;

/// Longest provider response body kept in an error, in characters.
const MAX_BODY_CHARS: usize = 256;

/// Top-level delivery error type.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The provider could not be reached or asked us to come back later.
    #[error("Temporary failure: {0}")]
    Temporary(#[from] TemporaryError),

    /// The provider refused the request.
    #[error("Permanent failure: {0}")]
    Permanent(#[from] PermanentError),

    /// The provider is selected but cannot be called as configured.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Error)]
pub enum TemporaryError {
    /// Failed to establish a connection to the provider.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the client timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Provider answered 429.
    #[error("Rate limited ({status}): {body}")]
    RateLimited { status: u16, body: String },

    /// Provider answered 5xx.
    #[error("Provider error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// Any other transport-level failure (reading the response, redirects, ...).
    #[error("Transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum PermanentError {
    /// Provider answered 401 or 403: the API key is wrong or lacks permission.
    #[error("Authentication failed ({status}): {body}")]
    AuthenticationFailed { status: u16, body: String },

    /// Provider answered any other 4xx, e.g. an unverified sender.
    #[error("Request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Provider answered with a status outside the 2xx, 4xx and 5xx ranges.
    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl DeliveryError {
    /// Returns `true` if this error is temporary.
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary(_))
    }

    /// Returns `true` if this error is permanent.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Categorise a non-success HTTP status returned by a provider.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = truncate(body);

        match status {
            429 => Self::Temporary(TemporaryError::RateLimited { status, body }),
            500..=599 => Self::Temporary(TemporaryError::ServerError { status, body }),
            401 | 403 => Self::Permanent(PermanentError::AuthenticationFailed { status, body }),
            400..=499 => Self::Permanent(PermanentError::Rejected { status, body }),
            _ => Self::Permanent(PermanentError::UnexpectedStatus { status, body }),
        }
    }
}

fn truncate(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_owned(),
    }
}

/// Transport failures from the HTTP client.
///
/// - **Timeouts** → Temporary
/// - **Connect errors** → Temporary
/// - **Builder errors** (bad URL, bad header value) → Configuration
/// - **Everything else** → Temporary
impl From<reqwest::Error> for DeliveryError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Configuration(error.to_string())
        } else if error.is_timeout() {
            Self::Temporary(TemporaryError::Timeout(error.to_string()))
        } else if error.is_connect() {
            Self::Temporary(TemporaryError::ConnectionFailed(error.to_string()))
        } else {
            Self::Temporary(TemporaryError::Transport(error.to_string()))
        }
    }
}
