//! Errors reported back to whoever submitted a form.
//!
//! The `Display` text of each variant is the exact human-readable message
//! returned in the JSON response body, so changing it changes the public API.

use thiserror::Error;

/// A required field is missing or malformed. Always answered with HTTP 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Subscribe form: email missing or not an address.
    #[error("Please provide a valid email address.")]
    InvalidEmail,

    /// Feedback form: an email was given but is not an address.
    #[error("Please provide a valid email address or leave it blank.")]
    InvalidOptionalEmail,

    /// Feedback form: message shorter than the minimum after trimming.
    #[error("Please provide a message with at least 10 characters.")]
    MessageTooShort,
}

impl ValidationError {
    /// The form field this error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail | Self::InvalidOptionalEmail => "email",
            Self::MessageTooShort => "message",
        }
    }
}
