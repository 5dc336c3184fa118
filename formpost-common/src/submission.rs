//! Per-request form submission record.
//!
//! A [`Submission`] is built once from the decoded form fields after
//! validation and the honeypot check have passed. It is never mutated and is
//! dropped once the notification attempt finishes.

use chrono::{SecondsFormat, Utc};

/// Name used when the submitter leaves the name field empty.
pub const ANONYMOUS: &str = "Anonymous";

/// Placeholder stored when a feedback submitter leaves the email field empty.
pub const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// Feedback type used when the form does not select one.
pub const DEFAULT_FEEDBACK_TYPE: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Subscription {
        email: String,
        name: String,
        timestamp: String,
    },
    Feedback {
        name: String,
        email: String,
        message: String,
        topic_suggestions: String,
        feedback_type: String,
        timestamp: String,
    },
}

impl Submission {
    /// Build a subscription record stamped with the current time.
    #[must_use]
    pub fn subscription(email: impl Into<String>, name: Option<String>) -> Self {
        Self::Subscription {
            email: email.into(),
            name: name.unwrap_or_else(|| ANONYMOUS.to_owned()),
            timestamp: now(),
        }
    }

    /// Build a feedback record stamped with the current time, filling defaults
    /// for every optional field.
    #[must_use]
    pub fn feedback(
        message: impl Into<String>,
        name: Option<String>,
        email: Option<String>,
        topic_suggestions: Option<String>,
        feedback_type: Option<String>,
    ) -> Self {
        Self::Feedback {
            name: name.unwrap_or_else(|| ANONYMOUS.to_owned()),
            email: email.unwrap_or_else(|| EMAIL_NOT_PROVIDED.to_owned()),
            message: message.into(),
            topic_suggestions: topic_suggestions.unwrap_or_default(),
            feedback_type: feedback_type.unwrap_or_else(|| DEFAULT_FEEDBACK_TYPE.to_owned()),
            timestamp: now(),
        }
    }

    /// The type tag of this submission.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Subscription { .. } => "subscription",
            Self::Feedback { .. } => "feedback",
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Subscription { name, .. } | Self::Feedback { name, .. } => name,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Subscription { email, .. } | Self::Feedback { email, .. } => email,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        match self {
            Self::Subscription { timestamp, .. } | Self::Feedback { timestamp, .. } => timestamp,
        }
    }
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
