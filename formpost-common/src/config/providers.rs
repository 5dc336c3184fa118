//! Credentials for the transactional email providers.
//!
//! At most one provider is active per deployment. Which one is decided by the
//! delivery crate from the keys present here, in the fixed order
//! Resend, SendGrid, Mailgun.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sender used when `admin_email_from` is not set (Resend, SendGrid).
pub const DEFAULT_FROM: &str = "noreply@gocaving.ai";

/// Recipient used when `admin_email_to` is not set.
pub const DEFAULT_TO: &str = "admin@gocaving.ai";

/// Provider credentials and sender/recipient overrides.
///
/// Every field is optional; empty strings are treated as absent. The `Debug`
/// implementation never prints API keys.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sendgrid_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailgun_api_key: Option<String>,

    /// Sending domain registered with Mailgun, part of the endpoint path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailgun_domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_email_from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_email_to: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl ProviderConfig {
    #[must_use]
    pub fn resend_api_key(&self) -> Option<&str> {
        present(self.resend_api_key.as_ref())
    }

    #[must_use]
    pub fn sendgrid_api_key(&self) -> Option<&str> {
        present(self.sendgrid_api_key.as_ref())
    }

    #[must_use]
    pub fn mailgun_api_key(&self) -> Option<&str> {
        present(self.mailgun_api_key.as_ref())
    }

    #[must_use]
    pub fn mailgun_domain(&self) -> Option<&str> {
        present(self.mailgun_domain.as_ref())
    }

    /// Explicit sender override, if any. Providers apply their own default.
    #[must_use]
    pub fn from_override(&self) -> Option<&str> {
        present(self.admin_email_from.as_ref())
    }

    /// Sender address for providers without a domain-specific default.
    #[must_use]
    pub fn from_address(&self) -> &str {
        self.from_override().unwrap_or(DEFAULT_FROM)
    }

    /// Recipient of admin notifications.
    #[must_use]
    pub fn to_address(&self) -> &str {
        present(self.admin_email_to.as_ref()).unwrap_or(DEFAULT_TO)
    }

    /// Overlay values from environment-style lookups. Unset or empty variables
    /// leave the existing value untouched.
    pub fn merge_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            ("RESEND_API_KEY", &mut self.resend_api_key),
            ("SENDGRID_API_KEY", &mut self.sendgrid_api_key),
            ("MAILGUN_API_KEY", &mut self.mailgun_api_key),
            ("MAILGUN_DOMAIN", &mut self.mailgun_domain),
            ("ADMIN_EMAIL_FROM", &mut self.admin_email_from),
            ("ADMIN_EMAIL_TO", &mut self.admin_email_to),
        ];

        for (var, field) in fields {
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                *field = Some(value);
            }
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const fn redact(value: Option<&str>) -> Option<&'static str> {
            match value {
                Some(_) => Some("<redacted>"),
                None => None,
            }
        }

        f.debug_struct("ProviderConfig")
            .field("resend_api_key", &redact(self.resend_api_key()))
            .field("sendgrid_api_key", &redact(self.sendgrid_api_key()))
            .field("mailgun_api_key", &redact(self.mailgun_api_key()))
            .field("mailgun_domain", &self.mailgun_domain())
            .field("admin_email_from", &self.from_override())
            .field("admin_email_to", &self.to_address())
            .finish()
    }
}
