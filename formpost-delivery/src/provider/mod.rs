//! Transactional email provider adapters.
//!
//! Every adapter turns a [`Notification`] into exactly one HTTPS request in
//! its provider's own dialect and reports the outcome as a typed result.
//! Adapters never retry.

mod mailgun;
mod resend;
mod sendgrid;

use std::fmt;

use async_trait::async_trait;
use formpost_common::{config::ClientTimeouts, outgoing};
use reqwest::{Client, RequestBuilder};

pub use mailgun::Mailgun;
pub use resend::Resend;
pub use sendgrid::SendGrid;

use crate::{DeliveryError, Notification};

/// The providers formpost can deliver through, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Resend,
    SendGrid,
    Mailgun,
}

impl ProviderKind {
    /// Environment variable holding the API key that selects this provider.
    #[must_use]
    pub const fn credential_var(self) -> &'static str {
        match self {
            Self::Resend => "RESEND_API_KEY",
            Self::SendGrid => "SENDGRID_API_KEY",
            Self::Mailgun => "MAILGUN_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resend => "resend",
            Self::SendGrid => "sendgrid",
            Self::Mailgun => "mailgun",
        })
    }
}

/// A provider adapter.
///
/// Implemented by [`Resend`], [`SendGrid`] and [`Mailgun`]; tests substitute
/// their own implementations to observe what the notifier invokes.
#[async_trait]
pub trait Provider: Send + Sync + fmt::Debug {
    fn kind(&self) -> ProviderKind;

    /// Whether the credential that selects this provider is present.
    fn has_credentials(&self) -> bool;

    /// Deliver one notification with a single HTTP call.
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// An API key that stays out of `Debug` output and logs.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct ApiKey(String);

impl ApiKey {
    pub(crate) fn new(key: Option<&str>) -> Option<Self> {
        key.filter(|k| !k.is_empty()).map(|k| Self(k.to_owned()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Build the shared outbound HTTP client with bounded timeouts.
///
/// # Errors
///
/// Returns a configuration error if the TLS backend cannot be initialised.
pub fn http_client(timeouts: &ClientTimeouts) -> Result<Client, DeliveryError> {
    Client::builder()
        .connect_timeout(timeouts.connect_timeout())
        .timeout(timeouts.request_timeout())
        .user_agent(concat!("formpost/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DeliveryError::Configuration(format!("HTTP client: {e}")))
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Send a prepared request and map the response status.
pub(crate) async fn execute(
    kind: ProviderKind,
    request: RequestBuilder,
) -> Result<(), DeliveryError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        outgoing!(
            level = DEBUG,
            provider = %kind,
            status = status.as_u16(),
            "Provider accepted notification"
        );
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    outgoing!(
        level = DEBUG,
        provider = %kind,
        status = status.as_u16(),
        "Provider rejected notification"
    );

    Err(DeliveryError::from_status(status.as_u16(), &body))
}
