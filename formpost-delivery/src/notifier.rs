//! Admin notification dispatch.

use std::sync::Arc;

use formpost_common::{
    Submission,
    config::{DeliveryConfig, ProviderConfig},
    internal, outgoing,
    tracing::{error, warn},
};

use crate::{
    DeliveryError, Notification,
    provider::{Mailgun, Provider, ProviderKind, Resend, SendGrid, http_client},
};

/// Picks the single configured provider and delivers admin notifications
/// through it.
///
/// Providers are held in precedence order; the active one is the first with
/// credentials present, decided once at construction. A failed delivery is
/// never retried and never falls back to a lower-precedence provider.
#[derive(Debug, Clone)]
pub struct Notifier {
    providers: Vec<Arc<dyn Provider>>,
    active: Option<usize>,
}

impl Notifier {
    /// Build the notifier over the Resend, SendGrid and Mailgun adapters,
    /// sharing one HTTP client bounded by `delivery.timeouts`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(
        providers: &ProviderConfig,
        delivery: &DeliveryConfig,
    ) -> Result<Self, DeliveryError> {
        let client = http_client(&delivery.timeouts)?;
        let endpoints = &delivery.endpoints;

        let adapters: Vec<Arc<dyn Provider>> = vec![
            Arc::new(Resend::new(client.clone(), providers, endpoints.resend.as_deref())),
            Arc::new(SendGrid::new(client.clone(), providers, endpoints.sendgrid.as_deref())),
            Arc::new(Mailgun::new(client, providers, endpoints.mailgun.as_deref())),
        ];

        Ok(Self::with_providers(adapters))
    }

    /// Build a notifier over an explicit, precedence-ordered provider list.
    #[must_use]
    pub fn with_providers(providers: Vec<Arc<dyn Provider>>) -> Self {
        let active = providers.iter().position(|p| p.has_credentials());

        match active.map(|idx| providers[idx].kind()) {
            Some(kind) => internal!(level = INFO, provider = %kind, "Email provider selected"),
            None => internal!(level = INFO, "No email provider configured"),
        }

        Self { providers, active }
    }

    /// The provider notifications will be sent through, if any.
    #[must_use]
    pub fn active_provider(&self) -> Option<ProviderKind> {
        self.active.map(|idx| self.providers[idx].kind())
    }

    /// Send an admin notification for `submission`.
    ///
    /// Returns `true` only if the active provider accepted the message. Every
    /// failure is logged here and reduced to `false`; callers treat delivery
    /// as best-effort.
    pub async fn notify(&self, submission: &Submission) -> bool {
        let Some(provider) = self.active.map(|idx| &self.providers[idx]) else {
            warn!(
                "No email service configured. \
                 Set RESEND_API_KEY, SENDGRID_API_KEY, or MAILGUN_API_KEY."
            );
            return false;
        };

        let kind = provider.kind();
        let notification = Notification::from(submission);

        outgoing!(
            provider = %kind,
            submission = submission.kind(),
            "Sending admin notification"
        );

        match provider.send(&notification).await {
            Ok(()) => {
                outgoing!(
                    level = INFO,
                    provider = %kind,
                    submission = submission.kind(),
                    "Admin notification sent"
                );
                true
            }
            Err(err) => {
                error!(
                    provider = %kind,
                    submission = submission.kind(),
                    temporary = err.is_temporary(),
                    error = %err,
                    "Failed to send admin notification"
                );
                false
            }
        }
    }
}
