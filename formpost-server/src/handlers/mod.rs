//! Form submission handlers.
//!
//! Every handler runs the same pipeline: parse the form, validate it, check
//! the honeypot, then hand the submission to the [`Notifier`]. Notification
//! is best-effort: once a submission validates, the submitter gets a success
//! response whatever the provider did.

pub mod feedback;
pub mod fields;
pub mod subscribe;

use formpost_common::{Submission, incoming, tracing::error};
use formpost_delivery::Notifier;

/// What happened to a submission that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active provider accepted the admin notification.
    Notified,
    /// No provider is configured, or the provider call failed.
    NotificationFailed,
    /// The honeypot field was filled in; nothing was sent.
    SpamDropped,
}

/// Drop honeypot hits, otherwise build the submission and notify.
pub(crate) async fn dispatch(
    notifier: &Notifier,
    kind: &'static str,
    bot_field: Option<&str>,
    build: impl FnOnce() -> Submission,
) -> Outcome {
    if bot_field.is_some_and(|value| !value.is_empty()) {
        incoming!(level = DEBUG, submission = kind, "Honeypot field filled, dropping submission");
        return Outcome::SpamDropped;
    }

    let submission = build();
    if notifier.notify(&submission).await {
        Outcome::Notified
    } else {
        error!(
            submission = kind,
            "Submission accepted but the admin notification was not sent"
        );
        Outcome::NotificationFailed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use formpost_delivery::{DeliveryError, Notification, Provider, ProviderKind};

    use super::*;

    #[derive(Debug, Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Provider for Counting {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Resend
        }

        fn has_credentials(&self) -> bool {
            true
        }

        async fn send(&self, _: &Notification) -> Result<(), DeliveryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_honeypot_skips_notifier() {
        let provider = Arc::new(Counting::default());
        let notifier = Notifier::with_providers(vec![Arc::clone(&provider) as Arc<dyn Provider>]);

        let outcome = dispatch(&notifier, "subscription", Some("spam"), || {
            Submission::subscription("bot@example.com", None)
        })
        .await;

        assert_eq!(outcome, Outcome::SpamDropped);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

        let outcome = dispatch(&notifier, "subscription", None, || {
            Submission::subscription("person@example.com", None)
        })
        .await;

        assert_eq!(outcome, Outcome::Notified);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_notifier_fails_quietly() {
        let notifier = Notifier::with_providers(Vec::new());

        let outcome = dispatch(&notifier, "feedback", None, || {
            Submission::feedback("long enough message", None, None, None, None)
        })
        .await;

        assert_eq!(outcome, Outcome::NotificationFailed);
    }
}
