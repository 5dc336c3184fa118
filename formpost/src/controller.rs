//! Process lifecycle: build the notifier and server, run until a shutdown
//! signal, then drain.

use std::future::Future;

use formpost_common::{Signal, config::FormpostConfig, internal, tracing::warn};
use formpost_delivery::Notifier;
use formpost_server::FormServer;
use tokio::sync::broadcast;

#[derive(Debug)]
pub struct Formpost {
    config: FormpostConfig,
}

impl Formpost {
    #[must_use]
    pub const fn new(config: FormpostConfig) -> Self {
        Self { config }
    }

    /// Run until SIGINT or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the notifier or server cannot be started, or the
    /// server fails while running.
    pub async fn run(self) -> anyhow::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Run until `shutdown` completes, then let in-flight requests finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the notifier or server cannot be started, if the
    /// server fails while running, or if `shutdown` itself fails.
    pub async fn run_until<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = anyhow::Result<()>>,
    {
        let providers = &self.config.providers;
        if providers.mailgun_api_key().is_some()
            && providers.mailgun_domain().is_none()
            && providers.resend_api_key().is_none()
            && providers.sendgrid_api_key().is_none()
        {
            warn!("MAILGUN_API_KEY is set without MAILGUN_DOMAIN; notifications will fail");
        }

        let notifier = Notifier::new(providers, &self.config.delivery)?;
        let server = FormServer::new(&self.config.server, notifier).await?;

        let (sender, receiver) = broadcast::channel(1);
        let mut serving = tokio::spawn(server.serve(receiver));

        internal!(level = INFO, "Controller running");

        tokio::select! {
            served = &mut serving => {
                served??;
                return Ok(());
            }
            signalled = shutdown => signalled?,
        }

        internal!(level = INFO, "Shutting down...");
        let _ = sender.send(Signal::Shutdown);
        serving.await??;

        Ok(())
    }
}

async fn shutdown_signal() -> anyhow::Result<()> {
    let mut terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    tokio::select! {
        r = tokio::signal::ctrl_c() => {
            r?;
            internal!(level = INFO, "CTRL+C entered, shutting down");
        }
        _ = terminate.recv() => {
            internal!(level = INFO, "Terminate Signal received, shutting down");
        }
    };

    Ok(())
}
