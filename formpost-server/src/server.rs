//! Form HTTP server

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use formpost_common::{Signal, config::ServerConfig, internal};
use formpost_delivery::Notifier;
use tokio::{net::TcpListener, sync::broadcast};

use crate::{AppState, ServerError, router};

/// Serves the form endpoints until a shutdown signal arrives.
#[derive(Debug)]
pub struct FormServer {
    listener: TcpListener,
    router: Router,
}

impl FormServer {
    /// Bind the listener and build the router.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the configured address fails.
    pub async fn new(config: &ServerConfig, notifier: Notifier) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.listen_address)
            .await
            .map_err(|source| ServerError::Bind {
                address: config.listen_address.clone(),
                source,
            })?;

        internal!(
            level = INFO,
            address = %config.listen_address,
            "Form server bound successfully"
        );

        let router = router(Arc::new(AppState::new(notifier)), &config.timeouts);

        Ok(Self { listener, router })
    }

    /// The address actually bound, useful when configured with port 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket address cannot be read.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::Serve)
    }

    /// Run until `shutdown` yields, then drain in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the server encounters a runtime error.
    pub async fn serve(self, mut shutdown: broadcast::Receiver<Signal>) -> Result<(), ServerError> {
        internal!(level = INFO, "Form server starting");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                internal!(level = INFO, "Form server received shutdown signal");
            })
            .await
            .map_err(ServerError::Serve)?;

        internal!(level = INFO, "Form server stopped");
        Ok(())
    }
}
