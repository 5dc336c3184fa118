//! End-to-end test harness for the form server
//!
//! ```no_run
//! use support::FormTestHarness;
//!
//! #[tokio::test]
//! async fn test_subscribe() {
//!     let harness = FormTestHarness::builder().build().await;
//!
//!     let reply = harness
//!         .submit("/api/subscribe", &[("email", "test@example.com")])
//!         .await;
//!     assert!(reply.body.success);
//!
//!     harness.shutdown().await;
//! }
//! ```
#![allow(dead_code)] // Test utility module - not all methods used in every test

use std::{net::SocketAddr, time::Duration};

use formpost_common::{
    Signal,
    config::{DeliveryConfig, EndpointOverrides, ProviderConfig, ServerConfig},
};
use formpost_delivery::Notifier;
use formpost_server::{FormResponse, FormServer, ServerError};
use reqwest::{RequestBuilder, StatusCode, multipart::Form};
use tokio::{sync::broadcast, task::JoinHandle, time::timeout};

use super::mock_provider::{MockProviderServer, RecordedRequest};

/// A reply from the form server
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub cors: Option<String>,
    pub body: FormResponse,
}

/// Form server plus mock provider, both on ephemeral localhost ports
pub struct FormTestHarness {
    addr: SocketAddr,
    client: reqwest::Client,
    provider: MockProviderServer,
    server_handle: JoinHandle<Result<(), ServerError>>,
    shutdown_tx: broadcast::Sender<Signal>,
}

impl FormTestHarness {
    #[must_use]
    pub fn builder() -> FormTestHarnessBuilder {
        FormTestHarnessBuilder::default()
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// POST `fields` form-encoded to `path`
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the reply is not a form response.
    pub async fn submit(&self, path: &str, fields: &[(&str, &str)]) -> Reply {
        let request = self
            .client
            .post(format!("http://{}{path}", self.addr))
            .form(fields);
        Self::reply(request).await
    }

    /// POST `fields` as `multipart/form-data`, the way a browser sends `FormData`
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the reply is not a form response.
    pub async fn submit_multipart(&self, path: &str, fields: &[(&str, &str)]) -> Reply {
        let form = fields.iter().fold(Form::new(), |form, (name, value)| {
            form.text((*name).to_owned(), (*value).to_owned())
        });
        let request = self
            .client
            .post(format!("http://{}{path}", self.addr))
            .multipart(form);
        Self::reply(request).await
    }

    async fn reply(request: RequestBuilder) -> Reply {
        let response = request.send().await.expect("form server reachable");

        let status = response.status();
        let cors = response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.json().await.expect("form response body");

        Reply { status, cors, body }
    }

    /// Requests the mock provider has received
    pub async fn provider_requests(&self) -> Vec<RecordedRequest> {
        self.provider.requests().await
    }

    /// Signal shutdown and wait for the server to drain
    ///
    /// # Panics
    ///
    /// Panics if the server does not stop cleanly within 5 seconds.
    pub async fn shutdown(self) {
        let Self {
            client,
            server_handle,
            shutdown_tx,
            ..
        } = self;

        drop(client);
        let _ = shutdown_tx.send(Signal::Shutdown);

        timeout(Duration::from_secs(5), server_handle)
            .await
            .expect("server stops in time")
            .expect("server task")
            .expect("server exits cleanly");
    }
}

/// Builder for [`FormTestHarness`]
pub struct FormTestHarnessBuilder {
    provider_status: u16,
    provider_body: String,
    configure_provider: bool,
    admin_email_to: Option<String>,
}

impl Default for FormTestHarnessBuilder {
    fn default() -> Self {
        Self {
            provider_status: 200,
            provider_body: r#"{"id":"mock-message-id"}"#.to_owned(),
            configure_provider: true,
            admin_email_to: None,
        }
    }
}

impl FormTestHarnessBuilder {
    /// Make the mock provider answer every call with `status`
    #[must_use]
    pub fn with_provider_status(mut self, status: u16, body: impl Into<String>) -> Self {
        self.provider_status = status;
        self.provider_body = body.into();
        self
    }

    /// Start without any provider credentials
    #[must_use]
    pub const fn without_provider(mut self) -> Self {
        self.configure_provider = false;
        self
    }

    #[must_use]
    pub fn with_admin_email_to(mut self, address: impl Into<String>) -> Self {
        self.admin_email_to = Some(address.into());
        self
    }

    /// Start the mock provider and the form server
    ///
    /// # Panics
    ///
    /// Panics if either server fails to start.
    pub async fn build(self) -> FormTestHarness {
        let provider = MockProviderServer::builder()
            .with_status(self.provider_status, self.provider_body)
            .build()
            .await;

        let providers = ProviderConfig {
            resend_api_key: self.configure_provider.then(|| "re_test".to_owned()),
            admin_email_to: self.admin_email_to,
            ..ProviderConfig::default()
        };
        let delivery = DeliveryConfig {
            endpoints: EndpointOverrides {
                resend: Some(provider.base_url()),
                ..EndpointOverrides::default()
            },
            ..DeliveryConfig::default()
        };
        let notifier = Notifier::new(&providers, &delivery).expect("notifier");

        let config = ServerConfig {
            listen_address: "127.0.0.1:0".to_owned(),
            ..ServerConfig::default()
        };
        let server = FormServer::new(&config, notifier)
            .await
            .expect("form server binds");
        let addr = server.local_addr().expect("bound address");

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let server_handle = tokio::spawn(server.serve(shutdown_rx));

        FormTestHarness {
            addr,
            client: reqwest::Client::new(),
            provider,
            server_handle,
            shutdown_tx,
        }
    }
}
