use async_trait::async_trait;
use formpost_common::config::ProviderConfig;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use super::{ApiKey, Provider, ProviderKind, endpoint, execute};
use crate::{DeliveryError, Notification};

/// Resend (`POST /emails`, bearer token, flat JSON body).
#[derive(Debug, Clone)]
pub struct Resend {
    client: Client,
    api_key: Option<ApiKey>,
    base_url: String,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct Email<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

impl Resend {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.resend.com";

    #[must_use]
    pub fn new(client: Client, config: &ProviderConfig, base_url: Option<&str>) -> Self {
        Self {
            client,
            api_key: ApiKey::new(config.resend_api_key()),
            base_url: base_url.unwrap_or(Self::DEFAULT_BASE_URL).to_owned(),
            from: config.from_address().to_owned(),
            to: config.to_address().to_owned(),
        }
    }

    pub(crate) fn request(
        &self,
        notification: &Notification,
    ) -> Result<RequestBuilder, DeliveryError> {
        let key = self.api_key.as_ref().ok_or_else(|| {
            DeliveryError::Configuration("RESEND_API_KEY is not set".to_owned())
        })?;

        Ok(self
            .client
            .post(endpoint(&self.base_url, "/emails"))
            .bearer_auth(key.expose())
            .json(&Email {
                from: &self.from,
                to: &self.to,
                subject: &notification.subject,
                html: &notification.html,
            }))
    }
}

#[async_trait]
impl Provider for Resend {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Resend
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        execute(self.kind(), self.request(notification)?).await
    }
}
