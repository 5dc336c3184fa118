use async_trait::async_trait;
use formpost_common::config::ProviderConfig;
use reqwest::{Client, RequestBuilder, multipart::Form};

use super::{ApiKey, Provider, ProviderKind, endpoint, execute};
use crate::{DeliveryError, Notification};

/// Mailgun (`POST /v3/<domain>/messages`, basic auth `api:<key>`, multipart form fields).
///
/// Selected by `MAILGUN_API_KEY` alone; a missing `MAILGUN_DOMAIN` surfaces as a
/// configuration error when sending.
#[derive(Debug, Clone)]
pub struct Mailgun {
    client: Client,
    api_key: Option<ApiKey>,
    domain: Option<String>,
    base_url: String,
    from: Option<String>,
    to: String,
}

impl Mailgun {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.mailgun.net";

    #[must_use]
    pub fn new(client: Client, config: &ProviderConfig, base_url: Option<&str>) -> Self {
        Self {
            client,
            api_key: ApiKey::new(config.mailgun_api_key()),
            domain: config.mailgun_domain().map(str::to_owned),
            base_url: base_url.unwrap_or(Self::DEFAULT_BASE_URL).to_owned(),
            from: config.from_override().map(str::to_owned),
            to: config.to_address().to_owned(),
        }
    }

    pub(crate) fn request(
        &self,
        notification: &Notification,
    ) -> Result<RequestBuilder, DeliveryError> {
        let key = self.api_key.as_ref().ok_or_else(|| {
            DeliveryError::Configuration("MAILGUN_API_KEY is not set".to_owned())
        })?;
        let domain = self.domain.as_deref().ok_or_else(|| {
            DeliveryError::Configuration("MAILGUN_DOMAIN is not set".to_owned())
        })?;

        let from = self
            .from
            .clone()
            .unwrap_or_else(|| format!("noreply@{domain}"));

        let form = Form::new()
            .text("from", from)
            .text("to", self.to.clone())
            .text("subject", notification.subject.clone())
            .text("html", notification.html.clone());

        Ok(self
            .client
            .post(endpoint(&self.base_url, &format!("/v3/{domain}/messages")))
            .basic_auth("api", Some(key.expose()))
            .multipart(form))
    }
}

#[async_trait]
impl Provider for Mailgun {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Mailgun
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        execute(self.kind(), self.request(notification)?).await
    }
}
