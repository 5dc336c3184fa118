use async_trait::async_trait;
use formpost_common::config::ProviderConfig;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use super::{ApiKey, Provider, ProviderKind, endpoint, execute};
use crate::{DeliveryError, Notification};

/// SendGrid v3 (`POST /v3/mail/send`, bearer token, personalizations JSON body).
#[derive(Debug, Clone)]
pub struct SendGrid {
    client: Client,
    api_key: Option<ApiKey>,
    base_url: String,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct MailSend<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    content: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
    subject: &'a str,
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

impl SendGrid {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.sendgrid.com";

    #[must_use]
    pub fn new(client: Client, config: &ProviderConfig, base_url: Option<&str>) -> Self {
        Self {
            client,
            api_key: ApiKey::new(config.sendgrid_api_key()),
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
            DeliveryError::Configuration("SENDGRID_API_KEY is not set".to_owned())
        })?;

        Ok(self
            .client
            .post(endpoint(&self.base_url, "/v3/mail/send"))
            .bearer_auth(key.expose())
            .json(&MailSend {
                personalizations: [Personalization {
                    to: [Address { email: &self.to }],
                    subject: &notification.subject,
                }],
                from: Address { email: &self.from },
                content: [Content {
                    kind: "text/html",
                    value: &notification.html,
                }],
            }))
    }
}

#[async_trait]
impl Provider for SendGrid {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SendGrid
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        execute(self.kind(), self.request(notification)?).await
    }
}
