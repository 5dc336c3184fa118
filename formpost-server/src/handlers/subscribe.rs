//! `POST /api/subscribe`

use std::sync::Arc;

use axum::extract::State;
use formpost_common::{Submission, error::ValidationError, incoming, validate::is_valid_email};

use super::{dispatch, fields::FormFields};
use crate::{AppState, FormError, FormResponse, response::SUBSCRIBED_MESSAGE};

#[derive(Debug, Default)]
pub struct SubscribeForm {
    pub email: Option<String>,
    pub name: Option<String>,
    pub bot_field: Option<String>,
}

impl From<FormFields> for SubscribeForm {
    fn from(fields: FormFields) -> Self {
        Self {
            email: fields.value("email"),
            name: fields.value("name"),
            bot_field: fields.value("bot-field"),
        }
    }
}

impl SubscribeForm {
    /// The submitted address, if it is present and well-formed.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidEmail`] otherwise.
    pub fn valid_email(&self) -> Result<&str, ValidationError> {
        self.email
            .as_deref()
            .filter(|email| is_valid_email(email))
            .ok_or(ValidationError::InvalidEmail)
    }
}

pub async fn handle(
    State(state): State<Arc<AppState>>,
    fields: FormFields,
) -> Result<FormResponse, FormError> {
    let form = SubscribeForm::from(fields);
    let email = form.valid_email()?.to_owned();

    let outcome = dispatch(&state.notifier, "subscription", form.bot_field.as_deref(), || {
        Submission::subscription(email, form.name)
    })
    .await;

    incoming!(level = DEBUG, ?outcome, "Subscription handled");
    Ok(FormResponse::ok(SUBSCRIBED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_required() {
        assert_eq!(
            SubscribeForm::default().valid_email(),
            Err(ValidationError::InvalidEmail)
        );

        let form = SubscribeForm {
            email: Some("not-an-email".to_owned()),
            ..SubscribeForm::default()
        };
        assert_eq!(form.valid_email(), Err(ValidationError::InvalidEmail));

        let form = SubscribeForm {
            email: Some("a@b.co".to_owned()),
            ..SubscribeForm::default()
        };
        assert_eq!(form.valid_email(), Ok("a@b.co"));
    }

    #[test]
    fn test_from_fields() {
        let fields: FormFields = [
            ("email", "a@b.co"),
            ("email", "second@b.co"),
            ("name", ""),
            ("bot-field", "spam"),
        ]
        .into_iter()
        .collect();

        let form = SubscribeForm::from(fields);
        assert_eq!(form.email.as_deref(), Some("a@b.co"));
        assert_eq!(form.name, None);
        assert_eq!(form.bot_field.as_deref(), Some("spam"));
    }
}
