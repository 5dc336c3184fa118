//! `POST /api/feedback`

use std::sync::Arc;

use axum::extract::State;
use formpost_common::{
    Submission, error::ValidationError, incoming, submission::EMAIL_NOT_PROVIDED,
    validate::is_valid_email,
};

use super::{dispatch, fields::FormFields};
use crate::{AppState, FormError, FormResponse, response::FEEDBACK_RECEIVED_MESSAGE};

/// Shortest accepted message, counted in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Default)]
pub struct FeedbackForm {
    pub message: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub topic_suggestions: Option<String>,
    pub feedback_type: Option<String>,
    pub bot_field: Option<String>,
}

impl From<FormFields> for FeedbackForm {
    fn from(fields: FormFields) -> Self {
        Self {
            message: fields.value("message"),
            name: fields.value("name"),
            email: fields.value("email"),
            topic_suggestions: fields.value("topic-suggestions"),
            feedback_type: fields.value("feedback-type"),
            bot_field: fields.value("bot-field"),
        }
    }
}

impl FeedbackForm {
    /// Check the message length, then the optional email.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let long_enough = self
            .message
            .as_deref()
            .is_some_and(|m| m.trim().chars().count() >= MIN_MESSAGE_CHARS);
        if !long_enough {
            return Err(ValidationError::MessageTooShort);
        }

        if let Some(email) = self.email.as_deref()
            && email != EMAIL_NOT_PROVIDED
            && !is_valid_email(email)
        {
            return Err(ValidationError::InvalidOptionalEmail);
        }

        Ok(())
    }

    fn into_submission(self) -> Submission {
        Submission::feedback(
            self.message.unwrap_or_default(),
            self.name,
            self.email,
            self.topic_suggestions,
            self.feedback_type,
        )
    }
}

pub async fn handle(
    State(state): State<Arc<AppState>>,
    fields: FormFields,
) -> Result<FormResponse, FormError> {
    let mut form = FeedbackForm::from(fields);
    form.validate()?;

    let bot_field = form.bot_field.take();
    let outcome = dispatch(&state.notifier, "feedback", bot_field.as_deref(), || {
        form.into_submission()
    })
    .await;

    incoming!(level = DEBUG, ?outcome, "Feedback handled");
    Ok(FormResponse::ok(FEEDBACK_RECEIVED_MESSAGE))
}
