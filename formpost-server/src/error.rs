//! Error types for the form endpoints and the server lifecycle

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
    },
    response::{IntoResponse, Response},
};
use formpost_common::{error::ValidationError, incoming, tracing::error};
use thiserror::Error;

use crate::FormResponse;

/// A form submission that could not be accepted.
#[derive(Debug, Error)]
pub enum FormError {
    /// Answered with 400 and the validation message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Answered with 500 and a generic message; the detail stays in the logs.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FormRejection> for FormError {
    fn from(rejection: FormRejection) -> Self {
        Self::Internal(rejection.body_text())
    }
}

impl From<MultipartRejection> for FormError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Internal(rejection.body_text())
    }
}

impl From<MultipartError> for FormError {
    fn from(err: MultipartError) -> Self {
        Self::Internal(err.body_text())
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                incoming!(level = DEBUG, field = err.field(), "Rejected submission: {err}");
                FormResponse::validation(err).into_response()
            }
            Self::Internal(detail) => {
                error!(error = %detail, "Failed to process form submission");
                FormResponse::internal().into_response()
            }
        }
    }
}

/// Errors that can occur while starting or running the HTTP server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("Failed to bind form server to {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("Form server error: {0}")]
    Serve(#[source] std::io::Error),
}
