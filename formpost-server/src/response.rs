//! JSON bodies returned by the form endpoints.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use formpost_common::error::ValidationError;
use serde::{Deserialize, Serialize};

pub const SUBSCRIBED_MESSAGE: &str =
    "Thank you for subscribing! We'll keep you updated on upcoming discussions.";

pub const FEEDBACK_RECEIVED_MESSAGE: &str =
    "Thank you for your feedback! We appreciate your input and will review it soon.";

pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Machine-readable classification carried alongside `success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Ok,
    Validation,
    Internal,
}

/// `{"success": .., "message": .., "kind": ..}`
///
/// Only successful responses carry `Access-Control-Allow-Origin: *`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub success: bool,
    pub message: String,
    pub kind: ResponseKind,
}

impl FormResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            kind: ResponseKind::Ok,
        }
    }

    #[must_use]
    pub fn validation(error: ValidationError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            kind: ResponseKind::Validation,
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            success: false,
            message: INTERNAL_ERROR_MESSAGE.to_owned(),
            kind: ResponseKind::Internal,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind {
            ResponseKind::Ok => StatusCode::OK,
            ResponseKind::Validation => StatusCode::BAD_REQUEST,
            ResponseKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(self)).into_response();

        if status.is_success() {
            response.headers_mut().insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }

        response
    }
}
