//! Route table and middleware stack.

use std::{any::Any, sync::Arc};

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use formpost_common::{config::ServerTimeouts, tracing::error};
use formpost_delivery::Notifier;
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{FormResponse, handlers};

/// State shared by every request. Read-only after startup.
#[derive(Debug)]
pub struct AppState {
    pub notifier: Notifier,
}

impl AppState {
    #[must_use]
    pub const fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }
}

/// Build the application router.
///
/// - `POST /api/subscribe`
/// - `POST /api/feedback`
/// - `GET /health/live`
pub fn router(state: Arc<AppState>, timeouts: &ServerTimeouts) -> Router {
    Router::new()
        .route("/api/subscribe", post(handlers::subscribe::handle))
        .route("/api/feedback", post(handlers::feedback::handle))
        .route("/health/live", get(liveness))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(HandleErrorLayer::new(middleware_error))
                .layer(TimeoutLayer::new(timeouts.request_timeout())),
        )
}

/// Liveness check; 200 whenever the process can answer.
async fn liveness() -> &'static str {
    "OK"
}

/// Requests that run past the server timeout get the generic error body.
async fn middleware_error(err: BoxError) -> FormResponse {
    if err.is::<tower::timeout::error::Elapsed>() {
        error!("Form request timed out");
    } else {
        error!(error = %err, "Form request failed in middleware");
    }
    FormResponse::internal()
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!(panic = detail, "Form handler panicked");
    FormResponse::internal().into_response()
}
