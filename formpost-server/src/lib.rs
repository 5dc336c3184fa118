//! HTTP endpoints for website form submissions
//!
//! # Endpoints
//!
//! - **`POST /api/subscribe`** - Newsletter subscription (`email`, `name`)
//! - **`POST /api/feedback`** - Feedback (`message`, `name`, `email`,
//!   `topic-suggestions`, `feedback-type`)
//! - **`GET /health/live`** - Liveness check
//!
//! Both form endpoints take `application/x-www-form-urlencoded` or
//! `multipart/form-data` bodies, honour a `bot-field` honeypot and answer with
//! `{"success", "message", "kind"}` JSON.
//!
//! # Usage
//!
//! ```rust,no_run
//! use formpost_common::config::FormpostConfig;
//! use formpost_delivery::Notifier;
//! use formpost_server::FormServer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FormpostConfig::default();
//! let notifier = Notifier::new(&config.providers, &config.delivery)?;
//! let server = FormServer::new(&config.server, notifier).await?;
//!
//! // server.serve(shutdown_receiver).await?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod handlers;
mod response;
mod router;
mod server;

pub use error::{FormError, ServerError};
pub use handlers::Outcome;
pub use response::{
    FEEDBACK_RECEIVED_MESSAGE, FormResponse, INTERNAL_ERROR_MESSAGE, ResponseKind,
    SUBSCRIBED_MESSAGE,
};
pub use router::{AppState, router};
pub use server::FormServer;
