//! Timeout configuration for inbound form requests and outbound provider calls.
//!
//! Neither side may block a serving slot indefinitely: provider calls are
//! bounded by [`ClientTimeouts`], and every inbound request is additionally
//! bounded by [`ServerTimeouts`] as a backstop.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Inbound HTTP request timeouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTimeouts {
    /// Maximum time spent handling one form submission, provider call included.
    ///
    /// Default: 15 seconds
    #[serde(default = "defaults::server_request_secs")]
    pub request_secs: u64,
}

impl Default for ServerTimeouts {
    fn default() -> Self {
        Self {
            request_secs: defaults::server_request_secs(),
        }
    }
}

impl ServerTimeouts {
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

/// Outbound provider call timeouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientTimeouts {
    /// Timeout for establishing the TCP/TLS connection to the provider.
    ///
    /// Default: 5 seconds
    #[serde(default = "defaults::client_connect_secs")]
    pub connect_secs: u64,

    /// Timeout for the whole provider request, from connect to the last body byte.
    ///
    /// Default: 10 seconds
    #[serde(default = "defaults::client_request_secs")]
    pub request_secs: u64,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            connect_secs: defaults::client_connect_secs(),
            request_secs: defaults::client_request_secs(),
        }
    }
}

impl ClientTimeouts {
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

mod defaults {
    pub const fn server_request_secs() -> u64 {
        15
    }

    pub const fn client_connect_secs() -> u64 {
        5
    }
    pub const fn client_request_secs() -> u64 {
        10
    }
}
