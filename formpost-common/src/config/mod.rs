//! Configuration types for formpost.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables. The result is an immutable [`FormpostConfig`]
//! that is handed to the server and the notifier at construction; nothing
//! reads the environment after startup.
//!
//! ```toml
//! [server]
//! listen_address = "0.0.0.0:8080"
//!
//! [server.timeouts]
//! request_secs = 15
//!
//! [delivery.timeouts]
//! connect_secs = 5
//! request_secs = 10
//!
//! [providers]
//! mailgun_domain = "mg.example.com"
//! admin_email_to = "admin@example.com"
//! ```
//!
//! ## Modules
//!
//! - [`timeouts`]: inbound and outbound timeout settings
//! - [`providers`]: provider credentials and admin addresses

pub mod providers;
pub mod timeouts;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use providers::{DEFAULT_FROM, DEFAULT_TO, ProviderConfig};
pub use timeouts::{ClientTimeouts, ServerTimeouts};

/// Environment variable overriding [`ServerConfig::listen_address`].
pub const LISTEN_ENV: &str = "FORMPOST_LISTEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    ///
    /// Default: `0.0.0.0:8080`
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default)]
    pub timeouts: ServerTimeouts,
}

fn default_listen_address() -> String {
    "0.0.0.0:8080".to_owned()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            timeouts: ServerTimeouts::default(),
        }
    }
}

/// Outbound delivery settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub timeouts: ClientTimeouts,

    /// Base URL overrides, e.g. `https://api.eu.mailgun.net` for Mailgun's EU region.
    #[serde(default)]
    pub endpoints: EndpointOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sendgrid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailgun: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormpostConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,

    #[serde(default)]
    pub providers: ProviderConfig,
}

impl FormpostConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or does not
    /// match the expected structure.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&text, path)
    }

    /// Overlay environment-style values onto this configuration.
    pub fn merge_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(listen) = lookup(LISTEN_ENV).filter(|v| !v.is_empty()) {
            self.server.listen_address = listen;
        }

        self.providers.merge_env(lookup);
    }

    /// Load the full layered configuration from the process environment.
    ///
    /// An explicitly given `path` must exist. Without one, `default_path` is
    /// used only if it exists, otherwise built-in defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read or is invalid.
    pub fn load(path: Option<&Path>, default_path: &Path) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if default_path.exists() => Self::from_file(default_path)?,
            None => Self::default(),
        };

        config.merge_env(|var| std::env::var(var).ok());

        Ok(config)
    }
}
