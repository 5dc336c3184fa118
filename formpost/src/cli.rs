//! Command-line arguments and configuration layering.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use formpost_common::config::FormpostConfig;

/// Read from the working directory when `--config` is not given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "formpost.toml";

/// Accept website form submissions and forward them as admin emails
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "formpost")]
#[command(
    about = "Accept website form submissions and forward them as admin emails",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file [default: ./formpost.toml, if it exists]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, overriding the file and FORMPOST_LISTEN
    #[arg(short, long)]
    pub listen: Option<String>,
}

impl Cli {
    /// Resolve defaults, the config file, the environment and these flags,
    /// in that order of increasing precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load_config(&self) -> anyhow::Result<FormpostConfig> {
        let mut config =
            FormpostConfig::load(self.config.as_deref(), Path::new(DEFAULT_CONFIG_PATH))
                .context("Unable to load configuration")?;

        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut FormpostConfig) {
        if let Some(listen) = &self.listen {
            config.server.listen_address.clone_from(listen);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["formpost"]).expect("no flags needed");
        assert_eq!(cli, Cli::default());

        let cli = Cli::try_parse_from([
            "formpost",
            "--config",
            "/etc/formpost.toml",
            "-l",
            "127.0.0.1:9000",
        ])
        .expect("valid flags");
        assert_eq!(cli.config, Some(PathBuf::from("/etc/formpost.toml")));
        assert_eq!(cli.listen.as_deref(), Some("127.0.0.1:9000"));
    }

    #[test]
    fn test_listen_flag_wins() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[server]\nlisten_address = \"127.0.0.1:3000\"").expect("write config");

        let from_file = FormpostConfig::from_file(file.path()).expect("valid config");
        assert_eq!(from_file.server.listen_address, "127.0.0.1:3000");

        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            listen: Some("127.0.0.1:9000".to_owned()),
        };
        let mut config = from_file;
        cli.apply(&mut config);
        assert_eq!(config.server.listen_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/formpost.toml")),
            listen: None,
        };

        let error = cli.load_config().expect_err("missing file");
        assert_eq!(error.to_string(), "Unable to load configuration");
        assert!(
            format!("{error:#}").contains("Failed to read config file /nonexistent/formpost.toml")
        );
    }
}
