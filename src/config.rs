use serde::{Deserialize, Serialize};

use crate::{CurveKind, Error, Result};

/// Output format of the command-line tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `label: value` lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Settings for the `chameleon` command-line tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Curve used when generating new keys.
    pub curve: CurveKind,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Output format.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curve: CurveKind::P384,
            log_filter: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from defaults, `.env`, a TOML file and the environment.
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables with `CHAMELEON_` prefix (e.g., `CHAMELEON_CURVE=p256`)
    /// 2. TOML configuration file (if exists)
    /// 3. `.env` file (if exists)
    /// 4. Built-in defaults
    ///
    /// The TOML file path can be set via `CHAMELEON_CONFIG_PATH`. If not set, it
    /// defaults to `./config/chameleon.toml`. A missing file is not an error.
    ///
    /// # Environment Variable Examples
    /// ```bash
    /// CHAMELEON_CURVE=p256
    /// CHAMELEON_LOG_FILTER=chameleon_sig=debug
    /// CHAMELEON_OUTPUT=json
    /// ```
    ///
    /// # Errors
    /// Returns an error if a source is malformed or contains invalid values.
    #[allow(clippy::result_large_err)]
    pub fn load() -> figment::error::Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::Figment;

        // Attempt to load .env file (silently ignore if it doesn't exist)
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("CHAMELEON_CONFIG_PATH")
            .unwrap_or_else(|_| "config/chameleon.toml".to_string());

        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("CHAMELEON_").ignore(&["CONFIG_PATH"]))
            .extract()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the log filter is empty.
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(Error::Config("log_filter cannot be empty".to_string()));
        }
        Ok(())
    }
}
