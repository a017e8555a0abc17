use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_CONTENT_DISPOSITION, DEFAULT_VCARD_FILENAME};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub vcard: VCardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8698,
        }
    }
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// ## Summary
/// Encoder and download defaults.
///
/// Values are kept as plain strings here; the encoder crate interprets them
/// and rejects unknown versions or line endings.
#[derive(Debug, Clone, Deserialize)]
pub struct VCardConfig {
    /// Version given to contacts built by the HTTP layer ("3.0" or "4.0").
    pub default_version: String,
    /// "lf" or "crlf".
    pub line_ending: String,
    /// Download name used when a contact has no formatted name.
    pub default_filename: String,
    /// "attachment" or "inline".
    pub content_disposition: String,
}

impl Default for VCardConfig {
    fn default() -> Self {
        Self {
            default_version: "3.0".to_string(),
            line_ending: "lf".to_string(),
            default_filename: DEFAULT_VCARD_FILENAME.to_string(),
            content_disposition: DEFAULT_CONTENT_DISPOSITION.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `KUNAI_` prefix and `__` between nested
    /// keys, e.g. `KUNAI_VCARD__LINE_ENDING=crlf`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("vcard.default_version", "3.0")?
            .set_default("vcard.line_ending", "lf")?
            .set_default("vcard.default_filename", DEFAULT_VCARD_FILENAME)?
            .set_default("vcard.content_disposition", DEFAULT_CONTENT_DISPOSITION)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
mod tests;
