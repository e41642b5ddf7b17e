//! Console configuration loaded via OrthoConfig.
//!
//! Values come from `ROSTER_*` environment variables, matching command-line
//! flags, or a config file; unset values fall back to the defaults below.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://proyecto-backend-nine.vercel.app/usuarios";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configured collection URL did not parse.
    #[error("invalid base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// The configured collection URL cannot carry record ids as path segments.
    #[error("base URL {value:?} cannot address individual records")]
    OpaqueBaseUrl { value: String },
}

/// Settings controlling where the roster console sends requests.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct RosterSettings {
    /// Collection URL of the user service.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Use the in-process directory instead of the remote service.
    #[ortho_config(default = false)]
    pub offline: bool,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl RosterSettings {
    /// Return the configured collection URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the value is not an absolute URL that
    /// can carry path segments.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let url = Url::parse(raw).map_err(|source| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(SettingsError::OpaqueBaseUrl {
                value: raw.to_owned(),
            });
        }
        Ok(url)
    }

    /// Return the request timeout, never shorter than one second.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1))
    }
}
