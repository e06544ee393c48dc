//! Client Configuration
//!
//! Base URL of the backend API and, for native shells, where the session
//! token is persisted.

use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "ADEPT_API_URL";
/// Environment variable holding the session file path (native only)
pub const SESSION_FILE_VAR: &str = "ADEPT_SESSION_FILE";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, stored without a trailing slash
    pub base_url: String,
    /// Where a `FileSession` keeps the token
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            session_file: None,
        })
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Load configuration from `.env` and the process environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| compiled_api_url().to_string());
        let mut config = Self::new(&base_url)?;
        config.session_file = std::env::var(SESSION_FILE_VAR)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        log::debug!("[CONFIG] API base URL: {}", config.base_url);
        Ok(config)
    }

    /// Browser builds only see the URL baked in at compile time
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(compiled_api_url())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            session_file: None,
        }
    }
}

fn compiled_api_url() -> &'static str {
    option_env!("ADEPT_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
