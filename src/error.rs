//! Client Errors
//!
//! Transport, server and parse failures surface unchanged to the caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Session IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never reached the server or no response arrived
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status; `message` is the `detail` field or the operation fallback
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Body of a successful response did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status for server-reported failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
