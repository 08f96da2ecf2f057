//! API-specific error types
//!
//! Classifies HTTP and transport failures for the facades. The audit-log
//! facade propagates these unchanged; the auth facade normalizes them into
//! a single human-readable message; the domain facade surfaces the server's
//! error body verbatim when one is present.

use std::time::Duration;

use reportdeck_domain::ReportdeckError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// The message carried by this error, without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::Auth(m) | Self::Server(m) | Self::Client(m) | Self::Network(m)
            | Self::Config(m) => m.clone(),
            Self::Timeout(d) => format!("Timeout after {d:?}"),
        }
    }

    /// Classify a non-success status into an error carrying `message`
    pub fn from_status(status: StatusCode, message: String) -> Self {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Network(message)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Config(err.to_string())
        } else if err.is_decode() {
            Self::Client(format!("Failed to parse response: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<ApiError> for ReportdeckError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(m) => Self::Auth(m),
            ApiError::Server(m) | ApiError::Network(m) => Self::Network(m),
            ApiError::Client(m) => Self::InvalidInput(m),
            ApiError::Config(m) => Self::Config(m),
            ApiError::Timeout(d) => Self::Network(format!("Timeout after {d:?}")),
        }
    }
}

/// Structured error body some endpoints return (`{"message": "..."}`)
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
