//! Error types for UKFast API operations.
//!
//! This module provides the error type shared by every UKFast resource client,
//! including decoding of the API's structured error envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for UKFast API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API responded with a non-2xx status code
    #[error("API request failed with status {status}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Decoded error details from the response body
        errors: Vec<ApiErrorDetail>,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not connect to the API
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Failed to decode a response body
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// Invalid endpoint URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request could not be built from the supplied entity
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid UUID format
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),
}

/// Specialized result type for UKFast API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single error object from the API's `{"errors": [...]}` envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorDetail {
    /// Short error title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Human-readable detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Status code reported inside the error object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Field or parameter the error relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Wire shape of an API error response body.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

impl Error {
    /// Build an [`Error::Api`] from a non-2xx status and the raw response body.
    ///
    /// Bodies that are not the structured error envelope are carried as a
    /// single detail entry so the caller still sees what the API said.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let errors = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if !envelope.errors.is_empty() => envelope.errors,
            _ => vec![ApiErrorDetail {
                title: None,
                detail: if body.is_empty() {
                    None
                } else {
                    Some(body.to_string())
                },
                status: Some(status),
                source: None,
            }],
        };

        Self::Api { status, errors }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api { .. } => "API_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::Parse(_) => "PARSE_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidUuid(_) => "INVALID_UUID",
        }
    }

    /// Returns the HTTP status code, when the API reported one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Self::InvalidUuid(err.to_string())
    }
}
