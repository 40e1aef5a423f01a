//! Unified error handling for the kickoff crate
//!
//! Every call that goes over the wire returns [`ApiError`]. The variants
//! follow the failure taxonomy the UI cares about:
//!
//! - [`ApiError::Network`] - the server could not be reached at all
//! - [`ApiError::Http`] - the server answered with a non-2xx status
//! - [`ApiError::Decode`] - the body did not match the expected envelope
//! - [`ApiError::Rejected`] - a 2xx response whose envelope says `error`
//!
//! [`ErrorCategory`] classifies an error into the bucket the presentation
//! layer branches on, and [`ApiError::user_message`] turns it into the text
//! stored in a failed fetch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kickoff::error::{ApiError, ErrorCategory};
//!
//! fn describe(err: &ApiError) {
//!     if err.is_retryable() {
//!         println!("{} (retry available)", err.user_message());
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Classification of errors for presentation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport could not reach the server
    Network,
    /// 4xx responses (validation, not found, unauthorized)
    Client,
    /// 5xx responses
    Server,
    /// Response did not honor the envelope contract
    Contract,
    /// Local misconfiguration (bad base URL, client init)
    Config,
    /// Failure inside this process (a data source task panicked)
    Internal,
}

impl ErrorCategory {
    /// Short description of the category
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Network => "network error",
            Self::Client => "request error",
            Self::Server => "server error",
            Self::Contract => "unexpected response",
            Self::Config => "configuration error",
            Self::Internal => "internal error",
        }
    }
}

/// Errors produced by the API client and the services built on it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport layer failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Server responded with a non-2xx status
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Body could not be parsed into the expected envelope shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// 2xx response carrying an `error` envelope
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Endpoint URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client could not be constructed
    #[error("Initialization error: {0}")]
    Init(String),

    /// Background task ended without producing a result
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build an HTTP error from a status code and optional server message
    pub fn http(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        });
        Self::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// Status code for HTTP errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Http { status, .. } if *status >= 500 => ErrorCategory::Server,
            Self::Http { .. } | Self::Rejected(_) => ErrorCategory::Client,
            Self::Decode(_) => ErrorCategory::Contract,
            Self::InvalidUrl(_) | Self::Init(_) => ErrorCategory::Config,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Whether the UI should offer a manual retry action
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Server
        )
    }

    /// Human-readable message for display next to the failed view
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "Unable to reach the server. Check your connection and retry.".to_string()
            }
            Self::Http { status, .. } if *status >= 500 => {
                "Server error. Please try again.".to_string()
            }
            Self::Http { status: 401, .. } | Self::Http { status: 403, .. } => {
                "You are not authorized to view this.".to_string()
            }
            Self::Http { status: 404, .. } => "Not found.".to_string(),
            Self::Http { status, message } => {
                // A bare reason phrase means the server sent no message of its own
                let reason = StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|code| code.canonical_reason());
                if message.is_empty() || reason == Some(message.as_str()) {
                    format!("Request was rejected ({status}).")
                } else {
                    message.clone()
                }
            }
            Self::Rejected(message) if !message.is_empty() => message.clone(),
            Self::Rejected(_)
            | Self::Decode(_)
            | Self::InvalidUrl(_)
            | Self::Init(_)
            | Self::Internal(_) => {
                "Something went wrong.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else if let Some(status) = err.status() {
            Self::http(status, None)
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Result type alias using [`ApiError`]
pub type Result<T> = std::result::Result<T, ApiError>;
