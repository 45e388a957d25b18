//! Error types for the Treeline API client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The client never retries: every variant surfaces to the caller on the
//! call that produced it.

use thiserror::Error;

/// The main error type for the Treeline API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request / response errors
    // ============================================================================
    /// The server understood the request but rejected it with a structured
    /// `error` message in the body.
    #[error("API error ({status}): {message}")]
    Service {
        /// HTTP status code returned by the server
        status: u16,
        /// Server-supplied error message
        message: String,
    },

    /// Non-2xx response with no structured error message.
    #[error("HTTP {status}: {body}")]
    Transport {
        /// HTTP status code returned by the server
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// Network-level failure (connection refused, timeout, DNS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body does not match the expected JSON shape.
    #[error("Unexpected response payload: {message}")]
    Payload {
        /// What was expected and what was found
        message: String,
    },

    /// The configured server origin is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Config-file errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a service error from a status code and server message
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error from a status code and raw body
    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    /// Create a payload error
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } | Error::Transport { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for the Treeline API client
pub type Result<T> = std::result::Result<T, Error>;
