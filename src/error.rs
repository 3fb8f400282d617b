//! Error types for tickdeck
//!
//! Every failure in the crate funnels into [`TickdeckError`]. The API layer
//! distinguishes two network failure kinds: a response with a non-2xx status
//! ([`TickdeckError::ApiStatus`]) and a request that never produced a
//! response ([`TickdeckError::Transport`]). Nothing in this crate retries;
//! errors propagate unchanged to the caller.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, TickdeckError>;

/// All errors that can occur in tickdeck
#[derive(Error, Debug)]
pub enum TickdeckError {
    /// The server answered with a non-success HTTP status
    #[error("{message}")]
    ApiStatus {
        /// Numeric HTTP status code
        status: u16,
        /// Human-readable message embedding the HTTP status line
        message: String,
    },

    /// The request never reached a server or produced no response,
    /// including timeouts and malformed response bodies
    #[error("network error: {message}")]
    Transport {
        /// Description of the underlying cause
        message: String,
    },

    /// A ticket description must contain at least one non-whitespace character
    #[error("ticket description cannot be empty")]
    EmptyDescription,

    /// Unrecognised status filter keyword
    #[error("invalid filter '{value}' (expected one of: all, completed, incomplete)")]
    InvalidFilter {
        /// The rejected input
        value: String,
    },

    /// Configuration loading or deserialization failed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed outside the API layer
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for errors that don't fit other categories
    #[error("{0}")]
    Custom(String),
}

impl TickdeckError {
    /// Create a custom error with a message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create a transport error from an underlying cause
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// HTTP status associated with an API failure
    ///
    /// Returns the response status for [`Self::ApiStatus`], `0` for
    /// [`Self::Transport`] (the request produced no status), and `None` for
    /// everything that is not an API failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiStatus { status, .. } => Some(*status),
            Self::Transport { .. } => Some(0),
            _ => None,
        }
    }

    /// Whether this error is a 404 response
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiStatus { status: 404, .. })
    }

    /// Whether this error originated in the API layer
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiStatus { .. } | Self::Transport { .. })
    }
}
