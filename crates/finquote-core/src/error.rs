use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for caller input and client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("api token cannot be empty")]
    EmptyApiToken,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be greater than zero milliseconds")]
    ZeroTimeout,
    #[error("environment variable '{name}' is not set")]
    MissingEnv { name: &'static str },
    #[error("environment variable '{name}' has invalid value '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("timestamp {value} is outside the representable range")]
    TimestampOutOfRange { value: i64 },

    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

/// Errors surfaced by [`QuoteClient`](crate::QuoteClient) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("upstream request failed with status {status_code}")]
    UpstreamRequest { status_code: u16 },

    #[error("malformed upstream response: {message}")]
    MalformedResponse { message: String },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for logs and CLI output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UpstreamRequest { .. } => "quote.upstream_status",
            Self::MalformedResponse { .. } => "quote.malformed_response",
            Self::Transport(_) => "quote.transport",
            Self::Validation(_) => "quote.invalid_request",
        }
    }

    /// Whether repeating the same call could plausibly succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn retryable(&self) -> bool {
        match self {
            Self::UpstreamRequest { status_code } => *status_code == 429 || *status_code >= 500,
            Self::Transport(error) => error.retryable(),
            Self::MalformedResponse { .. } | Self::Validation(_) => false,
        }
    }
}
