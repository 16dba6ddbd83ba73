//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// The four failure categories a caller of `Query::execute` can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed predicate, sort, limit or query construction.
    InvalidArgument,
    /// The credential provider could not establish a session.
    Authentication,
    /// Non-success HTTP status or connection/I-O failure.
    Transport,
    /// The response body is not JSON or does not match the record shape.
    Parse,
}

/// Errors that can occur while building or executing a query.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A builder or constructor received an argument it cannot represent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Login was rejected or could not be completed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The server answered with a non-success status.
    #[error("request failed with HTTP {status}: {body}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response body, kept for diagnosis.
        body: String,
    },

    /// Connection, TLS or body read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Failed to deserialize the response body.
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),
}

impl ClientError {
    /// Create an invalid-argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Classify this error into one of the four caller-visible kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Http { .. } | Self::Transport(_) => ErrorKind::Transport,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }

    /// HTTP status carried by a transport failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error came from the credential provider.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}
