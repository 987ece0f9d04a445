//! Error types for iiko-client.
//!
//! Every failure is local and recoverable. The kinds are grouped so callers
//! can branch without reading logs:
//! - no response: [`ErrorKind::Timeout`], [`ErrorKind::Connection`], [`ErrorKind::InvalidUrl`]
//! - error response: [`ErrorKind::Http`], [`ErrorKind::Authentication`]
//! - not authenticated: [`ErrorKind::NotAuthenticated`]

use crate::security;

/// Result type alias for iiko-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for iiko-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the remote side never answered.
    pub fn is_no_response(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::InvalidUrl(_)
        )
    }

    /// Returns true if the remote side answered with a non-success status.
    pub fn is_error_response(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Http { .. } | ErrorKind::Authentication { .. }
        )
    }

    /// Returns true if a call was dispatched without a session token.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self.kind, ErrorKind::NotAuthenticated)
    }

    /// Returns true if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// HTTP status carried by an error response.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } | ErrorKind::Authentication { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A call was dispatched with no session token held.
    #[error("Not authenticated: no session token held")]
    NotAuthenticated,

    /// The login endpoint rejected the credentials.
    #[error("Authentication failed: {status} {message}")]
    Authentication { status: u16, message: String },

    /// The remote returned a non-success status on a feature call.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (refused, DNS, reset).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The composed URL could not be used by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// XML document could not be parsed or was rejected.
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid configuration or request parameters.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the full URL, and with it the token, in its message
        let message = security::redact(&err.to_string());
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(message)
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(message)
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message,
            }
        } else if err.is_request() {
            ErrorKind::Connection(message)
        } else {
            ErrorKind::Other(message)
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
