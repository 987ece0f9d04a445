//! Error types for iiko-auth.
//!
//! Messages name what is wrong, never the credential value itself.

/// Result type alias for iiko-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for iiko-auth operations.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Error> for iiko_client::Error {
    fn from(err: Error) -> Self {
        let message = match &err.kind {
            ErrorKind::Config(message) => message.clone(),
            other => other.to_string(),
        };
        iiko_client::Error::with_source(iiko_client::ErrorKind::Config(message), err)
    }
}
