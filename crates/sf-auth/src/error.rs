//! Error types for sapsf-auth.
//!
//! Error messages never include credential values.

/// Result type alias for sapsf-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sapsf-auth operations.
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
    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(
            ErrorKind::InvalidCredentials(format!("base URL is not a valid URL: {}", err)),
            err,
        )
    }
}

impl From<sapsf_client::Error> for Error {
    fn from(err: sapsf_client::Error) -> Self {
        Error::with_source(ErrorKind::Config(err.to_string()), err)
    }
}
