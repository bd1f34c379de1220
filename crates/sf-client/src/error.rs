//! Error types for sapsf-client.

use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt;

/// Result type alias for sapsf-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sapsf-client operations.
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

    /// Shorthand for a [`ErrorKind::Usage`] error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Returns true if no response was received (connection, DNS, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_) | ErrorKind::Timeout)
    }

    /// Returns true if the server answered with a non-2xx status.
    pub fn is_protocol(&self) -> bool {
        matches!(self.kind, ErrorKind::Protocol { .. })
    }

    /// Returns true if the request was rejected before reaching the network.
    pub fn is_usage(&self) -> bool {
        matches!(self.kind, ErrorKind::Usage(_))
    }

    /// Returns true if this is a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Body of the failed response, if one was received.
    pub fn body(&self) -> Option<&ErrorBody> {
        match &self.kind {
            ErrorKind::Protocol { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Parsed OData error envelope of a failed response.
    pub fn odata_error(&self) -> Option<ODataErrorDetail> {
        self.body().and_then(ErrorBody::odata_error)
    }

    /// Render this error as the uniform `{"error": <detail>}` mapping.
    ///
    /// Protocol errors carry the decoded body (or raw text). A body that is
    /// itself a single-member `{"error": ...}` object is unwrapped so the
    /// detail is not nested twice. Every other kind carries its description.
    pub fn to_payload(&self) -> Value {
        match &self.kind {
            ErrorKind::Protocol { body, .. } => json!({ "error": body.detail() }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// No response was received (connection refused, DNS failure, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request timed out before a response arrived.
    #[error("Request timeout")]
    Timeout,

    /// The server answered with a status outside 2xx.
    #[error("HTTP error: {status} {body}")]
    Protocol { status: u16, body: ErrorBody },

    /// The caller asked for something the client refuses to send.
    #[error("Invalid request: {0}")]
    Usage(String),

    /// A successful response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The body decoded as JSON.
    Json(Value),
    /// The body was not JSON; raw text is kept.
    Text(String),
}

impl ErrorBody {
    /// Decode a response body, falling back to raw text.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(text),
        }
    }

    /// The body as a JSON value (text becomes a JSON string).
    pub fn to_value(&self) -> Value {
        match self {
            ErrorBody::Json(value) => value.clone(),
            ErrorBody::Text(text) => Value::String(text.clone()),
        }
    }

    /// The body with a lone top-level `error` member unwrapped.
    pub fn detail(&self) -> Value {
        match self {
            ErrorBody::Json(Value::Object(map)) if map.len() == 1 => match map.get("error") {
                Some(inner) => inner.clone(),
                None => self.to_value(),
            },
            _ => self.to_value(),
        }
    }

    /// Parse the standard OData V2 error envelope.
    pub fn odata_error(&self) -> Option<ODataErrorDetail> {
        match self {
            ErrorBody::Json(value) => {
                let envelope = Envelope::deserialize(value).ok()?;
                let (message, lang) = match envelope.error.message {
                    MessageField::Text(text) => (text, None),
                    MessageField::Localized { value, lang } => (value, lang),
                };
                Some(ODataErrorDetail {
                    code: envelope.error.code,
                    message,
                    lang,
                })
            }
            ErrorBody::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{}", value),
            ErrorBody::Text(text) => f.write_str(text),
        }
    }
}

/// Error details from an OData V2 `{"error": {...}}` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ODataErrorDetail {
    /// Service error code, e.g. `COE_PROPERTY_NOT_FOUND`.
    pub code: Option<String>,
    /// Human readable message.
    pub message: String,
    /// Message language, when the service localizes it.
    pub lang: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    error: EnvelopeError,
}

#[derive(Deserialize)]
struct EnvelopeError {
    #[serde(default)]
    code: Option<String>,
    message: MessageField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MessageField {
    Text(String),
    Localized {
        value: String,
        #[serde(default)]
        lang: Option<String>,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_builder() {
            ErrorKind::Config(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
