use std::fmt;
use thiserror::Error;

/// Fatal errors: these abort the whole operation before any translation runs.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: unknown provider '{given}' (available: {valid})")]
    UnknownProvider { given: String, valid: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Broad class of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request did not complete within its timeout.
    Timeout,
    /// The service host name could not be resolved.
    Resolve,
    /// No connection could be made, or it dropped before a response.
    Connect,
    /// The service answered with a non-success HTTP status.
    Http,
    /// The failure could not be classified.
    Unknown,
}

/// A request that failed after the transport gave up on it.
///
/// `status` is `None` for network-layer failures and `Some` for HTTP-layer
/// failures.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
    pub status: Option<u16>,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            cause: None,
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: TransportErrorKind::Http,
            message: message.into(),
            status: Some(status),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Provider payload could not be turned into translated text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("response format error: invalid JSON ({0})")]
    InvalidJson(String),

    #[error("missing translation data: response is not array format")]
    NotArray,

    #[error("missing translation data: fragments are not array format")]
    FragmentsNotArray,

    #[error("response format error: no translated fragments in response")]
    NoValidFragments,
}

impl ParseError {
    /// The payload is present but its content cannot be read as a translation.
    pub fn is_unparsable(&self) -> bool {
        matches!(self, ParseError::InvalidJson(_) | ParseError::NoValidFragments)
    }
}

/// Everything that can go wrong inside a provider adapter.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Other(String),

    #[error("translation failed")]
    Unknown,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Resolve => "resolve",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Http => "http",
            TransportErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
