//! Error types for Transifex API operations.

use thiserror::Error;

/// Errors that can occur during Transifex API operations.
#[derive(Debug, Error)]
pub enum TransifexError {
    /// Configuration is missing or incomplete.
    #[error("Transifex configuration required: {0}")]
    ConfigMissing(String),

    /// A language code was required but not provided.
    #[error("Invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    /// A resource slug that cannot be used as a path segment.
    #[error("Invalid resource slug: '{0}'")]
    InvalidResourceSlug(String),

    /// A required field of the request data is empty.
    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// API request failed.
    #[error("Transifex API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Local I/O error (reading upload files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransifexError {
    /// HTTP status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ApiError { status_code, .. } => *status_code,
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Turn a 404 `ApiError` into `NotFound` for the given entity.
    pub(crate) fn or_not_found(self, entity_type: &'static str, id: &str) -> Self {
        match self {
            Self::ApiError {
                status_code: Some(404),
                ..
            } => Self::NotFound {
                entity_type,
                id: id.to_string(),
            },
            other => other,
        }
    }
}

/// Result type alias for Transifex operations.
pub type Result<T> = core::result::Result<T, TransifexError>;
