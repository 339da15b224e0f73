//! Error types for stats retrieval.
//!
//! Every error is fatal to a report run. Categories only exist so callers can
//! log what kind of failure happened; they are handled the same way.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for stats retrieval.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad kind of a retrieval failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The resource could not be retrieved or came back empty.
    Fetch,
    /// The resource was retrieved but is not valid JSON.
    Decode,
}

impl ErrorCategory {
    /// Get a user-friendly description of this error category.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fetch => "Could not retrieve stats",
            Self::Decode => "Could not decode stats",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Errors that can occur while fetching a stats resource.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed, either in transport or with a non-success status.
    #[error("request to {url} failed: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// Error message.
        message: String,
        /// HTTP status code if available.
        status: Option<u16>,
    },

    /// The resource was retrieved but had no content.
    #[error("empty response from {origin}")]
    EmptyResponse {
        /// URL or file the content came from.
        origin: String,
    },

    /// The content is not valid JSON.
    #[error("invalid JSON from {origin}: {source}")]
    Decode {
        /// URL or file the content came from.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// IO error reading a saved response.
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path involved in the error.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// No such resource is known to the source.
    #[error("resource not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an HTTP error for `url` from a `ureq` failure.
    pub fn http(url: impl Into<String>, err: ureq::Error) -> Self {
        let url = url.into();
        match err {
            ureq::Error::StatusCode(code) => Self::Http {
                url,
                message: format!("HTTP {code}"),
                status: Some(code),
            },
            other => Self::Http {
                url,
                message: other.to_string(),
                status: None,
            },
        }
    }

    /// Get the error category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Decode { .. } => ErrorCategory::Decode,
            Error::Http { .. }
            | Error::EmptyResponse { .. }
            | Error::Io { .. }
            | Error::NotFound(_) => ErrorCategory::Fetch,
        }
    }
}

/// Parse fetched content into a JSON tree.
///
/// Blank content counts as a failed fetch, not as a decode error.
pub(crate) fn decode(origin: &str, body: &str) -> Result<serde_json::Value> {
    if body.trim().is_empty() {
        return Err(Error::EmptyResponse {
            origin: origin.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|source| Error::Decode {
        origin: origin.to_string(),
        source,
    })
}
