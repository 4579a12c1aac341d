//! Error types for the OTX client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! Nothing is retried or recovered internally; callers branch on
//! [`Error::kind`] to tell a bad key from a bad request from a dead network.

use thiserror::Error;

/// The main error type for the OTX client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Status Errors
    // ============================================================================
    #[error("Invalid API key")]
    Authentication,

    #[error("Bad request")]
    BadRequest,

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server rejected the API key (HTTP 403)
    Authentication,
    /// The server rejected the request (HTTP 400 or another non-2xx status)
    Request,
    /// The request never produced a response
    Transport,
    /// The response body could not be interpreted
    Decoding,
    /// The client was configured incorrectly
    Config,
    /// Local I/O failed, e.g. writing output
    Io,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Map an error status code to its typed error
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            403 => Self::Authentication,
            400 => Self::BadRequest,
            _ => Self::http_status(status, body),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Authentication => ErrorKind::Authentication,
            Error::BadRequest | Error::HttpStatus { .. } => ErrorKind::Request,
            Error::Http(e) if e.is_decode() => ErrorKind::Decoding,
            Error::Http(_) => ErrorKind::Transport,
            Error::Decode { .. } => ErrorKind::Decoding,
            Error::Config { .. } | Error::InvalidUrl(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// HTTP status that produced this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// Result type alias for the OTX client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Authentication.to_string(), "Invalid API key");
        assert_eq!(Error::BadRequest.to_string(), "Bad request");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::config("api key must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: api key must not be empty"
        );
    }

    #[test_case(403, ErrorKind::Authentication ; "forbidden")]
    #[test_case(400, ErrorKind::Request ; "bad request")]
    #[test_case(404, ErrorKind::Request ; "not found")]
    #[test_case(500, ErrorKind::Request ; "server error")]
    fn test_from_status_kind(status: u16, expected: ErrorKind) {
        assert_eq!(Error::from_status(status, "").kind(), expected);
    }

    #[test]
    fn test_from_status_keeps_unhandled_status() {
        let err = Error::from_status(503, "maintenance");
        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("maintenance"));

        assert_eq!(Error::from_status(403, "").status(), None);
    }

    #[test]
    fn test_serde_error_is_decoding() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Decoding);
        assert!(err.to_string().starts_with("Failed to decode response"));
    }

    #[test]
    fn test_io_error_is_not_config() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "IO error: closed");
    }

    #[test]
    fn test_invalid_url_is_config() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
