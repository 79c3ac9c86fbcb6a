//! Error types for the ngrok API client.
//!
//! Every operation in this crate returns [`Result`]. Transport, decoding and
//! API failures are passed through unchanged from the dispatcher; argument
//! problems are caught before any request is sent.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for ngrok API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all ngrok API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// ngrok error code, e.g. `ERR_NGROK_218`
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Operation ID reported by the API, useful for support requests
        operation_id: Option<String>,
        /// Raw response body for debugging
        body: Value,
    },

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A blocking call could not be driven to completion
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl Error {
    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::NotFound(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Create an API error from a response body.
    ///
    /// ngrok error bodies look like
    /// `{"error_code": "...", "status_code": 400, "msg": "...", "details": {"operation_id": "..."}}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let code = body
            .get("error_code")
            .and_then(|c| c.as_str())
            .map(String::from);

        let message = body
            .get("msg")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        let operation_id = body
            .get("details")
            .and_then(|d| d.get("operation_id"))
            .and_then(|o| o.as_str())
            .map(String::from);

        Error::Api {
            status,
            code,
            message,
            operation_id,
            body,
        }
    }

    /// Reject an empty required parameter before anything is sent.
    pub(crate) fn require(name: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            Err(Error::InvalidInput(format!("{name} is required")))
        } else {
            Ok(())
        }
    }
}
