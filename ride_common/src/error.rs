//! Error types shared between client and server.
//!
//! The `RideError` enum unifies validation, HTTP transport, status and
//! serialization failures, allowing crates to propagate a single error type.
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

use crate::form::FieldError;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum RideError {
    /// A form field failed validation; no request was sent.
    #[error("Invalid input: {0}")]
    Validation(#[from] FieldError),

    /// Transport-level failure: connection refused, timeout, or an unreadable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The quote service answered with a non-success status.
    #[error("Quote service returned {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// I/O error while writing to the display.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured server address is not a usable base URL.
    #[error("Invalid server URL: {0}")]
    Url(String),
}
