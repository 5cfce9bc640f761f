//! Error types for the todo API client.
//!
//! # Design
//! Each pipeline stage owns an error type: the transport fails with
//! `TransportError`, the status check with `ValidationError`, the JSON stage
//! with `DecodeError`. `ApiError` wraps whichever stage failed first so
//! callers can match on the stage, and `?` converts between them.
//!
//! A malformed endpoint URL is not represented here. Configuration is checked
//! when it is loaded (`ConfigError`); a URL that still fails to parse while a
//! request is built is a programming error and panics.

use std::time::Duration;

use thiserror::Error;

/// Failure of a transport to produce a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// No response arrived within the request's timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The in-flight call was cancelled before completing.
    #[error("request cancelled")]
    Cancelled,

    /// The transport rejected the request before sending it, e.g. a header
    /// value that is not valid on the wire.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The transport finished without producing any response metadata.
    #[error("no response received")]
    NoResponse,

    #[error("transport error: {0}")]
    Other(String),
}

/// Response metadata rejected by the status check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The metadata is not a well-formed HTTP response.
    #[error("response is not a valid HTTP response")]
    NotHttpResponse,

    /// The status code lies outside `200..300`.
    #[error("unexpected HTTP status {0}")]
    StatusCode(u16),
}

/// The response body could not be decoded into the expected record.
#[derive(Debug, Error)]
#[error("failed to decode response body: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// Errors returned by `ApiClient` endpoint calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ApiError {
    /// The HTTP status when the call failed on an out-of-range status code.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Validation(ValidationError::StatusCode(code)) => Some(*code),
            _ => None,
        }
    }
}

/// Invalid client configuration, detected when the configuration is loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base URL {0:?} must use http or https")]
    UnsupportedScheme(String),

    /// Endpoint paths are appended to the base URL, so it cannot carry a
    /// query or fragment.
    #[error("base URL {0:?} must not have a query or fragment")]
    QueryOrFragment(String),

    #[error("invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}
