//! Async API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` descriptors for the user, login and todo endpoints,
//! sends them through a pluggable [`Transport`], checks the HTTP status and
//! decodes the JSON body into typed records.
//!
//! # Design
//! - `ApiClient` is an explicit context value (config + transport); there is
//!   no global state. Tests inject a [`MockTransport`].
//! - Each endpoint is a fixed pipeline: `build_*` → `Transport::send` →
//!   [`validate`] → [`decode`]. Only `send` suspends.
//! - No retries, caching or token lifecycle management. Errors are typed per
//!   stage and surfaced to the caller as [`ApiError`].
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod auth;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use decode::decode;
pub use error::{ApiError, ConfigError, DecodeError, TransportError, ValidationError};
pub use http::{Headers, HttpMethod, HttpRequest, HttpResponse, ResponseMetadata};
pub use transport::{MockTransport, ReqwestTransport, Transport};
pub use types::{CreateUserResponse, Todo, Token, User};
pub use validate::validate;
