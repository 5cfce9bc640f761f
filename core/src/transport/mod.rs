//! The transport seam between the client and the network.
//!
//! # Design
//! `Transport` has a single async operation: send one descriptor, get back
//! exactly one outcome. Implementations never retry. Cancellation is dropping
//! the returned future, which releases the in-flight call; nothing after
//! `send` in the pipeline runs for a dropped call.
//!
//! - [`ReqwestTransport`] sends over the network.
//! - [`MockTransport`] answers from canned data and records what it was sent.

mod mock;
mod network;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub use mock::MockTransport;
pub use network::ReqwestTransport;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request. Resolves to the response envelope or a transport
    /// failure, never both.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
