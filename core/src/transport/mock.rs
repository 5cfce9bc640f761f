//! In-memory `Transport` that answers from canned data.
//!
//! Bodies are keyed by full request URL; the response metadata and the
//! optional error apply to every request. When an error is configured it wins
//! over any canned body or metadata, so a call never yields both.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use super::Transport;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, ResponseMetadata};

#[derive(Debug, Default)]
pub struct MockTransport {
    bodies: HashMap<String, Bytes>,
    metadata: Option<ResponseMetadata>,
    error: Option<TransportError>,
    latency: Option<Duration>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `url` with `body`. URLs without a body reply with an empty one.
    pub fn with_body(mut self, url: &str, body: impl Into<Bytes>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_status(self, status: u16) -> Self {
        self.with_metadata(ResponseMetadata::http(status))
    }

    pub fn with_error(mut self, error: TransportError) -> Self {
        self.error = Some(error);
        self
    }

    /// Delay every answer. A delay longer than the request's timeout fails
    /// with `TransportError::Timeout` once the timeout has elapsed.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Every descriptor received so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout;
        let body = self
            .bodies
            .get(request.url.as_str())
            .cloned()
            .unwrap_or_default();
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if let Some(latency) = self.latency {
            if latency > timeout {
                tokio::time::sleep(timeout).await;
                return Err(TransportError::Timeout(timeout));
            }
            tokio::time::sleep(latency).await;
        }

        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let metadata = self.metadata.clone().ok_or(TransportError::NoResponse)?;
        Ok(HttpResponse { metadata, body })
    }
}
