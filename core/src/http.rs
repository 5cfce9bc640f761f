//! HTTP request descriptors and response envelopes as plain data.
//!
//! # Design
//! The client builds an `HttpRequest` per call and hands it to a
//! [`Transport`](crate::transport::Transport), which answers with an
//! `HttpResponse`. Neither value is mutated after construction: a descriptor
//! is consumed by exactly one `send`, an envelope by exactly one `validate`.
//!
//! Header names compare case-insensitively. Inserting a name that is already
//! present replaces that entry in place, name spelling included, so insertion
//! order is preserved and keys stay unique.

use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use url::Url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered header map with unique, case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header. An existing entry with the same name keeps its
    /// position and takes the new name and value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Consuming variant of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// An outbound HTTP call described as plain data.
///
/// Built by the `ApiClient::build_*` methods. Two builds with identical
/// inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<Bytes>,
    pub timeout: Duration,
}

/// Response metadata as reported by the transport.
///
/// `NonHttp` stands for a response object that did not come from an HTTP
/// exchange (for example a transport answering for a non-HTTP scheme).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMetadata {
    Http { status: u16, headers: Headers },
    NonHttp,
}

impl ResponseMetadata {
    pub fn http(status: u16) -> Self {
        ResponseMetadata::Http {
            status,
            headers: Headers::new(),
        }
    }
}

/// An inbound HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub metadata: ResponseMetadata,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            metadata: ResponseMetadata::http(status),
            body: body.into(),
        }
    }

    pub fn non_http(body: impl Into<Bytes>) -> Self {
        Self {
            metadata: ResponseMetadata::NonHttp,
            body: body.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match &self.metadata {
            ResponseMetadata::Http { status, .. } => Some(*status),
            ResponseMetadata::NonHttp => None,
        }
    }
}
