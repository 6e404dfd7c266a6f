//! The opaque send capability and its wire-level types.
//!
//! This module provides:
//! - A wire-ready request derived from a descriptor ([`AssembledRequest`])
//! - The raw response a transport hands back ([`TransportResponse`])
//! - The closed set of transport-level failures ([`TransportError`])
//! - The send abstraction ([`Transport`]) and its production
//!   implementation ([`ReqwestTransport`])

mod client;


pub use client::ReqwestTransport;

use crate::error::BoxError;

/// A wire-ready request: absolute URL, method, headers, body bytes.
///
/// Derived from a [`Request`](crate::request::Request) plus an optional
/// bearer token during assembly. Ephemeral; one is built per attempt.
#[derive(Debug, Clone)]
pub struct AssembledRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Absolute target URL.
    pub url: url::Url,
    /// Headers to send.
    pub headers: http::HeaderMap,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

impl AssembledRequest {
    /// Creates a request with the given method and URL.
    ///
    /// Headers start empty and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, replacing any previous value for the name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// The raw response a transport produced.
///
/// `status` is `None` when the transport completed without an HTTP status
/// (abnormal, non-HTTP response); the pipeline then skips status
/// classification and lets any real problem surface at decode time.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code, when one was obtainable.
    pub status: Option<http::StatusCode>,
    /// Response body, fully buffered.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response with a status code.
    #[must_use]
    pub const fn http(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self {
            status: Some(status),
            body,
        }
    }

    /// Creates a status-less (non-HTTP) response.
    #[must_use]
    pub const fn raw(body: Vec<u8>) -> Self {
        Self { status: None, body }
    }
}

/// Transport-level failure, before any HTTP status exists.
///
/// Describes what went wrong without dictating recovery strategy; the
/// pipeline maps each case onto the
/// [`NetworkError`](crate::error::NetworkError) taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// No network connectivity: DNS failures, connection refused, offline.
    #[error("no network connection")]
    NotConnected,

    /// The server did not respond within the transport's timeout.
    #[error("request timed out")]
    TimedOut,

    /// Any other transport-level failure.
    #[error("transport failure: {0}")]
    Other(#[source] BoxError),
}

/// Trait for sending an assembled request and awaiting the raw response.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with scripted transports
/// - Swapping HTTP libraries without changing the pipeline
///
/// # Example
///
/// ```ignore
/// use netcall::transport::{AssembledRequest, Transport, TransportError, TransportResponse};
///
/// struct MockTransport {
///     response: TransportResponse,
/// }
///
/// impl Transport for MockTransport {
///     async fn send(&self, _req: AssembledRequest) -> Result<TransportResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends the request and waits for the full response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request never produced a
    /// response: no connectivity, timeout, or any other transport failure.
    fn send(
        &self,
        request: AssembledRequest,
    ) -> impl std::future::Future<Output = Result<TransportResponse, TransportError>> + Send;
}
