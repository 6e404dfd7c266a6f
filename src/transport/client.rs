//! Production transport implementation using reqwest.

use super::{AssembledRequest, Transport, TransportError, TransportResponse};

/// Production transport over `reqwest::Client`.
///
/// A thin wrapper that implements [`Transport`]. It inherits reqwest's
/// default configuration including connection pooling and timeouts; a
/// transport-level timeout surfaces as [`TransportError::TimedOut`] and is
/// classified by the pipeline as a timeout failure.
///
/// # Example
///
/// ```no_run
/// use netcall::transport::{AssembledRequest, ReqwestTransport, Transport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let url = url::Url::parse("https://api.example.com/status")?;
/// let request = AssembledRequest::new(http::Method::GET, url);
/// let response = transport.send(request).await?;
/// println!("Status: {:?}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, proxies).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: AssembledRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self.inner.request(request.method, request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(TransportResponse::http(status, body))
    }
}

/// Maps a reqwest error onto the closed transport-failure set.
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::TimedOut
    } else if error.is_connect() {
        TransportError::NotConnected
    } else {
        TransportError::Other(Box::new(error))
    }
}
