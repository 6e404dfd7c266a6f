//! The public facade composing assembly, transport, status
//! classification, decoding, and retries into a single `load` operation.

use std::fmt;
use std::sync::Arc;

use crate::error::NetworkError;
use crate::request::{Request, ResponseDecoder};
use crate::transport::{ReqwestTransport, Transport, TransportError, TransportResponse};

use super::assemble::assemble;
use super::retry::{RetryPolicy, ShouldRetry};

/// Per-call overrides for the manager's default retry policy.
///
/// Overrides apply to that single call only; the manager's defaults are
/// plain mutable state with no implicit reset between calls.
#[derive(Default)]
pub struct LoadOverrides {
    attempt_limit: Option<u32>,
    should_retry: Option<ShouldRetry>,
}

impl LoadOverrides {
    /// Creates an empty override set; the manager's defaults apply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the total attempt budget for this call.
    ///
    /// Values below 1 behave as 1.
    #[must_use]
    pub const fn with_attempt_limit(mut self, attempt_limit: u32) -> Self {
        self.attempt_limit = Some(attempt_limit);
        self
    }

    /// Overrides the retry predicate for this call.
    #[must_use]
    pub fn with_should_retry(
        mut self,
        should_retry: impl Fn(&NetworkError) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_retry = Some(Arc::new(should_retry));
        self
    }
}

impl fmt::Debug for LoadOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOverrides")
            .field("attempt_limit", &self.attempt_limit)
            .field(
                "should_retry",
                &self.should_retry.as_ref().map(|_| "<predicate>"),
            )
            .finish()
    }
}

/// Executes typed requests against a [`Transport`].
///
/// The manager runs each call as a sequential pipeline (assemble, send,
/// classify status, decode) wrapped in a retry loop governed by
/// [`default_policy`](Self::default_policy) unless the call overrides it.
/// Every failure leaves the manager as exactly one
/// [`NetworkError`] variant.
///
/// Concurrent `load` calls through a shared reference are safe. Mutating
/// `default_policy` requires `&mut self`, so callers that share a manager
/// and want to reconfigure it mid-flight must bring their own
/// synchronization; the library adds no internal guard.
///
/// # Example
///
/// ```no_run
/// use netcall::client::NetworkManager;
/// use netcall::request::{JsonDecoder, Method, Request};
///
/// #[derive(serde::Deserialize)]
/// struct Ip { origin: String }
///
/// # async fn example() -> Result<(), netcall::error::NetworkError> {
/// let manager = NetworkManager::new();
/// let request: Request<JsonDecoder<Ip>> = Request::json(Method::Get, "httpbin.org", "/ip");
/// let ip = manager.load(&request, None).await?;
/// println!("{}", ip.origin);
/// # Ok(())
/// # }
/// ```
pub struct NetworkManager<T = ReqwestTransport> {
    transport: T,
    /// Fallback retry policy for calls that do not override it.
    pub default_policy: RetryPolicy,
}

impl NetworkManager<ReqwestTransport> {
    /// Creates a manager over the production reqwest transport with the
    /// default policy: one attempt, general retry classification.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for NetworkManager<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> NetworkManager<T> {
    /// Creates a manager over the given transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            default_policy: RetryPolicy::new(),
        }
    }

    /// Executes the request with the manager's default policy.
    ///
    /// Suspends until the full retry sequence completes or terminates.
    /// When `bearer` is present it is set as the "Authorization" header
    /// verbatim, overwriting any descriptor-provided value.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's [`NetworkError`] when every allowed
    /// attempt failed or a non-retryable failure occurred.
    pub async fn load<D: ResponseDecoder>(
        &self,
        request: &Request<D>,
        bearer: Option<&str>,
    ) -> Result<D::Output, NetworkError> {
        self.load_with(request, bearer, LoadOverrides::new()).await
    }

    /// Executes the request with per-call policy overrides.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's [`NetworkError`] when every allowed
    /// attempt failed or a non-retryable failure occurred.
    pub async fn load_with<D: ResponseDecoder>(
        &self,
        request: &Request<D>,
        bearer: Option<&str>,
        overrides: LoadOverrides,
    ) -> Result<D::Output, NetworkError> {
        let policy = RetryPolicy {
            attempt_limit: overrides
                .attempt_limit
                .unwrap_or(self.default_policy.attempt_limit),
            should_retry: overrides
                .should_retry
                .unwrap_or_else(|| Arc::clone(&self.default_policy.should_retry)),
        };
        let attempt_limit = policy.effective_attempt_limit();

        let mut attempt = 1;
        loop {
            match self.attempt(request, bearer).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    if attempt >= attempt_limit || !policy.retries(&error) {
                        tracing::warn!(
                            "Request failed after {attempt} attempt(s) with {}: {error}",
                            error.kind()
                        );
                        return Err(error);
                    }
                    tracing::debug!("Attempt {attempt} failed with {}, retrying", error.kind());
                    attempt += 1;
                }
            }
        }
    }

    /// Runs one full attempt: assemble, send, classify status, decode.
    ///
    /// Headers and body bytes are re-derived from the descriptor on every
    /// call, since encoders may be stateful or capture fresh timestamps.
    async fn attempt<D: ResponseDecoder>(
        &self,
        request: &Request<D>,
        bearer: Option<&str>,
    ) -> Result<D::Output, NetworkError> {
        let assembled = assemble(request, bearer)?;
        let url = assembled.url.to_string();

        let response = self
            .transport
            .send(assembled)
            .await
            .map_err(|error| classify_transport(error, &url))?;

        let data = check_status(response, &url)?;

        request
            .decoder
            .decode(&data)
            .map_err(|source| NetworkError::Decoding {
                source,
                data: Some(data),
                url,
            })
    }
}

impl<T: fmt::Debug> fmt::Debug for NetworkManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkManager")
            .field("transport", &self.transport)
            .field("default_policy", &self.default_policy)
            .finish()
    }
}

/// Maps a transport failure onto the taxonomy, attaching the attempt URL.
fn classify_transport(error: TransportError, url: &str) -> NetworkError {
    match error {
        TransportError::NotConnected => NetworkError::NoNetwork {
            url: url.to_owned(),
        },
        TransportError::TimedOut => NetworkError::Timeout {
            url: url.to_owned(),
        },
        TransportError::Other(source) => NetworkError::Transport {
            source,
            url: url.to_owned(),
        },
    }
}

/// Classifies the HTTP status, passing the body through on success.
///
/// A status-less response skips classification entirely; if something is
/// actually wrong it will surface when the body fails to decode.
fn check_status(response: TransportResponse, url: &str) -> Result<Vec<u8>, NetworkError> {
    let Some(status) = response.status else {
        return Ok(response.body);
    };
    match status.as_u16() {
        401 => Err(NetworkError::Unauthenticated {
            url: url.to_owned(),
        }),
        403 => Err(NetworkError::Restricted {
            url: url.to_owned(),
        }),
        code @ 400..=499 => Err(NetworkError::Client {
            code,
            data: response.body,
            url: url.to_owned(),
        }),
        code @ 500..=599 => Err(NetworkError::Server {
            code,
            data: response.body,
            url: url.to_owned(),
        }),
        _ => Ok(response.body),
    }
}
