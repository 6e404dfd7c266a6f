//! The request descriptor value object.

use std::collections::BTreeMap;
use std::fmt;

use super::{BodyEncoder, JsonDecoder};

/// HTTP method of a request descriptor.
///
/// A closed set: this library deliberately supports only the methods its
/// pipeline is specified for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// GET
    #[default]
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Method {
    /// The wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative description of an outbound call.
///
/// Immutable value constructed by the caller and consumed by reference once
/// per attempt; headers and body bytes are re-derived fresh on every
/// attempt. `D` is the response decoder, which fixes the decoded type the
/// caller gets back from [`NetworkManager::load`].
///
/// Query pair order is irrelevant; each pair round-trips exactly, with
/// values escaped per standard URL query-encoding rules during assembly.
///
/// # Example
///
/// ```
/// use netcall::request::{JsonDecoder, Method, Request};
///
/// #[derive(serde::Deserialize)]
/// struct User { name: String }
///
/// let request: Request<JsonDecoder<User>> =
///     Request::json(Method::Get, "api.example.com", "/users/self")
///         .with_query("expand", "profile")
///         .with_header("Accept-Language", "en");
/// ```
///
/// [`NetworkManager::load`]: crate::client::NetworkManager::load
pub struct Request<D> {
    /// HTTP method. Defaults to GET via [`Request::get`].
    pub method: Method,
    /// URL scheme. Assembly falls back to "https" when absent.
    pub scheme: Option<String>,
    /// Host name, without scheme or path.
    pub host: String,
    /// URL path. May be empty.
    pub path: String,
    /// Query pairs appended to the URL.
    pub queries: BTreeMap<String, String>,
    /// Headers applied verbatim to the wire request.
    pub headers: BTreeMap<String, String>,
    /// Whether the call is expected to carry a bearer token.
    ///
    /// Advisory for the caller resolving credentials; the pipeline itself
    /// only attaches the token string actually passed to `load`.
    pub requires_auth: bool,
    /// Body encoder. Its content type overwrites any pre-set
    /// "Content-Type" header.
    pub body: Option<Box<dyn BodyEncoder>>,
    /// Decoder for the response body.
    pub decoder: D,
}

impl<D> Request<D> {
    /// Creates a descriptor with the given method, host, path, and decoder.
    ///
    /// Scheme, queries, headers, and body start empty; `requires_auth`
    /// starts false.
    pub fn new(
        method: Method,
        host: impl Into<String>,
        path: impl Into<String>,
        decoder: D,
    ) -> Self {
        Self {
            method,
            scheme: None,
            host: host.into(),
            path: path.into(),
            queries: BTreeMap::new(),
            headers: BTreeMap::new(),
            requires_auth: false,
            body: None,
            decoder,
        }
    }

    /// Creates a GET descriptor.
    pub fn get(host: impl Into<String>, path: impl Into<String>, decoder: D) -> Self {
        Self::new(Method::Get, host, path, decoder)
    }

    /// Creates a POST descriptor.
    pub fn post(host: impl Into<String>, path: impl Into<String>, decoder: D) -> Self {
        Self::new(Method::Post, host, path, decoder)
    }
}

impl<T> Request<JsonDecoder<T>> {
    /// Creates a descriptor whose response decodes as JSON into `T`.
    pub fn json(method: Method, host: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(method, host, path, JsonDecoder::new())
    }
}

impl<D> Request<D> {
    /// Sets the URL scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Adds a query pair.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.queries.insert(key.into(), value.into());
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Marks the call as requiring authentication.
    #[must_use]
    pub const fn with_requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Sets the body encoder.
    #[must_use]
    pub fn with_body(mut self, encoder: impl BodyEncoder + 'static) -> Self {
        self.body = Some(Box::new(encoder));
        self
    }
}

impl<D: fmt::Debug> fmt::Debug for Request<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("path", &self.path)
            .field("queries", &self.queries)
            .field("headers", &self.headers)
            .field("requires_auth", &self.requires_auth)
            .field("body", &self.body.as_ref().map(|_| "<encoder>"))
            .field("decoder", &self.decoder)
            .finish()
    }
}
