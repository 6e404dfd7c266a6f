//! The closed failure taxonomy for request execution.
//!
//! Every failure the pipeline can produce is classified into exactly one
//! [`NetworkError`] variant before it crosses a component boundary. No raw
//! transport or serialization errors escape unwrapped.

use std::collections::BTreeMap;

use thiserror::Error;

/// Boxed underlying cause carried inside a [`NetworkError`] variant.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for the request-execution pipeline.
///
/// Variants are grouped by where in the pipeline they arise:
/// - Local construction failures, before any I/O: [`InvalidUrl`], [`Encoding`]
/// - Transport failures, after a real send: [`Timeout`], [`NoNetwork`], [`Transport`]
/// - Status-code failures from the response: [`Unauthenticated`], [`Restricted`],
///   [`Client`], [`Server`]
/// - Post-transport failures: [`Decoding`]
///
/// # Equality
///
/// Equality is structural per variant. Boxed causes are not comparable and
/// are ignored: [`Transport`] and [`Encoding`] compare URLs only,
/// [`Decoding`] compares data and URL. [`Client`] and [`Server`] compare
/// status code, body bytes, and URL; the URL is part of the equality
/// contract.
///
/// [`InvalidUrl`]: NetworkError::InvalidUrl
/// [`Encoding`]: NetworkError::Encoding
/// [`Timeout`]: NetworkError::Timeout
/// [`NoNetwork`]: NetworkError::NoNetwork
/// [`Transport`]: NetworkError::Transport
/// [`Unauthenticated`]: NetworkError::Unauthenticated
/// [`Restricted`]: NetworkError::Restricted
/// [`Client`]: NetworkError::Client
/// [`Server`]: NetworkError::Server
/// [`Decoding`]: NetworkError::Decoding
#[derive(Debug, Error)]
pub enum NetworkError {
    /// URL construction failed from the descriptor's parts.
    ///
    /// Purely local validation; no network I/O has occurred.
    #[error(
        "failed to build a url from\nscheme: {}\nhost: {host}\npath: {path}\nqueries: {queries:?}",
        .scheme.as_deref().unwrap_or("none")
    )]
    InvalidUrl {
        /// Scheme the descriptor requested, if any.
        scheme: Option<String>,
        /// Host the descriptor requested.
        host: String,
        /// Path the descriptor requested.
        path: String,
        /// Query pairs the descriptor requested.
        queries: BTreeMap<String, String>,
    },

    /// The transport reported that the request timed out.
    #[error("request to {url} timed out")]
    Timeout {
        /// URL of the attempt that failed.
        url: String,
    },

    /// The transport reported no network connectivity.
    #[error("no network connection for request to {url}")]
    NoNetwork {
        /// URL of the attempt that failed.
        url: String,
    },

    /// Any other transport-level failure.
    #[error("transport failure for request to {url}\nunderlying error: {source}")]
    Transport {
        /// The transport's own error.
        #[source]
        source: BoxError,
        /// URL of the attempt that failed.
        url: String,
    },

    /// The body encoder failed while producing request bytes.
    ///
    /// Local construction failure; no network I/O has occurred.
    #[error("encoding failed while adding the body to the request to {url}\nunderlying error: {source}")]
    Encoding {
        /// The encoder's own error.
        #[source]
        source: BoxError,
        /// Fully assembled URL of the request being built.
        url: String,
    },

    /// The response decoder failed after a successful round trip.
    #[error(
        "decoding failed while parsing the response from {url}\nunderlying error: {source}\nbody: {}",
        data_text(.data)
    )]
    Decoding {
        /// The decoder's own error.
        #[source]
        source: BoxError,
        /// Raw response bytes that failed to decode.
        data: Option<Vec<u8>>,
        /// URL of the attempt that failed.
        url: String,
    },

    /// The server responded with status 401.
    #[error("request to {url} resulted in a 401 status code")]
    Unauthenticated {
        /// URL of the attempt that failed.
        url: String,
    },

    /// The server responded with status 403.
    #[error("request to {url} resulted in a 403 status code")]
    Restricted {
        /// URL of the attempt that failed.
        url: String,
    },

    /// The server responded with any other 4xx status.
    #[error("request to {url} resulted in a {code} status code{}", response_text(.data))]
    Client {
        /// Exact status code.
        code: u16,
        /// Response body bytes, preserved verbatim.
        data: Vec<u8>,
        /// URL of the attempt that failed.
        url: String,
    },

    /// The server responded with a 5xx status.
    #[error("request to {url} resulted in a {code} status code{}", response_text(.data))]
    Server {
        /// Exact status code.
        code: u16,
        /// Response body bytes, preserved verbatim.
        data: Vec<u8>,
        /// URL of the attempt that failed.
        url: String,
    },
}

impl NetworkError {
    /// Stable identifier for the variant, for logging and tests.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalidUrl",
            Self::Timeout { .. } => "timeout",
            Self::NoNetwork { .. } => "noNetwork",
            Self::Transport { .. } => "transport",
            Self::Encoding { .. } => "encoding",
            Self::Decoding { .. } => "decoding",
            Self::Unauthenticated { .. } => "unauthenticated",
            Self::Restricted { .. } => "restricted",
            Self::Client { .. } => "client",
            Self::Server { .. } => "server",
        }
    }

    /// Stable numeric code for the variant, for cross-process reporting.
    ///
    /// Codes are distinct and never reused across releases.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidUrl { .. } => 7000,
            Self::Timeout { .. } => 7001,
            Self::NoNetwork { .. } => 7002,
            Self::Transport { .. } => 7003,
            Self::Encoding { .. } => 7004,
            Self::Decoding { .. } => 7005,
            Self::Unauthenticated { .. } => 7006,
            Self::Restricted { .. } => 7007,
            Self::Client { .. } => 7008,
            Self::Server { .. } => 7009,
        }
    }

    /// URL of the request that produced this error.
    ///
    /// [`InvalidUrl`](Self::InvalidUrl) never had a real URL, so a crude
    /// reconstruction from its parts is returned instead.
    #[must_use]
    pub fn url(&self) -> String {
        match self {
            Self::InvalidUrl {
                scheme,
                host,
                path,
                queries,
            } => debug_url(scheme.as_deref(), host, path, queries),
            Self::Timeout { url }
            | Self::NoNetwork { url }
            | Self::Transport { url, .. }
            | Self::Encoding { url, .. }
            | Self::Decoding { url, .. }
            | Self::Unauthenticated { url }
            | Self::Restricted { url }
            | Self::Client { url, .. }
            | Self::Server { url, .. } => url.clone(),
        }
    }
}

impl PartialEq for NetworkError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::InvalidUrl {
                    scheme,
                    host,
                    path,
                    queries,
                },
                Self::InvalidUrl {
                    scheme: other_scheme,
                    host: other_host,
                    path: other_path,
                    queries: other_queries,
                },
            ) => {
                scheme == other_scheme
                    && host == other_host
                    && path == other_path
                    && queries == other_queries
            }
            (Self::Timeout { url }, Self::Timeout { url: other_url })
            | (Self::NoNetwork { url }, Self::NoNetwork { url: other_url })
            | (Self::Unauthenticated { url }, Self::Unauthenticated { url: other_url })
            | (Self::Restricted { url }, Self::Restricted { url: other_url })
            | (Self::Transport { url, .. }, Self::Transport { url: other_url, .. })
            | (Self::Encoding { url, .. }, Self::Encoding { url: other_url, .. }) => {
                url == other_url
            }
            (
                Self::Decoding { data, url, .. },
                Self::Decoding {
                    data: other_data,
                    url: other_url,
                    ..
                },
            ) => data == other_data && url == other_url,
            (
                Self::Client { code, data, url },
                Self::Client {
                    code: other_code,
                    data: other_data,
                    url: other_url,
                },
            )
            | (
                Self::Server { code, data, url },
                Self::Server {
                    code: other_code,
                    data: other_data,
                    url: other_url,
                },
            ) => code == other_code && data == other_data && url == other_url,
            _ => false,
        }
    }
}

/// Renders response bytes for display, omitted entirely when empty.
fn response_text(data: &[u8]) -> String {
    if data.is_empty() {
        String::new()
    } else {
        format!(
            "\nbackend responded with the message: {}",
            String::from_utf8_lossy(data)
        )
    }
}

/// Renders optional raw bytes for display.
fn data_text(data: &Option<Vec<u8>>) -> String {
    data.as_ref().map_or_else(
        || "no data".to_owned(),
        |bytes| String::from_utf8_lossy(bytes).into_owned(),
    )
}

/// Crude url reconstruction just for diagnostics.
fn debug_url(
    scheme: Option<&str>,
    host: &str,
    path: &str,
    queries: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();
    if let Some(scheme) = scheme {
        out.push_str(scheme);
        if !scheme.ends_with("://") {
            out.push_str("://");
        }
    }
    out.push_str(host.trim_start_matches("://"));
    if !path.is_empty() {
        if !out.ends_with('/') && !path.starts_with('/') {
            out.push('/');
        }
        out.push_str(path);
    }
    let mut separator = '?';
    for (key, value) in queries {
        out.push(separator);
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        separator = '&';
    }
    out
}
