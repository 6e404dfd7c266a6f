//! Turns a request descriptor plus an optional bearer token into a
//! wire-ready request.
//!
//! Assembly is CPU-only; both of its failure modes
//! ([`InvalidUrl`](NetworkError::InvalidUrl) and
//! [`Encoding`](NetworkError::Encoding)) short-circuit before any network
//! I/O happens on the attempt.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderName, HeaderValue};

use crate::error::NetworkError;
use crate::request::Request;
use crate::transport::AssembledRequest;

/// Fallback scheme when the descriptor leaves it unset. `url::Url` cannot
/// represent scheme-less absolute URLs.
const DEFAULT_SCHEME: &str = "https";

/// Assembles a descriptor into a wire-ready request.
///
/// Header precedence: descriptor headers first, then the bearer token
/// overwrites "Authorization", then an active body encoder's content type
/// overwrites "Content-Type". Returns either a complete request or a
/// [`NetworkError`]; never a partial assembly.
pub(super) fn assemble<D>(
    request: &Request<D>,
    bearer: Option<&str>,
) -> Result<AssembledRequest, NetworkError> {
    let url = build_url(request)?;
    let mut assembled = AssembledRequest::new(request.method.into(), url);
    let url_text = assembled.url.to_string();

    for (name, value) in &request.headers {
        let name = header_name(name, &url_text)?;
        let value = header_value(value, &url_text)?;
        assembled.headers.insert(name, value);
    }

    if let Some(token) = bearer {
        let value = header_value(token, &url_text)?;
        assembled.headers.insert(AUTHORIZATION, value);
    }

    if let Some(encoder) = &request.body {
        let value = header_value(encoder.content_type(), &url_text)?;
        assembled.headers.insert(CONTENT_TYPE, value);
        let body = encoder.encode().map_err(|source| NetworkError::Encoding {
            source,
            url: url_text.clone(),
        })?;
        assembled.body = Some(body);
    }

    Ok(assembled)
}

/// Builds the absolute URL from scheme, host, path, and query pairs.
///
/// Query values are percent-escaped by the url crate; when the query map
/// is empty no "?" separator is appended at all.
fn build_url<D>(request: &Request<D>) -> Result<url::Url, NetworkError> {
    let scheme = request.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
    let mut url = url::Url::parse(&format!("{scheme}://{host}", host = request.host))
        .map_err(|_| invalid_url(request))?;

    if url.host_str().is_none() {
        return Err(invalid_url(request));
    }

    if !request.path.is_empty() {
        url.set_path(&request.path);
    }

    if !request.queries.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &request.queries {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

fn invalid_url<D>(request: &Request<D>) -> NetworkError {
    NetworkError::InvalidUrl {
        scheme: request.scheme.clone(),
        host: request.host.clone(),
        path: request.path.clone(),
        queries: request.queries.clone(),
    }
}

/// Parses a descriptor header name for the wire.
///
/// The descriptor carries plain strings; a name that cannot be represented
/// on the wire is a local construction failure, reported as
/// [`Encoding`](NetworkError::Encoding).
fn header_name(name: &str, url: &str) -> Result<HeaderName, NetworkError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|source| NetworkError::Encoding {
        source: Box::new(source),
        url: url.to_owned(),
    })
}

/// Parses a descriptor header value for the wire.
fn header_value(value: &str, url: &str) -> Result<HeaderValue, NetworkError> {
    HeaderValue::from_str(value).map_err(|source| NetworkError::Encoding {
        source: Box::new(source),
        url: url.to_owned(),
    })
}
