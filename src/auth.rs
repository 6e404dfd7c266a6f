//! OAuth-style bearer token entity.
//!
//! Orthogonal to the request pipeline: the caller decodes a token from its
//! auth endpoint, checks expiry, and passes the rendered bearer string to
//! [`NetworkManager::load`](crate::client::NetworkManager::load).

use std::time::{Duration, SystemTime};

use serde::Deserialize;

use crate::time::Clock;

/// Wire format of an OAuth-style token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The access token itself.
    pub access_token: String,
    /// Token type, e.g. "Bearer".
    pub token_type: String,
    /// Seconds until expiry. Required here even though RFC 6749 only
    /// recommends it.
    pub expires_in: u64,
    /// Optional refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Optional granted scope.
    #[serde(default)]
    pub scope: Option<String>,
}

/// A credential that can be rendered into an "Authorization" header value.
pub trait AuthToken {
    /// Full header value, including the token type. Ex. "Bearer sampleAccessTokenHere".
    fn bearer(&self) -> String;

    /// Whether the token has expired as of `now`.
    fn is_expired(&self, now: SystemTime) -> bool;
}

/// A decoded OAuth token with a resolved expiry instant.
///
/// Expiry is anchored to the time the token response was received:
/// `expires_at = requested_at + expires_in`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OauthToken {
    access_token: String,
    token_type: String,
    expires_in: u64,
    refresh_token: Option<String>,
    scope: Option<String>,
    requested_at: SystemTime,
    expires_at: SystemTime,
}

impl OauthToken {
    /// Builds a token from a decoded endpoint response, anchoring expiry
    /// to `requested_at`.
    #[must_use]
    pub fn from_response(response: TokenResponse, requested_at: SystemTime) -> Self {
        let expires_at = requested_at + Duration::from_secs(response.expires_in);
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            refresh_token: response.refresh_token,
            scope: response.scope,
            requested_at,
            expires_at,
        }
    }

    /// Decodes a token endpoint JSON body, anchoring expiry to the clock's
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the body is not a
    /// valid token response (e.g. `expires_in` missing).
    pub fn from_json(data: &[u8], clock: &impl Clock) -> Result<Self, serde_json::Error> {
        let response: TokenResponse = serde_json::from_slice(data)?;
        Ok(Self::from_response(response, clock.now()))
    }

    /// The raw access token, without the token type.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The refresh token, when the endpoint issued one.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// The granted scope, when the endpoint reported one.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// When the token was received.
    #[must_use]
    pub const fn requested_at(&self) -> SystemTime {
        self.requested_at
    }

    /// When the token expires.
    #[must_use]
    pub const fn expires_at(&self) -> SystemTime {
        self.expires_at
    }
}

impl AuthToken for OauthToken {
    fn bearer(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    fn is_expired(&self, now: SystemTime) -> bool {
        now >= self.expires_at
    }
}
