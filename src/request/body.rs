//! Body encoder capability and the JSON implementation.

use serde::Serialize;

use crate::error::BoxError;

/// Strategy converting a typed payload into request body bytes.
///
/// Encoders are invoked once per attempt, never cached: an implementation
/// may be stateful or capture fresh timestamps on each call. The declared
/// [`content_type`](Self::content_type) always overwrites any
/// "Content-Type" header set on the descriptor.
pub trait BodyEncoder: Send + Sync {
    /// Value for the "Content-Type" header.
    fn content_type(&self) -> &str;

    /// Serializes the payload to bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error. The pipeline wraps it
    /// into [`NetworkError::Encoding`](crate::error::NetworkError::Encoding)
    /// before any network I/O happens.
    fn encode(&self) -> Result<Vec<u8>, BoxError>;
}

/// JSON body encoder over any serializable payload.
#[derive(Debug, Clone)]
pub struct JsonBody<T> {
    payload: T,
}

impl<T: Serialize> JsonBody<T> {
    /// Wraps a payload for JSON encoding.
    pub const fn new(payload: T) -> Self {
        Self { payload }
    }
}

impl<T: Serialize + Send + Sync> BodyEncoder for JsonBody<T> {
    fn content_type(&self) -> &str {
        "application/json"
    }

    fn encode(&self) -> Result<Vec<u8>, BoxError> {
        serde_json::to_vec(&self.payload).map_err(Into::into)
    }
}
