//! Response decoder capability and the JSON implementation.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::BoxError;

/// Strategy converting raw response bytes into a typed value.
///
/// Decoders never construct pipeline errors themselves; the manager wraps
/// a failure into [`NetworkError::Decoding`](crate::error::NetworkError::Decoding)
/// together with the raw bytes and the originating URL.
pub trait ResponseDecoder: Send + Sync {
    /// The decoded value type.
    type Output;

    /// Decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error.
    fn decode(&self, data: &[u8]) -> Result<Self::Output, BoxError>;
}

/// JSON response decoder producing any deserializable type.
pub struct JsonDecoder<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    /// Creates a JSON decoder for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonDecoder")
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for JsonDecoder<T> {}

impl<T: DeserializeOwned> ResponseDecoder for JsonDecoder<T> {
    type Output = T;

    fn decode(&self, data: &[u8]) -> Result<T, BoxError> {
        serde_json::from_slice(data).map_err(Into::into)
    }
}
