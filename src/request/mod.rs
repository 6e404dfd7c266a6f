//! Declarative request descriptors and the encode/decode capabilities.
//!
//! This module provides types and traits for:
//! - Describing an outbound call ([`Request`], [`Method`])
//! - Encoding a typed payload into body bytes ([`BodyEncoder`], [`JsonBody`])
//! - Decoding response bytes into a typed value ([`ResponseDecoder`], [`JsonDecoder`])

mod body;
mod decode;
mod descriptor;

#[cfg(test)]
mod body_tests;

pub use body::{BodyEncoder, JsonBody};
pub use decode::{JsonDecoder, ResponseDecoder};
pub use descriptor::{Method, Request};
