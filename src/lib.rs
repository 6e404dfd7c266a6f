//! netcall: a typed async HTTP request/response library.
//!
//! Callers describe an outbound call declaratively with a
//! [`request::Request`] (method, host, path, queries, headers, body
//! encoder, response decoder) and hand it to a
//! [`client::NetworkManager`], which assembles the wire request, sends it
//! through an opaque [`transport::Transport`], classifies every failure
//! into the closed [`error::NetworkError`] taxonomy, retries per policy,
//! and decodes the body into the caller's expected type.

pub mod auth;
pub mod client;
pub mod error;
pub mod request;
pub mod time;
pub mod transport;

#[cfg(test)]
mod error_tests;
