//! Judge API access
//!
//! Thin wrappers over the HTTP endpoints the client talks to.

pub mod connection;
pub mod submission_api;
pub mod user_api;

pub use connection::build_http_client;
pub use submission_api::{GradingBackend, HttpGradingBackend};
pub use user_api::UserApi;

#[cfg(test)]
pub use submission_api::MockGradingBackend;
