//! judge-client - Online Judge Submission Client
//!
//! This library provides the client side of an online judge: it takes a
//! user's code (typed or uploaded) and a language, validates it, submits it
//! to the grading server and renders the per-test-case results.
//!
//! # Features
//!
//! - Typed code or file upload, with exactly one source active at a time
//! - Local validation before anything is sent
//! - Submission lifecycle with at most one request in flight and cancellation
//! - Result, profile statistics and profile menu projections
//!
//! # Architecture
//!
//! The client follows a layered architecture:
//! - **Views**: Pure projections of state for display
//! - **Services**: Input handling and the submission lifecycle
//! - **API**: HTTP access to the judge
//! - **Models**: Domain models and wire formats

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClientError, ClientResult, SubmitError, ValidationError};
pub use services::{SubmissionController, SubmitAttempt};
pub use state::ClientState;
