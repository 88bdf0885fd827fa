//! Client services
//!
//! This module contains the stateful logic behind the views.

pub mod input_resolver;
pub mod profile_service;
pub mod session;
pub mod submission_service;

pub use input_resolver::InputResolver;
pub use profile_service::ProfileService;
pub use session::{LocalSession, SessionProvider};
pub use submission_service::{SubmissionController, SubmitAttempt};
