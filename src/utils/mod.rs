//! Utility functions

pub mod validation;

pub use validation::{is_accepted_file_name, validate_submission};
