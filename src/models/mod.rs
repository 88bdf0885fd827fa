//! Domain models
//!
//! This module contains all domain models used throughout the client.

pub mod input;
pub mod language;
pub mod lifecycle;
pub mod submission;
pub mod user;

pub use input::*;
pub use language::{accepted_file_types, LanguageOption, LANGUAGE_OPTIONS};
pub use lifecycle::*;
pub use submission::*;
pub use user::*;
