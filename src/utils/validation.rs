//! Input validation utilities

use crate::error::ValidationError;
use crate::models::{LanguageOption, SubmissionInput, LANGUAGE_OPTIONS};

/// Gate a submission before any network call
///
/// Rules are checked in order and the first failure wins:
/// a language must be selected, then there must be either non-blank typed
/// text or an uploaded file.
pub fn validate_submission(
    language: Option<LanguageOption>,
    input: &SubmissionInput,
) -> Result<(), ValidationError> {
    if language.is_none() {
        return Err(ValidationError::NoLanguage);
    }
    if input.is_blank() {
        return Err(ValidationError::EmptySubmission);
    }
    Ok(())
}

/// Whether the upload picker would offer this file
///
/// Advisory only, never part of `validate_submission`.
pub fn is_accepted_file_name(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            LANGUAGE_OPTIONS
                .iter()
                .any(|lang| lang.extension.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
