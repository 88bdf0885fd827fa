//! Input resolver
//!
//! Keeps exactly one source of code active. A chosen file takes precedence:
//! while it is selected, typing is disabled and edits to the text are
//! rejected. Clearing the file re-enables typing.

use tracing::debug;

use crate::models::{SubmissionInput, UploadedFile};

#[derive(Debug, Clone, Default)]
pub struct InputResolver {
    input: SubmissionInput,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &SubmissionInput {
        &self.input
    }

    /// Typing is disabled while a file is selected
    pub fn is_typing_enabled(&self) -> bool {
        !self.input.has_file()
    }

    /// Replace the typed code
    ///
    /// Returns `false` (and changes nothing) when a file is selected.
    pub fn set_typed_code(&mut self, text: impl Into<String>) -> bool {
        if self.input.has_file() {
            debug!("Typed code ignored while a file is selected");
            return false;
        }

        let text = text.into();
        self.input = if text.is_empty() {
            SubmissionInput::Empty
        } else {
            SubmissionInput::TypedCode { text }
        };
        true
    }

    /// Select a file (clearing typed code) or clear the current file
    pub fn set_uploaded_file(&mut self, file: Option<UploadedFile>) {
        match file {
            Some(file) => {
                debug!(file_name = %file.name, size = file.content.len(), "File selected");
                self.input = SubmissionInput::UploadedFile(file);
            }
            None if self.input.has_file() => self.input = SubmissionInput::Empty,
            None => {}
        }
    }

    /// Back to the initial empty state
    pub fn reset(&mut self) {
        self.input = SubmissionInput::Empty;
    }
}
