//! Submission model

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::utils::validation::validate_submission;

use super::{LanguageOption, SubmissionInput, UploadedFile};

/// What actually goes over the wire: text or file, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPayload {
    Code(String),
    File(UploadedFile),
}

/// One transmission to the grading backend
///
/// Built at submit time from the current view state and dropped once the
/// response has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub problem_id: String,
    pub language_id: u32,
    pub payload: SubmissionPayload,
}

impl SubmissionRequest {
    /// Validate the selection and package it for sending
    pub fn build(
        problem_id: &str,
        language: Option<LanguageOption>,
        input: &SubmissionInput,
    ) -> Result<Self, ValidationError> {
        validate_submission(language, input)?;

        let language = language.ok_or(ValidationError::NoLanguage)?;
        let payload = match input {
            SubmissionInput::UploadedFile(file) => SubmissionPayload::File(file.clone()),
            // Sent untrimmed; trimming only decides blankness.
            SubmissionInput::TypedCode { text } => SubmissionPayload::Code(text.clone()),
            SubmissionInput::Empty => return Err(ValidationError::EmptySubmission),
        };

        Ok(Self {
            problem_id: problem_id.to_string(),
            language_id: language.id,
            payload,
        })
    }
}

/// Graded result of one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionOutcome {
    pub summary: String,
    pub test_cases: Vec<TestCaseResult>,
}

impl SubmissionOutcome {
    pub fn passed_count(&self) -> usize {
        self.test_cases.iter().filter(|tc| tc.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.test_cases.iter().all(|tc| tc.passed)
    }
}

/// Result for a single test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseResult {
    /// Zero-based position in the backend's list
    pub index: usize,
    pub passed: bool,
    /// Only meaningful when `passed` is false
    pub expected_output: Option<String>,
    /// Only meaningful when `passed` is false
    pub actual_output: Option<String>,
}

/// Success body as sent by the grading backend
#[derive(Debug, Deserialize)]
pub struct OutcomeBody {
    pub summary: String,
    /// Absent and `null` both mean no test cases
    #[serde(default)]
    pub details: Option<Vec<TestCaseBody>>,
}

/// One entry of `details`
#[derive(Debug, Deserialize)]
pub struct TestCaseBody {
    pub passed: bool,
    #[serde(default)]
    pub expected_output: Option<String>,
    #[serde(default)]
    pub actual_output: Option<String>,
}

impl From<OutcomeBody> for SubmissionOutcome {
    fn from(body: OutcomeBody) -> Self {
        let test_cases = body
            .details
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, tc)| TestCaseResult {
                index,
                passed: tc.passed,
                expected_output: tc.expected_output,
                actual_output: tc.actual_output,
            })
            .collect();

        Self {
            summary: body.summary,
            test_cases,
        }
    }
}

impl SubmissionOutcome {
    /// Parse a success body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<OutcomeBody>(body).map(Into::into)
    }
}
