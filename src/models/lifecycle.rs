//! Submission lifecycle state

use super::SubmissionOutcome;

/// Where a submission view currently is in the submit/grade round trip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    Idle,
    Validating,
    /// Exactly one request is in flight
    Submitting,
    Succeeded(SubmissionOutcome),
    /// User-visible failure message
    Failed(String),
}

impl LifecycleState {
    /// Get state name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    /// The submit affordance must be disabled in this state
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            Self::Succeeded(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
