//! Result rendering
//!
//! Projects a graded outcome into a summary line plus one entry per test
//! case. Expected and received output are included only for failed cases.

use std::fmt;

use serde::Serialize;

use crate::models::{SubmissionOutcome, TestCaseResult};

/// Pass/fail indicator of one test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseStatus {
    Passed,
    Failed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }
}

/// Expected vs. received output of a failed case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputComparison {
    pub expected: String,
    pub received: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTestCase {
    /// One-based label, e.g. "Test Case 1"
    pub label: String,
    pub status: CaseStatus,
    pub comparison: Option<OutputComparison>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedOutcome {
    pub summary: String,
    pub cases: Vec<RenderedTestCase>,
}

/// Render the latest outcome; nothing to show without one
pub fn render_outcome(outcome: Option<&SubmissionOutcome>) -> Option<RenderedOutcome> {
    let outcome = outcome?;

    Some(RenderedOutcome {
        summary: outcome.summary.clone(),
        cases: outcome.test_cases.iter().map(render_case).collect(),
    })
}

fn render_case(case: &TestCaseResult) -> RenderedTestCase {
    let (status, comparison) = if case.passed {
        (CaseStatus::Passed, None)
    } else {
        (
            CaseStatus::Failed,
            Some(OutputComparison {
                expected: case.expected_output.clone().unwrap_or_default(),
                received: case.actual_output.clone().unwrap_or_default(),
            }),
        )
    };

    RenderedTestCase {
        label: format!("Test Case {}", case.index + 1),
        status,
        comparison,
    }
}

impl fmt::Display for RenderedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Submission Results")?;
        writeln!(f, "Summary: {}", self.summary)?;
        for case in &self.cases {
            writeln!(f)?;
            writeln!(f, "{}:", case.label)?;
            writeln!(f, "  Status: {}", case.status.as_str())?;
            if let Some(comparison) = &case.comparison {
                writeln!(f, "  Expected:")?;
                for line in comparison.expected.lines() {
                    writeln!(f, "    {line}")?;
                }
                writeln!(f, "  Received:")?;
                for line in comparison.received.lines() {
                    writeln!(f, "    {line}")?;
                }
            }
        }
        Ok(())
    }
}
