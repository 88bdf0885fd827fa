//! Profile statistics view

use serde::Serialize;

use crate::constants::chart_colors;
use crate::models::UserProfile;

/// One slice of the solved/unsolved pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
    pub hover_color: &'static str,
}

/// Read-only summary shown on the profile page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub username: String,
    pub email: String,
    pub solved: u32,
    pub unsolved: u32,
    pub total: u32,
}

impl ProfileSummary {
    /// Every recorded submission counts as one solved problem
    pub fn from_user(user: &UserProfile, total_problems: u32) -> Self {
        let solved = u32::try_from(user.submissions.len()).unwrap_or(u32::MAX);

        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            solved,
            unsolved: total_problems.saturating_sub(solved),
            total: total_problems,
        }
    }

    pub fn chart(&self) -> [ChartSlice; 2] {
        [
            ChartSlice {
                label: "Solved",
                value: self.solved,
                color: chart_colors::SOLVED,
                hover_color: chart_colors::SOLVED_HOVER,
            },
            ChartSlice {
                label: "Unsolved",
                value: self.unsolved,
                color: chart_colors::UNSOLVED,
                hover_color: chart_colors::UNSOLVED_HOVER,
            },
        ]
    }

    /// e.g. "Solved: 3 / 10"
    pub fn caption(&self) -> String {
        format!("Solved: {} / {}", self.solved, self.total)
    }
}
