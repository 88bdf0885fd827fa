//! Application-wide constants
//!
//! This module contains all constant values used throughout the client.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// API DEFAULTS
// =============================================================================

/// Default base URL of the judge API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default log filter
pub const DEFAULT_RUST_LOG: &str = "info";

/// API endpoint paths (relative to the base URL)
pub mod endpoints {
    /// Submission endpoint (multipart POST)
    pub const SUBMIT: &str = "/api/submissions/submit";

    /// Current user endpoint
    pub const CURRENT_USER: &str = "/api/auth/me";
}

// =============================================================================
// SUBMISSION FORM FIELDS
// =============================================================================

/// Multipart field names understood by the grading backend
pub mod form_fields {
    pub const PROBLEM_ID: &str = "problemId";
    pub const LANGUAGE_ID: &str = "languageId";
    pub const CODE: &str = "code";
    pub const CODE_FILE: &str = "codeFile";
}

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Backend language identifiers
pub mod language_ids {
    /// C++ (compiled)
    pub const CPP: u32 = 54;
    /// Python (interpreted)
    pub const PYTHON: u32 = 71;
}

/// File extensions accepted by the upload picker
pub mod file_extensions {
    pub const CPP: &str = "cpp";
    pub const PYTHON: &str = "py";
}

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

/// Messages shown in the submission view
pub mod messages {
    pub const NO_LANGUAGE: &str = "Please select a programming language.";
    pub const EMPTY_SUBMISSION: &str = "Please enter a solution or upload a file.";
    pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred during submission.";
}

// =============================================================================
// PROFILE
// =============================================================================

/// Default number of problems on the platform (profile chart denominator)
pub const DEFAULT_TOTAL_PROBLEMS: u32 = 10;

/// Avatar shown when the user has no photo
pub const DEFAULT_AVATAR_URL: &str = "https://github.com/shadcn.png";

/// Chart colors (solved, unsolved)
pub mod chart_colors {
    pub const SOLVED: &str = "#4CAF50";
    pub const SOLVED_HOVER: &str = "#45A049";
    pub const UNSOLVED: &str = "#F44336";
    pub const UNSOLVED_HOVER: &str = "#D32F2F";
}

// =============================================================================
// ROUTES
// =============================================================================

/// Navigation targets of the profile menu
pub mod routes {
    pub const PROBLEM_LIST: &str = "/problem-list";
    pub const SUBMISSIONS: &str = "/submissions";
    pub const PROFILE: &str = "/profile";
    pub const LOGIN: &str = "/login";
}
