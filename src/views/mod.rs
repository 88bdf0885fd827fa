//! View projections
//!
//! Pure functions from client state to what a front-end shows. None of these
//! hold state of their own.

pub mod menu;
pub mod profile;
pub mod result;

pub use menu::{Avatar, MenuItem, ProfileMenu};
pub use profile::{ChartSlice, ProfileSummary};
pub use result::{render_outcome, CaseStatus, OutputComparison, RenderedOutcome, RenderedTestCase};
