pub mod types;
pub mod validation;

pub use types::{TimesheetDraft, TimesheetStatus, TimesheetSubmission};
pub use validation::{validate_draft, MAX_REVIEW_NOTES_CHARS};

use crate::points::{award, PointsAward};

/// Points the submission would award for the given base points, or `None`
/// when it carries no grade.
pub fn preview(submission: &TimesheetSubmission, base_points: u64) -> Option<PointsAward> {
    award(base_points, submission.grade)
}
