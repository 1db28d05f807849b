use serde::Serialize;

use super::grade::Grade;

/// A computed award, kept with its inputs for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsAward {
    pub base_points: u64,
    pub grade: Grade,
    pub multiplier: f64,
    pub final_points: u64,
}

/// Final points for a graded unit of work.
///
/// Returns `None` when no grade was given ("not yet assessed"), which is
/// distinct from `Some(0)` for a rejected assessment. Mirrors the server's
/// `round(base_points * multiplier)` so previews match the stored award.
pub fn compute_final_points(base_points: u64, grade: Option<Grade>) -> Option<u64> {
    grade.map(|g| apply_multiplier(base_points, g.multiplier()))
}

/// Same as [`compute_final_points`] for a raw grade label. Unknown labels
/// are treated as ungraded.
pub fn compute_final_points_for_label(base_points: u64, label: Option<&str>) -> Option<u64> {
    compute_final_points(base_points, label.and_then(Grade::parse_label))
}

pub fn award(base_points: u64, grade: Option<Grade>) -> Option<PointsAward> {
    let grade = grade?;
    let multiplier = grade.multiplier();
    Some(PointsAward {
        base_points,
        grade,
        multiplier,
        final_points: apply_multiplier(base_points, multiplier),
    })
}

// Half-away-from-zero; inputs are non-negative so this matches round-half-up
fn apply_multiplier(base_points: u64, multiplier: f64) -> u64 {
    (base_points as f64 * multiplier).round() as u64
}
