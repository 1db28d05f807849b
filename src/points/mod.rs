pub mod engine;
pub mod grade;

pub use engine::{award, compute_final_points, compute_final_points_for_label, PointsAward};
pub use grade::Grade;
