pub mod formatter;

pub use formatter::{
    format_clock, format_decimal_hours, format_grade_table, format_hms, format_points,
    format_preview, should_use_colors,
};
