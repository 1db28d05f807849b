use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::hours::Hms;
use crate::points::{Grade, PointsAward, compute_final_points};
use crate::timesheet::TimesheetSubmission;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a duration as "4h 30m 0s"
pub fn format_hms(hms: &Hms) -> String {
    format!("{}h {}m {}s", hms.hours, hms.minutes, hms.seconds)
}

/// Format a duration as "4:30:00"
pub fn format_clock(hms: &Hms) -> String {
    hms.to_string()
}

/// Format decimal hours with at most 4 decimals, trailing zeros trimmed
/// (4.5, 0.0003, 12)
pub fn format_decimal_hours(decimal_hours: f64) -> String {
    let formatted = format!("{:.4}", decimal_hours);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format final points, or "not assessed" when there is no grade
pub fn format_points(points: Option<u64>) -> String {
    match points {
        Some(p) => format!("{} pts", p),
        None => "not assessed".to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format every grade with its multiplier and the points it awards
/// for `base_points`, highest grade first.
pub fn format_grade_table(base_points: u64, use_colors: bool) -> String {
    let label_width = Grade::ALL
        .iter()
        .map(|g| g.label().len())
        .max()
        .unwrap_or(0);

    Grade::ALL
        .iter()
        .map(|grade| {
            let label = format!("{:<width$}", grade.label(), width = label_width);
            let multiplier = format!("x{:.2}", grade.multiplier());
            let points = format_points(compute_final_points(base_points, Some(*grade)));
            if use_colors {
                format!("{}  {}  {}", label.bold(), multiplier.dimmed(), points)
            } else {
                format!("{}  {}  {}", label, multiplier, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the preview block shown before a timesheet is submitted
pub fn format_preview(
    submission: &TimesheetSubmission,
    award: Option<&PointsAward>,
    use_colors: bool,
) -> String {
    let duration = submission.duration();
    let mut lines = Vec::new();

    let duration_str = format!("{} ({})", format_hms(&duration), format_clock(&duration));
    let decimal_str = format_decimal_hours(submission.hours);
    if use_colors {
        lines.push(format!("Duration:      {}", duration_str.bold()));
        lines.push(format!("Decimal hours: {}", decimal_str.cyan()));
    } else {
        lines.push(format!("Duration:      {}", duration_str));
        lines.push(format!("Decimal hours: {}", decimal_str));
    }

    match award {
        Some(award) => {
            lines.push(format!(
                "Grade:         {} (x{:.2})",
                award.grade, award.multiplier
            ));
            let points_str = format!("{} of {} pts", award.final_points, award.base_points);
            if use_colors {
                lines.push(format!("Points:        {}", points_str.green()));
            } else {
                lines.push(format!("Points:        {}", points_str));
            }
        }
        None => {
            let not_assessed = format_points(None);
            if use_colors {
                lines.push(format!("Grade:         {}", not_assessed.dimmed()));
                lines.push(format!("Points:        {}", not_assessed.dimmed()));
            } else {
                lines.push(format!("Grade:         {}", not_assessed));
                lines.push(format!("Points:        {}", not_assessed));
            }
        }
    }

    if let Some(status) = submission.status {
        if use_colors {
            lines.push(format!("Status:        {}", status.yellow()));
        } else {
            lines.push(format!("Status:        {}", status));
        }
    }

    if let Some(ref notes) = submission.review_notes {
        let prefix = "Notes:         ";
        // Collapse newlines so the block stays one line per field
        let flat = notes.split_whitespace().collect::<Vec<_>>().join(" ");
        let notes_str = match get_terminal_width() {
            Some(width) if width > prefix.len() + 10 => truncate_text(&flat, width - prefix.len()),
            Some(_) => truncate_text(&flat, 20),
            None => flat,
        };
        lines.push(format!("{}{}", prefix, notes_str));
    }

    lines.join("\n")
}
