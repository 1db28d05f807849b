use super::types::{TimesheetDraft, TimesheetStatus};

pub const MAX_REVIEW_NOTES_CHARS: usize = 2000;

/// Validate a timesheet draft before submission.
/// Returns all validation errors at once (not just the first).
///
/// An unrecognized grade label is not an error: it means the entry is
/// not yet assessed.
pub fn validate_draft(draft: &TimesheetDraft) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if draft.hours < 0 {
        errors.push(format!("hours: must be non-negative, got {}", draft.hours));
    }
    if !(0..=59).contains(&draft.minutes) {
        errors.push(format!(
            "minutes: must be between 0 and 59, got {}",
            draft.minutes
        ));
    }
    if !(0..=59).contains(&draft.seconds) {
        errors.push(format!(
            "seconds: must be between 0 and 59, got {}",
            draft.seconds
        ));
    }

    // Only meaningful once the components themselves are sane
    if errors.is_empty() && draft.hours == 0 && draft.minutes == 0 && draft.seconds == 0 {
        errors.push("duration: must be greater than zero".to_string());
    }

    if let Some(ref status) = draft.status {
        if !status.trim().is_empty() {
            if let Err(e) = status.parse::<TimesheetStatus>() {
                errors.push(format!("status: {}", e));
            }
        }
    }

    if let Some(ref notes) = draft.review_notes {
        let len = notes.trim().chars().count();
        if len > MAX_REVIEW_NOTES_CHARS {
            errors.push(format!(
                "review_notes: must be at most {} characters, got {}",
                MAX_REVIEW_NOTES_CHARS, len
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(hours: i64, minutes: i64, seconds: i64) -> TimesheetDraft {
        TimesheetDraft {
            hours,
            minutes,
            seconds,
            ..TimesheetDraft::default()
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_draft(&draft(4, 30, 0)).is_ok());
        assert!(validate_draft(&draft(0, 0, 1)).is_ok());
        assert!(validate_draft(&draft(0, 59, 59)).is_ok());
    }

    #[test]
    fn test_zero_duration() {
        let errors = validate_draft(&draft(0, 0, 0)).unwrap_err();
        assert_eq!(errors, vec!["duration: must be greater than zero".to_string()]);
    }

    #[test]
    fn test_negative_components() {
        let errors = validate_draft(&draft(-1, -5, 0)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("hours:"));
        assert!(errors[1].starts_with("minutes:"));
    }

    #[test]
    fn test_out_of_range_components() {
        let errors = validate_draft(&draft(1, 60, 75)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("minutes"));
        assert!(errors[1].contains("seconds"));
    }

    #[test]
    fn test_unknown_grade_is_allowed() {
        let d = TimesheetDraft {
            grade: Some("nonsense".to_string()),
            ..draft(1, 0, 0)
        };
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_unknown_status() {
        let d = TimesheetDraft {
            status: Some("archived".to_string()),
            ..draft(1, 0, 0)
        };
        let errors = validate_draft(&d).unwrap_err();
        assert!(errors[0].starts_with("status:"));
    }

    #[test]
    fn test_review_notes_too_long() {
        let d = TimesheetDraft {
            review_notes: Some("x".repeat(MAX_REVIEW_NOTES_CHARS + 1)),
            ..draft(1, 0, 0)
        };
        let errors = validate_draft(&d).unwrap_err();
        assert!(errors[0].starts_with("review_notes:"));

        let d = TimesheetDraft {
            review_notes: Some("x".repeat(MAX_REVIEW_NOTES_CHARS)),
            ..draft(1, 0, 0)
        };
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let d = TimesheetDraft {
            status: Some("done".to_string()),
            review_notes: Some("y".repeat(MAX_REVIEW_NOTES_CHARS + 10)),
            ..draft(-2, 0, 99)
        };
        let errors = validate_draft(&d).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
