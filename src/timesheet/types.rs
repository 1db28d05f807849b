use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::validate_draft;
use crate::hours::{from_decimal_hours, Hms};
use crate::points::Grade;

/// Review state a timesheet can be moved into on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    pub const ALL: [TimesheetStatus; 3] = [
        TimesheetStatus::Pending,
        TimesheetStatus::Approved,
        TimesheetStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimesheetStatus::Pending => "pending",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimesheetStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.label() == normalized)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown status '{}' (expected one of: pending, approved, rejected)",
                    s
                )
            })
    }
}

/// Raw timesheet form state, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesheetDraft {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub review_notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TimesheetDraft {
    pub fn from_hms(hms: Hms) -> Self {
        Self {
            hours: hms.hours.min(i64::MAX as u64) as i64,
            minutes: hms.minutes as i64,
            seconds: hms.seconds as i64,
            ..Self::default()
        }
    }

    /// Validate and build the payload sent to the persistence API.
    ///
    /// Blank review notes are dropped and unknown grade labels become
    /// ungraded. All validation errors are returned together.
    pub fn into_submission(self) -> Result<TimesheetSubmission, Vec<String>> {
        validate_draft(&self)?;

        let hms = Hms::clamped(self.hours, self.minutes, self.seconds);
        let grade = self.grade.as_deref().and_then(Grade::parse_label);
        // Validation already rejected unknown labels
        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<TimesheetStatus>().ok());
        let review_notes = self
            .review_notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        Ok(TimesheetSubmission {
            hours: hms.to_decimal_hours(),
            grade,
            review_notes,
            status,
        })
    }
}

/// Validated timesheet payload. `hours` is decimal hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetSubmission {
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TimesheetStatus>,
}

impl TimesheetSubmission {
    /// The duration recovered from the decimal-hours field
    pub fn duration(&self) -> Hms {
        from_decimal_hours(self.hours)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize timesheet submission")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse timesheet submission")
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
    fn test_status_parse() {
        assert_eq!(
            "Approved".parse::<TimesheetStatus>().unwrap(),
            TimesheetStatus::Approved
        );
        assert_eq!(
            " pending ".parse::<TimesheetStatus>().unwrap(),
            TimesheetStatus::Pending
        );
        assert!("archived".parse::<TimesheetStatus>().is_err());
    }

    #[test]
    fn test_into_submission_converts_hours() {
        let submission = draft(4, 30, 0).into_submission().unwrap();
        assert_eq!(submission.hours, 4.5);
        assert_eq!(submission.duration(), Hms::clamped(4, 30, 0));
        assert!(submission.grade.is_none());
        assert!(submission.status.is_none());
    }

    #[test]
    fn test_into_submission_keeps_optional_fields() {
        let submission = TimesheetDraft {
            grade: Some("Good".to_string()),
            review_notes: Some("  Sorted donations  ".to_string()),
            status: Some("approved".to_string()),
            ..draft(1, 0, 0)
        }
        .into_submission()
        .unwrap();

        assert_eq!(submission.grade, Some(Grade::Good));
        assert_eq!(submission.review_notes.as_deref(), Some("Sorted donations"));
        assert_eq!(submission.status, Some(TimesheetStatus::Approved));
    }

    #[test]
    fn test_unknown_grade_becomes_ungraded() {
        let submission = TimesheetDraft {
            grade: Some("superb".to_string()),
            ..draft(1, 0, 0)
        }
        .into_submission()
        .unwrap();
        assert!(submission.grade.is_none());
    }

    #[test]
    fn test_blank_notes_and_status_dropped() {
        let submission = TimesheetDraft {
            review_notes: Some("   ".to_string()),
            status: Some("".to_string()),
            ..draft(0, 0, 30)
        }
        .into_submission()
        .unwrap();
        assert!(submission.review_notes.is_none());
        assert!(submission.status.is_none());
    }

    #[test]
    fn test_into_submission_rejects_zero_duration() {
        let errors = draft(0, 0, 0).into_submission().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duration"));
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let submission = draft(2, 15, 0).into_submission().unwrap();
        let json = submission.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hours"], 2.25);
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
    }

    #[test]
    fn test_json_field_names() {
        let submission = TimesheetSubmission {
            hours: 1.5,
            grade: Some(Grade::NeedsImprovement),
            review_notes: Some("Late start".to_string()),
            status: Some(TimesheetStatus::Rejected),
        };
        let value: serde_json::Value =
            serde_json::from_str(&submission.to_json().unwrap()).unwrap();
        assert_eq!(value["grade"], "needs_improvement");
        assert_eq!(value["review_notes"], "Late start");
        assert_eq!(value["status"], "rejected");
    }

    #[test]
    fn test_from_json() {
        let submission =
            TimesheetSubmission::from_json(r#"{"hours": 3.75, "grade": "excellent"}"#).unwrap();
        assert_eq!(submission.duration(), Hms::clamped(3, 45, 0));
        assert_eq!(submission.grade, Some(Grade::Excellent));
        assert!(submission.review_notes.is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_grade_label() {
        assert!(TimesheetSubmission::from_json(r#"{"hours": 1.0, "grade": "superb"}"#).is_err());
    }

    #[test]
    fn test_from_hms() {
        let draft = TimesheetDraft::from_hms(Hms::clamped(3, 20, 10));
        assert_eq!((draft.hours, draft.minutes, draft.seconds), (3, 20, 10));
        assert!(draft.grade.is_none());
    }
}
