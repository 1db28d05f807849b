use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative assessment of a unit of volunteer work.
///
/// Variants are declared from highest to lowest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    Acceptable,
    NeedsImprovement,
    Rejected,
}

impl Grade {
    /// Every grade, highest rank first
    pub const ALL: [Grade; 5] = [
        Grade::Excellent,
        Grade::Good,
        Grade::Acceptable,
        Grade::NeedsImprovement,
        Grade::Rejected,
    ];

    /// Fraction of the base points awarded for this grade
    pub fn multiplier(self) -> f64 {
        match self {
            Grade::Excellent => 1.00,
            Grade::Good => 0.80,
            Grade::Acceptable => 0.60,
            Grade::NeedsImprovement => 0.25,
            Grade::Rejected => 0.00,
        }
    }

    /// Wire label, as submitted to the persistence API
    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Acceptable => "acceptable",
            Grade::NeedsImprovement => "needs_improvement",
            Grade::Rejected => "rejected",
        }
    }

    /// Lenient lookup used for form input.
    ///
    /// Case and surrounding whitespace are ignored, and `-` or spaces may
    /// stand in for `_`. Anything unrecognized (including an empty string)
    /// is `None`, meaning "not yet assessed".
    pub fn parse_label(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| {
                if c == '-' || c.is_whitespace() {
                    '_'
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        Self::ALL.into_iter().find(|g| g.label() == normalized)
    }

    /// Comma-separated list of all labels, for error messages
    pub fn valid_labels() -> String {
        Self::ALL
            .iter()
            .map(|g| g.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| {
            anyhow!(
                "Unknown grade '{}' (expected one of: {})",
                s,
                Self::valid_labels()
            )
        })
    }
}
