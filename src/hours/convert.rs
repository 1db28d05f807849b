use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// A duration split into the three form fields a volunteer fills in.
///
/// `minutes` and `seconds` are always in `0..=59`; `hours` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Hms {
    /// Build from raw form input, clamping minutes and seconds into `0..=59`
    /// and negative hours to zero.
    pub fn clamped(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours: hours.max(0) as u64,
            minutes: minutes.clamp(0, 59) as u8,
            seconds: seconds.clamp(0, 59) as u8,
        }
    }

    /// Split a whole-second count into hours, minutes and seconds
    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        total_seconds(self.hours, self.minutes as u64, self.seconds as u64)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    pub fn to_decimal_hours(&self) -> f64 {
        to_decimal_hours(self.hours, self.minutes as u64, self.seconds as u64)
    }

    /// Sub-second precision is dropped.
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_total_seconds(duration.as_secs())
    }
}

impl From<Hms> for Duration {
    fn from(hms: Hms) -> Self {
        Duration::from_secs(hms.total_seconds())
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

fn total_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds)
}

/// Convert hour/minute/second components to decimal hours.
///
/// Components are summed as whole seconds before the single division, so
/// `from_decimal_hours` recovers the exact triple.
pub fn to_decimal_hours(hours: u64, minutes: u64, seconds: u64) -> f64 {
    total_seconds(hours, minutes, seconds) as f64 / SECONDS_PER_HOUR as f64
}

/// Convert decimal hours back to hour/minute/second components.
///
/// Rounds to the nearest whole second, then splits. Negative, NaN and
/// infinite inputs yield zero.
pub fn from_decimal_hours(decimal_hours: f64) -> Hms {
    if !decimal_hours.is_finite() || decimal_hours <= 0.0 {
        return Hms::default();
    }
    // Float-to-int casts saturate at u64::MAX
    let total = (decimal_hours * SECONDS_PER_HOUR as f64).round() as u64;
    Hms::from_total_seconds(total)
}
