use anyhow::{bail, Context, Result};

use super::convert::Hms;

/// Parse a duration typed on the command line.
///
/// Accepts a clock string (`4:30`, `4:30:15`) or a humantime expression
/// (`4h 30m`, `90min`). Sub-second remainders are truncated.
pub fn parse_duration(text: &str) -> Result<Hms> {
    let s = text.trim();
    if s.is_empty() {
        bail!("Duration is empty");
    }

    if s.contains(':') {
        parse_clock(s)
    } else {
        let duration = humantime::parse_duration(s)
            .with_context(|| format!("Invalid duration '{}'", s))?;
        Ok(Hms::from_duration(duration))
    }
}

fn parse_clock(s: &str) -> Result<Hms> {
    let parts: Vec<&str> = s.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m] => (*h, *m, "0"),
        [h, m, sec] => (*h, *m, *sec),
        _ => bail!("Invalid clock format '{}' (expected H:MM or H:MM:SS)", s),
    };

    let hours: u64 = hours
        .trim()
        .parse()
        .with_context(|| format!("Invalid hours '{}' in '{}'", hours, s))?;
    let minutes = parse_sexagesimal(minutes, "minutes", s)?;
    let seconds = parse_sexagesimal(seconds, "seconds", s)?;

    Ok(Hms {
        hours,
        minutes,
        seconds,
    })
}

fn parse_sexagesimal(value: &str, field: &str, whole: &str) -> Result<u8> {
    let parsed: u8 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {} '{}' in '{}'", field, value, whole))?;
    if parsed > 59 {
        bail!("{} must be between 0 and 59, got {} in '{}'", field, parsed, whole);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_hours_minutes() {
        let hms = parse_duration("4:30").unwrap();
        assert_eq!(hms, Hms::clamped(4, 30, 0));
    }

    #[test]
    fn test_parse_clock_with_seconds() {
        let hms = parse_duration(" 12:05:09 ").unwrap();
        assert_eq!(hms, Hms::clamped(12, 5, 9));
    }

    #[test]
    fn test_parse_clock_rejects_out_of_range_minutes() {
        let err = parse_duration("1:75").unwrap_err();
        assert!(err.to_string().contains("minutes"));
    }

    #[test]
    fn test_parse_clock_rejects_out_of_range_seconds() {
        let err = parse_duration("1:00:60").unwrap_err();
        assert!(err.to_string().contains("seconds"));
    }

    #[test]
    fn test_parse_clock_rejects_too_many_parts() {
        assert!(parse_duration("1:2:3:4").is_err());
    }

    #[test]
    fn test_parse_clock_rejects_negative_hours() {
        assert!(parse_duration("-1:30").is_err());
    }

    #[test]
    fn test_parse_humantime() {
        assert_eq!(parse_duration("4h 30m").unwrap(), Hms::clamped(4, 30, 0));
        assert_eq!(parse_duration("90min").unwrap(), Hms::clamped(1, 30, 0));
        assert_eq!(parse_duration("1h 1s").unwrap(), Hms::clamped(1, 0, 1));
    }

    #[test]
    fn test_parse_humantime_truncates_subseconds() {
        assert_eq!(parse_duration("2s 900ms").unwrap(), Hms::clamped(0, 0, 2));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_duration("   ").is_err());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_duration("four hours").is_err());
    }
}
