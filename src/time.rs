//! Clock-time parsing and formatting: `HH:MM[:SS]` and ISO
//! `YYYY-MM-DDTHH:MM:SS` strings to/from minutes-from-midnight.
//!
//! All scheduling arithmetic in this crate happens in integer minutes; this
//! module is the only place that touches clock-string representations.

use crate::error::OptimizeError;

/// Minutes elapsed since local midnight. Never negative, never above `1440`
/// for values derived from a clock string (deadlines and shift bounds use
/// the same representation and rely on that range).
pub type Minutes = i64;

/// Parses `HH:MM` or `HH:MM:SS` into minutes from midnight. Seconds, if
/// present, are accepted but ignored.
pub fn time_to_minutes(time_str: &str) -> Result<Minutes, OptimizeError> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(OptimizeError::InvalidTimeFormat(time_str.to_string()));
    }
    let h: i64 = parts[0]
        .parse()
        .map_err(|_| OptimizeError::InvalidTimeFormat(time_str.to_string()))?;
    let m: i64 = parts[1]
        .parse()
        .map_err(|_| OptimizeError::InvalidTimeFormat(time_str.to_string()))?;
    if parts.len() == 3 {
        parts[2]
            .parse::<i64>()
            .map_err(|_| OptimizeError::InvalidTimeFormat(time_str.to_string()))?;
    }
    Ok(h * 60 + m)
}

/// Formats minutes from midnight as `HH:MM:00`, matching
/// `_minutes_to_time_str`.
pub fn minutes_to_time_str(minutes: Minutes) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours:02}:{mins:02}:00")
}

/// Extracts the time-of-day component from either a bare `HH:MM[:SS]`
/// deadline or an ISO `YYYY-MM-DDTHH:MM:SS` deadline. Returns `None` both
/// when the caller passed no deadline at all and when the deadline string
/// present is malformed: a bad deadline is treated as "no deadline" rather
/// than a fatal input error, so the activity is scheduled unconstrained
/// instead of the whole request failing over one bad field. The `Result`
/// return type is kept for call-site uniformity with `time_to_minutes`; this
/// function itself never produces `Err`.
pub fn extract_deadline_minutes(deadline_str: Option<&str>) -> Result<Option<Minutes>, OptimizeError> {
    let Some(deadline_str) = deadline_str else {
        return Ok(None);
    };
    if deadline_str.is_empty() {
        return Ok(None);
    }
    let time_part = match deadline_str.split_once('T') {
        Some((_, time)) => time,
        None => deadline_str,
    };
    Ok(time_to_minutes(time_part).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        assert_eq!(time_to_minutes("08:00").unwrap(), 480);
    }

    #[test]
    fn parses_hh_mm_ss_ignoring_seconds() {
        assert_eq!(time_to_minutes("08:00:45").unwrap(), 480);
    }

    #[test]
    fn rejects_garbage() {
        assert!(time_to_minutes("not-a-time").is_err());
        assert!(time_to_minutes("8").is_err());
    }

    #[test]
    fn formats_minutes() {
        assert_eq!(minutes_to_time_str(480), "08:00:00");
        assert_eq!(minutes_to_time_str(1020), "17:00:00");
    }

    #[test]
    fn extracts_deadline_from_iso_datetime() {
        let m = extract_deadline_minutes(Some("2023-10-01T17:00:00")).unwrap();
        assert_eq!(m, Some(1020));
    }

    #[test]
    fn extracts_deadline_from_bare_time() {
        let m = extract_deadline_minutes(Some("17:00:00")).unwrap();
        assert_eq!(m, Some(1020));
    }

    #[test]
    fn no_deadline_is_none() {
        assert_eq!(extract_deadline_minutes(None).unwrap(), None);
    }

    #[test]
    fn malformed_deadline_is_none_rather_than_an_error() {
        assert_eq!(extract_deadline_minutes(Some("not-a-time")).unwrap(), None);
        assert_eq!(extract_deadline_minutes(Some("2023-10-01Tnope")).unwrap(), None);
    }
}
