//! Time utilities: parsing HH:MM and minute differences.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Like [`parse_time`], but reports the offending input.
pub fn require_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Signed minutes from `start` to `end` on the same nominal day.
/// `end` before `start` gives a negative value; there is no day rollover.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_time("09:45"), NaiveTime::from_hms_opt(9, 45, 0));
        assert_eq!(parse_time(" 23:59 "), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_time("").is_none());
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("noon").is_none());
        assert!(matches!(require_time("9h"), Err(AppError::InvalidTime(_))));
    }

    #[test]
    fn minutes_can_be_negative() {
        let a = parse_time("10:00").unwrap();
        let b = parse_time("09:30").unwrap();
        assert_eq!(minutes_between(a, b), -30);
        assert_eq!(minutes_between(b, a), 30);
    }
}
