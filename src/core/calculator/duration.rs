//! In/out pair → encoded hours.
//!
//! The encoded value packs minutes into the two fractional digits:
//! `8h30m` is `8.30`. Totals built from it must unpack with `× 100`
//! (see [`super::aggregate`]).

use crate::errors::AppResult;
use crate::utils::time::{minutes_between, require_time};
use chrono::NaiveTime;

/// Encode the elapsed time between `in_time` and `out_time`.
///
/// `hours = floor(diff / 60)` but `minutes = diff % 60` keeps the sign of
/// `diff`, so a negative difference yields mixed-sign parts
/// (`-30` min → `-1 + -0.30`). Existing totals depend on this; keep it.
pub fn encoded_hours(in_time: NaiveTime, out_time: NaiveTime) -> f64 {
    let diff = minutes_between(in_time, out_time);
    let hours = diff.div_euclid(60);
    let minutes = diff % 60;
    hours as f64 + minutes as f64 / 100.0
}

/// Parse two "HH:MM" strings and encode their difference.
pub fn compute(in_time: &str, out_time: &str) -> AppResult<f64> {
    let start = require_time(in_time)?;
    let end = require_time(out_time)?;
    Ok(encoded_hours(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn whole_day() {
        assert_eq!(compute("09:00", "17:00").unwrap(), 8.0);
    }

    #[test]
    fn minutes_are_packed_not_decimal() {
        assert_eq!(compute("09:00", "17:30").unwrap(), 8.30);
        assert_eq!(compute("09:45", "10:15").unwrap(), 0.30);
        assert_eq!(compute("08:05", "09:10").unwrap(), 1.05);
    }

    #[test]
    fn same_time_is_zero() {
        assert_eq!(compute("00:00", "00:00").unwrap(), 0.0);
    }

    #[test]
    fn out_before_in_is_not_next_day() {
        // -30 min: floor(-0.5) = -1, remainder keeps the sign → -1.30
        assert_eq!(compute("10:00", "09:30").unwrap(), -1.0 + -0.30);
        // -120 min: exact hours, no remainder
        assert_eq!(compute("11:00", "09:00").unwrap(), -2.0);
    }

    #[test]
    fn malformed_time_is_rejected() {
        assert!(matches!(
            compute("9 o'clock", "17:00"),
            Err(AppError::InvalidTime(_))
        ));
        assert!(compute("09:00", "").is_err());
    }
}
