//! Sum of encoded hours across entries, rendered as `H:MM`.

use crate::models::TimeEntry;

/// Round half toward +∞ (`2.5 → 3`, `-2.5 → -2`).
///
/// `f64::round` rounds half away from zero, which differs on negative ties.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Unpack one encoded value into minutes. Absent or NaN counts as 0.
pub fn encoded_to_minutes(total_hours: Option<f64>) -> i64 {
    let t = match total_hours {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    };
    let hours = t.floor();
    let minutes = round_half_up((t - hours) * 100.0);
    (hours * 60.0 + minutes) as i64
}

/// Total of all entries as `"{hours}:{minutes:02}"`.
///
/// Recomputed on each call; nothing is cached.
pub fn sum_and_format(entries: &[TimeEntry]) -> String {
    let total: i64 = entries
        .iter()
        .map(|e| encoded_to_minutes(e.total_hours))
        .sum();

    let hours = total.div_euclid(60);
    let minutes = total % 60;
    format!("{}:{:02}", hours, minutes)
}

/// Single row value with two decimals (`8.30`); absent renders empty.
pub fn format_encoded(total_hours: Option<f64>) -> String {
    match total_hours {
        Some(v) => format!("{:.2}", v),
        None => String::new(),
    }
}
