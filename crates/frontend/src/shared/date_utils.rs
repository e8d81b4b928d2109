//! Time formatting for the tracker and dashboard.

use chrono::{DateTime, Local, Utc};

/// Elapsed seconds as "M:SS" (e.g. 125 -> "2:05")
pub fn format_elapsed(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{}:{:02}", s / 60, s % 60)
}

/// Order timestamp as local wall-clock "HH:MM"
pub fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Today's date as "YYYY-MM-DD" for the date input default
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_minutes_and_padded_seconds() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(59), "0:59");
        assert_eq!(format_elapsed(125), "2:05");
        assert_eq!(format_elapsed(-3), "0:00");
    }
}
