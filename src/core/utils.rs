// License: MIT

use chrono::{Local, NaiveDateTime};

/// Wall-clock "now" as a local naive timestamp.
///
/// Everything in the core takes timestamps as arguments so the state machine
/// stays deterministic under test; this is the single place the runtime reads
/// the clock.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Signed seconds from `earlier` to `later`, with sub-second precision.
pub fn seconds_between(earlier: NaiveDateTime, later: NaiveDateTime) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0
}

/// Render a second count as HH:MM:SS. Negative input clamps to zero.
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

pub fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', r"'\''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hms_renders_components() {
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(59.9), "00:00:59");
        assert_eq!(format_hms(90.0), "00:01:30");
        assert_eq!(format_hms(3661.0), "01:01:01");
        assert_eq!(format_hms(-5.0), "00:00:00");
    }
}
