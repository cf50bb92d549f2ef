//! Clock-style rendering of durations for the slider's time labels.
//!
//! Durations are `f64` seconds. Anything under an hour renders as `M:SS`,
//! an hour or more as `H:MM:SS`. Fractional seconds are truncated, so a
//! label never shows a second that has not fully elapsed.

/// Text used when a duration cannot be rendered (negative, NaN, infinite).
pub const DEFAULT_FALLBACK: &str = "0:00";

const SECONDS_PER_HOUR: u64 = 3600;

/// Format `interval` seconds as a clock string with no prefix.
///
/// ```
/// use mediaslider::format::format_time;
///
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3661.0), "1:01:01");
/// ```
pub fn format_time(interval: f64) -> String {
    format_time_with(interval, "", DEFAULT_FALLBACK)
}

/// Format `interval` seconds, prepending `prefix` and using `fallback` when
/// the value cannot be rendered.
///
/// The prefix is only written when `interval >= 1.0`. A remaining time that
/// has dropped below one second renders as `0:00`, never `-0:00`.
pub fn format_time_with(interval: f64, prefix: &str, fallback: &str) -> String {
    match clock_body(interval) {
        Some(body) if interval >= 1.0 => format!("{prefix}{body}"),
        Some(body) => body,
        None => fallback.to_string(),
    }
}

/// Render the clock digits, or `None` for values with no clock form.
fn clock_body(interval: f64) -> Option<String> {
    if !interval.is_finite() || interval < 0.0 {
        return None;
    }

    let total_secs = interval.floor() as u64;
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / 60;
    let seconds = total_secs % 60;

    if total_secs >= SECONDS_PER_HOUR {
        Some(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(format!("{}:{:02}", minutes, seconds))
    }
}
