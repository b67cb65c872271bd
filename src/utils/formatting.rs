//! Formatting utilities used for console and report outputs.

use chrono::TimeDelta;

/// `H:MM:SS`, with a leading `-` for negative deltas.
pub fn format_delta(delta: TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Same as `format_delta`, `0` when the value is missing.
pub fn format_optional_delta(delta: Option<TimeDelta>) -> String {
    delta.map(format_delta).unwrap_or_else(|| "0".to_string())
}
