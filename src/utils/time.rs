//! Time utilities: parsing API timestamps and transcript clock stamps.

use chrono::{DateTime, NaiveDateTime, NaiveTime};

/// Parse an API timestamp. Offsets are normalised to UTC; naive values are
/// taken as-is. Anything unparsable yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a transcript clock stamp (`HH:MM`, hour may be a single digit).
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}
