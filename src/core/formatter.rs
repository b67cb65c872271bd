//! Rewrites transcript lines for the review page: gap highlights and
//! redaction of the operator and queue identities.

use crate::models::MessageEntry;
use chrono::{NaiveTime, TimeDelta};

/// Formats the lines of one transcript. Create a new formatter per chat.
pub struct LineFormatter<'a> {
    operator: Option<&'a str>,
    queue_address: &'a str,
    system_address: &'a str,
    gap: TimeDelta,
    previous: Option<NaiveTime>,
}

impl<'a> LineFormatter<'a> {
    pub fn new(
        operator: Option<&'a str>,
        queue_address: &'a str,
        system_address: &'a str,
        gap_minutes: i64,
    ) -> Self {
        Self {
            operator: operator.filter(|o| !o.is_empty()),
            queue_address,
            system_address,
            gap: TimeDelta::minutes(gap_minutes),
            previous: None,
        }
    }

    /// Format one line as a table row.
    ///
    /// The gap check compares against the last line that carried a
    /// timestamp. A line without one is never highlighted and leaves that
    /// reference untouched. The marker replaces the stamp in place, never
    /// an earlier copy of the same text.
    pub fn format_line(&mut self, entry: &MessageEntry) -> String {
        let mut line = entry.raw_markup.clone();

        if let (Some(current), Some(span)) = (entry.timestamp, entry.timestamp_span.clone()) {
            let previous = *self.previous.get_or_insert(current);
            if elapsed(previous, current) >= self.gap {
                let marker = line
                    .get(span.clone())
                    .map(|stamp| gap_marker(stamp, self.gap.num_minutes()));
                if let Some(marker) = marker {
                    line.replace_range(span, &marker);
                }
            }
            self.previous = Some(current);
        }

        let line = redact(&line, self.operator, self.queue_address, self.system_address);
        format!("<tr><td>{line}</td></tr>")
    }
}

/// Time between two clock stamps. Lines are chronological, so a stamp
/// earlier than its predecessor is on the next day.
fn elapsed(previous: NaiveTime, current: NaiveTime) -> TimeDelta {
    let delta = current - previous;
    if delta < TimeDelta::zero() {
        delta + TimeDelta::days(1)
    } else {
        delta
    }
}

/// Visual marker for a line that follows a long silence.
pub fn gap_marker(stamp: &str, minutes: i64) -> String {
    format!(r#"<b style="color:white; background-color:tomato">{stamp} [+{minutes}] </b>"#)
}

/// Replace the first occurrence of the operator name with `operator` and
/// the first occurrence of the queue address with the system address.
pub fn redact(line: &str, operator: Option<&str>, queue_address: &str, system_address: &str) -> String {
    let line = match operator {
        Some(op) if !op.is_empty() => line.replacen(op, "operator", 1),
        _ => line.to_string(),
    };

    if queue_address.is_empty() {
        line
    } else {
        line.replacen(queue_address, system_address, 1)
    }
}
