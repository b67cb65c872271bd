//! Wait and handling time of a chat.

use crate::models::{ChatRecord, ChatTiming};
use crate::utils::parse_timestamp;

/// Compute `wait = accepted - started` and `duration = ended - accepted`.
/// Missing or unparsable timestamps leave the value absent; inversions
/// are passed through as negative deltas.
pub fn compute(record: &ChatRecord) -> ChatTiming {
    let parse = |v: &Option<String>| v.as_deref().and_then(parse_timestamp);

    let started = parse(&record.started);
    let accepted = parse(&record.accepted);
    let ended = parse(&record.ended);

    ChatTiming {
        wait: accepted.zip(started).map(|(a, s)| a - s),
        duration: ended.zip(accepted).map(|(e, a)| e - a),
    }
}
