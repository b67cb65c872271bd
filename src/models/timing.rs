use chrono::TimeDelta;

/// Wait and handling time of a chat. Values may be negative on clock skew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatTiming {
    /// accepted - started
    pub wait: Option<TimeDelta>,
    /// ended - accepted
    pub duration: Option<TimeDelta>,
}

impl ChatTiming {
    /// Only chats with a resolvable duration make it into a report.
    pub fn is_reportable(&self) -> bool {
        self.duration.is_some()
    }
}
