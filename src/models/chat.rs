use serde::{Deserialize, Deserializer, Serialize};

/// Accept `null` wherever a field has a usable default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry of the date-range listing. Only used to pick identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: i64,
    /// Queue name, as returned by the listing endpoint.
    #[serde(default, deserialize_with = "null_as_default")]
    pub queue: String,
    #[serde(default)]
    pub accepted: Option<String>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub ended: Option<String>,
}

impl ChatSummary {
    /// Answered chats have an `accepted` timestamp.
    pub fn is_answered(&self) -> bool {
        self.accepted.is_some()
    }

    /// Practice queues are matched case-sensitively on the substring `practice`.
    pub fn is_practice(&self) -> bool {
        self.queue.contains("practice")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestRef {
    #[serde(default)]
    pub jid: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Full chat as returned by the fetch-by-id endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: i64,
    #[serde(default)]
    pub queue_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub queue: QueueRef,
    #[serde(default)]
    pub operator: Option<OperatorRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guest: GuestRef,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub accepted: Option<String>,
    #[serde(default)]
    pub ended: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

impl ChatRecord {
    /// Operator display name, `None` when absent or blank.
    pub fn operator_name(&self) -> Option<&str> {
        self.operator
            .as_ref()
            .and_then(|op| op.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Queue id, preferring the top-level field over the nested one.
    pub fn queue_id(&self) -> Option<i64> {
        self.queue_id.or(self.queue.id)
    }

    pub fn guest_jid(&self) -> &str {
        self.guest.jid.as_deref().unwrap_or("")
    }

    /// First six characters of the guest jid.
    pub fn guest_prefix(&self) -> String {
        self.guest_jid().chars().take(6).collect()
    }

    /// The raw queue address as it appears in transcripts.
    pub fn queue_address(&self, queue_domain: &str) -> String {
        format!("{}@{}", self.queue.name, queue_domain)
    }
}
