use serde::Serialize;

/// Chat format derived from the queue name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Texting,
    Proactive,
    Clavardez,
    Web,
}

impl Category {
    /// Case-sensitive substring rules, first match wins.
    pub fn from_queue(queue: &str) -> Self {
        if queue.contains("txt") {
            Category::Texting
        } else if queue.contains("proactive") {
            Category::Proactive
        } else if queue.contains("lavardez") {
            Category::Clavardez
        } else {
            Category::Web
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Texting => "Texting",
            Category::Proactive => "Proactive",
            Category::Clavardez => "Clavardez (fr)",
            Category::Web => "Web",
        }
    }
}
