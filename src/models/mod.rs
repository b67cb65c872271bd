pub mod batch;
pub mod category;
pub mod chat;
pub mod message;
pub mod timing;

pub use batch::{Batch, GuestRow, ReportPage};
pub use category::Category;
pub use chat::{ChatRecord, ChatSummary, GuestRef, OperatorRef, QueueRef};
pub use message::MessageEntry;
pub use timing::ChatTiming;
