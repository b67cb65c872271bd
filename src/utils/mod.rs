pub mod formatting;
pub mod path;
pub mod range;
pub mod time;

pub use formatting::{format_delta, format_optional_delta};
pub use range::parse_range;
pub use time::{parse_clock, parse_timestamp};
