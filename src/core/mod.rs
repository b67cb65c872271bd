pub mod assembler;
pub mod fetcher;
pub mod formatter;
pub mod ids;
pub mod selector;
pub mod timing;

pub use assembler::{AssemblySettings, AssemblyStats, ReportAssembler};
pub use formatter::LineFormatter;
