mod core;
mod pattern_formatter;

pub use self::core::LogFormatter;
pub use pattern_formatter::{PatternFormatter, DEFAULT_FORMAT};
