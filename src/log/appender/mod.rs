mod console_appender;
mod file_appender;
mod memory_appender;
mod trait_;
mod writer_appender;

pub use console_appender::{ConsoleAppender, ConsoleAppenderConfig, Target};
pub use file_appender::{FileAppender, FileAppenderConfig};
pub use memory_appender::MemoryAppender;
pub use trait_::LogAppender;
pub use writer_appender::WriterAppender;
