//! 日志模块
//!
//! 异步、分级、按级别着色的终端日志写入器。
//!
//! # 特性
//!
//! - 日志级别：Trace, Debug, Info, Warn, Error, Critical
//! - 有界队列 + 单个后台线程：生产者只在队列满时阻塞，输出不会交错
//! - 可替换的格式化器（默认 PatternFormatter）和输出器（默认 ConsoleAppender）
//! - 进程级共享的颜色表，也可以按写入器注入
//! - close 等待后台线程确认排空，等待时间有上限
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use termlog::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConsoleWriterConfig::from_json(r#"
//!         {
//!             format: "[%T %D] [%L] (%S) %M",
//!             buffer_capacity: 64,
//!             target: "stdout",
//!         }
//!     "#)?;
//!
//!     let writer = ConsoleWriter::new(config)?;
//!
//!     writer.submit(LogRecord::new(LogLevel::Info, "Application started"));
//!     termlog::error!(writer, "Connection failed: {}", "timeout");
//!
//!     writer.close()?;
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod color;
pub mod config;
pub mod console_writer;
pub mod error;
pub mod formatter;
pub mod level;
pub mod log_record;
pub mod macros;

// 重新导出核心类型
pub use appender::{
    ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig, LogAppender,
    MemoryAppender, Target, WriterAppender,
};
pub use color::{default_color_table, ColorTable, INFO_COLOR};
pub use config::{ConsoleWriterConfig, DEFAULT_BUFFER_CAPACITY, DEFAULT_CLOSE_TIMEOUT};
pub use console_writer::{ConsoleWriter, ConsoleWriterBuilder};
pub use error::WriterError;
pub use formatter::{LogFormatter, PatternFormatter, DEFAULT_FORMAT};
pub use level::LogLevel;
pub use log_record::LogRecord;
