//! termlog - 异步终端日志写入器
//!
//! 接收任意线程提交的日志记录，经有界队列交给单个后台线程，
//! 按格式模板渲染、按级别着色后写入标准输出（或任意注入的输出器）。
//!
//! ## 模块
//!
//! - **log**: 写入器、级别、记录、颜色表、格式化器与输出器
//! - **cfg**: 配置辅助（人性化的 Duration 序列化）

pub mod cfg;
pub mod log;

// 重新导出主要的公共 API
pub use log::{
    ColorTable, ConsoleWriter, ConsoleWriterConfig, LogAppender, LogFormatter, LogLevel,
    LogRecord, WriterError,
};
