use crate::log::level::LogLevel;
use chrono::{DateTime, Local};

/// 日志记录
///
/// 由上层日志门面构造，之后只读；写入器在渲染并输出后即丢弃
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 创建时间
    pub created: DateTime<Local>,
    /// 来源标识（通常是 `模块路径:行号`）
    pub source: String,
    /// 日志分类，为空时渲染为 `DEFAULT`
    pub category: String,
    /// 日志消息
    pub message: String,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳取当前本地时间
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            created: Local::now(),
            source: String::new(),
            category: String::new(),
            message: message.into(),
        }
    }

    /// 设置来源标识
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// 设置日志分类
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// 覆盖创建时间
    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }
}
