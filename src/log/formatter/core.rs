use crate::log::log_record::LogRecord;

/// 日志格式化器 trait
///
/// 按格式模板把 LogRecord 渲染为一行文本（不含换行符）。
/// 实现必须是确定性的，且不产生副作用。
pub trait LogFormatter: Send + Sync {
    /// 渲染日志记录
    fn format(&self, pattern: &str, record: &LogRecord) -> String;
}
