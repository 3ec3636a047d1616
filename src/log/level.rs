use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 最详细的日志
    Trace = 0,
    /// 调试信息
    Debug = 1,
    /// 一般信息
    Info = 2,
    /// 警告信息
    Warn = 3,
    /// 错误信息
    Error = 4,
    /// 严重错误
    Critical = 5,
}

impl LogLevel {
    /// 全部级别，按严重程度升序
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// 4 字符的显示缩写，格式模板中的 `%L` 以及颜色表都以它为键
    pub fn abbrev(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRAC",
            LogLevel::Debug => "DEBG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "EROR",
            LogLevel::Critical => "CRIT",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// 同时接受完整名称和 4 字符缩写，不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" | "trac" => Ok(LogLevel::Trace),
            "debug" | "debg" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "eror" => Ok(LogLevel::Error),
            "critical" | "crit" => Ok(LogLevel::Critical),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}
