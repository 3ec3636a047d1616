use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 终端输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 输出目标
    pub target: Target,

    /// 每行写入后是否立即刷新
    #[default = true]
    pub auto_flush: bool,
}

/// 终端输出器
///
/// 将日志输出到标准输出或标准错误
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }

    /// 获取输出目标
    pub fn target(&self) -> Target {
        self.config.target
    }

    fn write_line(out: &mut impl Write, line: &str, auto_flush: bool) -> io::Result<()> {
        writeln!(out, "{}", line)?;
        if auto_flush {
            out.flush()?;
        }
        Ok(())
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new(ConsoleAppenderConfig::default())
    }
}

impl From<ConsoleAppenderConfig> for ConsoleAppender {
    fn from(config: ConsoleAppenderConfig) -> Self {
        Self::new(config)
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        match self.config.target {
            Target::Stdout => Self::write_line(&mut io::stdout().lock(), line, self.config.auto_flush)?,
            Target::Stderr => Self::write_line(&mut io::stderr().lock(), line, self.config.auto_flush)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_appender_append() {
        let mut appender = ConsoleAppender::default();
        assert!(appender.append("Test message").is_ok());
        assert!(appender.flush().is_ok());
    }

    #[test]
    fn test_console_appender_stderr() {
        let mut appender = ConsoleAppender::new(ConsoleAppenderConfig {
            target: Target::Stderr,
            auto_flush: false,
        });
        assert_eq!(appender.target(), Target::Stderr);
        assert!(appender.append("Test message").is_ok());
    }

    #[test]
    fn test_console_appender_config_default() {
        let config = ConsoleAppenderConfig::default();
        assert_eq!(config.target, Target::Stdout);
        assert!(config.auto_flush);
    }

    #[test]
    fn test_console_appender_config_from_json5() {
        let config: ConsoleAppenderConfig = json5::from_str(r#"{ target: "stderr" }"#).unwrap();
        assert_eq!(config.target, Target::Stderr);
        assert!(config.auto_flush);

        let appender = ConsoleAppender::from(config);
        assert_eq!(appender.target(), Target::Stderr);
    }
}
