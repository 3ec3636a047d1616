use crate::log::formatter::LogFormatter;
use crate::log::log_record::LogRecord;
use std::fmt::Write;

/// 默认格式模板
pub const DEFAULT_FORMAT: &str = "[%T %D] [%C] [%L] (%S) %M";

/// 模板格式化器
///
/// 支持的占位符：
///
/// | 占位符 | 含义 |
/// |--------|------|
/// | `%T` | 时间 `15:04:05` |
/// | `%t` | 时间 `15:04` |
/// | `%D` | 日期 `2006/01/02` |
/// | `%d` | 日期 `01/02/06` |
/// | `%L` | 级别缩写 |
/// | `%C` | 分类，为空时输出 `DEFAULT` |
/// | `%S` | 完整来源 |
/// | `%s` | 短来源（最后一个 `/` 之后的部分） |
/// | `%M` | 消息 |
/// | `%%` | 字面量 `%` |
///
/// 未知占位符原样输出（`%Q` 输出 `%Q`），这一点与 log4go 丢弃未知占位符的行为不同。
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternFormatter;

impl PatternFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for PatternFormatter {
    fn format(&self, pattern: &str, record: &LogRecord) -> String {
        let mut result = String::with_capacity(pattern.len() + record.message.len() + 32);
        let mut chars = pattern.chars();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                result.push(ch);
                continue;
            }

            let Some(verb) = chars.next() else {
                result.push('%');
                break;
            };

            // 写入 String 不会失败
            let _ = match verb {
                'T' => write!(result, "{}", record.created.format("%H:%M:%S")),
                't' => write!(result, "{}", record.created.format("%H:%M")),
                'D' => write!(result, "{}", record.created.format("%Y/%m/%d")),
                'd' => write!(result, "{}", record.created.format("%m/%d/%y")),
                'L' => {
                    result.push_str(record.level.abbrev());
                    Ok(())
                }
                'C' => {
                    if record.category.is_empty() {
                        result.push_str("DEFAULT");
                    } else {
                        result.push_str(&record.category);
                    }
                    Ok(())
                }
                'S' => {
                    result.push_str(&record.source);
                    Ok(())
                }
                's' => {
                    let short = record.source.rsplit('/').next().unwrap_or_default();
                    result.push_str(short);
                    Ok(())
                }
                'M' => {
                    result.push_str(&record.message);
                    Ok(())
                }
                '%' => {
                    result.push('%');
                    Ok(())
                }
                other => {
                    result.push('%');
                    result.push(other);
                    Ok(())
                }
            };
        }

        result
    }
}
