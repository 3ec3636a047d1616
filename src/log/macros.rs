/// 日志宏模块
///
/// 构造带来源信息（`模块路径:行号`）的 LogRecord 并提交给写入器
///
/// # 示例
///
/// ```ignore
/// use termlog::log::ConsoleWriter;
///
/// let writer = ConsoleWriter::new(Default::default())?;
///
/// termlog::info!(writer, "application started");
/// termlog::warn!(writer, "retrying in {}ms", 200);
/// ```

/// 以指定级别记录日志
///
/// ```ignore
/// log!(writer, LogLevel::Info, "user {} logged in", user_id);
/// ```
#[macro_export]
macro_rules! log {
    ($writer:expr, $level:expr, $($arg:tt)+) => {
        $writer.submit(
            $crate::log::LogRecord::new($level, format!($($arg)+))
                .with_source(concat!(module_path!(), ":", line!()))
        )
    };
}

/// 记录 TRACE 级别日志
#[macro_export]
macro_rules! trace {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::log::LogLevel::Trace, $($arg)+)
    };
}

/// 记录 DEBUG 级别日志
#[macro_export]
macro_rules! debug {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::log::LogLevel::Debug, $($arg)+)
    };
}

/// 记录 INFO 级别日志
#[macro_export]
macro_rules! info {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::log::LogLevel::Info, $($arg)+)
    };
}

/// 记录 WARN 级别日志
#[macro_export]
macro_rules! warn {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::log::LogLevel::Warn, $($arg)+)
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! error {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::log::LogLevel::Error, $($arg)+)
    };
}

/// 记录 CRITICAL 级别日志
#[macro_export]
macro_rules! critical {
    ($writer:expr, $($arg:tt)+) => {
        $crate::log!($writer, $crate::log::LogLevel::Critical, $($arg)+)
    };
}
