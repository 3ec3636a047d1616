use anyhow::Result;

/// 日志输出器 trait
///
/// 负责把已经渲染、着色完成的一行日志写入目标介质。
/// 输出器由写入器的后台线程独占，因此方法接收 `&mut self`。
pub trait LogAppender: Send {
    /// 输出一行日志（实现负责追加换行符）
    fn append(&mut self, line: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<A: LogAppender + ?Sized> LogAppender for Box<A> {
    fn append(&mut self, line: &str) -> Result<()> {
        (**self).append(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
