use crate::log::appender::LogAppender;
use anyhow::Result;
use std::io::Write;

/// 通用字节流输出器
///
/// 包装任意 `io::Write`，例如 `Vec<u8>`、`TcpStream` 或 `io::sink()`
pub struct WriterAppender<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 取回底层 writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> LogAppender for WriterAppender<W> {
    fn append(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
