use crate::log::appender::LogAppender;
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

/// 内存输出器
///
/// 克隆出的句柄共享同一块缓冲区：一个交给写入器，另一个用于读取输出
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取目前为止的全部输出
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => buffer.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 按行拆分输出
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl LogAppender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| anyhow!("memory buffer lock poisoned"))?;
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }
}
