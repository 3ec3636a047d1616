use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// FileAppender 配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileAppenderConfig {
    /// 日志文件路径
    pub file_path: String,
}

/// 文件输出器
///
/// 以追加方式写入文件，写入经过缓冲，在 flush 时落盘
pub struct FileAppender {
    file: BufWriter<File>,
    config: FileAppenderConfig,
}

impl FileAppender {
    /// 打开（必要时创建）日志文件
    pub fn new(config: FileAppenderConfig) -> Result<Self> {
        let path = PathBuf::from(&config.file_path);

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            file: BufWriter::new(file),
            config,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.file_path
    }
}

impl LogAppender for FileAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}
