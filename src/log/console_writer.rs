use crate::log::appender::{ConsoleAppender, ConsoleAppenderConfig, LogAppender};
use crate::log::color::{default_color_table, ColorTable};
use crate::log::config::{ConsoleWriterConfig, DEFAULT_BUFFER_CAPACITY, DEFAULT_CLOSE_TIMEOUT};
use crate::log::error::WriterError;
use crate::log::formatter::{LogFormatter, PatternFormatter, DEFAULT_FORMAT};
use crate::log::log_record::LogRecord;
use arc_swap::{ArcSwap, ArcSwapOption};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// 异步终端写入器
///
/// 生产者通过 [`submit`](Self::submit) 把日志记录放入有界队列，单个后台线程按 FIFO
/// 顺序取出记录、渲染、按级别着色并写入输出器。同一写入器的输出永远不会在行内交错。
///
/// # 示例
///
/// ```rust
/// use termlog::log::{ConsoleWriter, LogLevel, LogRecord, MemoryAppender};
///
/// let output = MemoryAppender::new();
/// let writer = ConsoleWriter::builder()
///     .appender(output.clone())
///     .format("[%L] %M")
///     .build()
///     .unwrap();
///
/// writer.submit(LogRecord::new(LogLevel::Info, "hello"));
/// writer.close().unwrap();
///
/// assert_eq!(output.lines(), vec!["[INFO] hello"]);
/// ```
pub struct ConsoleWriter {
    /// 队列发送端，close 后为 None
    sender: ArcSwapOption<Sender<LogRecord>>,
    /// 当前格式模板，与后台线程共享
    format: Arc<ArcSwap<String>>,
    /// 后台线程退出时断开，作为排空完成的确认
    drained: Receiver<()>,
    worker: Mutex<Option<JoinHandle<()>>>,
    close_timeout: Duration,
}

impl ConsoleWriter {
    /// 按配置创建输出到终端的写入器
    pub fn new(config: ConsoleWriterConfig) -> Result<Self, WriterError> {
        let appender = ConsoleAppender::new(ConsoleAppenderConfig {
            target: config.target,
            ..Default::default()
        });

        Self::builder()
            .appender(appender)
            .color_table(config.color_table())
            .buffer_capacity(config.buffer_capacity)
            .format(config.format)
            .close_timeout(config.close_timeout)
            .build()
    }

    /// 使用指定输出器和队列容量创建写入器，其余取默认值
    pub fn with_appender(
        appender: impl LogAppender + 'static,
        buffer_capacity: usize,
    ) -> Result<Self, WriterError> {
        Self::builder()
            .appender(appender)
            .buffer_capacity(buffer_capacity)
            .build()
    }

    pub fn builder() -> ConsoleWriterBuilder {
        ConsoleWriterBuilder::default()
    }

    /// 替换格式模板
    ///
    /// 可以在任意时刻、从任意线程调用。模板以原子方式整体替换，
    /// 替换之后才被渲染的记录（包括已在队列中的）使用新模板。
    pub fn set_format(&self, format: impl Into<String>) {
        self.format.store(Arc::new(format.into()));
    }

    /// 获取当前格式模板
    pub fn format(&self) -> String {
        self.format.load_full().to_string()
    }

    /// 提交一条记录，队列已满时阻塞直到后台线程腾出空间
    ///
    /// 写入器关闭后提交的记录会被丢弃。
    pub fn submit(&self, record: LogRecord) {
        let Some(sender) = self.sender.load_full() else {
            tracing::debug!(level = %record.level, "console writer closed, record dropped");
            return;
        };

        // 发送端只在 close 之后才会全部释放，这里失败意味着后台线程已经退出
        if sender.send(record).is_err() {
            tracing::debug!("console writer worker gone, record dropped");
        }
    }

    /// 非阻塞提交，队列已满或已关闭时返回错误
    pub fn try_submit(&self, record: LogRecord) -> Result<(), WriterError> {
        let sender = self.sender.load_full().ok_or(WriterError::Closed)?;
        sender.try_send(record).map_err(|err| match err {
            TrySendError::Full(_) => WriterError::Full,
            TrySendError::Disconnected(_) => WriterError::Closed,
        })
    }

    /// 是否已经关闭
    pub fn is_closed(&self) -> bool {
        self.sender.load().is_none()
    }

    /// 关闭写入器
    ///
    /// 关闭队列后等待后台线程确认排空，等待时间不超过 `close_timeout`。
    /// 返回 `Ok` 时，关闭前入队的所有记录都已写出并刷新。可重复调用。
    pub fn close(&self) -> Result<(), WriterError> {
        // 释放自身持有的发送端；正在阻塞发送的生产者在完成后释放各自的克隆
        drop(self.sender.swap(None));

        match self.drained.recv_timeout(self.close_timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(timeout = ?self.close_timeout, "console writer did not drain before timeout");
                return Err(WriterError::DrainTimeout(self.close_timeout));
            }
        }

        let handle = match self.worker.lock() {
            Ok(mut worker) => worker.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match handle {
            Some(handle) => handle.join().map_err(|_| WriterError::WorkerPanicked),
            None => Ok(()),
        }
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// ConsoleWriter 构建器
pub struct ConsoleWriterBuilder {
    appender: Option<Box<dyn LogAppender>>,
    formatter: Arc<dyn LogFormatter>,
    color_table: Option<Arc<ColorTable>>,
    buffer_capacity: usize,
    format: String,
    close_timeout: Duration,
}

impl Default for ConsoleWriterBuilder {
    fn default() -> Self {
        Self {
            appender: None,
            formatter: Arc::new(PatternFormatter::new()),
            color_table: None,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            format: DEFAULT_FORMAT.to_string(),
            close_timeout: DEFAULT_CLOSE_TIMEOUT,
        }
    }
}

impl ConsoleWriterBuilder {
    /// 输出器，默认输出到标准输出
    pub fn appender(mut self, appender: impl LogAppender + 'static) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// 渲染器，默认 [`PatternFormatter`]
    pub fn formatter(mut self, formatter: Arc<dyn LogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// 颜色表，默认使用进程级共享实例
    pub fn color_table(mut self, color_table: Arc<ColorTable>) -> Self {
        self.color_table = Some(color_table);
        self
    }

    pub fn buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn close_timeout(mut self, close_timeout: Duration) -> Self {
        self.close_timeout = close_timeout;
        self
    }

    /// 创建写入器并立即启动后台线程
    pub fn build(self) -> Result<ConsoleWriter, WriterError> {
        let (sender, receiver) = channel::bounded(self.buffer_capacity);
        let (drained_tx, drained_rx) = channel::bounded(0);
        let format = Arc::new(ArcSwap::from_pointee(self.format));

        let worker = Worker {
            receiver,
            appender: self
                .appender
                .unwrap_or_else(|| Box::new(ConsoleAppender::default()) as Box<dyn LogAppender>),
            formatter: self.formatter,
            color_table: self.color_table.unwrap_or_else(default_color_table),
            format: Arc::clone(&format),
            _drained: drained_tx,
        };

        let handle = thread::Builder::new()
            .name("console-writer".to_string())
            .spawn(move || worker.run())?;

        Ok(ConsoleWriter {
            sender: ArcSwapOption::from_pointee(sender),
            format,
            drained: drained_rx,
            worker: Mutex::new(Some(handle)),
            close_timeout: self.close_timeout,
        })
    }
}

/// 后台线程持有的全部状态
struct Worker {
    receiver: Receiver<LogRecord>,
    appender: Box<dyn LogAppender>,
    formatter: Arc<dyn LogFormatter>,
    color_table: Arc<ColorTable>,
    format: Arc<ArcSwap<String>>,
    /// 随 Worker 一起释放，包括 panic 展开时
    _drained: Sender<()>,
}

impl Worker {
    /// 队列关闭且排空后返回
    fn run(mut self) {
        for record in self.receiver.iter() {
            // 空模板不产生输出；空消息仍然输出一行
            let format = self.format.load();
            if format.is_empty() {
                continue;
            }

            let line = self.formatter.format(&format, &record);
            let line = self.color_table.decorate(record.level.abbrev(), &line);
            if let Err(err) = self.appender.append(&line) {
                tracing::warn!(error = %err, "console writer failed to append record");
            }
        }

        if let Err(err) = self.appender.flush() {
            tracing::warn!(error = %err, "console writer failed to flush appender");
        }
    }
}
