use std::time::Duration;
use thiserror::Error;

/// 写入器错误类型
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("writer is closed")]
    Closed,

    #[error("dispatch queue is full")]
    Full,

    #[error("worker did not drain within {0:?}")]
    DrainTimeout(Duration),

    #[error("worker thread panicked")]
    WorkerPanicked,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}
