//! ConsoleWriter 的集成测试

use anyhow::Result;
use chrono::{Local, TimeZone};
use crossbeam::channel::{self, Receiver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use termlog::log::{
    ColorTable, ConsoleWriter, FileAppender, FileAppenderConfig, LogAppender, LogLevel, LogRecord,
    MemoryAppender, WriterAppender,
};

// ============================================================================
// 辅助类型
// ============================================================================

/// 每写一行都要先从 gate 取得许可，用来模拟卡住的终端
struct GatedAppender {
    gate: Receiver<()>,
    output: MemoryAppender,
}

impl LogAppender for GatedAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let _ = self.gate.recv();
        self.output.append(line)
    }
}

fn plain_writer(output: &MemoryAppender, capacity: usize, format: &str) -> ConsoleWriter {
    ConsoleWriter::builder()
        .appender(output.clone())
        .color_table(Arc::new(ColorTable::plain()))
        .buffer_capacity(capacity)
        .format(format)
        .build()
        .unwrap()
}

// ============================================================================
// 测试用例
// ============================================================================

#[test]
fn test_capacity_two_scenario() {
    let output = MemoryAppender::new();
    let created = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let writer = ConsoleWriter::with_appender(output.clone(), 2).unwrap();

    for (level, message) in [
        (LogLevel::Info, "a"),
        (LogLevel::Error, "b"),
        (LogLevel::Warn, "c"),
    ] {
        writer.submit(
            LogRecord::new(level, message)
                .with_source("main.rs:1")
                .with_created(created),
        );
    }
    writer.close().unwrap();

    assert_eq!(
        output.lines(),
        vec![
            "[03:04:05 2024/01/02] [DEFAULT] [INFO] (main.rs:1) a",
            "\x1b[31m[03:04:05 2024/01/02] [DEFAULT] [EROR] (main.rs:1) b\x1b[0m",
            "\x1b[33m[03:04:05 2024/01/02] [DEFAULT] [WARN] (main.rs:1) c\x1b[0m",
        ]
    );
}

#[test]
fn test_single_producer_order() {
    let output = MemoryAppender::new();
    let writer = plain_writer(&output, 4, "%M");

    for i in 0..1000 {
        writer.submit(LogRecord::new(LogLevel::ALL[i % 6], i.to_string()));
    }
    writer.close().unwrap();

    let expected: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
    assert_eq!(output.lines(), expected);
}

#[test]
fn test_full_queue_blocks_producer_without_dropping() {
    let (gate_tx, gate_rx) = channel::unbounded();
    let output = MemoryAppender::new();
    let writer = Arc::new(
        ConsoleWriter::builder()
            .appender(GatedAppender {
                gate: gate_rx,
                output: output.clone(),
            })
            .buffer_capacity(2)
            .format("%M")
            .build()
            .unwrap(),
    );

    let submitted = Arc::new(AtomicUsize::new(0));
    let producer = {
        let writer = Arc::clone(&writer);
        let submitted = Arc::clone(&submitted);
        thread::spawn(move || {
            for i in 0..6 {
                writer.submit(LogRecord::new(LogLevel::Info, i.to_string()));
                submitted.fetch_add(1, Ordering::SeqCst);
            }
        })
    };

    // 一条在后台线程手中，两条在队列里，第四条阻塞
    let deadline = Instant::now() + Duration::from_secs(5);
    while submitted.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(submitted.load(Ordering::SeqCst), 3);

    thread::sleep(Duration::from_millis(50));
    assert_eq!(submitted.load(Ordering::SeqCst), 3);
    assert!(output.contents().is_empty());

    for _ in 0..6 {
        gate_tx.send(()).unwrap();
    }
    producer.join().unwrap();
    writer.close().unwrap();

    assert_eq!(submitted.load(Ordering::SeqCst), 6);
    assert_eq!(output.lines(), vec!["0", "1", "2", "3", "4", "5"]);
}

#[test]
fn test_close_delivers_everything_enqueued_before_close() {
    let output = MemoryAppender::new();
    let writer = plain_writer(&output, 256, "%M");

    for i in 0..200 {
        writer.submit(LogRecord::new(LogLevel::Debug, i.to_string()));
    }
    writer.close().unwrap();

    assert_eq!(output.lines().len(), 200);
    writer.submit(LogRecord::new(LogLevel::Debug, "after close"));
    assert_eq!(output.lines().len(), 200);
}

#[test]
fn test_multiple_producers_keep_per_producer_order() {
    let output = MemoryAppender::new();
    let writer = Arc::new(plain_writer(&output, 8, "%C %M"));

    let producers: Vec<_> = (0..4)
        .map(|p| {
            let writer = Arc::clone(&writer);
            thread::spawn(move || {
                for i in 0..250 {
                    writer.submit(
                        LogRecord::new(LogLevel::Info, i.to_string())
                            .with_category(format!("p{}", p)),
                    );
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }
    writer.close().unwrap();

    let mut per_producer: HashMap<String, Vec<usize>> = HashMap::new();
    for line in output.lines() {
        let (producer, seq) = line.split_once(' ').unwrap();
        per_producer
            .entry(producer.to_string())
            .or_default()
            .push(seq.parse().unwrap());
    }

    assert_eq!(per_producer.len(), 4);
    for seqs in per_producer.values() {
        assert_eq!(*seqs, (0..250).collect::<Vec<_>>());
    }
}

#[test]
fn test_two_writers_do_not_interfere() {
    let first = MemoryAppender::new();
    let second = MemoryAppender::new();
    let writer_a = Arc::new(ConsoleWriter::with_appender(first.clone(), 4).unwrap());
    let writer_b = Arc::new(ConsoleWriter::with_appender(second.clone(), 4).unwrap());
    writer_a.set_format("A %M");
    writer_b.set_format("B %M");

    let handles: Vec<_> = [Arc::clone(&writer_a), Arc::clone(&writer_b)]
        .into_iter()
        .map(|writer| {
            thread::spawn(move || {
                for i in 0..300 {
                    writer.submit(LogRecord::new(LogLevel::ALL[i % 6], i.to_string()));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    writer_a.close().unwrap();
    writer_b.close().unwrap();

    let strip = |line: &str| {
        line.trim_start_matches(|c: char| c != 'A' && c != 'B')
            .trim_end_matches("\x1b[0m")
            .to_string()
    };
    let a: Vec<String> = first.lines().iter().map(|l| strip(l)).collect();
    let b: Vec<String> = second.lines().iter().map(|l| strip(l)).collect();

    assert_eq!(a, (0..300).map(|i| format!("A {}", i)).collect::<Vec<_>>());
    assert_eq!(b, (0..300).map(|i| format!("B {}", i)).collect::<Vec<_>>());
}

#[test]
fn test_level_without_color_entry_is_written_plain() {
    let output = MemoryAppender::new();
    let writer = ConsoleWriter::builder()
        .appender(output.clone())
        .color_table(Arc::new(ColorTable::new().with_color("EROR", None)))
        .format("%L %M")
        .build()
        .unwrap();

    writer.submit(LogRecord::new(LogLevel::Error, "uncolored"));
    writer.submit(LogRecord::new(LogLevel::Critical, "colored"));
    writer.close().unwrap();

    assert_eq!(
        output.lines(),
        vec!["EROR uncolored", "\x1b[91mCRIT colored\x1b[0m"]
    );
}

#[test]
fn test_writer_appender_byte_stream() {
    #[derive(Clone, Default)]
    struct SharedBytes(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBytes {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let bytes = SharedBytes::default();
    let writer = ConsoleWriter::with_appender(WriterAppender::new(bytes.clone()), 1).unwrap();
    writer.set_format("%L|%M");
    writer.submit(LogRecord::new(LogLevel::Trace, "t"));
    writer.submit(LogRecord::new(LogLevel::Info, "i"));
    writer.close().unwrap();

    let text = String::from_utf8(bytes.0.lock().unwrap().clone()).unwrap();
    assert_eq!(text, "\x1b[34mTRAC|t\x1b[0m\nINFO|i\n");
}

#[test]
fn test_file_appender_flushed_on_close() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let log_path = temp_dir.path().join("app.log");
    let appender = FileAppender::new(FileAppenderConfig {
        file_path: log_path.to_string_lossy().to_string(),
    })?;

    let writer = ConsoleWriter::builder()
        .appender(appender)
        .color_table(Arc::new(ColorTable::plain()))
        .format("[%L] %M")
        .build()?;
    writer.submit(LogRecord::new(LogLevel::Warn, "disk almost full"));
    writer.close()?;

    assert_eq!(std::fs::read_to_string(&log_path)?, "[WARN] disk almost full\n");
    Ok(())
}

#[test]
fn test_shared_default_color_table_across_writers() {
    let outputs: Vec<MemoryAppender> = (0..3).map(|_| MemoryAppender::new()).collect();
    let writers: Vec<ConsoleWriter> = outputs
        .iter()
        .map(|output| {
            ConsoleWriter::builder()
                .appender(output.clone())
                .format("%M")
                .build()
                .unwrap()
        })
        .collect();

    for writer in &writers {
        writer.submit(LogRecord::new(LogLevel::Debug, "d"));
        writer.close().unwrap();
    }
    for output in &outputs {
        assert_eq!(output.lines(), vec!["\x1b[36md\x1b[0m"]);
    }
}
