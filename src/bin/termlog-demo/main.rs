// termlog demo - 向标准输出写入各级别的示例日志

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::thread;
use termlog::log::{ConsoleWriter, ConsoleWriterConfig, LogLevel, LogRecord, Target};

#[derive(Parser, Debug)]
#[command(name = "termlog-demo", about = "Write sample records through a ConsoleWriter")]
struct Cli {
    /// 格式模板
    #[arg(short, long, default_value = termlog::log::DEFAULT_FORMAT)]
    format: String,

    /// 队列容量
    #[arg(short = 'b', long, default_value_t = termlog::log::DEFAULT_BUFFER_CAPACITY)]
    buffer_capacity: usize,

    /// 每个生产者写入的轮数（每轮覆盖全部级别）
    #[arg(short = 'n', long, default_value_t = 1)]
    rounds: usize,

    /// 并发生产者数量
    #[arg(short, long, default_value_t = 1)]
    producers: usize,

    /// 关闭颜色
    #[arg(long)]
    no_color: bool,

    /// 为 INFO 着色
    #[arg(long)]
    info_color: bool,

    /// 输出到标准错误
    #[arg(long)]
    stderr: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConsoleWriterConfig {
        format: cli.format,
        buffer_capacity: cli.buffer_capacity,
        target: if cli.stderr { Target::Stderr } else { Target::Stdout },
        colored: !cli.no_color,
        info_colored: cli.info_color,
        ..Default::default()
    };
    let writer = Arc::new(ConsoleWriter::new(config)?);

    let handles: Vec<_> = (0..cli.producers)
        .map(|producer| {
            let writer = Arc::clone(&writer);
            let rounds = cli.rounds;
            thread::spawn(move || {
                for round in 0..rounds {
                    for level in LogLevel::ALL {
                        writer.submit(
                            LogRecord::new(level, format!("{} message, round {}", level, round))
                                .with_category(format!("producer-{}", producer))
                                .with_source(concat!(module_path!(), ":", line!())),
                        );
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            anyhow::bail!("producer thread panicked");
        }
    }

    writer.close()?;
    Ok(())
}
