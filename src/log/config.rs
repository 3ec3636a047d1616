use crate::cfg::HumanDur;
use crate::log::appender::Target;
use crate::log::color::{default_color_table, ColorTable};
use crate::log::formatter::DEFAULT_FORMAT;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use smart_default::SmartDefault;
use std::sync::Arc;
use std::time::Duration;

/// 默认队列容量
pub const DEFAULT_BUFFER_CAPACITY: usize = 32;

/// 默认关闭等待上限
pub const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

/// ConsoleWriter 配置
///
/// ```rust
/// use termlog::log::ConsoleWriterConfig;
///
/// let config = ConsoleWriterConfig::from_json(r#"
///     {
///         format: "[%L] %M",
///         buffer_capacity: 128,
///         target: "stderr",
///         close_timeout: "500ms",
///     }
/// "#).unwrap();
/// assert_eq!(config.buffer_capacity, 128);
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleWriterConfig {
    /// 格式模板
    #[default(DEFAULT_FORMAT.to_string())]
    pub format: String,

    /// 队列容量，0 表示同步交接
    #[default(DEFAULT_BUFFER_CAPACITY)]
    pub buffer_capacity: usize,

    /// 输出目标
    pub target: Target,

    /// 是否按级别着色
    #[default = true]
    pub colored: bool,

    /// 是否为 INFO 着色
    #[default = false]
    pub info_colored: bool,

    /// close 等待后台线程排空队列的上限
    #[default(DEFAULT_CLOSE_TIMEOUT)]
    #[serde_as(as = "HumanDur")]
    pub close_timeout: Duration,
}

impl ConsoleWriterConfig {
    /// 从 JSON 字符串创建配置（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建配置
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建配置
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 按配置选择颜色表；默认配色直接复用进程级共享实例
    pub fn color_table(&self) -> Arc<ColorTable> {
        match (self.colored, self.info_colored) {
            (false, _) => Arc::new(ColorTable::plain()),
            (true, false) => default_color_table(),
            (true, true) => Arc::new(ColorTable::new().with_info_color()),
        }
    }
}
