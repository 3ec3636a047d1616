use crate::log::level::LogLevel;
use colored::Color;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// INFO 级别的备用颜色，默认不启用
pub const INFO_COLOR: Color = Color::Magenta;

/// 进程级共享的默认颜色表，首次使用时构建一次
static DEFAULT_COLOR_TABLE: Lazy<Arc<ColorTable>> = Lazy::new(|| Arc::new(ColorTable::new()));

/// 获取进程级共享的默认颜色表
pub fn default_color_table() -> Arc<ColorTable> {
    Arc::clone(&DEFAULT_COLOR_TABLE)
}

/// 级别颜色表
///
/// 以级别缩写（`TRAC`、`EROR` 等）为键，把整行渲染结果包裹在终端颜色转义序列中。
/// 构建后只读，可在多个写入器之间共享。
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable {
    colors: HashMap<String, Color>,
}

impl ColorTable {
    /// 默认配色：INFO 不着色
    pub fn new() -> Self {
        Self::plain()
            .with_color(LogLevel::Trace.abbrev(), Some(Color::Blue))
            .with_color(LogLevel::Debug.abbrev(), Some(Color::Cyan))
            .with_color(LogLevel::Warn.abbrev(), Some(Color::Yellow))
            .with_color(LogLevel::Error.abbrev(), Some(Color::Red))
            .with_color(LogLevel::Critical.abbrev(), Some(Color::BrightRed))
    }

    /// 空表，所有输出都不着色
    pub fn plain() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// 设置（`Some`）或移除（`None`）某个缩写的颜色
    pub fn with_color(mut self, code: impl Into<String>, color: Option<Color>) -> Self {
        let code = code.into();
        match color {
            Some(color) => {
                self.colors.insert(code, color);
            }
            None => {
                self.colors.remove(&code);
            }
        }
        self
    }

    /// 为 INFO 启用 [`INFO_COLOR`]
    pub fn with_info_color(self) -> Self {
        self.with_color(LogLevel::Info.abbrev(), Some(INFO_COLOR))
    }

    /// 查询某个缩写的颜色
    pub fn get(&self, code: &str) -> Option<Color> {
        self.colors.get(code).copied()
    }

    /// 用 `code` 对应的颜色包裹整段文本；未知缩写原样返回
    pub fn decorate<'a>(&self, code: &str, text: &'a str) -> Cow<'a, str> {
        match self.colors.get(code) {
            Some(color) => Cow::Owned(format!(
                "\x1b[{}m{}\x1b[0m",
                color.to_fg_str(),
                text
            )),
            None => Cow::Borrowed(text),
        }
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new()
    }
}
