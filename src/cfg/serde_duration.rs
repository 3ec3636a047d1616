use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};
use std::time::Duration;

/// Duration 的人性化格式化器
///
/// 配合 `#[serde_as(as = "HumanDur")]` 使用，支持 "250ms"、"1s"、"1m30s" 等格式
pub struct HumanDur;

impl SerializeAs<Duration> for HumanDur {
    fn serialize_as<S>(source: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*source))
    }
}

impl<'de> DeserializeAs<'de, Duration> for HumanDur {
    fn deserialize_as<D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }
}

/// 单位及其对应的纳秒数，按匹配优先级排列（"ms" 必须先于 "m" 和 "s"）
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3_600 * 1_000_000_000),
];

/// 解析时间字符串: "1m30s" -> Duration
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err(anyhow!("空的时间字符串"));
    }

    let mut total = Duration::ZERO;
    let mut rest = s.as_str();
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(anyhow!("期望数字: {}", s));
        }
        let value: f64 = rest[..digits]
            .parse()
            .map_err(|_| anyhow!("无效数字: {}", &rest[..digits]))?;
        rest = &rest[digits..];

        let (unit, nanos) = UNITS
            .iter()
            .find(|(unit, _)| rest.starts_with(unit))
            .ok_or_else(|| anyhow!("缺少或不支持的时间单位: {}", s))?;
        rest = &rest[unit.len()..];

        total += Duration::from_nanos((value * *nanos as f64) as u64);
    }

    Ok(total)
}

/// Duration 格式化为字符串: Duration -> "1m30s" / "250ms" / "500us"
///
/// 不足整毫秒时退回到微秒或纳秒，保证能被 [`parse_duration`] 原样解析回来
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos % 1_000_000 != 0 {
        if nanos % 1000 == 0 {
            return format!("{}us", nanos / 1000);
        }
        return format!("{}ns", nanos);
    }

    let millis = duration.as_millis();
    if millis % 1000 != 0 {
        return format!("{}ms", millis);
    }

    let secs = millis / 1000;
    let mut out = String::new();
    if secs >= 3600 {
        out.push_str(&format!("{}h", secs / 3600));
    }
    if secs % 3600 >= 60 {
        out.push_str(&format!("{}m", secs % 3600 / 60));
    }
    if secs % 60 > 0 {
        out.push_str(&format!("{}s", secs % 60));
    }
    out
}
