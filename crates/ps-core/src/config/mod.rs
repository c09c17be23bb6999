//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Absent values stay absent (`None` / empty path). Callers decide what an
//! absent value means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long a screen state keeps its upstream alive after the last
    /// observer detaches, in milliseconds.
    /// 最后一个观察者离开后，屏幕状态保持上游的时长（毫秒）
    pub stop_timeout_ms: Option<i64>,

    /// JSON feed file used to refresh podcasts (empty = no feed file)
    /// 用于刷新播客的 JSON 订阅源文件（空表示无）
    pub feed_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            stop_timeout_ms: toml_value
                .get("screen")
                .and_then(|s| s.get("stop_timeout_ms"))
                .and_then(|v| v.as_integer()),
            feed_path: PathBuf::from(
                toml_value
                    .get("catalog")
                    .and_then(|c| c.get("feed_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/absent values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            stop_timeout_ms: None,
            feed_path: PathBuf::new(),
        }
    }
}
