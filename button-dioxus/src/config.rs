//! # Config 模块
//!
//! 演示程序配置，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 配置文件 (config.json)
//! 2. 默认值

use std::fs;
use std::path::{Path, PathBuf};

use button_core::{ButtonOptions, StyleTable, ThemeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 演示程序配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 窗口配置
    #[serde(default)]
    pub window: WindowConfig,

    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 主题 JSON 路径（覆盖内置样式表）
    #[serde(default)]
    pub theme_path: Option<PathBuf>,

    /// 交互试验区按钮的初始配置
    #[serde(default = "default_playground")]
    pub playground: ButtonOptions,

    /// 模拟异步操作的时长（毫秒）
    #[serde(default = "default_loading_demo_ms")]
    pub loading_demo_ms: u64,
}

/// 窗口配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// 窗口标题
    #[serde(default = "default_window_title")]
    pub title: String,

    /// 窗口宽度
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// 窗口高度
    #[serde(default = "default_window_height")]
    pub height: u32,
}

// 默认值函数
fn default_log_level() -> String {
    "info".to_string()
}

fn default_playground() -> ButtonOptions {
    ButtonOptions::text("Playground")
}

fn default_loading_demo_ms() -> u64 {
    2000
}

fn default_window_title() -> String {
    "Button Showcase".to_string()
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    900
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: default_log_level(),
            theme_path: None,
            playground: default_playground(),
            loading_demo_ms: default_loading_demo_ms(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl DemoConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并输出警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::from_json_or_default(&content),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "配置文件读取失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 从 JSON 文本解析；失败时返回默认配置
    pub fn from_json_or_default(content: &str) -> Self {
        match serde_json::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "配置文件解析失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::ValidationFailed(
                "窗口尺寸必须大于 0".to_string(),
            ));
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::ValidationFailed(format!(
                "未知的日志级别: {}",
                self.log_level
            )));
        }

        if self.loading_demo_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "loading_demo_ms 必须大于 0".to_string(),
            ));
        }

        if let Some(theme) = &self.theme_path
            && !theme.exists()
        {
            return Err(ConfigError::ValidationFailed(format!(
                "主题文件不存在: {}",
                theme.display()
            )));
        }

        Ok(())
    }

    /// 解析后的日志级别；无法识别时为 INFO
    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// 加载样式表：配置了主题时覆盖在内置表之上
    pub fn load_style_table(&self) -> Result<StyleTable, ConfigError> {
        let Some(path) = &self.theme_path else {
            return Ok(StyleTable::builtin().clone());
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let table = StyleTable::from_json(&content)?;

        let source = path.display().to_string();
        for diagnostic in &table.check(&source).diagnostics {
            tracing::warn!(%diagnostic, "主题检查");
        }
        Ok(table)
    }
}

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(String),

    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),

    /// 主题加载失败
    #[error("主题加载失败: {0}")]
    Theme(#[from] ThemeError),
}
