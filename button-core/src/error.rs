//! # Error 模块
//!
//! 定义 button-core 中使用的错误类型。
//!
//! 渲染路径上的操作不会失败（未知取值降级为默认值），
//! 这里的错误只出现在显式的严格解析与主题加载中。

use thiserror::Error;

/// 解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 枚举字段取值未知
    #[error("字段 '{field}' 的取值 '{value}' 未知，可选值：{expected}")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// 无效的图标引用
    #[error("无效的图标引用 '{value}'：{message}")]
    InvalidGlyph { value: String, message: String },
}

/// 主题加载错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// JSON 解析失败
    #[error("主题 JSON 解析失败: {0}")]
    Json(String),

    /// 主题中的 key 无法识别
    #[error("主题分组 '{group}' 中的 key '{key}' 无法识别")]
    UnknownKey { group: &'static str, key: String },
}

impl From<serde_json::Error> for ThemeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
