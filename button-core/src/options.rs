//! # Options 模块
//!
//! 定义按钮的全部配置项 [`ButtonOptions`] 以及各个枚举字段。
//!
//! ## 设计说明
//!
//! - 所有枚举字段都有默认值，渲染路径上**永不因取值未知而失败**
//! - 严格解析使用 [`FromStr`](std::str::FromStr)，返回 [`ParseError`]
//! - 宽松解析（serde 反序列化走这里）遇到未知取值会降级为默认值并输出警告

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::glyph::{Glyph, IconConfig};

/// 枚举配置项的公共行为
pub trait OptionValue: Copy + Default + PartialEq + 'static {
    /// 字段名（用于诊断输出）
    const FIELD: &'static str;

    /// 全部合法取值
    const ALL: &'static [Self];

    /// 规范名称（同时也是样式表中的 key）
    fn as_str(self) -> &'static str;

    /// 严格解析（不区分大小写，忽略首尾空白）
    fn parse_strict(s: &str) -> Result<Self, ParseError> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == needle)
            .ok_or_else(|| ParseError::UnknownValue {
                field: Self::FIELD,
                value: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// 宽松解析：未知取值降级为默认值
    fn parse_lenient(s: &str) -> Self {
        match Self::parse_strict(s) {
            Ok(v) => v,
            Err(_) => {
                let fallback = Self::default();
                tracing::warn!(
                    field = Self::FIELD,
                    value = %s,
                    fallback = fallback.as_str(),
                    "未知取值，降级为默认值"
                );
                fallback
            }
        }
    }
}

macro_rules! impl_option_value {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as OptionValue>::parse_strict(s)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                <$ty as OptionValue>::parse_lenient(&s)
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> Self {
                v.as_str().to_string()
            }
        }
    };
}

/// 视觉风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
    Success,
    Warning,
    Glass,
    Neon,
    Gradient,
}

impl OptionValue for Variant {
    const FIELD: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Link,
        Self::Destructive,
        Self::Success,
        Self::Warning,
        Self::Glass,
        Self::Neon,
        Self::Gradient,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Destructive => "destructive",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Glass => "glass",
            Self::Neon => "neon",
            Self::Gradient => "gradient",
        }
    }
}

impl_option_value!(Variant);

/// 尺寸
///
/// `icon-*` 是仅图标按钮专用的正方形尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    IconSm,
    IconMd,
    IconLg,
}

impl Size {
    /// 是否是图标专用尺寸
    pub fn is_icon(self) -> bool {
        matches!(self, Self::IconSm | Self::IconMd | Self::IconLg)
    }

    /// 仅图标状态下使用的样式 key
    ///
    /// 已是图标尺寸时原样返回，否则合成 `icon-<size>`（该 key 不一定存在于样式表）。
    pub fn icon_key(self) -> String {
        if self.is_icon() {
            self.as_str().to_string()
        } else {
            format!("icon-{}", self.as_str())
        }
    }
}

impl OptionValue for Size {
    const FIELD: &'static str = "size";
    const ALL: &'static [Self] = &[
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::IconSm,
        Self::IconMd,
        Self::IconLg,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::IconSm => "icon-sm",
            Self::IconMd => "icon-md",
            Self::IconLg => "icon-lg",
        }
    }
}

impl_option_value!(Size);

/// 形状（圆角）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Shape {
    #[default]
    Default,
    Rounded,
    Pill,
    Square,
    Circle,
}

impl OptionValue for Shape {
    const FIELD: &'static str = "shape";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Rounded,
        Self::Pill,
        Self::Square,
        Self::Circle,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rounded => "rounded",
            Self::Pill => "pill",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }
}

impl_option_value!(Shape);

/// 悬停/按下动画
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Animation {
    None,
    Bounce,
    Pulse,
    #[default]
    Scale,
    Slide,
    Glow,
    Shimmer,
}

impl OptionValue for Animation {
    const FIELD: &'static str = "animation";
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Bounce,
        Self::Pulse,
        Self::Scale,
        Self::Slide,
        Self::Glow,
        Self::Shimmer,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bounce => "bounce",
            Self::Pulse => "pulse",
            Self::Scale => "scale",
            Self::Slide => "slide",
            Self::Glow => "glow",
            Self::Shimmer => "shimmer",
        }
    }
}

impl_option_value!(Animation);

/// 图标位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
    /// 仅图标，不显示文本
    Only,
}

impl OptionValue for IconPosition {
    const FIELD: &'static str = "icon.position";
    const ALL: &'static [Self] = &[Self::Left, Self::Right, Self::Only];

    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Only => "only",
        }
    }
}

impl_option_value!(IconPosition);

/// `<button type=...>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl OptionValue for ButtonType {
    const FIELD: &'static str = "type";
    const ALL: &'static [Self] = &[Self::Button, Self::Submit, Self::Reset];

    fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

impl_option_value!(ButtonType);

/// 按钮内容
///
/// 只有纯文本内容可以作为无障碍标签的后备值。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonContent {
    /// 无内容
    #[default]
    None,
    /// 纯文本
    Text(String),
    /// 非文本子元素（无法推导标签）
    Rich,
}

impl ButtonContent {
    /// 是否有可显示的内容（空字符串视为无内容）
    pub fn is_present(&self) -> bool {
        match self {
            Self::None => false,
            Self::Text(s) => !s.is_empty(),
            Self::Rich => true,
        }
    }

    /// 纯文本内容
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ButtonContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ButtonContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// 按钮配置（单次渲染内不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub variant: Variant,
    pub size: Size,
    pub shape: Shape,
    pub animation: Animation,
    /// CSS 动画时长，如 `"200ms"`
    pub animation_duration: String,

    pub loading: bool,
    pub disabled: bool,

    /// 结构化图标配置（优先于 `left_icon` / `right_icon`）
    pub icon: Option<IconConfig>,
    /// 左侧图标简写
    pub left_icon: Option<Glyph>,
    /// 右侧图标简写
    pub right_icon: Option<Glyph>,

    /// 毛玻璃效果（覆盖 variant）
    pub glass: bool,
    pub glow: bool,
    pub shadow: bool,
    /// 原始 CSS background 值
    pub gradient: Option<String>,

    pub ripple_enabled: bool,
    pub haptic_enabled: bool,

    /// 调用方追加的样式 token（最后合并，冲突时胜出）
    pub caller_classes: Option<String>,
    /// 调用方追加的内联样式
    pub caller_style: Option<String>,
    pub aria_label: Option<String>,
    pub button_type: ButtonType,

    pub content: ButtonContent,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            size: Size::default(),
            shape: Shape::default(),
            animation: Animation::default(),
            animation_duration: default_animation_duration(),
            loading: false,
            disabled: false,
            icon: None,
            left_icon: None,
            right_icon: None,
            glass: false,
            glow: false,
            shadow: true,
            gradient: None,
            ripple_enabled: true,
            haptic_enabled: false,
            caller_classes: None,
            caller_style: None,
            aria_label: None,
            button_type: ButtonType::default(),
            content: ButtonContent::None,
        }
    }
}

fn default_animation_duration() -> String {
    "200ms".to_string()
}

impl ButtonOptions {
    /// 以文本内容创建
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: ButtonContent::Text(content.into()),
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_icon(mut self, icon: IconConfig) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_left_icon(mut self, glyph: impl Into<Glyph>) -> Self {
        self.left_icon = Some(glyph.into());
        self
    }

    pub fn with_right_icon(mut self, glyph: impl Into<Glyph>) -> Self {
        self.right_icon = Some(glyph.into());
        self
    }

    pub fn with_glass(mut self, glass: bool) -> Self {
        self.glass = glass;
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_gradient(mut self, gradient: impl Into<String>) -> Self {
        self.gradient = Some(gradient.into());
        self
    }

    pub fn with_ripple(mut self, enabled: bool) -> Self {
        self.ripple_enabled = enabled;
        self
    }

    pub fn with_haptic(mut self, enabled: bool) -> Self {
        self.haptic_enabled = enabled;
        self
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.caller_classes = Some(classes.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.caller_style = Some(style.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<ButtonContent>) -> Self {
        self.content = content.into();
        self
    }

    /// 交互是否被阻断（禁用或加载中）
    pub fn is_blocked(&self) -> bool {
        self.disabled || self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_follow_component_defaults() {
        let opts = ButtonOptions::default();
        assert_eq!(opts.variant, Variant::Primary);
        assert_eq!(opts.size, Size::Md);
        assert_eq!(opts.shape, Shape::Default);
        assert_eq!(opts.animation, Animation::Scale);
        assert_eq!(opts.animation_duration, "200ms");
        assert!(opts.shadow);
        assert!(opts.ripple_enabled);
        assert!(!opts.haptic_enabled);
        assert!(!opts.is_blocked());
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(Variant::from_str("neon"), Ok(Variant::Neon));
        assert_eq!(Variant::from_str("  Destructive "), Ok(Variant::Destructive));
        assert_eq!(Size::from_str("icon-lg"), Ok(Size::IconLg));
        assert_eq!(Animation::from_str("none"), Ok(Animation::None));

        let err = Shape::from_str("hexagon").unwrap_err();
        match err {
            ParseError::UnknownValue { field, value, .. } => {
                assert_eq!(field, "shape");
                assert_eq!(value, "hexagon");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_parse_falls_back_to_default() {
        assert_eq!(Variant::parse_lenient("plaid"), Variant::Primary);
        assert_eq!(Size::parse_lenient("xxl"), Size::Md);
        assert_eq!(Shape::parse_lenient(""), Shape::Default);
        assert_eq!(Animation::parse_lenient("wobble"), Animation::Scale);
    }

    #[test]
    fn test_icon_key() {
        assert_eq!(Size::Md.icon_key(), "icon-md");
        assert_eq!(Size::Xl.icon_key(), "icon-xl");
        assert_eq!(Size::IconSm.icon_key(), "icon-sm");
        assert!(Size::IconLg.is_icon());
        assert!(!Size::Lg.is_icon());
    }

    #[test]
    fn test_content_presence() {
        assert!(!ButtonContent::None.is_present());
        assert!(!ButtonContent::Text(String::new()).is_present());
        assert!(ButtonContent::from("Save").is_present());
        assert!(ButtonContent::Rich.is_present());

        assert_eq!(ButtonContent::from("Save").text(), Some("Save"));
        assert_eq!(ButtonContent::Rich.text(), None);
    }

    #[test]
    fn test_deserialize_unknown_values_fall_back() {
        let json = r#"{
            "variant": "sparkly",
            "size": "lg",
            "shape": "pill",
            "animation": "bounce",
            "content": { "text": "Go" }
        }"#;
        let opts: ButtonOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.variant, Variant::Primary);
        assert_eq!(opts.size, Size::Lg);
        assert_eq!(opts.shape, Shape::Pill);
        assert_eq!(opts.animation, Animation::Bounce);
        assert_eq!(opts.content.text(), Some("Go"));
        // 未给出的字段使用默认值
        assert!(opts.shadow);
    }

    #[test]
    fn test_serialize_uses_canonical_names() {
        let opts = ButtonOptions::text("Ok").with_size(Size::IconMd);
        let value = serde_json::to_value(&opts).unwrap();
        assert_eq!(value["size"], "icon-md");
        assert_eq!(value["variant"], "primary");
        assert_eq!(value["button_type"], "button");
    }
}
