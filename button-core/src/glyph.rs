//! # Glyph 模块
//!
//! 图标的三种可互换表示，以及图标解析规则。
//!
//! ## 图标优先级
//!
//! ```text
//! loading（强制 spinner） > icon（结构化） > left_icon > right_icon > 无
//! ```
//!
//! 预构建图标（[`PrebuiltGlyph`]）通过 [`GlyphCapabilities`] 声明哪些属性可被覆盖，
//! 解析时只覆盖声明为可设置的尺寸/class，其余属性保持原样。

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::merge::merge_classes;
use crate::options::{ButtonOptions, IconPosition};

/// loading 状态使用的 spinner 图标名
pub const SPINNER_GLYPH: &str = "loader-2";

/// spinner 图标的 class
pub const SPINNER_CLASS: &str = "animate-spin";

/// 所有图标都会带上的 class
pub const ICON_BASE_CLASS: &str = "flex-shrink-0";

/// 未指定尺寸时的图标尺寸（px）
pub const DEFAULT_ICON_SIZE: u32 = 16;

/// 图标引用（图标注册表中的名称）
///
/// 从 JSON 反序列化时经过 [`GlyphRef::parse`] 校验。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlyphRef(String);

impl GlyphRef {
    /// 直接创建，不做校验
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 校验后创建：非空，仅允许小写字母、数字与 `-`
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        if name.is_empty() {
            return Err(ParseError::InvalidGlyph {
                value: name.to_string(),
                message: "名称为空".to_string(),
            });
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(ParseError::InvalidGlyph {
                value: name.to_string(),
                message: format!("包含非法字符 '{c}'"),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// spinner 图标
    pub fn spinner() -> Self {
        Self(SPINNER_GLYPH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GlyphRef {
    type Error = ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

impl From<GlyphRef> for String {
    fn from(glyph: GlyphRef) -> Self {
        glyph.0
    }
}

impl std::fmt::Display for GlyphRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 预构建图标声明的可设置属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphCapabilities {
    pub supports_sizing: bool,
    pub supports_class_name: bool,
}

impl GlyphCapabilities {
    /// 不可覆盖任何属性
    pub const NONE: Self = Self {
        supports_sizing: false,
        supports_class_name: false,
    };

    /// 尺寸与 class 均可覆盖
    pub const ALL: Self = Self {
        supports_sizing: true,
        supports_class_name: true,
    };
}

/// 预构建图标实例
///
/// 自带尺寸与 class；按钮只会覆盖 `capabilities` 中声明可设置的属性。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrebuiltGlyph {
    pub glyph: GlyphRef,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub capabilities: GlyphCapabilities,
}

impl PrebuiltGlyph {
    pub fn new(glyph: GlyphRef) -> Self {
        Self {
            glyph,
            size: None,
            class_name: None,
            capabilities: GlyphCapabilities::NONE,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_capabilities(mut self, capabilities: GlyphCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

/// 图标的三种表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// 组件引用：按解析出的尺寸/class 新建
    Component(GlyphRef),
    /// 预构建实例
    Prebuilt(PrebuiltGlyph),
    /// 空图标
    None,
}

impl Glyph {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<GlyphRef> for Glyph {
    fn from(r: GlyphRef) -> Self {
        Self::Component(r)
    }
}

impl From<&str> for Glyph {
    fn from(name: &str) -> Self {
        Self::Component(GlyphRef::new(name))
    }
}

impl From<PrebuiltGlyph> for Glyph {
    fn from(p: PrebuiltGlyph) -> Self {
        Self::Prebuilt(p)
    }
}

/// 结构化图标配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    pub glyph: Glyph,
    /// 未指定时按 `left` 处理
    #[serde(default)]
    pub position: Option<IconPosition>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl IconConfig {
    pub fn new(glyph: impl Into<Glyph>) -> Self {
        Self {
            glyph: glyph.into(),
            position: None,
            size: None,
            class_name: None,
        }
    }

    pub fn with_position(mut self, position: IconPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// 解析后的图标配置（派生值，不存储）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    pub glyph: Glyph,
    pub position: IconPosition,
    pub size: u32,
    pub class_name: Option<String>,
}

/// 交给图标渲染子系统的最终参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRender {
    pub glyph: GlyphRef,
    pub size: Option<u32>,
    pub class_name: Option<String>,
}

impl ResolvedIcon {
    /// 按优先级解析图标
    pub fn resolve(options: &ButtonOptions) -> Option<Self> {
        let left = options.left_icon.as_ref().filter(|g| !g.is_none());
        let right = options.right_icon.as_ref().filter(|g| !g.is_none());

        if options.loading {
            let position = options
                .icon
                .as_ref()
                .and_then(|icon| icon.position)
                .unwrap_or(if left.is_some() {
                    IconPosition::Left
                } else if right.is_some() {
                    IconPosition::Right
                } else {
                    IconPosition::Only
                });
            return Some(Self {
                glyph: Glyph::Component(GlyphRef::spinner()),
                position,
                size: DEFAULT_ICON_SIZE,
                class_name: Some(SPINNER_CLASS.to_string()),
            });
        }

        if let Some(icon) = &options.icon {
            return Some(Self {
                glyph: icon.glyph.clone(),
                position: icon.position.unwrap_or_default(),
                size: icon.size.unwrap_or(DEFAULT_ICON_SIZE),
                class_name: icon.class_name.clone(),
            });
        }

        let (glyph, position) = match (left, right) {
            (Some(g), _) => (g, IconPosition::Left),
            (None, Some(g)) => (g, IconPosition::Right),
            (None, None) => return None,
        };
        Some(Self {
            glyph: glyph.clone(),
            position,
            size: DEFAULT_ICON_SIZE,
            class_name: None,
        })
    }

    /// 计算渲染参数；空图标返回 `None`
    pub fn render(&self) -> Option<GlyphRender> {
        let merged_class = || merge_classes([ICON_BASE_CLASS, self.class_name.as_deref().unwrap_or("")]);

        match &self.glyph {
            Glyph::None => None,
            Glyph::Component(glyph) => Some(GlyphRender {
                glyph: glyph.clone(),
                size: Some(self.size),
                class_name: Some(merged_class()),
            }),
            Glyph::Prebuilt(prebuilt) => {
                let caps = prebuilt.capabilities;
                Some(GlyphRender {
                    glyph: prebuilt.glyph.clone(),
                    size: if caps.supports_sizing {
                        Some(self.size)
                    } else {
                        prebuilt.size
                    },
                    class_name: if caps.supports_class_name {
                        Some(merged_class())
                    } else {
                        prebuilt.class_name.clone()
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play() -> Glyph {
        Glyph::from("play")
    }

    #[test]
    fn test_glyph_ref_parse() {
        assert!(GlyphRef::parse("chevron-right").is_ok());
        assert!(GlyphRef::parse("trash-2").is_ok());
        assert!(GlyphRef::parse("").is_err());
        assert!(GlyphRef::parse("Play").is_err());
        assert!(GlyphRef::parse("a b").is_err());
    }

    #[test]
    fn test_glyph_json_is_validated() {
        let glyph: Glyph = serde_json::from_str(r#"{ "component": "sparkles" }"#).unwrap();
        assert_eq!(glyph, Glyph::from("sparkles"));

        let err = serde_json::from_str::<Glyph>(r#"{ "component": "Sparkles!" }"#).unwrap_err();
        assert!(err.to_string().contains("Sparkles!"));

        let json = serde_json::to_string(&Glyph::from("trash-2")).unwrap();
        assert_eq!(json, r#"{"component":"trash-2"}"#);
    }

    #[test]
    fn test_no_icon() {
        assert_eq!(ResolvedIcon::resolve(&ButtonOptions::text("Save")), None);
    }

    #[test]
    fn test_shorthand_precedence() {
        let opts = ButtonOptions::default()
            .with_left_icon("play")
            .with_right_icon("chevron-right");
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.glyph, play());
        assert_eq!(icon.position, IconPosition::Left);

        let opts = ButtonOptions::default().with_right_icon("chevron-right");
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.position, IconPosition::Right);
    }

    #[test]
    fn test_structured_icon_wins_over_shorthand() {
        let opts = ButtonOptions::default()
            .with_left_icon("play")
            .with_icon(
                IconConfig::new("star")
                    .with_position(IconPosition::Right)
                    .with_size(20),
            );
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.glyph, Glyph::from("star"));
        assert_eq!(icon.position, IconPosition::Right);
        assert_eq!(icon.size, 20);
    }

    #[test]
    fn test_structured_icon_without_position_is_left() {
        let opts = ButtonOptions::default().with_icon(IconConfig::new("star"));
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.position, IconPosition::Left);
        assert_eq!(icon.size, DEFAULT_ICON_SIZE);
    }

    #[test]
    fn test_empty_shorthand_is_ignored() {
        let opts = ButtonOptions {
            left_icon: Some(Glyph::None),
            ..ButtonOptions::default()
        }
        .with_right_icon("plus");
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.position, IconPosition::Right);
    }

    #[test]
    fn test_loading_forces_spinner() {
        let opts = ButtonOptions::default().with_loading(true).with_left_icon("play");
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.glyph, Glyph::Component(GlyphRef::spinner()));
        assert_eq!(icon.position, IconPosition::Left);
        assert_eq!(icon.class_name.as_deref(), Some(SPINNER_CLASS));

        let opts = ButtonOptions::default().with_loading(true).with_right_icon("play");
        assert_eq!(
            ResolvedIcon::resolve(&opts).unwrap().position,
            IconPosition::Right
        );

        let opts = ButtonOptions::default().with_loading(true);
        assert_eq!(
            ResolvedIcon::resolve(&opts).unwrap().position,
            IconPosition::Only
        );
    }

    #[test]
    fn test_loading_keeps_structured_position() {
        let opts = ButtonOptions::default()
            .with_loading(true)
            .with_left_icon("play")
            .with_icon(IconConfig::new("star").with_position(IconPosition::Right));
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.glyph, Glyph::Component(GlyphRef::spinner()));
        assert_eq!(icon.position, IconPosition::Right);
    }

    #[test]
    fn test_render_component_glyph() {
        let opts = ButtonOptions::default().with_icon(
            IconConfig::new("star").with_size(24).with_class("text-yellow-400"),
        );
        let render = ResolvedIcon::resolve(&opts).unwrap().render().unwrap();
        assert_eq!(render.glyph.as_str(), "star");
        assert_eq!(render.size, Some(24));
        assert_eq!(
            render.class_name.as_deref(),
            Some("flex-shrink-0 text-yellow-400")
        );
    }

    #[test]
    fn test_render_prebuilt_respects_capabilities() {
        let prebuilt = PrebuiltGlyph::new(GlyphRef::new("settings"))
            .with_size(12)
            .with_class("opacity-75");

        // 不可覆盖：原样保留
        let opts = ButtonOptions::default().with_left_icon(prebuilt.clone());
        let render = ResolvedIcon::resolve(&opts).unwrap().render().unwrap();
        assert_eq!(render.size, Some(12));
        assert_eq!(render.class_name.as_deref(), Some("opacity-75"));

        // 只允许尺寸
        let sized = prebuilt.clone().with_capabilities(GlyphCapabilities {
            supports_sizing: true,
            supports_class_name: false,
        });
        let opts = ButtonOptions::default().with_left_icon(sized);
        let render = ResolvedIcon::resolve(&opts).unwrap().render().unwrap();
        assert_eq!(render.size, Some(DEFAULT_ICON_SIZE));
        assert_eq!(render.class_name.as_deref(), Some("opacity-75"));

        // 全部允许
        let all = prebuilt.with_capabilities(GlyphCapabilities::ALL);
        let opts = ButtonOptions::default().with_left_icon(all);
        let render = ResolvedIcon::resolve(&opts).unwrap().render().unwrap();
        assert_eq!(render.class_name.as_deref(), Some("flex-shrink-0"));
    }

    #[test]
    fn test_render_none_glyph() {
        let opts = ButtonOptions::default()
            .with_icon(IconConfig::new(Glyph::None).with_position(IconPosition::Only));
        let icon = ResolvedIcon::resolve(&opts).unwrap();
        assert_eq!(icon.render(), None);
    }
}
