//! # 样式表模块
//!
//! variant / size / shape / animation → 样式 token 的只读查找表。
//!
//! 内置表 [`StyleTable::builtin`] 进程内唯一且不可变；
//! 其他表从 JSON 主题加载（覆盖在内置表之上），再注入 [`StyleResolver`](crate::StyleResolver)。
//!
//! ## 主题 JSON
//!
//! ```json
//! {
//!   "variants": { "primary": "bg-indigo-600 text-white hover:bg-indigo-700" },
//!   "sizes": { "icon-xl": "h-12 w-12 p-0" }
//! }
//! ```
//!
//! 任意子集均可；`variants` / `shapes` / `animations` 只接受规范 key，
//! `sizes` 额外接受 `icon-<size>` 形式的合成 key。

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, DiagnosticResult};
use crate::error::ThemeError;
use crate::options::{Animation, OptionValue, Shape, Size, Variant};

/// 仅图标尺寸的兜底 key
pub const FALLBACK_ICON_SIZE: &str = "icon-md";

static BUILTIN: LazyLock<StyleTable> = LazyLock::new(StyleTable::default_tokens);

/// 样式查找表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTable {
    /// 结构性基础 token（布局、焦点环、禁用态外观）
    pub base: Vec<String>,
    /// `glass` 开启时替代 variant 的 token
    pub glass: String,
    pub variants: BTreeMap<String, String>,
    pub sizes: BTreeMap<String, String>,
    pub shapes: BTreeMap<String, String>,
    pub animations: BTreeMap<String, String>,
    pub shadow: String,
    pub glow: String,
    /// 禁用或加载中追加的 token
    pub blocked: String,
}

/// 主题文件（全部字段可选）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    base: Option<Vec<String>>,
    glass: Option<String>,
    #[serde(default)]
    variants: BTreeMap<String, String>,
    #[serde(default)]
    sizes: BTreeMap<String, String>,
    #[serde(default)]
    shapes: BTreeMap<String, String>,
    #[serde(default)]
    animations: BTreeMap<String, String>,
    shadow: Option<String>,
    glow: Option<String>,
    blocked: Option<String>,
}

fn map_of(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl StyleTable {
    /// 内置表
    pub fn builtin() -> &'static StyleTable {
        &BUILTIN
    }

    fn default_tokens() -> Self {
        Self {
            base: vec![
                "relative inline-flex items-center justify-center".to_string(),
                "font-medium transition-all duration-200".to_string(),
                "focus:outline-none focus:ring-2 focus:ring-offset-2".to_string(),
                "disabled:opacity-50 disabled:cursor-not-allowed".to_string(),
                "select-none overflow-hidden".to_string(),
            ],
            glass: "glass".to_string(),
            variants: map_of(&[
                ("primary", "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500"),
                ("secondary", "bg-gray-200 text-gray-900 hover:bg-gray-300 focus:ring-gray-500"),
                (
                    "outline",
                    "border-2 border-blue-600 text-blue-600 hover:bg-blue-600 hover:text-white focus:ring-blue-500",
                ),
                ("ghost", "text-blue-600 hover:bg-blue-50 focus:ring-blue-500"),
                ("link", "text-blue-600 underline-offset-4 hover:underline focus:ring-blue-500"),
                ("destructive", "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500"),
                ("success", "bg-green-600 text-white hover:bg-green-700 focus:ring-green-500"),
                ("warning", "bg-yellow-600 text-white hover:bg-yellow-700 focus:ring-yellow-500"),
                (
                    "glass",
                    "bg-white/10 backdrop-blur-md border border-white/20 text-white hover:bg-white/20 focus:ring-white/50",
                ),
                (
                    "neon",
                    "bg-blue-600 text-white hover:shadow-[0_0_30px_rgba(59,130,246,0.7)] focus:shadow-[0_0_20px_rgba(59,130,246,0.5)]",
                ),
                (
                    "gradient",
                    "bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:from-blue-700 hover:to-purple-700",
                ),
            ]),
            sizes: map_of(&[
                ("xs", "h-6 px-2 text-xs"),
                ("sm", "h-8 px-3 text-sm"),
                ("md", "h-10 px-4 text-sm"),
                ("lg", "h-11 px-8 text-base"),
                ("xl", "h-12 px-8 text-lg"),
                ("icon-sm", "h-8 w-8 p-0"),
                ("icon-md", "h-10 w-10 p-0"),
                ("icon-lg", "h-11 w-11 p-0"),
            ]),
            shapes: map_of(&[
                ("default", "rounded-md"),
                ("rounded", "rounded-lg"),
                ("pill", "rounded-full"),
                ("square", "rounded-none"),
                ("circle", "rounded-full"),
            ]),
            animations: map_of(&[
                ("none", ""),
                ("bounce", "hover:animate-bounce"),
                ("pulse", "hover:animate-pulse"),
                ("scale", "hover:scale-105 active:scale-95 transition-transform"),
                ("slide", "hover:translate-y-[-2px] transition-transform"),
                ("glow", "transition-shadow duration-300"),
                ("shimmer", "relative overflow-hidden"),
            ]),
            shadow: "shadow-md hover:shadow-lg".to_string(),
            glow: "shadow-glow".to_string(),
            blocked: "cursor-not-allowed".to_string(),
        }
    }

    /// 从主题 JSON 加载（覆盖在内置表之上）
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let theme: ThemeFile = serde_json::from_str(json)?;
        let mut table = Self::builtin().clone();

        check_keys("variants", &theme.variants, Variant::ALL)?;
        check_keys("shapes", &theme.shapes, Shape::ALL)?;
        check_keys("animations", &theme.animations, Animation::ALL)?;
        for key in theme.sizes.keys() {
            let known = Size::ALL
                .iter()
                .any(|s| s.as_str() == key.as_str() || s.icon_key() == key.as_str());
            if !known {
                return Err(ThemeError::UnknownKey {
                    group: "sizes",
                    key: key.clone(),
                });
            }
        }

        if let Some(base) = theme.base {
            table.base = base;
        }
        if let Some(glass) = theme.glass {
            table.glass = glass;
        }
        table.variants.extend(theme.variants);
        table.sizes.extend(theme.sizes);
        table.shapes.extend(theme.shapes);
        table.animations.extend(theme.animations);
        if let Some(shadow) = theme.shadow {
            table.shadow = shadow;
        }
        if let Some(glow) = theme.glow {
            table.glow = glow;
        }
        if let Some(blocked) = theme.blocked {
            table.blocked = blocked;
        }

        Ok(table)
    }

    /// variant token；缺失时降级为 primary
    pub fn variant(&self, variant: Variant) -> &str {
        lookup_or_default(&self.variants, variant)
    }

    /// shape token；缺失时降级为 default
    pub fn shape(&self, shape: Shape) -> &str {
        lookup_or_default(&self.shapes, shape)
    }

    /// animation token；缺失时降级为 scale
    pub fn animation(&self, animation: Animation) -> &str {
        lookup_or_default(&self.animations, animation)
    }

    /// 按 key 查找尺寸 token（可能是合成 key）
    pub fn size(&self, key: &str) -> Option<&str> {
        self.sizes.get(key).map(String::as_str)
    }

    /// 静态检查
    pub fn check(&self, source: &str) -> DiagnosticResult {
        let mut result = DiagnosticResult::new();

        if self.base.iter().all(|b| b.trim().is_empty()) {
            result.push(
                Diagnostic::error(source, "基础 token 为空")
                    .with_key("base")
                    .with_detail("按钮将失去布局与焦点样式"),
            );
        }

        check_missing(&mut result, source, "variants", &self.variants, Variant::ALL);
        check_missing(&mut result, source, "sizes", &self.sizes, Size::ALL);
        check_missing(&mut result, source, "shapes", &self.shapes, Shape::ALL);
        check_missing(&mut result, source, "animations", &self.animations, Animation::ALL);

        if !self.sizes.contains_key(FALLBACK_ICON_SIZE) {
            result.push(
                Diagnostic::error(source, "缺少仅图标尺寸的兜底表项")
                    .with_key(format!("sizes.{FALLBACK_ICON_SIZE}")),
            );
        }

        for size in [Size::Xs, Size::Xl] {
            let key = size.icon_key();
            if !self.sizes.contains_key(&key) {
                result.push(
                    Diagnostic::info(source, "仅图标状态将使用兜底尺寸")
                        .with_key(format!("sizes.{key}"))
                        .with_detail(format!("降级为 {FALLBACK_ICON_SIZE}")),
                );
            }
        }

        if self.animation(Animation::None).split_whitespace().next().is_some() {
            result.push(
                Diagnostic::warn(source, "'none' 动画不应产生 token").with_key("animations.none"),
            );
        }

        result
    }
}

fn lookup_or_default<'a, T: OptionValue>(map: &'a BTreeMap<String, String>, value: T) -> &'a str {
    if let Some(tokens) = map.get(value.as_str()) {
        return tokens;
    }
    let fallback = T::default();
    tracing::warn!(
        field = T::FIELD,
        value = value.as_str(),
        fallback = fallback.as_str(),
        "样式表缺少表项，降级为默认值"
    );
    map.get(fallback.as_str()).map(String::as_str).unwrap_or("")
}

fn check_keys<T: OptionValue>(
    group: &'static str,
    map: &BTreeMap<String, String>,
    all: &[T],
) -> Result<(), ThemeError> {
    match map.keys().find(|k| !all.iter().any(|v| v.as_str() == k.as_str())) {
        Some(key) => Err(ThemeError::UnknownKey {
            group,
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

fn check_missing<T: OptionValue>(
    result: &mut DiagnosticResult,
    source: &str,
    group: &str,
    map: &BTreeMap<String, String>,
    all: &[T],
) {
    for value in all {
        if !map.contains_key(value.as_str()) {
            result.push(
                Diagnostic::warn(source, "缺少表项")
                    .with_key(format!("{group}.{}", value.as_str()))
                    .with_detail(format!("将降级为 {}", T::default().as_str())),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticLevel;

    #[test]
    fn test_builtin_is_complete() {
        let table = StyleTable::builtin();
        for v in Variant::ALL {
            assert!(table.variants.contains_key(v.as_str()), "{v}");
        }
        for s in Size::ALL {
            assert!(table.sizes.contains_key(s.as_str()), "{s}");
        }
        assert_eq!(
            table.variant(Variant::Primary),
            "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500"
        );
        assert_eq!(table.shape(Shape::Circle), "rounded-full");
        assert_eq!(table.animation(Animation::None), "");
    }

    #[test]
    fn test_builtin_check_only_reports_info() {
        let result = StyleTable::builtin().check("builtin");
        assert!(!result.has_errors());
        assert_eq!(result.warn_count(), 0);
        // icon-xs / icon-xl 缺失，走兜底
        let infos = result.filter_by_level(DiagnosticLevel::Info);
        assert_eq!(infos.len(), 2);
    }

    #[test]
    fn test_theme_overlay() {
        let json = r#"{
            "variants": { "primary": "bg-indigo-600 text-white" },
            "sizes": { "icon-xl": "h-12 w-12 p-0" },
            "glow": "shadow-[0_0_12px_rgba(99,102,241,0.6)]"
        }"#;
        let table = StyleTable::from_json(json).unwrap();
        assert_eq!(table.variant(Variant::Primary), "bg-indigo-600 text-white");
        assert_eq!(table.size("icon-xl"), Some("h-12 w-12 p-0"));
        assert_eq!(table.glow, "shadow-[0_0_12px_rgba(99,102,241,0.6)]");
        // 未覆盖的表项保持内置值
        assert_eq!(table.shape(Shape::Pill), "rounded-full");
    }

    #[test]
    fn test_theme_rejects_unknown_keys() {
        let err = StyleTable::from_json(r#"{ "variants": { "plaid": "bg-red-500" } }"#).unwrap_err();
        assert_eq!(
            err,
            ThemeError::UnknownKey {
                group: "variants",
                key: "plaid".to_string()
            }
        );

        let err = StyleTable::from_json(r#"{ "sizes": { "huge": "h-20" } }"#).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownKey { group: "sizes", .. }));

        let err = StyleTable::from_json(r#"{ "colours": {} }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn test_missing_entry_falls_back() {
        let mut table = StyleTable::builtin().clone();
        table.variants.remove("neon");
        assert_eq!(table.variant(Variant::Neon), table.variant(Variant::Primary));

        table.variants.clear();
        assert_eq!(table.variant(Variant::Neon), "");
    }

    #[test]
    fn test_check_reports_problems() {
        let mut table = StyleTable::builtin().clone();
        table.base.clear();
        table.sizes.remove(FALLBACK_ICON_SIZE);
        table.animations.insert("none".to_string(), "animate-spin".to_string());

        let result = table.check("broken.json");
        assert_eq!(result.error_count(), 2);
        // 缺失 icon-md 与 animations.none 非空
        assert_eq!(result.warn_count(), 2);
    }
}
