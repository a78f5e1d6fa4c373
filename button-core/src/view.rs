//! # View 模块
//!
//! 汇总一次渲染所需的全部决策，渲染层只负责照着 [`ButtonView`] 输出节点。
//!
//! ## 子节点顺序
//!
//! ```text
//! [left 图标] [内容 flex-1] [only 图标] [right 图标] [涟漪...] [shimmer]
//! ```
//!
//! 图标只渲染一次：`only` 位置不带包裹，左右位置带间距包裹。

use crate::glyph::{GlyphRender, ResolvedIcon};
use crate::merge::StyleTokenSet;
use crate::options::{Animation, ButtonOptions, IconPosition};
use crate::resolver::{StyleResolver, is_icon_only};
use crate::ripple::RippleEvent;
use crate::table::StyleTable;

/// 涟漪外层 class
pub const RIPPLE_WRAPPER_CLASS: &str = "absolute pointer-events-none";

/// 涟漪墨迹 class
pub const RIPPLE_INK_CLASS: &str = "block w-full h-full bg-white/30 rounded-full animate-ping";

/// shimmer 覆盖层 class
pub const SHIMMER_CLASS: &str = "absolute inset-0 -translate-x-full bg-gradient-to-r from-transparent via-white/20 to-transparent animate-shimmer";

/// 内容包裹 class
pub const CONTENT_CLASS: &str = "flex-1";

/// 图标槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    Left,
    Right,
    Only,
}

impl IconSlot {
    fn from_position(position: IconPosition) -> Self {
        match position {
            IconPosition::Left => Self::Left,
            IconPosition::Right => Self::Right,
            IconPosition::Only => Self::Only,
        }
    }
}

/// 待渲染的图标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconView {
    pub slot: IconSlot,
    pub render: GlyphRender,
    /// 包裹元素 class；`None` 表示不包裹
    pub wrapper_class: Option<&'static str>,
}

/// 一个按钮实例的渲染计划
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub class: StyleTokenSet,
    pub disabled: bool,
    pub aria_disabled: bool,
    pub aria_label: Option<String>,
    pub style: String,
    pub icon: Option<IconView>,
    pub icon_only: bool,
    pub show_content: bool,
    pub show_shimmer: bool,
    pub ripple_enabled: bool,
}

impl ButtonView {
    pub fn build(table: &StyleTable, options: &ButtonOptions) -> Self {
        let resolved = ResolvedIcon::resolve(options);
        let icon_only = is_icon_only(resolved.as_ref(), &options.content);
        let class = StyleResolver::new(table).resolve_with(options, icon_only);
        let blocked = options.is_blocked();

        let icon = resolved.and_then(|icon| {
            let render = icon.render()?;
            let slot = IconSlot::from_position(icon.position);
            let wrapper_class = match slot {
                IconSlot::Left if icon_only => Some("mr-0"),
                IconSlot::Left => Some("mr-2"),
                IconSlot::Right if icon_only => Some("ml-0"),
                IconSlot::Right => Some("ml-2"),
                IconSlot::Only => None,
            };
            Some(IconView {
                slot,
                render,
                wrapper_class,
            })
        });

        let aria_label = options
            .aria_label
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| options.content.text().filter(|text| !text.is_empty()))
            .map(str::to_string);

        Self {
            class,
            disabled: blocked,
            aria_disabled: blocked,
            aria_label,
            style: inline_style(options),
            icon,
            icon_only,
            show_content: options.content.is_present() && !icon_only,
            show_shimmer: options.animation == Animation::Shimmer && !blocked,
            ripple_enabled: options.ripple_enabled,
        }
    }

    /// 指定槽位的图标
    pub fn icon_in(&self, slot: IconSlot) -> Option<&IconView> {
        self.icon.as_ref().filter(|icon| icon.slot == slot)
    }
}

/// 内联样式：调用方样式 → 动画时长 → 渐变背景
fn inline_style(options: &ButtonOptions) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(style) = options.caller_style.as_deref() {
        let style = style.trim().trim_end_matches(';').trim();
        if !style.is_empty() {
            parts.push(style.to_string());
        }
    }
    if !options.animation_duration.is_empty() {
        parts.push(format!("animation-duration: {}", options.animation_duration));
    }
    if let Some(gradient) = options.gradient.as_deref().filter(|g| !g.is_empty()) {
        parts.push(format!("background: {gradient}"));
    }

    parts.join("; ")
}

/// 单个涟漪的内联样式
pub fn ripple_style(event: &RippleEvent) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px",
        event.x, event.y, event.diameter, event.diameter
    )
}
