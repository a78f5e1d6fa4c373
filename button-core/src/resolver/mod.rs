//! # Resolver 模块
//!
//! `ButtonOptions` → 最终样式 token 序列的**唯一转换入口**。
//!
//! ## 解析顺序
//!
//! | 步骤 | 分类 | 条件 |
//! |------|------|------|
//! | 1 | 基础 token | 总是 |
//! | 2 | variant | `glass` 时使用 glass token |
//! | 3 | 尺寸 | 仅图标时使用 `icon-*` 尺寸 |
//! | 4 | 形状 | 总是 |
//! | 5 | 动画 | 非禁用且非加载中 |
//! | 6 | 阴影 / 发光 | `shadow && !glass` / `glow` |
//! | 7 | 阻断态 | 禁用或加载中 |
//! | 8 | 调用方 token | 总是，最后合并 |
//!
//! 每一步追加的 token 都按「同冲突分组后者胜出」合并。

use crate::glyph::ResolvedIcon;
use crate::merge::{ClassList, StyleTokenSet};
use crate::options::{ButtonContent, ButtonOptions, IconPosition, OptionValue, Size};
use crate::table::{FALLBACK_ICON_SIZE, StyleTable};

/// 样式解析器
///
/// 纯函数：同样的输入永远得到同样的 token 序列。
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'t> {
    table: &'t StyleTable,
}

impl StyleResolver<'static> {
    /// 使用内置样式表
    pub fn builtin() -> Self {
        Self::new(StyleTable::builtin())
    }
}

impl<'t> StyleResolver<'t> {
    pub fn new(table: &'t StyleTable) -> Self {
        Self { table }
    }

    /// 解析样式 token
    pub fn resolve(&self, options: &ButtonOptions) -> StyleTokenSet {
        let icon = self.resolve_icon(options);
        let icon_only = is_icon_only(icon.as_ref(), &options.content);
        self.resolve_with(options, icon_only)
    }

    /// 解析生效图标：加载中 > `icon` > `left_icon` > `right_icon`
    pub fn resolve_icon(&self, options: &ButtonOptions) -> Option<ResolvedIcon> {
        ResolvedIcon::resolve(options)
    }

    /// 已知仅图标状态时解析（避免重复解析图标）
    pub fn resolve_with(&self, options: &ButtonOptions, icon_only: bool) -> StyleTokenSet {
        let table = self.table;
        let blocked = options.is_blocked();
        let mut classes = ClassList::new();

        for base in &table.base {
            classes.push(base);
        }

        if options.glass {
            classes.push(&table.glass);
        } else {
            classes.push(table.variant(options.variant));
        }

        classes.push(self.size_tokens(options.size, icon_only));
        classes.push(table.shape(options.shape));

        if !blocked {
            classes.push(table.animation(options.animation));
        }

        classes
            .push_if(options.shadow && !options.glass, &table.shadow)
            .push_if(options.glow, &table.glow)
            .push_if(blocked, &table.blocked)
            .push_opt(options.caller_classes.as_deref());

        classes.finish()
    }

    /// 尺寸 token
    ///
    /// 仅图标时合成 `icon-<size>`，不存在则降级为 `icon-md`。
    pub fn size_tokens(&self, size: Size, icon_only: bool) -> &'t str {
        let table = self.table;

        if icon_only {
            let key = size.icon_key();
            return table
                .size(&key)
                .or_else(|| {
                    tracing::debug!(key = %key, fallback = FALLBACK_ICON_SIZE, "仅图标尺寸缺失，使用兜底尺寸");
                    table.size(FALLBACK_ICON_SIZE)
                })
                .unwrap_or("");
        }

        table
            .size(size.as_str())
            .or_else(|| {
                tracing::warn!(size = size.as_str(), "样式表缺少尺寸表项，降级为 md");
                table.size(Size::default().as_str())
            })
            .unwrap_or("")
    }
}

/// 仅图标判定：图标位置为 `only`，或有图标且无内容
pub fn is_icon_only(icon: Option<&ResolvedIcon>, content: &ButtonContent) -> bool {
    match icon {
        Some(icon) => icon.position == IconPosition::Only || !content.is_present(),
        None => false,
    }
}

#[cfg(test)]
mod tests;
