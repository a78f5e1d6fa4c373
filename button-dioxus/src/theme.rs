//! 样式表上下文。

use std::sync::Arc;

use button_core::StyleTable;
use dioxus::prelude::*;

/// 注入组件树的样式表
#[derive(Debug, Clone)]
pub struct Theme(Arc<StyleTable>);

impl Theme {
    pub fn new(table: StyleTable) -> Self {
        Self(Arc::new(table))
    }

    pub fn table(&self) -> &StyleTable {
        &self.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(StyleTable::builtin().clone())
    }
}

/// 读取上下文中的样式表；未注入时使用内置表
pub fn use_theme() -> Theme {
    try_use_context::<Theme>().unwrap_or_default()
}
