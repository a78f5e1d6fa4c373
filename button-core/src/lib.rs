//! # Button Core
//!
//! 可配置按钮的核心逻辑库。
//!
//! ## 架构概述
//!
//! `button-core` 是纯逻辑核心，不依赖任何 UI 框架或真实时钟。
//! 宿主层（Dioxus 组件）只负责采集事件、提供定时器，并照着渲染计划输出节点：
//!
//! ```text
//! Host                                  Core
//!   │                                     │
//!   │──── ButtonOptions ─────────────────►│ ButtonView::build()
//!   │◄─── ButtonView (class/style/icon) ──│
//!   │                                     │
//!   │──── 点击 (pointer, bbox) ──────────►│ dispatch_click()
//!   │◄─── schedule(id, 600ms) ────────────│
//!   │──── 到期 remove(id) ───────────────►│
//!   │──── 卸载 teardown() ───────────────►│
//! ```
//!
//! ## 核心类型
//!
//! - [`ButtonOptions`]：按钮的全部配置
//! - [`StyleResolver`]：配置 → 样式 token（纯函数）
//! - [`RippleController`]：单实例的涟漪生命周期
//! - [`ButtonView`]：一次渲染的全部决策
//!
//! ## 使用示例
//!
//! ```ignore
//! use button_core::{ButtonOptions, ButtonView, StyleTable, Variant};
//!
//! let options = ButtonOptions::text("Save").with_variant(Variant::Success);
//! let view = ButtonView::build(StyleTable::builtin(), &options);
//! println!("{}", view.class);
//! ```
//!
//! ## 模块结构
//!
//! - [`options`]：配置项与枚举
//! - [`glyph`]：图标表示与解析
//! - [`merge`]：样式 token 冲突合并
//! - [`table`]：样式表（内置 + 主题 JSON）
//! - [`resolver`]：样式解析
//! - [`ripple`]：涟漪控制器与调度抽象
//! - [`gate`]：点击分发
//! - [`view`]：渲染计划
//! - [`diagnostic`]：主题检查诊断
//! - [`error`]：错误类型定义

pub mod diagnostic;
pub mod error;
pub mod gate;
pub mod glyph;
pub mod merge;
pub mod options;
pub mod resolver;
pub mod ripple;
pub mod table;
pub mod view;

// 重导出核心类型
pub use diagnostic::{Diagnostic, DiagnosticLevel, DiagnosticResult};
pub use error::{ParseError, ThemeError};
pub use gate::{ClickOutcome, InteractionGate, dispatch_click};
pub use glyph::{
    Glyph, GlyphCapabilities, GlyphRef, GlyphRender, IconConfig, PrebuiltGlyph, ResolvedIcon,
};
pub use merge::{ClassList, StyleTokenSet, merge_classes};
pub use options::{
    Animation, ButtonContent, ButtonOptions, ButtonType, IconPosition, OptionValue, Shape, Size,
    Variant,
};
pub use resolver::{StyleResolver, is_icon_only};
pub use ripple::{
    BoundingBox, PointerPosition, RIPPLE_DURATION, RippleController, RippleEvent, RippleGate,
    RippleId, RippleScheduler, TimerHandle,
};
pub use table::StyleTable;
pub use view::{ButtonView, IconSlot, IconView};
