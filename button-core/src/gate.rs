//! # Gate 模块
//!
//! 点击分发：阻断态下吞掉点击，否则先创建涟漪再调用回调（恰好一次）。

use crate::options::ButtonOptions;
use crate::ripple::{
    BoundingBox, PointerPosition, RippleController, RippleEvent, RippleGate, RippleScheduler,
};

/// 交互门（由配置派生）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionGate {
    pub disabled: bool,
    pub loading: bool,
    pub ripple_enabled: bool,
    pub haptic_enabled: bool,
}

impl InteractionGate {
    pub fn from_options(options: &ButtonOptions) -> Self {
        Self {
            disabled: options.disabled,
            loading: options.loading,
            ripple_enabled: options.ripple_enabled,
            haptic_enabled: options.haptic_enabled,
        }
    }

    /// 是否放行点击
    pub fn admits(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn ripple_gate(&self) -> RippleGate {
        RippleGate {
            ripple_enabled: self.ripple_enabled,
            disabled: self.disabled,
            loading: self.loading,
        }
    }
}

/// 一次点击的处理结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// 禁用或加载中：无涟漪、无回调
    Blocked,
    /// 已放行
    Admitted {
        ripple: Option<RippleEvent>,
        /// 宿主是否应触发触感反馈
        haptic: bool,
    },
}

impl ClickOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }
}

/// 分发一次点击
///
/// 放行时的顺序固定：创建涟漪 → 调用 `on_click(event)`。
pub fn dispatch_click<S, E>(
    options: &ButtonOptions,
    controller: &mut RippleController<S::Handle>,
    scheduler: &mut S,
    pointer: PointerPosition,
    bbox: BoundingBox,
    event: E,
    on_click: impl FnOnce(E),
) -> ClickOutcome
where
    S: RippleScheduler,
{
    let gate = InteractionGate::from_options(options);
    if !gate.admits() {
        tracing::debug!(
            disabled = gate.disabled,
            loading = gate.loading,
            "点击被阻断"
        );
        return ClickOutcome::Blocked;
    }

    let ripple = controller.create_on_interaction(gate.ripple_gate(), pointer, bbox, scheduler);
    on_click(event);

    ClickOutcome::Admitted {
        ripple,
        haptic: gate.haptic_enabled,
    }
}
