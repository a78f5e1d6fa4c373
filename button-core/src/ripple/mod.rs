//! # Ripple 模块
//!
//! 单个按钮实例的涟漪效果生命周期。
//!
//! ## 生命周期
//!
//! ```text
//! 点击 ──► create_on_interaction ──► 追加 RippleEvent + 登记 600ms 定时器
//!                                         │
//!              定时器到期 ──► remove(id) ◄─┘
//!
//! 卸载 ──► teardown ──► 取消全部定时器，控制器失效
//! ```
//!
//! - 每次交互独立追加，过期互不影响，不设上限
//! - `remove` 以 id 为键且幂等
//! - teardown 之后任何定时器回调都是 no-op

mod scheduler;
mod sim;

pub use scheduler::{RIPPLE_DURATION, RippleScheduler, TimerHandle};
pub use sim::{SimHandle, SimScheduler};

use serde::Serialize;

/// 涟漪 id（实例内单调递增，永不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RippleId(u64);

impl std::fmt::Display for RippleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ripple-{}", self.0)
    }
}

/// 指针位置（与包围盒同一坐标系）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 按钮包围盒
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// 一次涟漪
///
/// `x` / `y` 是涟漪圆外接正方形左上角相对按钮的位置。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RippleEvent {
    pub id: RippleId,
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

impl RippleEvent {
    fn at(id: RippleId, pointer: PointerPosition, bbox: BoundingBox) -> Self {
        let diameter = bbox.width.max(bbox.height);
        Self {
            id,
            x: pointer.x - bbox.left - diameter / 2.0,
            y: pointer.y - bbox.top - diameter / 2.0,
            diameter,
        }
    }
}

/// 是否允许产生涟漪
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RippleGate {
    pub ripple_enabled: bool,
    pub disabled: bool,
    pub loading: bool,
}

impl RippleGate {
    pub fn admits(&self) -> bool {
        self.ripple_enabled && !self.disabled && !self.loading
    }
}

#[derive(Debug)]
struct ActiveRipple<H: TimerHandle> {
    event: RippleEvent,
    handle: Option<H>,
}

/// 涟漪控制器（每个按钮实例一个）
#[derive(Debug)]
pub struct RippleController<H: TimerHandle> {
    active: Vec<ActiveRipple<H>>,
    next_id: u64,
    torn_down: bool,
}

impl<H: TimerHandle> Default for RippleController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TimerHandle> RippleController<H> {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
            torn_down: false,
        }
    }

    /// 交互时创建涟漪
    ///
    /// 涟漪关闭、禁用、加载中或已 teardown 时为 no-op，返回 `None`。
    pub fn create_on_interaction<S>(
        &mut self,
        gate: RippleGate,
        pointer: PointerPosition,
        bbox: BoundingBox,
        scheduler: &mut S,
    ) -> Option<RippleEvent>
    where
        S: RippleScheduler<Handle = H>,
    {
        if self.torn_down || !gate.admits() {
            return None;
        }

        let id = RippleId(self.next_id);
        self.next_id += 1;

        let event = RippleEvent::at(id, pointer, bbox);
        let handle = scheduler.schedule(id, RIPPLE_DURATION);
        self.active.push(ActiveRipple {
            event,
            handle: Some(handle),
        });

        tracing::trace!(id = %id, x = event.x, y = event.y, "涟漪创建");
        Some(event)
    }

    /// 移除涟漪（定时器到期时调用）
    ///
    /// 幂等；未找到或已 teardown 时返回 `false`。
    /// 句柄直接丢弃而不取消：调用方就是已触发的定时器本身。
    pub fn remove(&mut self, id: RippleId) -> bool {
        if self.torn_down {
            return false;
        }
        match self.active.iter().position(|r| r.event.id == id) {
            Some(index) => {
                self.active.remove(index);
                tracing::trace!(id = %id, "涟漪移除");
                true
            }
            None => false,
        }
    }

    /// 取消全部定时器并清空；之后控制器不再接受任何操作
    pub fn teardown(&mut self) {
        for ripple in self.active.drain(..) {
            if let Some(handle) = ripple.handle {
                handle.cancel();
            }
        }
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// 活跃涟漪（按创建顺序）
    pub fn events(&self) -> impl Iterator<Item = &RippleEvent> {
        self.active.iter().map(|r| &r.event)
    }

    pub fn contains(&self, id: RippleId) -> bool {
        self.active.iter().any(|r| r.event.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<H: TimerHandle> Drop for RippleController<H> {
    fn drop(&mut self) {
        if !self.torn_down {
            self.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const OPEN: RippleGate = RippleGate {
        ripple_enabled: true,
        disabled: false,
        loading: false,
    };

    fn bbox() -> BoundingBox {
        BoundingBox::new(10.0, 20.0, 120.0, 40.0)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ripple_geometry() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();

        let event = ctl
            .create_on_interaction(OPEN, PointerPosition::new(70.0, 40.0), bbox(), &mut sched)
            .unwrap();
        assert_eq!(event.diameter, 120.0);
        assert_eq!(event.x, 70.0 - 10.0 - 60.0);
        assert_eq!(event.y, 40.0 - 20.0 - 60.0);
    }

    #[test]
    fn test_ripple_expires_after_600ms() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();

        let event = ctl
            .create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched)
            .unwrap();
        assert_eq!(ctl.len(), 1);

        assert!(sched.run_for(ms(599), &mut ctl).is_empty());
        assert!(ctl.contains(event.id));

        assert_eq!(sched.run_for(ms(1), &mut ctl), vec![event.id]);
        assert!(ctl.is_empty());
    }

    #[test]
    fn test_blocked_creation_is_noop() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();

        for gate in [
            RippleGate {
                ripple_enabled: false,
                ..OPEN
            },
            RippleGate {
                disabled: true,
                ..OPEN
            },
            RippleGate {
                loading: true,
                ..OPEN
            },
        ] {
            assert!(!gate.admits());
            let created =
                ctl.create_on_interaction(gate, PointerPosition::default(), bbox(), &mut sched);
            assert_eq!(created, None);
        }
        assert!(ctl.is_empty());
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_rapid_interactions_expire_independently() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();
        let mut ids = Vec::new();

        for _ in 0..3 {
            let event = ctl
                .create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched)
                .unwrap();
            ids.push(event.id);
            sched.run_for(ms(100), &mut ctl);
        }
        // t = 300ms：三个都在
        assert_eq!(ctl.len(), 3);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);

        // t = 600ms：第一个到期
        assert_eq!(sched.run_for(ms(300), &mut ctl), vec![ids[0]]);
        assert_eq!(ctl.events().map(|e| e.id).collect::<Vec<_>>(), ids[1..]);

        // t = 700ms / 800ms
        assert_eq!(sched.run_for(ms(100), &mut ctl), vec![ids[1]]);
        assert_eq!(sched.run_for(ms(100), &mut ctl), vec![ids[2]]);
        assert!(ctl.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();
        let a = ctl
            .create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched)
            .unwrap();
        let b = ctl
            .create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched)
            .unwrap();

        assert!(ctl.remove(a.id));
        assert!(!ctl.remove(a.id));
        assert!(ctl.contains(b.id));

        // a 的定时器仍会触发，但不影响 b
        sched.run_for(RIPPLE_DURATION, &mut ctl);
        assert!(ctl.is_empty());
    }

    #[test]
    fn test_teardown_cancels_pending_timers() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();
        for _ in 0..2 {
            ctl.create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched);
        }
        assert_eq!(sched.pending_count(), 2);

        ctl.teardown();
        assert!(ctl.is_torn_down());
        assert!(ctl.is_empty());
        assert_eq!(sched.pending_count(), 0);
        assert!(sched.advance(RIPPLE_DURATION).is_empty());

        // 失效后拒绝新建
        let created = ctl.create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched);
        assert_eq!(created, None);
    }

    #[test]
    fn test_drop_cancels_pending_timers() {
        let mut sched = SimScheduler::new();
        {
            let mut ctl = RippleController::new();
            ctl.create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched);
            assert_eq!(sched.pending_count(), 1);
        }
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut sched = SimScheduler::new();
        let mut ctl = RippleController::new();
        let first = ctl
            .create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched)
            .unwrap();
        sched.run_for(RIPPLE_DURATION, &mut ctl);
        let second = ctl
            .create_on_interaction(OPEN, PointerPosition::default(), bbox(), &mut sched)
            .unwrap();
        assert!(second.id > first.id);
        assert_eq!(first.id.to_string(), "ripple-0");
        assert_eq!(second.id.to_string(), "ripple-1");
    }
}
