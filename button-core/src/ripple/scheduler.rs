//! 涟漪过期定时器的抽象。
//!
//! 控制器只负责登记句柄；真正的计时由宿主提供（Dioxus task、模拟时钟……）。

use std::time::Duration;

use super::RippleId;

/// 涟漪存活时长
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);

/// 可取消的定时器句柄
pub trait TimerHandle {
    /// 取消尚未触发的定时器；已触发时为 no-op
    fn cancel(self);
}

/// 无需取消的句柄（宿主自行管理计时的场景）
impl TimerHandle for () {
    fn cancel(self) {}
}

/// 定时器调度器
///
/// `schedule` 只登记定时器，不允许同步回调控制器；
/// 到期后由宿主调用 [`RippleController::remove`](super::RippleController::remove)。
pub trait RippleScheduler {
    type Handle: TimerHandle;

    fn schedule(&mut self, id: RippleId, delay: Duration) -> Self::Handle;
}
