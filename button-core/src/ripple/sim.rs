//! 模拟时钟调度器
//!
//! 不依赖真实时间：测试通过 [`SimScheduler::advance`] 推进时钟，
//! 到期且未取消的定时器按到期顺序触发。

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::{RippleScheduler, TimerHandle};
use super::{RippleController, RippleId};

/// 模拟定时器句柄
#[derive(Debug)]
pub struct SimHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for SimHandle {
    fn cancel(self) {
        self.cancelled.set(true);
    }
}

#[derive(Debug)]
struct Pending {
    due: Duration,
    id: RippleId,
    cancelled: Rc<Cell<bool>>,
}

/// 模拟时钟调度器
#[derive(Debug, Default)]
pub struct SimScheduler {
    now: Duration,
    pending: Vec<Pending>,
}

impl SimScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 尚未触发且未取消的定时器数量
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|p| !p.cancelled.get()).count()
    }

    /// 推进时钟，返回本次触发的涟漪 id（按到期顺序）
    pub fn advance(&mut self, by: Duration) -> Vec<RippleId> {
        self.now += by;
        let now = self.now;

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;

        due.sort_by_key(|p| p.due);
        due.into_iter()
            .filter(|p| !p.cancelled.get())
            .map(|p| p.id)
            .collect()
    }

    /// 推进时钟，并把触发的定时器作用到控制器上
    pub fn run_for(
        &mut self,
        by: Duration,
        controller: &mut RippleController<SimHandle>,
    ) -> Vec<RippleId> {
        let fired = self.advance(by);
        for id in &fired {
            controller.remove(*id);
        }
        fired
    }
}

impl RippleScheduler for SimScheduler {
    type Handle = SimHandle;

    fn schedule(&mut self, id: RippleId, delay: Duration) -> SimHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.pending.push(Pending {
            due: self.now + delay,
            id,
            cancelled: Rc::clone(&cancelled),
        });
        SimHandle { cancelled }
    }
}
