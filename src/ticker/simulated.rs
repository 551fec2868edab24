//! Deterministic tick source driven by a manual clock

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use super::{TickEvent, TickSource, TickSourceId};

#[derive(Debug, Clone, Copy)]
struct ArmedCountdown {
    deadline_ms: u64,
    next_tick_ms: u64,
    period_ms: u64,
}

impl ArmedCountdown {
    fn next_due(&self) -> u64 {
        self.next_tick_ms.min(self.deadline_ms)
    }
}

#[derive(Debug, Default)]
struct Inner {
    now_ms: u64,
    next_id: TickSourceId,
    armed: BTreeMap<TickSourceId, ArmedCountdown>,
    arm_count: usize,
    cancelled: Vec<TickSourceId>,
}

/// Fake clock for tests and replays.
///
/// Nothing happens until [`advance`](Self::advance) is called, which returns
/// the events due in time order. Clones share the same clock, so a test can
/// keep a handle after giving one to a controller.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTickSource {
    inner: Rc<RefCell<Inner>>,
}

impl SimulatedTickSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Move the clock forward and return every event due up to and including
    /// the new time
    pub fn advance(&self, ms: u64) -> Vec<TickEvent> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let target = inner.now_ms + ms;
        let mut events = Vec::new();

        loop {
            let due = inner
                .armed
                .iter()
                .map(|(id, countdown)| (countdown.next_due(), *id))
                .filter(|(due, _)| *due <= target)
                .min();
            let Some((due, id)) = due else { break };

            inner.now_ms = due;
            let Some(countdown) = inner.armed.get_mut(&id) else { break };
            if due >= countdown.deadline_ms {
                events.push(TickEvent::Finished { source: id });
                inner.armed.remove(&id);
            } else {
                events.push(TickEvent::Tick {
                    source: id,
                    millis_until_finished: countdown.deadline_ms - due,
                });
                countdown.next_tick_ms = due + countdown.period_ms;
            }
        }

        inner.now_ms = target;
        events
    }

    /// Ids of countdowns that have neither finished nor been cancelled
    pub fn active_ids(&self) -> Vec<TickSourceId> {
        self.inner.borrow().armed.keys().copied().collect()
    }

    pub fn arm_count(&self) -> usize {
        self.inner.borrow().arm_count
    }

    pub fn cancelled(&self) -> Vec<TickSourceId> {
        self.inner.borrow().cancelled.clone()
    }
}

impl TickSource for SimulatedTickSource {
    fn arm(&mut self, duration_ms: u64, period_ms: u64) -> TickSourceId {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        inner.next_id += 1;
        inner.arm_count += 1;

        let id = inner.next_id;
        let now = inner.now_ms;
        inner.armed.insert(
            id,
            ArmedCountdown {
                deadline_ms: now + duration_ms,
                next_tick_ms: now,
                period_ms: period_ms.max(1),
            },
        );
        id
    }

    fn cancel(&mut self, id: TickSourceId) {
        let mut inner = self.inner.borrow_mut();
        if inner.armed.remove(&id).is_some() {
            inner.cancelled.push(id);
        }
    }
}
