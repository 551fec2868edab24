//! Tick source backed by tokio timers

use std::{collections::HashMap, time::Duration};

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, sleep_until, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use super::{TickEvent, TickSource, TickSourceId};

/// Runs each countdown as a tokio task and sends its events over a channel.
///
/// The receiving end is drained by the session loop, which passes every
/// event to the controller on the same task that owns it.
#[derive(Debug)]
pub struct IntervalTickSource {
    events_tx: mpsc::UnboundedSender<TickEvent>,
    tasks: HashMap<TickSourceId, JoinHandle<()>>,
    next_id: TickSourceId,
}

impl IntervalTickSource {
    /// Must be called from within a tokio runtime
    pub fn new(events_tx: mpsc::UnboundedSender<TickEvent>) -> Self {
        Self {
            events_tx,
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    /// Number of countdown tasks still running
    pub fn live_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl TickSource for IntervalTickSource {
    fn arm(&mut self, duration_ms: u64, period_ms: u64) -> TickSourceId {
        let id = self.next_id;
        self.next_id += 1;

        // Forget tasks that already finished on their own
        self.tasks.retain(|_, task| !task.is_finished());

        let events_tx = self.events_tx.clone();
        let task = tokio::spawn(countdown_task(
            id,
            Duration::from_millis(duration_ms),
            Duration::from_millis(period_ms.max(1)),
            events_tx,
        ));
        self.tasks.insert(id, task);

        debug!(source = id, duration_ms, period_ms, "Armed countdown task");
        id
    }

    fn cancel(&mut self, id: TickSourceId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
            debug!(source = id, "Cancelled countdown task");
        }
    }
}

impl Drop for IntervalTickSource {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

async fn countdown_task(
    id: TickSourceId,
    duration: Duration,
    period: Duration,
    events_tx: mpsc::UnboundedSender<TickEvent>,
) {
    let start = Instant::now();
    let deadline = start + duration;

    let mut interval = interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let expiry = sleep_until(deadline);
    tokio::pin!(expiry);

    loop {
        let event = tokio::select! {
            biased;

            _ = &mut expiry => TickEvent::Finished { source: id },

            _ = interval.tick() => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    TickEvent::Finished { source: id }
                } else {
                    TickEvent::Tick {
                        source: id,
                        millis_until_finished: remaining.as_millis() as u64,
                    }
                }
            }
        };

        let finished = matches!(event, TickEvent::Finished { .. });
        if events_tx.send(event).is_err() {
            debug!(source = id, "Tick receiver dropped, ending countdown task");
            return;
        }
        if finished {
            info!(source = id, "Countdown reached zero");
            return;
        }
    }
}
