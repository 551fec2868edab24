//! Reactive timer store

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use super::TimerState;

/// Name and time of the most recent state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastAction {
    pub name: &'static str,
    pub at: DateTime<Utc>,
}

/// Holder of the single `TimerState`.
///
/// Readers take snapshots or subscribe for change notifications. Only the
/// controller inside this crate can write.
#[derive(Debug)]
pub struct TimerStore {
    state_tx: watch::Sender<TimerState>,
    /// Keep one receiver alive so the channel never closes
    _state_rx: watch::Receiver<TimerState>,
    last_action: Option<LastAction>,
}

impl TimerStore {
    pub fn new() -> Self {
        let (state_tx, state_rx) = watch::channel(TimerState::new());
        Self {
            state_tx,
            _state_rx: state_rx,
            last_action: None,
        }
    }

    /// Current state
    pub fn snapshot(&self) -> TimerState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified after every update
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_tx.subscribe()
    }

    pub fn last_action(&self) -> Option<&LastAction> {
        self.last_action.as_ref()
    }

    /// Apply `updater`, notify subscribers and return the new state
    pub(crate) fn update<F>(&mut self, action: &'static str, updater: F) -> TimerState
    where
        F: FnOnce(&mut TimerState),
    {
        self.state_tx.send_modify(updater);
        self.last_action = Some(LastAction {
            name: action,
            at: Utc::now(),
        });

        let new_state = self.snapshot();
        debug!(
            action,
            running = new_state.is_running,
            remaining_ms = new_state.remaining_ms,
            "Timer state updated"
        );
        new_state
    }
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}
