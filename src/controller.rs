//! Countdown controller
//!
//! The controller is the only writer of [`TimerState`]. It owns the tick
//! source and keeps at most one countdown armed at any time.

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    picker::{PickerWheel, TimeField},
    presets::PresetId,
    state::{TimerState, TimerStore},
    ticker::{TickEvent, TickSource, TickSourceId, DEFAULT_TICK_PERIOD_MS},
};

/// User intents coming from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A wheel stopped with `value` in the centre; spacer items are allowed
    FieldScrollSettled { field: TimeField, value: i32 },
    PresetTapped(PresetId),
    StartStopTapped,
}

pub struct TimerController<S: TickSource> {
    store: TimerStore,
    ticker: S,
    active_source: Option<TickSourceId>,
    period_ms: u64,
}

impl<S: TickSource> TimerController<S> {
    pub fn new(ticker: S) -> Self {
        Self::with_period(ticker, DEFAULT_TICK_PERIOD_MS)
    }

    pub fn with_period(ticker: S, period_ms: u64) -> Self {
        Self {
            store: TimerStore::new(),
            ticker,
            active_source: None,
            period_ms,
        }
    }

    pub fn store(&self) -> &TimerStore {
        &self.store
    }

    pub fn state(&self) -> TimerState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.store.subscribe()
    }

    pub fn ticker(&self) -> &S {
        &self.ticker
    }

    /// Id of the live countdown, if any
    pub fn active_source(&self) -> Option<TickSourceId> {
        self.active_source
    }

    pub fn set_hour(&mut self, hour: u32) -> TimerState {
        self.store.update("set_hour", |state| state.set_hour(hour))
    }

    pub fn set_min(&mut self, min: u32) -> TimerState {
        self.store.update("set_min", |state| state.set_min(min))
    }

    pub fn set_sec(&mut self, sec: u32) -> TimerState {
        self.store.update("set_sec", |state| state.set_sec(sec))
    }

    /// Select a preset by id, or drop the selection with `None`
    pub fn select_preset(&mut self, action_id: Option<PresetId>) -> TimerState {
        let mut accepted = true;
        let state = self.store.update("select_preset", |state| {
            accepted = state.select_preset(action_id);
        });

        if accepted {
            match state.selected_preset().and_then(|preset| preset.title) {
                Some(title) => info!("Selected preset '{}' ({})", title, state.formatted_selection()),
                None => debug!("Preset selection cleared"),
            }
        } else {
            debug!(?action_id, "Ignoring selection of unknown or inert preset");
        }
        state
    }

    pub fn clear(&mut self) -> TimerState {
        self.store.update("clear", TimerState::clear)
    }

    /// Start a countdown from the dialed duration, replacing any live one
    pub fn start(&mut self) -> TimerState {
        if let Some(previous) = self.active_source.take() {
            debug!(source = previous, "Cancelling previous countdown before restart");
            self.ticker.cancel(previous);
        }

        let state = self.store.update("start", TimerState::begin_countdown);
        let source = self.ticker.arm(state.total_duration_ms, self.period_ms);
        self.active_source = Some(source);

        info!(
            source,
            "Countdown started for {}",
            state.formatted_remaining()
        );
        state
    }

    /// Stop the live countdown, keeping the remaining time
    pub fn stop(&mut self) -> TimerState {
        if let Some(source) = self.active_source.take() {
            self.ticker.cancel(source);
        }

        let state = self.store.update("stop", TimerState::halt);
        info!("Countdown stopped with {} left", state.formatted_remaining());
        state
    }

    /// Apply an event from the tick source.
    ///
    /// Events from anything but the live countdown are dropped, so a source
    /// cancelled after it already queued events has no effect.
    pub fn handle_tick(&mut self, event: TickEvent) {
        if self.active_source != Some(event.source()) {
            debug!(source = event.source(), "Ignoring event from stale tick source");
            return;
        }

        match event {
            TickEvent::Tick {
                millis_until_finished,
                ..
            } => {
                self.store
                    .update("tick", |state| state.record_tick(millis_until_finished));
            }
            TickEvent::Finished { source } => {
                self.active_source = None;
                self.store.update("expire", TimerState::expire);
                info!(source, "Time's up");
            }
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::FieldScrollSettled { field, value } => {
                let committed = PickerWheel::for_field(field).commit(value);
                if committed as i32 != value {
                    warn!(%field, value, committed, "Picker settled on a spacer, clamping");
                }

                let current = self.state();
                let unchanged = match field {
                    TimeField::Hour => current.hour == committed,
                    TimeField::Minute => current.min == committed,
                    TimeField::Second => current.sec == committed,
                };
                // A wheel animating to a preset's value must not deselect it
                if unchanged {
                    return;
                }

                match field {
                    TimeField::Hour => self.set_hour(committed),
                    TimeField::Minute => self.set_min(committed),
                    TimeField::Second => self.set_sec(committed),
                };
            }
            Intent::PresetTapped(id) => {
                self.select_preset(Some(id));
            }
            Intent::StartStopTapped => {
                if self.state().is_running {
                    self.stop();
                    self.clear();
                } else {
                    self.start();
                }
            }
        }
    }
}

impl<S: TickSource> Drop for TimerController<S> {
    fn drop(&mut self) {
        if let Some(source) = self.active_source.take() {
            debug!(source, "Controller dropped, cancelling countdown");
            self.ticker.cancel(source);
        }
    }
}
