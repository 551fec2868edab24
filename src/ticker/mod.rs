//! Tick sources
//!
//! A tick source is a cancellable countdown that reports the time left once
//! per period and then finishes exactly once. Events are handed back to the
//! thread that owns the controller; nothing here touches timer state.

pub mod interval;
pub mod simulated;

pub use interval::IntervalTickSource;
pub use simulated::SimulatedTickSource;

/// Identity of one armed countdown
pub type TickSourceId = u64;

/// Period used by the controller unless told otherwise
pub const DEFAULT_TICK_PERIOD_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Time left at this tick, never increasing for a given source
    Tick {
        source: TickSourceId,
        millis_until_finished: u64,
    },
    /// Final event of a countdown
    Finished { source: TickSourceId },
}

impl TickEvent {
    pub fn source(&self) -> TickSourceId {
        match self {
            TickEvent::Tick { source, .. } | TickEvent::Finished { source } => *source,
        }
    }
}

/// Scheduling primitive the controller depends on.
///
/// `arm` starts a countdown of `duration_ms`: a tick at arm time carrying the
/// full duration, one tick per `period_ms` while time remains, then a single
/// `Finished` at the deadline. After `cancel` returns, no further events for
/// that id are produced.
pub trait TickSource {
    fn arm(&mut self, duration_ms: u64, period_ms: u64) -> TickSourceId;

    fn cancel(&mut self, id: TickSourceId);
}
