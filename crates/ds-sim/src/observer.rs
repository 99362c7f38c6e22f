//! Simulation observer trait for tracing and data collection.

use ds_core::Tick;

use crate::event::{SimEvent, TickSummary};

/// Callbacks invoked by [`World`][crate::World] as the simulation runs.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress reporter
///
/// ```rust,ignore
/// struct ProgressReporter { interval: u64 }
///
/// impl SimObserver for ProgressReporter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: profit {:.0}", summary.tick, summary.profit);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every event, in the order it occurred within the tick.
    fn on_event(&mut self, _event: &SimEvent) {}

    /// Called at the end of each tick with the tick's aggregate state.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to run the
/// world but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records everything it sees.  Intended for tests and small analyses.
#[derive(Default)]
pub struct RecordingObserver {
    pub events:    Vec<SimEvent>,
    pub summaries: Vec<TickSummary>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events matching `filter`, in order.
    pub fn filtered(&self, filter: impl Fn(&SimEvent) -> bool) -> Vec<&SimEvent> {
        self.events.iter().filter(|e| filter(e)).collect()
    }
}

impl SimObserver for RecordingObserver {
    fn on_event(&mut self, event: &SimEvent) {
        self.events.push(event.clone());
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summaries.push(*summary);
    }
}
