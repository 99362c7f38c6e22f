//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ds_core::Tick;
use ds_sim::{SimEvent, SimObserver, TickSummary};

use crate::row::{CustomerResultRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that records departed customers and tick summaries
/// through any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &SimEvent) {
        let SimEvent::CustomerDeparted {
            tick,
            customer,
            satisfaction,
            wait_time,
            finished_eating,
            profit,
        } = event
        else {
            return;
        };
        let row = CustomerResultRow {
            customer_id:     customer.index() as u32,
            depart_tick:     tick.0,
            wait_time:       *wait_time,
            satisfaction:    *satisfaction,
            finished_eating: *finished_eating,
            profit:          *profit,
        };
        let result = self.writer.write_customer_result(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:                summary.tick.0,
            profit:              summary.profit,
            active_customers:    summary.active_customers as u64,
            queued_customers:    summary.queued_customers as u64,
            executing_servos:    summary.executing_servos as u64,
            completed_customers: summary.completed_customers as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
