//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CustomerResultRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends (CSV today; the observer is
/// generic over it so other formats slot in without touching the loop).
///
/// All methods are infallible from the observer's perspective — errors
/// are stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one departed-customer record.
    fn write_customer_result(&mut self, row: &CustomerResultRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
