//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `customer_results.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CustomerResultRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    customers: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut customers = Writer::from_path(dir.join("customer_results.csv"))?;
        customers.write_record([
            "customer_id",
            "depart_tick",
            "wait_time",
            "satisfaction",
            "finished_eating",
            "profit",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "profit",
            "active_customers",
            "queued_customers",
            "executing_servos",
            "completed_customers",
        ])?;

        Ok(Self {
            customers,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_customer_result(&mut self, row: &CustomerResultRow) -> OutputResult<()> {
        self.customers.write_record(&[
            row.customer_id.to_string(),
            row.depart_tick.to_string(),
            row.wait_time.to_string(),
            row.satisfaction.to_string(),
            (row.finished_eating as u8).to_string(),
            row.profit.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.profit.to_string(),
            row.active_customers.to_string(),
            row.queued_customers.to_string(),
            row.executing_servos.to_string(),
            row.completed_customers.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.customers.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
