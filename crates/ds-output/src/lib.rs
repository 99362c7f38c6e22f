//! `ds-output` — simulation result writers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`row`]      | `CustomerResultRow`, `TickSummaryRow`                |
//! | [`writer`]   | The `OutputWriter` backend trait                     |
//! | [`csv`]      | `CsvWriter` — two CSV files per run                  |
//! | [`observer`] | `SimOutputObserver<W>` — `SimObserver` → writer      |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let writer = CsvWriter::new(Path::new("out"))?;
//! let mut output = SimOutputObserver::new(writer);
//! world.run(&mut output);
//! if let Some(e) = output.take_error() {
//!     eprintln!("output incomplete: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CustomerResultRow, TickSummaryRow};
pub use writer::OutputWriter;
