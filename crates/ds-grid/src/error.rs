//! Grid-subsystem error type.

use thiserror::Error;

use ds_core::GridCell;

/// Errors produced by `ds-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {0} is outside the grid bounds")]
    OutOfBounds(GridCell),

    #[error("goal cell {0} is blocked")]
    BlockedGoal(GridCell),

    #[error("no path from {from} to {to}")]
    NoPath { from: GridCell, to: GridCell },

    #[error("invalid floor layout: {0}")]
    InvalidLayout(String),
}

pub type GridResult<T> = Result<T, GridError>;
