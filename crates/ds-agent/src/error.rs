//! Agent-subsystem error type.

use thiserror::Error;

use ds_core::TableId;
use ds_grid::GridError;

/// Errors produced by `ds-agent`.  All are recoverable within a tick:
/// the servo aborts the action and idles, and the caller releases the
/// reservations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// No walkable orthogonal neighbor next to the table.  The nav-grid
    /// builder forces the approach ring walkable, so this indicates a
    /// grid construction bug.
    #[error("no walkable approach cell next to table {0}")]
    NoApproachCell(TableId),

    #[error("pathfinding failed: {0}")]
    Path(#[from] GridError),

    /// The action referenced a customer or table the world no longer has.
    #[error("action references a missing entity")]
    MissingEntity,
}

pub type AgentResult<T> = Result<T, AgentError>;
