//! `ds-floor` — customers, tables, and the customer state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`state`]    | `CustomerState` — the seven-state lifecycle               |
//! | [`customer`] | `Customer`, per-tick update, `StepOutcome`, profit        |
//! | [`table`]    | `Table`                                                   |
//!
//! # Mutation discipline
//!
//! A customer's per-tick update never reaches into other entities: state
//! transitions that have side effects on the world (a freed table, a
//! settled profit amount) are *reported* in the returned [`StepOutcome`]
//! and applied by the tick loop.  The exceptions flow the other way —
//! seating, pickup, and delivery effects set the `seat_assigned`,
//! `order_claimed`, and `has_received_food` flags from outside, and the
//! state machine reacts on its next evaluation.

pub mod customer;
pub mod state;
pub mod table;


pub use customer::{Customer, StateChange, StepOutcome};
pub use state::CustomerState;
pub use table::Table;
