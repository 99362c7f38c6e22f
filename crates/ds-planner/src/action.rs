//! The closed set of tasks a servo can commit to.

use std::fmt;

use ds_core::{CustomerId, GridCell, TableId};

/// One servo task.  Equality is by variant plus referenced identities and
/// is what "same plan, don't re-plan" compares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Walk to `table` and seat `customer` there.
    SeatCustomer { customer: CustomerId, table: TableId },
    /// Walk to the food window at `source` and pick up `customer`'s dish.
    PickUpDish { customer: CustomerId, source: GridCell },
    /// Walk to `table` and hand the carried dish to `customer`.
    DeliverDish { customer: CustomerId, table: TableId },
}

impl Action {
    /// The customer the action is for.
    pub fn customer(&self) -> CustomerId {
        match *self {
            Action::SeatCustomer { customer, .. }
            | Action::PickUpDish { customer, .. }
            | Action::DeliverDish { customer, .. } => customer,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SeatCustomer { customer, table } => {
                write!(f, "seat {customer} at {table}")
            }
            Action::PickUpDish { customer, source } => {
                write!(f, "pick up dish for {customer} at {source}")
            }
            Action::DeliverDish { customer, table } => {
                write!(f, "deliver dish to {customer} at {table}")
            }
        }
    }
}
