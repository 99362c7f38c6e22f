//! Structured observability: everything the tick loop reports.

use ds_core::{CustomerId, ServoId, Tick};
use ds_floor::CustomerState;
use ds_planner::Action;

/// One externally interesting occurrence inside a tick.
///
/// Events are the only trace the simulation produces; tests and output
/// writers subscribe to them instead of parsing text.
#[derive(Clone, Debug, PartialEq)]
pub enum SimEvent {
    CustomerSpawned {
        tick:     Tick,
        customer: CustomerId,
    },
    CustomerStateChanged {
        tick:     Tick,
        customer: CustomerId,
        from:     CustomerState,
        to:       CustomerState,
    },
    /// The planner committed a servo to an action (reservations already
    /// applied).
    ActionSelected {
        tick:   Tick,
        servo:  ServoId,
        action: Action,
    },
    /// Pathing succeeded; the servo is executing.
    PathComputed {
        tick:      Tick,
        servo:     ServoId,
        waypoints: usize,
    },
    /// Pathing or effect application failed; reservations were released.
    ActionFailed {
        tick:   Tick,
        servo:  ServoId,
        action: Action,
        reason: String,
    },
    /// The watchdog cancelled an action that ran too long.
    ActionAborted {
        tick:   Tick,
        servo:  ServoId,
        action: Action,
    },
    /// The servo reached its goal and the effect was applied.
    ActionCompleted {
        tick:   Tick,
        servo:  ServoId,
        action: Action,
    },
    /// A customer left the floor (either satisfied or walking out).
    CustomerDeparted {
        tick:            Tick,
        customer:        CustomerId,
        satisfaction:    i32,
        wait_time:       u32,
        finished_eating: bool,
        /// Amount this customer settled into the profit balance.
        profit:          f32,
    },
}

/// End-of-tick aggregate, delivered to
/// [`SimObserver::on_tick_end`](crate::SimObserver::on_tick_end).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSummary {
    pub tick: Tick,
    /// Balance after this tick's settlements and wages.
    pub profit: f32,
    /// Customers still on the floor.
    pub active_customers: usize,
    /// Of those, customers still queueing for a seat.
    pub queued_customers: usize,
    /// Servos mid-action.
    pub executing_servos: usize,
    /// Customers that have departed since tick 0.
    pub completed_customers: usize,
}
