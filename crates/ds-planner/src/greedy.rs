//! The greedy longest-wait-first planner.

use ds_core::{CustomerId, GridCell};
use ds_floor::{Customer, CustomerState, Table};

use crate::action::Action;

/// Goal-selection seam.  Run once per tick for each idle servo;
/// reservations are applied to `customers`/`tables` in place.
pub trait Planner {
    fn select_action(
        &self,
        carrying: Option<CustomerId>,
        customers: &mut [Customer],
        tables: &mut [Table],
        food_window: GridCell,
    ) -> Option<Action>;
}

/// Fixed priority tiers, first match wins: deliver what you carry, then
/// fetch the longest-waiting ready order, then seat the longest-waiting
/// customer at the first free table.
///
/// Longest-wait ties break to the earliest-spawned customer (slice
/// order).  No scoring, no backtracking.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyPlanner;

impl Planner for GreedyPlanner {
    fn select_action(
        &self,
        carrying: Option<CustomerId>,
        customers: &mut [Customer],
        tables: &mut [Table],
        food_window: GridCell,
    ) -> Option<Action> {
        // 1) A carried dish always goes out first; no scan.
        if let Some(customer) = carrying {
            let table = customers
                .iter()
                .find(|c| c.id == customer)
                .and_then(|c| c.table)?;
            return Some(Action::DeliverDish { customer, table });
        }

        // 2) Fetch the longest-waiting ready, unclaimed order.
        let ready = longest_wait(customers, |c| {
            c.state == CustomerState::Ordered && c.order_ready && !c.order_claimed
        });
        if let Some(i) = ready {
            let customer = &mut customers[i];
            customer.order_claimed = true;
            return Some(Action::PickUpDish {
                customer: customer.id,
                source:   food_window,
            });
        }

        // 3) Seat the longest-waiting unseated customer at the first
        //    free table.
        let waiting = longest_wait(customers, |c| c.state.is_unseated() && !c.seat_assigned)?;
        let table = tables.iter_mut().find(|t| !t.occupied)?;
        table.occupied = true;
        let customer = &mut customers[waiting];
        customer.seat_assigned = true;
        customer.table = Some(table.id);
        Some(Action::SeatCustomer {
            customer: customer.id,
            table:    table.id,
        })
    }
}

/// Index of the first customer with the maximum `wait_time` among those
/// passing `filter`.
fn longest_wait(customers: &[Customer], filter: impl Fn(&Customer) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in customers.iter().enumerate() {
        if !filter(c) {
            continue;
        }
        let better = best.is_none_or(|b| c.wait_time > customers[b].wait_time);
        if better {
            best = Some(i);
        }
    }
    best
}
