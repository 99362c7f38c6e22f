//! World-mutating action effects, applied exactly once on completion,
//! and the inverse bookkeeping for aborted actions.

use ds_floor::customer::{FOOD_BONUS, SEATED_BONUS};
use ds_floor::{Customer, CustomerState, Table};
use ds_planner::Action;

use crate::error::{AgentError, AgentResult};
use crate::servo::Servo;

/// Apply `action`'s effect to the world.
///
/// - `SeatCustomer`: customer becomes `Seated` at its table, with the
///   seating bonus.
/// - `PickUpDish`: the servo now carries the customer's dish.
/// - `DeliverDish`: customer becomes `Eating`, food flag set, food bonus
///   granted, the servo's hands freed.
pub fn apply_effect(
    servo: &mut Servo,
    action: Action,
    customers: &mut [Customer],
    tables: &[Table],
) -> AgentResult<()> {
    match action {
        Action::SeatCustomer { customer, table } => {
            let customer = find_mut(customers, customer)?;
            let table = tables
                .iter()
                .find(|t| t.id == table)
                .ok_or(AgentError::MissingEntity)?;
            customer.state = CustomerState::Seated;
            customer.table = Some(table.id);
            customer.seat_assigned = true;
            customer.add_satisfaction(SEATED_BONUS);
        }
        Action::PickUpDish { customer, .. } => {
            // Ensure the customer is still in play before committing the
            // carry.
            find_mut(customers, customer)?;
            servo.carrying = Some(customer);
        }
        Action::DeliverDish { customer, .. } => {
            let customer = find_mut(customers, customer)?;
            customer.state = CustomerState::Eating;
            customer.has_received_food = true;
            customer.add_satisfaction(FOOD_BONUS);
            servo.carrying = None;
        }
    }
    Ok(())
}

/// Undo the reservations an aborted `action` made at planning time, so
/// the next planning pass can re-offer the work instead of starving it.
///
/// A carried dish is deliberately kept on an aborted delivery: the
/// planner's carry rule re-emits the delivery next tick.
pub fn release_reservation(action: Action, customers: &mut [Customer], tables: &mut [Table]) {
    match action {
        Action::SeatCustomer { customer, table } => {
            // The FSM consumes the seating one tick after planning.  An
            // abort arriving after that finds the customer legitimately
            // `Seated`; only an unconsumed reservation rolls back.
            if let Some(c) = customers.iter_mut().find(|c| c.id == customer)
                && c.state.is_unseated()
            {
                c.seat_assigned = false;
                c.table = None;
            }
            // The table may have been re-reserved for someone else since
            // (the customer walked out mid-action); only free it if no
            // live customer holds it.
            let still_claimed = customers.iter().any(|c| c.table == Some(table));
            if !still_claimed
                && let Some(t) = tables.iter_mut().find(|t| t.id == table)
            {
                t.occupied = false;
            }
        }
        Action::PickUpDish { customer, .. } => {
            if let Some(c) = customers.iter_mut().find(|c| c.id == customer) {
                c.order_claimed = false;
            }
        }
        Action::DeliverDish { .. } => {}
    }
}

fn find_mut(
    customers: &mut [Customer],
    id: ds_core::CustomerId,
) -> AgentResult<&mut Customer> {
    customers
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(AgentError::MissingEntity)
}
