//! `Customer` and its once-per-tick update.

use ds_core::{CustomerId, TableId, Tick, Vec2};

use crate::state::CustomerState;

/// Wait-time thresholds (ticks) for the escalation transitions.
pub const UNHAPPY_AT: u32 = 10;
pub const ANGRY_AT: u32 = 20;
pub const LEAVE_AT: u32 = 30;

/// Satisfaction is held in `[0, 100]`.
pub const INITIAL_SATISFACTION: i32 = 50;
pub const WAIT_PENALTY: i32 = 20;
pub const SEATED_BONUS: i32 = 15;
pub const FOOD_BONUS: i32 = 15;
pub const FINISHED_BONUS: i32 = 10;

/// Kitchen prep time and eating duration, in ticks.
pub const DISH_PREP_TICKS: u32 = 5;
pub const EATING_TICKS: u32 = 10;

/// Profit settlement amounts.
pub const PROFIT_MEAL: f32 = 50.0;
pub const PROFIT_SATISFIED_BONUS: f32 = 10.0;
pub const PROFIT_WALKOUT_PENALTY: f32 = -30.0;
pub const SATISFIED_THRESHOLD: i32 = 30;

/// Per-tick glide: move this fraction of the remaining distance toward
/// the table, snapping once within `ARRIVAL_SNAP`.
const TABLE_GLIDE: f32 = 0.8;
const ARRIVAL_SNAP: f32 = 1.0;

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// A state transition observed during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateChange {
    pub from: CustomerState,
    pub to:   CustomerState,
}

/// What one customer tick did to the world, reported back to the tick
/// loop rather than applied in place.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StepOutcome {
    /// The transition that fired, if any (at most one per tick).
    pub transition: Option<StateChange>,
    /// A table the customer vacated this tick; the loop clears its
    /// `occupied` flag.
    pub released_table: Option<TableId>,
    /// Profit settled this tick, exactly once per customer.
    pub profit: Option<f32>,
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// One customer, from spawn to sweep.
///
/// External actors flip `seat_assigned`, `order_claimed`, and
/// `has_received_food`; everything else is driven by [`advance_tick`].
///
/// [`advance_tick`]: Customer::advance_tick
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:         CustomerId,
    pub spawn_tick: Tick,
    pub position:   Vec2,
    pub state:      CustomerState,

    /// Ticks spent before physically reaching a table.
    pub wait_time:    u32,
    /// Clamped to `[0, 100]` by every mutation.
    pub satisfaction: i32,

    /// Physically at the table center (ends the glide and the wait clock).
    pub arrived:            bool,
    pub seat_assigned:      bool,
    pub order_claimed:      bool,
    pub order_ready:        bool,
    pub has_received_food:  bool,
    pub finished_eating:    bool,
    pub marked_for_removal: bool,

    /// Assigned table, by identity.  Cleared when the table is released.
    pub table: Option<TableId>,

    dish_timer:          u32,
    order_timer_started: bool,
    eating_time:         u32,
    profit_settled:      bool,
}

impl Customer {
    pub fn new(id: CustomerId, spawn_tick: Tick, position: Vec2) -> Self {
        Self {
            id,
            spawn_tick,
            position,
            state: CustomerState::Waiting,
            wait_time: 0,
            satisfaction: INITIAL_SATISFACTION,
            arrived: false,
            seat_assigned: false,
            order_claimed: false,
            order_ready: false,
            has_received_food: false,
            finished_eating: false,
            marked_for_removal: false,
            table: None,
            dish_timer: DISH_PREP_TICKS,
            order_timer_started: false,
            eating_time: 0,
            profit_settled: false,
        }
    }

    /// One simulation tick: wait clock, state machine, table glide, dish
    /// timer, eating timer, profit settlement — in that order.
    ///
    /// `table_center` is the assigned table's center, when one is
    /// assigned; the customer glides toward it until arrival.
    pub fn advance_tick(&mut self, table_center: Option<Vec2>) -> StepOutcome {
        let mut outcome = StepOutcome::default();

        if !self.arrived {
            self.wait_time += 1;
        }

        outcome.transition = self.step_state(&mut outcome.released_table);

        if let Some(center) = table_center
            && self.table.is_some()
            && !self.arrived
        {
            let diff = center - self.position;
            if diff.length() > ARRIVAL_SNAP {
                self.position += diff * TABLE_GLIDE;
            } else {
                self.position = center;
                self.arrived = true;
            }
        }

        // Kitchen timer starts the same tick the Ordered transition
        // fires and counts down once per tick until the dish is ready.
        if self.state == CustomerState::Ordered && self.order_timer_started && !self.order_ready {
            self.dish_timer = self.dish_timer.saturating_sub(1);
            if self.dish_timer == 0 {
                self.order_ready = true;
            }
        }

        if self.state == CustomerState::Eating {
            self.eating_time += 1;
        }

        outcome.profit = self.settle_profit();
        outcome
    }

    /// The transition table.  Evaluated top to bottom; the first rule
    /// that fires short-circuits the rest, so each tick advances the
    /// state by at most one step.
    fn step_state(&mut self, released: &mut Option<TableId>) -> Option<StateChange> {
        use CustomerState::*;
        let from = self.state;

        // Escalation outranks seating: a customer assigned a seat on the
        // same tick a threshold trips still escalates first and seats on
        // the next evaluation.
        let to = match self.state {
            Waiting if self.wait_time >= UNHAPPY_AT => {
                self.add_satisfaction(-WAIT_PENALTY);
                Unhappy
            }
            Unhappy if self.wait_time >= ANGRY_AT => {
                self.add_satisfaction(-WAIT_PENALTY);
                Angry
            }
            Angry if self.wait_time >= LEAVE_AT => {
                self.satisfaction = 0;
                self.marked_for_removal = true;
                *released = self.table.take();
                Leaving
            }
            Waiting | Unhappy | Angry if self.seat_assigned => {
                self.add_satisfaction(SEATED_BONUS);
                Seated
            }
            Seated => {
                self.order_timer_started = true;
                Ordered
            }
            Ordered if self.has_received_food => {
                self.add_satisfaction(FOOD_BONUS);
                Eating
            }
            Eating if self.eating_time >= EATING_TICKS => {
                self.marked_for_removal = true;
                self.finished_eating = true;
                self.add_satisfaction(FINISHED_BONUS);
                *released = self.table.take();
                Leaving
            }
            _ => return None,
        };

        self.state = to;
        Some(StateChange { from, to })
    }

    /// Final accounting, exactly once per customer: the meal price plus a
    /// satisfaction bonus for completed meals, a flat penalty for
    /// walkouts.
    fn settle_profit(&mut self) -> Option<f32> {
        if self.profit_settled || !(self.marked_for_removal || self.state == CustomerState::Leaving)
        {
            return None;
        }
        self.profit_settled = true;
        let amount = if self.finished_eating {
            let bonus = if self.satisfaction >= SATISFIED_THRESHOLD {
                PROFIT_SATISFIED_BONUS
            } else {
                0.0
            };
            PROFIT_MEAL + bonus
        } else {
            PROFIT_WALKOUT_PENALTY
        };
        Some(amount)
    }

    /// Apply a satisfaction delta, clamped to `[0, 100]`.
    pub fn add_satisfaction(&mut self, delta: i32) {
        self.satisfaction = (self.satisfaction + delta).clamp(0, 100);
    }
}
