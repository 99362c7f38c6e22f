//! The world: all entities plus the two update entry points.

use ds_agent::{apply_effect, release_reservation, Servo};
use ds_core::{CustomerId, GridCell, SimClock, SimConfig, SimRng, TableId, Tick};
use ds_floor::{Customer, Table};
use ds_grid::{FloorLayout, NavGrid, Pathfinder};
use ds_planner::{Action, Planner};
use ds_steering::{ObstacleView, WallSegment};

use crate::event::{SimEvent, TickSummary};
use crate::observer::SimObserver;

/// Collision radii the avoidance behaviors see for non-servo obstacles.
const TABLE_OBSTACLE_RADIUS: f32 = 20.0;
const CUSTOMER_OBSTACLE_RADIUS: f32 = 20.0;

/// The simulation world.
///
/// Owns every entity and the derived navigation structures.  Driven by
/// [`advance_tick`] (decisions) and, within it, [`advance_frame`]
/// (motion); a real-time front end may also call `advance_frame`
/// directly between ticks with measured `dt`s.
///
/// [`advance_tick`]: World::advance_tick
/// [`advance_frame`]: World::advance_frame
pub struct World<P: Planner, F: Pathfinder> {
    pub config: SimConfig,
    pub layout: FloorLayout,

    pub customers: Vec<Customer>,
    /// Departed customers, in departure order.
    pub completed: Vec<Customer>,
    pub tables:    Vec<Table>,
    pub servos:    Vec<Servo>,
    /// Running balance: starting capital plus settlements minus wages.
    pub profit:    f32,

    pub(crate) grid:  NavGrid,
    pub(crate) walls: Vec<WallSegment>,
    pub(crate) clock: SimClock,

    planner:    P,
    pathfinder: F,
    rng:        SimRng,

    next_spawn:       Tick,
    next_customer_id: u32,
}

impl<P: Planner, F: Pathfinder> World<P, F> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        config: SimConfig,
        layout: FloorLayout,
        grid: NavGrid,
        walls: Vec<WallSegment>,
        tables: Vec<Table>,
        servos: Vec<Servo>,
        planner: P,
        pathfinder: F,
    ) -> Self {
        let profit = config.starting_capital;
        let next_spawn = Tick(config.spawn_interval_ticks);
        let clock = config.make_clock();
        let rng = SimRng::new(config.seed);
        let mut world = Self {
            config,
            layout,
            customers: Vec::new(),
            completed: Vec::new(),
            tables,
            servos,
            profit,
            grid,
            walls,
            clock,
            planner,
            pathfinder,
            rng,
            next_spawn,
            next_customer_id: 1,
        };
        // The floor opens with one customer already in the queue.
        world.spawn_customer();
        world
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn grid(&self) -> &NavGrid {
        &self.grid
    }

    // ── Tick level ────────────────────────────────────────────────────────

    /// Run the whole scenario: `total_ticks` ticks, then `on_sim_end`.
    pub fn run(&mut self, observer: &mut dyn SimObserver) {
        for _ in 0..self.config.total_ticks {
            self.advance_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// One simulation tick: spawn, customer updates, planning, motion
    /// frames, wages, sweep.
    pub fn advance_tick(&mut self, observer: &mut dyn SimObserver) {
        self.clock.advance();
        let tick = self.clock.current_tick;

        // ① Spawn.
        if tick == self.next_spawn && tick <= self.config.end_tick() {
            let id = self.spawn_customer();
            observer.on_event(&SimEvent::CustomerSpawned { tick, customer: id });
        }

        // ② Customer FSM + timers.  Outcomes are applied here so table
        //    and profit mutations stay in one place.
        for i in 0..self.customers.len() {
            let center = self.customers[i]
                .table
                .and_then(|id| self.tables.iter().find(|t| t.id == id))
                .map(|t| t.center);
            let outcome = self.customers[i].advance_tick(center);
            let customer = self.customers[i].id;

            if let Some(change) = outcome.transition {
                observer.on_event(&SimEvent::CustomerStateChanged {
                    tick,
                    customer,
                    from: change.from,
                    to: change.to,
                });
            }
            if let Some(table) = outcome.released_table {
                self.free_table(table);
            }
            if let Some(amount) = outcome.profit {
                self.profit += amount;
            }
        }

        // ③ Servos: watchdog, then one planner pass per idle servo.
        //    Sequential by design — reservations made for one servo are
        //    visible to the next.
        for s in 0..self.servos.len() {
            let servo_id = self.servos[s].id;

            if let Some(aborted) = self.servos[s].advance_tick(self.config.max_executing_ticks as u32)
            {
                release_reservation(aborted, &mut self.customers, &mut self.tables);
                observer.on_event(&SimEvent::ActionAborted {
                    tick,
                    servo: servo_id,
                    action: aborted,
                });
            }

            if !self.servos[s].is_idle() {
                continue;
            }
            let carrying = self.servos[s].carrying;
            let Some(action) = self.planner.select_action(
                carrying,
                &mut self.customers,
                &mut self.tables,
                self.layout.food_window_cell,
            ) else {
                continue;
            };
            observer.on_event(&SimEvent::ActionSelected {
                tick,
                servo: servo_id,
                action,
            });

            let table_cell = self.action_table_cell(&action);
            match self.servos[s].begin_action(action, &self.grid, &self.pathfinder, table_cell) {
                Ok(()) => observer.on_event(&SimEvent::PathComputed {
                    tick,
                    servo: servo_id,
                    waypoints: self.servos[s].waypoints().len(),
                }),
                Err(e) => {
                    release_reservation(action, &mut self.customers, &mut self.tables);
                    observer.on_event(&SimEvent::ActionFailed {
                        tick,
                        servo: servo_id,
                        action,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // ④ Motion frames.
        let dt = self.config.frame_dt();
        for _ in 0..self.config.frames_per_tick {
            self.advance_frame(dt, observer);
        }

        // ⑤ Wages: hourly rate, paid per simulated minute.
        self.profit -= self.config.servo_wage_per_hour / 60.0 * self.servos.len() as f32;

        // ⑥ Sweep departures and re-pack the queue.
        let mut i = 0;
        while i < self.customers.len() {
            if self.customers[i].marked_for_removal {
                let done = self.customers.remove(i);
                // A dish in hand for the departed customer is binned, so
                // the servo takes new work instead of idling with it.
                for servo in &mut self.servos {
                    if servo.carrying == Some(done.id) {
                        servo.carrying = None;
                    }
                }
                observer.on_event(&SimEvent::CustomerDeparted {
                    tick,
                    customer: done.id,
                    satisfaction: done.satisfaction,
                    wait_time: done.wait_time,
                    finished_eating: done.finished_eating,
                    profit: departure_amount(&done),
                });
                self.completed.push(done);
            } else {
                i += 1;
            }
        }
        self.repack_queue();

        observer.on_tick_end(&self.summary());
    }

    // ── Frame level ───────────────────────────────────────────────────────

    /// One motion frame for every servo.  Completed actions apply their
    /// effects immediately.
    pub fn advance_frame(&mut self, dt: f32, observer: &mut dyn SimObserver) {
        let tick = self.clock.current_tick;
        for s in 0..self.servos.len() {
            let obstacles = self.obstacles_for(s);
            let done = self.servos[s].advance_frame(dt, &self.walls, &obstacles);
            let Some(action) = done else { continue };
            let servo_id = self.servos[s].id;
            match apply_effect(&mut self.servos[s], action, &mut self.customers, &self.tables) {
                Ok(()) => observer.on_event(&SimEvent::ActionCompleted {
                    tick,
                    servo: servo_id,
                    action,
                }),
                Err(e) => {
                    release_reservation(action, &mut self.customers, &mut self.tables);
                    observer.on_event(&SimEvent::ActionFailed {
                        tick,
                        servo: servo_id,
                        action,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Everything servo `s` must steer around: tables, the other servos,
    /// and customers currently seated (queueing customers are outside
    /// the service floor).
    fn obstacles_for(&self, s: usize) -> Vec<ObstacleView> {
        let mut views: Vec<ObstacleView> = self
            .tables
            .iter()
            .map(|t| ObstacleView::new(t.center, TABLE_OBSTACLE_RADIUS))
            .collect();
        views.extend(
            self.servos
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != s)
                .map(|(_, servo)| servo.obstacle_view()),
        );
        views.extend(
            self.customers
                .iter()
                .filter(|c| c.state == ds_floor::CustomerState::Seated)
                .map(|c| ObstacleView::new(c.position, CUSTOMER_OBSTACLE_RADIUS)),
        );
        views
    }

    fn spawn_customer(&mut self) -> CustomerId {
        let queued = self
            .customers
            .iter()
            .filter(|c| !c.arrived && !c.marked_for_removal)
            .count();
        let position = self.layout.queue_position(queued);
        let id = CustomerId::new(self.next_customer_id);
        self.next_customer_id += 1;
        self.customers
            .push(Customer::new(id, self.clock.current_tick, position));

        let jitter = if self.config.spawn_jitter_ticks > 0 {
            self.rng.gen_range(0..=self.config.spawn_jitter_ticks)
        } else {
            0
        };
        self.next_spawn = self
            .clock
            .current_tick
            .offset(self.config.spawn_interval_ticks + jitter);
        id
    }

    fn free_table(&mut self, id: TableId) {
        if let Some(t) = self.tables.iter_mut().find(|t| t.id == id) {
            t.occupied = false;
        }
    }

    /// Queueing customers stand in spawn order at fixed queue slots.
    fn repack_queue(&mut self) {
        let mut slot = 0;
        for c in &mut self.customers {
            if c.state.is_unseated() {
                c.position = self.layout.queue_position(slot);
                slot += 1;
            }
        }
    }

    fn action_table_cell(&self, action: &Action) -> Option<GridCell> {
        match *action {
            Action::SeatCustomer { table, .. } | Action::DeliverDish { table, .. } => {
                self.tables.iter().find(|t| t.id == table).map(|t| t.cell)
            }
            Action::PickUpDish { .. } => None,
        }
    }

    fn summary(&self) -> TickSummary {
        TickSummary {
            tick: self.clock.current_tick,
            profit: self.profit,
            active_customers: self.customers.len(),
            queued_customers: self
                .customers
                .iter()
                .filter(|c| c.state.is_unseated())
                .count(),
            executing_servos: self.servos.iter().filter(|s| !s.is_idle()).count(),
            completed_customers: self.completed.len(),
        }
    }
}

/// What a departing customer contributed to the balance, re-derived for
/// the departure event (settlement itself happened in the FSM outcome).
fn departure_amount(customer: &Customer) -> f32 {
    use ds_floor::customer::{
        PROFIT_MEAL, PROFIT_SATISFIED_BONUS, PROFIT_WALKOUT_PENALTY, SATISFIED_THRESHOLD,
    };
    if customer.finished_eating {
        let bonus = if customer.satisfaction >= SATISFIED_THRESHOLD {
            PROFIT_SATISFIED_BONUS
        } else {
            0.0
        };
        PROFIT_MEAL + bonus
    } else {
        PROFIT_WALKOUT_PENALTY
    }
}

/// The four room-boundary walls for a layout.
pub(crate) fn layout_walls(layout: &FloorLayout) -> Vec<WallSegment> {
    ds_steering::room_walls(layout.width_px(), layout.height_px()).to_vec()
}
