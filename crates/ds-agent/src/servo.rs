//! The servo: plan lifecycle and per-frame motion.

use ds_core::{CustomerId, GridCell, ServoId, Vec2};
use ds_grid::{NavGrid, Pathfinder};
use ds_planner::Action;
use ds_steering::{combined_force, ObstacleView, SteeringParams, SteeringTarget, WallSegment};

use crate::error::{AgentError, AgentResult};

/// Idle friction per frame, with a snap to zero below a small magnitude.
const IDLE_DAMPING: f32 = 0.95;
const IDLE_STOP_BELOW: f32 = 0.1;

/// A waypoint is reached within one tile of it; the final waypoint uses
/// arrival steering once within 1.5 tiles.
const ARRIVE_WINDOW: f32 = 1.5;

/// One servo agent.
///
/// Owns continuous kinematic state plus the current plan: the action, its
/// waypoints, and a cursor.  `executing` gates re-planning — the planner
/// is only consulted for idle servos.
#[derive(Clone, Debug)]
pub struct Servo {
    pub id:       ServoId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Last non-zero movement direction; stale while stopped.
    pub heading:  Vec2,
    pub params:   SteeringParams,

    /// Customer whose dish is in hand.  Exclusive: set by the pickup
    /// effect, cleared by delivery.
    pub carrying: Option<CustomerId>,

    action:             Option<Action>,
    waypoints:          Vec<Vec2>,
    cursor:             usize,
    executing:          bool,
    /// Ticks spent on the current action, for the watchdog.
    executing_ticks:    u32,
    waypoint_threshold: f32,
}

impl Servo {
    pub fn new(id: ServoId, position: Vec2, waypoint_threshold: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            heading: Vec2::new(0.0, -1.0),
            params: SteeringParams::default(),
            carrying: None,
            action: None,
            waypoints: Vec::new(),
            cursor: 0,
            executing: false,
            executing_ticks: 0,
            waypoint_threshold,
        }
    }

    /// Idle iff there is no action and no waypoints left.
    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.executing && self.action.is_none()
    }

    #[inline]
    pub fn current_action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    #[inline]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    // ── Tick level ────────────────────────────────────────────────────────

    /// Commit to `action`: compute the goal cell and a path to it.
    ///
    /// A plan identical to the current one is a no-op, so an in-progress
    /// action is never restarted.  On failure (no approach cell, no
    /// path) the servo aborts to idle and returns the error; the caller
    /// is responsible for releasing the action's reservations.
    pub fn begin_action(
        &mut self,
        action: Action,
        grid: &NavGrid,
        pathfinder: &dyn Pathfinder,
        table_cell: Option<GridCell>,
    ) -> AgentResult<()> {
        if self.action.as_ref() == Some(&action) {
            return Ok(());
        }

        self.action = Some(action);
        self.velocity = Vec2::ZERO;
        self.executing_ticks = 0;

        let goal = match action {
            Action::PickUpDish { source, .. } => source,
            Action::SeatCustomer { table, .. } | Action::DeliverDish { table, .. } => {
                let Some(cell) = table_cell else {
                    self.clear_plan();
                    return Err(AgentError::MissingEntity);
                };
                match approach_cell(grid, cell) {
                    Some(c) => c,
                    None => {
                        self.clear_plan();
                        return Err(AgentError::NoApproachCell(table));
                    }
                }
            }
        };

        let start = grid.world_to_cell(self.position);
        match pathfinder.find_path(grid, start, goal) {
            Ok(path) => {
                self.waypoints = path.waypoints;
                self.cursor = 0;
                self.executing = true;
                Ok(())
            }
            Err(e) => {
                self.clear_plan();
                Err(AgentError::Path(e))
            }
        }
    }

    /// Once-per-tick bookkeeping while executing.  Returns the aborted
    /// action if the watchdog fires (the caller releases reservations).
    pub fn advance_tick(&mut self, max_executing_ticks: u32) -> Option<Action> {
        if !self.executing {
            return None;
        }
        self.executing_ticks += 1;
        if self.executing_ticks > max_executing_ticks {
            let aborted = self.action.take();
            self.clear_plan();
            return aborted;
        }
        None
    }

    // ── Frame level ───────────────────────────────────────────────────────

    /// One motion frame.  Steers toward the current waypoint, integrates,
    /// and advances the cursor on arrival.  Returns the action when the
    /// final waypoint is passed; the caller applies its effect.
    pub fn advance_frame(
        &mut self,
        dt: f32,
        walls: &[WallSegment],
        obstacles: &[ObstacleView],
    ) -> Option<Action> {
        if !self.executing || self.action.is_none() {
            // Idle: decelerate smoothly rather than stopping dead.
            self.velocity = self.velocity * IDLE_DAMPING;
            if self.velocity.length() < IDLE_STOP_BELOW {
                self.velocity = Vec2::ZERO;
            }
            self.position += self.velocity * dt;
            return None;
        }

        if self.cursor < self.waypoints.len() {
            let target = self.waypoints[self.cursor];
            let dist = self.position.distance(target);
            let last = self.cursor == self.waypoints.len() - 1;

            let path_target = if last && dist < self.waypoint_threshold * ARRIVE_WINDOW {
                SteeringTarget::Arrive {
                    target,
                    slow_radius: self.waypoint_threshold,
                }
            } else {
                SteeringTarget::Seek(target)
            };

            let force = combined_force(
                self.position,
                self.velocity,
                path_target,
                walls,
                obstacles,
                &self.params,
            );

            self.velocity = (self.velocity + force * dt).truncated(self.params.max_speed);
            if self.velocity.length_sq() > 0.0 {
                self.heading = self.velocity.normalized();
            }
            self.position += self.velocity * dt;

            if self.position.distance(self.waypoints[self.cursor]) < self.waypoint_threshold {
                self.cursor += 1;
                if self.cursor >= self.waypoints.len() {
                    return self.finish();
                }
            }
            None
        } else {
            self.finish()
        }
    }

    fn finish(&mut self) -> Option<Action> {
        let done = self.action.take();
        self.clear_plan();
        done
    }

    fn clear_plan(&mut self) {
        self.action = None;
        self.waypoints.clear();
        self.cursor = 0;
        self.executing = false;
        self.executing_ticks = 0;
    }

    /// The servo as an obstacle for other agents.
    #[inline]
    pub fn obstacle_view(&self) -> ObstacleView {
        ObstacleView::new(self.position, self.params.radius)
    }
}

/// First walkable orthogonal neighbor of `cell`, scanned below, above,
/// right, left — the fixed order that makes approach choice
/// deterministic.
pub fn approach_cell(grid: &NavGrid, cell: GridCell) -> Option<GridCell> {
    const SCAN: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
    SCAN.iter()
        .map(|&(dx, dy)| cell.offset(dx, dy))
        .find(|&c| grid.is_walkable(c))
}
