//! Fluent builder for constructing a [`World`].

use ds_agent::Servo;
use ds_core::{ServoId, SimConfig, TableId};
use ds_floor::Table;
use ds_grid::{AStarPathfinder, FloorLayout, NavGridBuilder, Pathfinder};
use ds_planner::{GreedyPlanner, Planner};

use crate::error::{SimError, SimResult};
use crate::world::{layout_walls, World};

/// Fluent builder for [`World<P, F>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick count, seed, servo count, wages, …
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                  |
/// |------------------|--------------------------|
/// | `.layout(l)`     | `FloorLayout::default()` |
/// | `.planner(p)`    | `GreedyPlanner`          |
/// | `.pathfinder(f)` | `AStarPathfinder`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = SimBuilder::new(SimConfig::default()).build()?;
/// world.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: Planner = GreedyPlanner, F: Pathfinder = AStarPathfinder> {
    config:     SimConfig,
    layout:     Option<FloorLayout>,
    planner:    P,
    pathfinder: F,
}

impl SimBuilder<GreedyPlanner, AStarPathfinder> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            layout: None,
            planner: GreedyPlanner,
            pathfinder: AStarPathfinder,
        }
    }
}

impl<P: Planner, F: Pathfinder> SimBuilder<P, F> {
    /// Use a non-default floor layout.
    pub fn layout(mut self, layout: FloorLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Swap the goal-selection strategy.
    pub fn planner<P2: Planner>(self, planner: P2) -> SimBuilder<P2, F> {
        SimBuilder {
            config: self.config,
            layout: self.layout,
            planner,
            pathfinder: self.pathfinder,
        }
    }

    /// Swap the path-search strategy.
    pub fn pathfinder<F2: Pathfinder>(self, pathfinder: F2) -> SimBuilder<P, F2> {
        SimBuilder {
            config: self.config,
            layout: self.layout,
            planner: self.planner,
            pathfinder,
        }
    }

    /// Validate the configuration, build the navigation grid, place
    /// tables and servos, and return a ready-to-run [`World`].
    pub fn build(self) -> SimResult<World<P, F>> {
        let config = self.config;
        if config.servo_count == 0 {
            return Err(SimError::Config("servo_count must be at least 1".into()));
        }
        if config.frames_per_tick == 0 {
            return Err(SimError::Config("frames_per_tick must be at least 1".into()));
        }
        if config.spawn_interval_ticks == 0 {
            return Err(SimError::Config(
                "spawn_interval_ticks must be at least 1".into(),
            ));
        }

        let layout = self.layout.unwrap_or_default();
        let grid = NavGridBuilder::new(&layout).build()?;
        let walls = layout_walls(&layout);

        let tables = layout
            .table_cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| Table::new(TableId(i as u16), cell, grid.cell_to_world(cell)))
            .collect();

        let station = grid.cell_to_world(layout.servo_station);
        let servos = (0..config.servo_count)
            .map(|i| Servo::new(ServoId(i as u32), station, layout.cell_size))
            .collect();

        Ok(World::new(
            config,
            layout,
            grid,
            walls,
            tables,
            servos,
            self.planner,
            self.pathfinder,
        ))
    }
}
