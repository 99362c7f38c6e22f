//! Grid pathfinding: the [`Pathfinder`] seam and the A* implementation
//! behind it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use ds_core::{GridCell, Vec2};

use crate::{GridError, GridResult, NavGrid};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A route through the grid: the cell sequence from start to goal inclusive,
/// plus the world-space waypoints (cell centers) an agent steers through.
#[derive(Clone, Debug, Default)]
pub struct Path {
    pub cells:     Vec<GridCell>,
    pub waypoints: Vec<Vec2>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ── Pathfinder seam ───────────────────────────────────────────────────────────

/// Route-planning seam.  The simulation only ever asks for a path between
/// two cells on a grid; swapping search strategies is a one-line change at
/// world construction.
pub trait Pathfinder {
    fn find_path(&self, grid: &NavGrid, start: GridCell, goal: GridCell) -> GridResult<Path>;
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// A* over the 4-connected grid with unit step cost and the Manhattan
/// heuristic.
///
/// The start cell is exempt from the walkability check: an agent standing
/// on a blocked cell (its spawn station, say) may depart but never route
/// *through* blocked cells.  The goal must be walkable.
///
/// Ties on f-cost break on `GridCell` ordering, making the chosen path a
/// pure function of the grid and endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn find_path(&self, grid: &NavGrid, start: GridCell, goal: GridCell) -> GridResult<Path> {
        if !grid.in_bounds(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !grid.in_bounds(goal) {
            return Err(GridError::OutOfBounds(goal));
        }
        if !grid.is_walkable(goal) {
            return Err(GridError::BlockedGoal(goal));
        }

        let mut frontier: BinaryHeap<Reverse<(u32, GridCell)>> = BinaryHeap::new();
        let mut came_from: FxHashMap<GridCell, GridCell> = FxHashMap::default();
        let mut cost_so_far: FxHashMap<GridCell, u32> = FxHashMap::default();

        frontier.push(Reverse((start.manhattan(goal), start)));
        cost_so_far.insert(start, 0);

        while let Some(Reverse((_, current))) = frontier.pop() {
            if current == goal {
                let mut cells = vec![goal];
                let mut cursor = goal;
                while let Some(&prev) = came_from.get(&cursor) {
                    cells.push(prev);
                    cursor = prev;
                }
                cells.reverse();
                let waypoints = cells.iter().map(|&c| grid.cell_to_world(c)).collect();
                return Ok(Path { cells, waypoints });
            }

            let next_cost = cost_so_far[&current] + 1;
            for neighbor in current.neighbors4() {
                if !grid.is_walkable(neighbor) {
                    continue;
                }
                let improved = cost_so_far
                    .get(&neighbor)
                    .is_none_or(|&known| next_cost < known);
                if improved {
                    cost_so_far.insert(neighbor, next_cost);
                    came_from.insert(neighbor, current);
                    frontier.push(Reverse((next_cost + neighbor.manhattan(goal), neighbor)));
                }
            }
        }

        Err(GridError::NoPath { from: start, to: goal })
    }
}
