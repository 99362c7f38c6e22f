//! `NavGrid` — the boolean walkability field the pathfinder searches over.

use ds_core::{GridCell, Vec2};

use crate::{FloorLayout, GridError, GridResult};

// ── NavGrid ───────────────────────────────────────────────────────────────────

/// A 2-D walkable/blocked field indexed by integer cell coordinates, plus
/// the cell↔world conversions every consumer needs.
///
/// Rebuild via [`NavGridBuilder`] whenever tables or layout change; the
/// grid itself is immutable during a tick.
#[derive(Clone, Debug)]
pub struct NavGrid {
    width:     i32,
    height:    i32,
    cell_size: f32,
    /// Row-major blocked flags, `true` = blocked.
    blocked:   Vec<bool>,
}

impl NavGrid {
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn in_bounds(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// `true` iff `cell` is in bounds and not blocked.
    #[inline]
    pub fn is_walkable(&self, cell: GridCell) -> bool {
        self.in_bounds(cell) && !self.blocked[self.idx(cell)]
    }

    /// World-space center of `cell`.  Out-of-range coordinates are clamped
    /// to the nearest valid cell rather than rejected.
    pub fn cell_to_world(&self, cell: GridCell) -> Vec2 {
        let x = cell.x.clamp(0, self.width - 1);
        let y = cell.y.clamp(0, self.height - 1);
        Vec2::new(
            (x as f32 + 0.5) * self.cell_size,
            (y as f32 + 0.5) * self.cell_size,
        )
    }

    /// The cell containing the world-space `position`, clamped to bounds.
    pub fn world_to_cell(&self, position: Vec2) -> GridCell {
        let x = (position.x / self.cell_size) as i32;
        let y = (position.y / self.cell_size) as i32;
        GridCell::new(x.clamp(0, self.width - 1), y.clamp(0, self.height - 1))
    }

    #[inline]
    fn idx(&self, cell: GridCell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }

    fn set_blocked(&mut self, cell: GridCell, blocked: bool) {
        if self.in_bounds(cell) {
            let i = self.idx(cell);
            self.blocked[i] = blocked;
        }
    }
}

// ── NavGridBuilder ────────────────────────────────────────────────────────────

/// Builds a [`NavGrid`] from a [`FloorLayout`], applying the walkability
/// invariants in a fixed order: boundary ring → corridors → tables.
///
/// Table carving runs last so a table placed next to a corridor still gets
/// its guaranteed walkable approach ring.
pub struct NavGridBuilder<'a> {
    layout: &'a FloorLayout,
}

impl<'a> NavGridBuilder<'a> {
    pub fn new(layout: &'a FloorLayout) -> Self {
        Self { layout }
    }

    pub fn build(self) -> GridResult<NavGrid> {
        let l = self.layout;
        if l.grid_width < 4 || l.grid_height < 4 {
            return Err(GridError::InvalidLayout(format!(
                "grid {}x{} is too small for a boundary ring plus interior",
                l.grid_width, l.grid_height
            )));
        }

        let mut grid = NavGrid {
            width:     l.grid_width,
            height:    l.grid_height,
            cell_size: l.cell_size,
            blocked:   vec![false; (l.grid_width * l.grid_height) as usize],
        };

        // Boundary ring.
        for x in 0..l.grid_width {
            grid.set_blocked(GridCell::new(x, 0), true);
            grid.set_blocked(GridCell::new(x, l.grid_height - 1), true);
        }
        for y in 0..l.grid_height {
            grid.set_blocked(GridCell::new(0, y), true);
            grid.set_blocked(GridCell::new(l.grid_width - 1, y), true);
        }

        // Kitchen corridor: the top two rows, minus the side walls.
        for x in 1..l.grid_width - 1 {
            grid.set_blocked(GridCell::new(x, 0), false);
            grid.set_blocked(GridCell::new(x, 1), false);
        }

        // Food-window corridor along row 2.
        for x in 3..l.grid_width - 1 {
            grid.set_blocked(GridCell::new(x, 2), false);
        }

        // Customer queue along column 1.
        for y in 2..l.grid_height - 1 {
            grid.set_blocked(GridCell::new(1, y), false);
        }

        // Tables: block the table cell, force the eight neighbors walkable.
        for (i, &cell) in l.table_cells.iter().enumerate() {
            if !grid.in_bounds(cell)
                || cell.x == 0
                || cell.y == 0
                || cell.x == l.grid_width - 1
                || cell.y == l.grid_height - 1
            {
                return Err(GridError::InvalidLayout(format!(
                    "table {i} at {cell} is not an interior cell"
                )));
            }
            if l.table_cells[..i].contains(&cell) {
                return Err(GridError::InvalidLayout(format!(
                    "table {i} duplicates the cell {cell}"
                )));
            }
            grid.set_blocked(cell, true);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    grid.set_blocked(cell.offset(dx, dy), false);
                }
            }
        }

        if !grid.is_walkable(l.food_window_cell) {
            return Err(GridError::InvalidLayout(format!(
                "food window cell {} is blocked",
                l.food_window_cell
            )));
        }

        Ok(grid)
    }
}
