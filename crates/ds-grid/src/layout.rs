//! The dining-floor layout: grid dimensions, table placement, and the fixed
//! anchor points the rest of the simulation navigates between.

use ds_core::{GridCell, Vec2};

/// Static description of a restaurant floor.
///
/// All cell coordinates are grid-space; `cell_size` converts to world
/// (pixel) space.  The default layout is the reference diner: an 800×600
/// floor at 80 px per cell (10×7 cells), six tables in two rows, the food
/// window on the kitchen row, and a customer queue along the left side.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorLayout {
    /// Grid width in cells.
    pub grid_width: i32,
    /// Grid height in cells.
    pub grid_height: i32,
    /// World-space size of one cell, in pixels.
    pub cell_size: f32,

    /// Cells occupied by tables.  Each must be an interior cell; the
    /// nav-grid builder rejects duplicates and boundary placements.
    pub table_cells: Vec<GridCell>,

    /// The fixed cell servos path to for dish pickup.
    pub food_window_cell: GridCell,

    /// Where servos stand when the world is built.
    pub servo_station: GridCell,

    /// World-space position of the head of the customer queue.
    pub queue_anchor: Vec2,
    /// Vertical spacing between queued customers.
    pub queue_spacing: f32,
}

impl FloorLayout {
    /// World-space width of the floor.
    #[inline]
    pub fn width_px(&self) -> f32 {
        self.grid_width as f32 * self.cell_size
    }

    /// World-space height of the floor.
    #[inline]
    pub fn height_px(&self) -> f32 {
        self.grid_height as f32 * self.cell_size
    }

    /// Queue position for the customer at `index` (0 = head of queue).
    #[inline]
    pub fn queue_position(&self, index: usize) -> Vec2 {
        Vec2::new(
            self.queue_anchor.x,
            self.queue_anchor.y + index as f32 * self.queue_spacing,
        )
    }
}

impl Default for FloorLayout {
    fn default() -> Self {
        Self {
            grid_width:  10,
            grid_height: 7,
            cell_size:   80.0,
            table_cells: vec![
                GridCell::new(3, 3),
                GridCell::new(5, 3),
                GridCell::new(7, 3),
                GridCell::new(3, 5),
                GridCell::new(5, 5),
                GridCell::new(7, 5),
            ],
            food_window_cell: GridCell::new(6, 1),
            servo_station:    GridCell::new(9, 6),
            queue_anchor:     Vec2::new(100.0, 180.0),
            queue_spacing:    60.0,
        }
    }
}
