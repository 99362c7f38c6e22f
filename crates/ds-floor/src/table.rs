//! Tables on the dining floor.

use ds_core::{GridCell, TableId, Vec2};

/// A table: a fixed grid cell with a world-space center and a single
/// occupancy flag.  Created once at world setup and never destroyed;
/// `occupied` toggles as customers are seated and leave.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub id:       TableId,
    pub cell:     GridCell,
    pub center:   Vec2,
    pub capacity: u32,
    pub occupied: bool,
}

impl Table {
    pub fn new(id: TableId, cell: GridCell, center: Vec2) -> Self {
        Self {
            id,
            cell,
            center,
            capacity: 4,
            occupied: false,
        }
    }
}
