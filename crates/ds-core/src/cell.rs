//! Integer tile coordinates on the navigation grid.

use std::fmt;

/// A grid cell address.  Signed so off-grid neighbor candidates can be
/// represented and then rejected by a bounds check, rather than wrapping.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> GridCell {
        GridCell::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbors, in the fixed expansion order used by
    /// the pathfinder: +y, +x, −y, −x.
    #[inline]
    pub fn neighbors4(self) -> [GridCell; 4] {
        [
            self.offset(0, 1),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(-1, 0),
        ]
    }

    /// Manhattan distance — the admissible, consistent heuristic for
    /// 4-connected unit-cost grids.
    #[inline]
    pub fn manhattan(self, other: GridCell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
