//! `ds-grid` — navigation grid, floor layout, and pathfinding.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`layout`] | `FloorLayout` — tables, corridors, anchor positions     |
//! | [`nav`]    | `NavGrid` (walkability field), `NavGridBuilder`         |
//! | [`path`]   | `Pathfinder` trait, `Path`, `AStarPathfinder`           |
//! | [`error`]  | `GridError`, `GridResult<T>`                            |
//!
//! # Walkability invariants
//!
//! `NavGridBuilder` guarantees, for every accepted layout:
//!
//! - the domain boundary ring is blocked;
//! - the kitchen rows, food-window row, and queue column are walkable;
//! - every table's own cell is blocked and its eight neighboring cells are
//!   forced walkable, so at least one approach cell always exists.

pub mod error;
pub mod layout;
pub mod nav;
pub mod path;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use layout::FloorLayout;
pub use nav::{NavGrid, NavGridBuilder};
pub use path::{AStarPathfinder, Path, Pathfinder};
