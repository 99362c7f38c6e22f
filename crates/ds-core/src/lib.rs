//! `ds-core` — foundational types for the `diner_sim` service simulation.
//!
//! This crate is a dependency of every other `ds-*` crate.  It intentionally
//! has no `ds-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|---------------------------------------------------|
//! | [`ids`]  | `CustomerId`, `TableId`, `ServoId`                |
//! | [`vec2`] | `Vec2` planar vector algebra                      |
//! | [`cell`] | `GridCell` integer tile coordinates               |
//! | [`time`] | `Tick`, `SimClock`, `TickAccumulator`, `SimConfig`|
//! | [`rng`]  | `SimRng` (seeded `SmallRng` wrapper)              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::GridCell;
pub use ids::{CustomerId, ServoId, TableId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick, TickAccumulator};
pub use vec2::Vec2;
