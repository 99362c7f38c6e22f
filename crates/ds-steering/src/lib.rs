//! `ds-steering` — continuous-space steering forces.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`obstacle`]  | `ObstacleView`, `WallSegment`, room wall construction      |
//! | [`behaviors`] | `seek`, `arrive`, `wall_avoidance`, `obstacle_avoidance`   |
//! | [`combine`]   | `SteeringParams`, `SteeringTarget`, `combined_force`       |
//!
//! # Force model
//!
//! Every behavior is a pure function from kinematic state to a world-space
//! force.  The combiner sums them with fixed weights — path-following 1,
//! wall avoidance 3, obstacle avoidance 5 — so collision safety dominates
//! path fidelity, then clamps the result to the caller's maximum force.
//! Integration (force → velocity → position) belongs to the agent
//! controller, not to this crate.

pub mod behaviors;
pub mod combine;
pub mod obstacle;

#[cfg(test)]
mod tests;

pub use behaviors::{arrive, obstacle_avoidance, seek, wall_avoidance};
pub use combine::{combined_force, SteeringParams, SteeringTarget};
pub use obstacle::{room_walls, ObstacleView, WallSegment};
