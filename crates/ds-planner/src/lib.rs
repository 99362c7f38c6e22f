//! `ds-planner` — per-tick task selection for servos.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`action`]  | `Action` — the closed set of servo tasks          |
//! | [`greedy`]  | `Planner` trait, `GreedyPlanner`                  |
//!
//! # Reservation model
//!
//! Selection and reservation are one atomic step: the planner flips the
//! claim flags (`order_claimed`, `seat_assigned`, `Table::occupied`) at
//! the moment it emits an action, not when the servo arrives.  Planning
//! runs sequentially over servos within a tick, so two servos can never
//! observe the same order or table as available.

pub mod action;
pub mod greedy;


pub use action::Action;
pub use greedy::{GreedyPlanner, Planner};
