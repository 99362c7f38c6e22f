//! `ds-agent` — the servo agent controller.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`servo`]  | `Servo` — plan lifecycle, per-frame motion, watchdog        |
//! | [`effect`] | `apply_effect`, `release_reservation`                       |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                              |
//!
//! # Plan lifecycle
//!
//! Idle → Pathing → Executing → Idle.  [`Servo::begin_action`] converts a
//! planner action into waypoints (Pathing); [`Servo::advance_frame`]
//! integrates motion and reports the completed action; the tick loop then
//! applies the action's world effect via [`apply_effect`].  Failure to
//! path is recoverable: the servo aborts to Idle and the caller releases
//! the action's reservations with [`release_reservation`] so the next
//! planning pass can re-offer the work.
//!
//! Tick-level decisions ([`Servo::begin_action`], [`Servo::advance_tick`])
//! are never invoked mid-frame; frame-level motion never mutates plan
//! state beyond waypoint-cursor advancement and completion.

pub mod effect;
pub mod error;
pub mod servo;


pub use effect::{apply_effect, release_reservation};
pub use error::{AgentError, AgentResult};
pub use servo::Servo;
