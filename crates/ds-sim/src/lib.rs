//! `ds-sim` — world orchestration and the tick loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`world`]    | `World` — entities, `advance_tick`, `advance_frame` |
//! | [`builder`]  | `SimBuilder` — validated world construction         |
//! | [`event`]    | `SimEvent`, `TickSummary`                           |
//! | [`observer`] | `SimObserver`, `NoopObserver`, `RecordingObserver`  |
//! | [`error`]    | `SimError`, `SimResult<T>`                          |
//!
//! # Tick structure
//!
//! ```text
//! advance_tick:
//!   ① Spawn     — periodic customer arrival into the queue
//!   ② Customers — FSM + timers for every active customer; freed tables
//!                 and settled profit applied from the reported outcomes
//!   ③ Servos    — watchdog, then one planner consultation per idle servo;
//!                 selected actions are pathed immediately (failures
//!                 release their reservations)
//!   ④ Frames    — frames_per_tick motion frames; completed actions apply
//!                 their world effects
//!   ⑤ Wages     — per-minute wage deduction
//!   ⑥ Sweep     — departed customers move to the completed set and the
//!                 queue re-packs
//! ```
//!
//! Every externally interesting occurrence is delivered to a
//! [`SimObserver`] as a [`SimEvent`]; the loop itself never prints.

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod world;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{SimEvent, TickSummary};
pub use observer::{NoopObserver, RecordingObserver, SimObserver};
pub use world::World;
