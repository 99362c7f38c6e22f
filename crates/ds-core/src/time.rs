//! Simulation time model.
//!
//! # Design
//!
//! Time advances on two scales:
//!
//! - **Tick** — the coarse decision unit.  Customer FSM updates, planner
//!   evaluation, and reservations all happen at tick boundaries.  One tick
//!   represents one simulated minute.
//! - **Frame** — the fine motion-integration unit.  Several frames normally
//!   elapse per tick; a tick driven from real time may also contain zero
//!   frames if not enough wall time has accumulated.
//!
//! Using an integer tick as the canonical decision clock keeps all timer
//! arithmetic exact (no floating-point drift); frames only ever touch
//! kinematic state.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (1 tick = 1 simulated minute).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The current tick plus the tick↔seconds mapping.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many real seconds one tick represents when driven in real time.
    pub seconds_per_tick: f32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(seconds_per_tick: f32) -> Self {
        Self { seconds_per_tick, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated minutes since tick 0 (1 tick = 1 minute).
    #[inline]
    pub fn elapsed_minutes(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.elapsed_minutes();
        write!(f, "{} ({:02}:{:02})", self.current_tick, m / 60, m % 60)
    }
}

// ── TickAccumulator ───────────────────────────────────────────────────────────

/// Converts variable real-time frame deltas into whole simulation ticks.
///
/// Real-time drivers feed every frame's `dt` into [`absorb`][Self::absorb]
/// and run one simulation tick per returned count.  A frame that arrives
/// before a full tick's worth of seconds has accumulated yields zero ticks.
///
/// The bundled deterministic driver never needs this — it runs a fixed
/// `frames_per_tick` per tick.  It is provided for external front ends
/// that drive the world from a render loop with measured frame times.
#[derive(Clone, Debug, Default)]
pub struct TickAccumulator {
    acc: f32,
}

impl TickAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dt` seconds of real time; return how many whole ticks elapsed.
    pub fn absorb(&mut self, dt: f32, seconds_per_tick: f32) -> u32 {
        self.acc += dt;
        let mut ticks = 0;
        while self.acc >= seconds_per_tick {
            self.acc -= seconds_per_tick;
            ticks += 1;
        }
        ticks
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically constructed in the application crate (or deserialized from
/// TOML/JSON with the `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Ticks after which customer spawning stops (the run drains after).
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of servo agents on the floor.
    pub servo_count: usize,

    /// A new customer arrives every this many ticks.
    pub spawn_interval_ticks: u64,

    /// Extra ticks of uniform jitter added to each spawn interval
    /// (0 = strictly periodic arrivals).
    pub spawn_jitter_ticks: u64,

    /// Real seconds represented by one tick when driven in real time.
    pub seconds_per_tick: f32,

    /// Motion-integration frames per tick in the deterministic driver.
    pub frames_per_tick: u32,

    /// Profit balance at tick 0.
    pub starting_capital: f32,

    /// Hourly wage per servo, deducted per simulated minute.
    pub servo_wage_per_hour: f32,

    /// Watchdog: a servo executing one action longer than this aborts it.
    pub max_executing_ticks: u64,
}

impl SimConfig {
    /// The tick at which spawning ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// The fixed `dt` for one frame in the deterministic driver.
    #[inline]
    pub fn frame_dt(&self) -> f32 {
        self.seconds_per_tick / self.frames_per_tick as f32
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.seconds_per_tick)
    }
}

impl Default for SimConfig {
    /// The reference dinner-rush scenario: 250 minutes of arrivals every
    /// 5 minutes, 3 servos, 2 motion frames per tick.
    fn default() -> Self {
        Self {
            total_ticks:         250,
            seed:                42,
            servo_count:         3,
            spawn_interval_ticks: 5,
            spawn_jitter_ticks:  0,
            seconds_per_tick:    0.2,
            frames_per_tick:     2,
            starting_capital:    500.0,
            servo_wage_per_hour: 20.0,
            max_executing_ticks: 120,
        }
    }
}
