//! `diner` — the reference dinner-rush scenario on the default floor.
//!
//! Runs 250 ticks (one customer every 5 minutes, 3 servos, 6 tables) and
//! writes `customer_results.csv` / `tick_summaries.csv` to `output/diner/`.
//!
//! Run with:
//!   cargo run -p diner --release

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ds_core::{SimConfig, Tick};
use ds_grid::FloorLayout;
use ds_output::{CsvWriter, SimOutputObserver};
use ds_sim::{SimBuilder, SimEvent, SimObserver, TickSummary};

/// Ticks between progress lines on stdout.
const PROGRESS_INTERVAL: u64 = 50;

// ── Console + CSV observer ────────────────────────────────────────────────────

/// Forwards everything to the CSV observer and prints a progress line at
/// fixed tick intervals plus one line per departure.
struct ConsoleObserver {
    csv:        SimOutputObserver<CsvWriter>,
    departures: u64,
    walkouts:   u64,
}

impl SimObserver for ConsoleObserver {
    fn on_event(&mut self, event: &SimEvent) {
        if let SimEvent::CustomerDeparted {
            tick,
            customer,
            satisfaction,
            finished_eating,
            profit,
            ..
        } = event
        {
            self.departures += 1;
            if !finished_eating {
                self.walkouts += 1;
            }
            println!(
                "  {tick}  {customer} departed  sat={satisfaction:>3}  {}  {profit:+.0}",
                if *finished_eating { "fed     " } else { "walk-out" },
            );
        }
        self.csv.on_event(event);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        if summary.tick.0 % PROGRESS_INTERVAL == 0 {
            println!(
                "tick {:>4}  balance={:>8.2}  floor={:>2} (queued {})  servos busy={}",
                summary.tick.0,
                summary.profit,
                summary.active_customers,
                summary.queued_customers,
                summary.executing_servos,
            );
        }
        self.csv.on_tick_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.csv.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SimConfig::default();
    let layout = FloorLayout::default();

    println!("=== diner_sim — dinner rush ===");
    println!(
        "Ticks: {}  |  Seed: {}  |  Servos: {}  |  Tables: {}",
        config.total_ticks,
        config.seed,
        config.servo_count,
        layout.table_cells.len(),
    );
    println!();

    let out_dir = Path::new("output/diner");
    std::fs::create_dir_all(out_dir)?;

    let mut world = SimBuilder::new(config).layout(layout).build()?;
    let mut obs = ConsoleObserver {
        csv:        SimOutputObserver::new(CsvWriter::new(out_dir)?),
        departures: 0,
        walkouts:   0,
    };

    let start = Instant::now();
    world.run(&mut obs);
    let elapsed = start.elapsed().as_secs_f64();

    if let Some(e) = obs.csv.take_error() {
        eprintln!("warning: output incomplete: {e}");
    }

    let fed = obs.departures - obs.walkouts;
    let avg_sat = if world.completed.is_empty() {
        0.0
    } else {
        world.completed.iter().map(|c| c.satisfaction as f64).sum::<f64>()
            / world.completed.len() as f64
    };

    println!();
    println!("Simulation complete in {elapsed:.3}s");
    println!(
        "Departures: {}  (fed {}, walk-outs {})  |  still on floor: {}",
        obs.departures,
        fed,
        obs.walkouts,
        world.customers.len(),
    );
    println!("Average satisfaction: {avg_sat:.1}");
    println!("Final balance: {:.2}", world.profit);
    println!("CSV written to {}", out_dir.display());

    Ok(())
}
