//! Tadmor dam break: a raised water column collapsing on a periodic pond.
//!
//! Demonstrates:
//!   1. Configuring a solver on the standard 2×2 domain
//!   2. Initializing from a named scenario
//!   3. Advancing in fixed frames and printing the solution check
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example dam_break -- [scenario] [cells] [frames]
//!
//! Defaults: `dam_break`, 200 cells per side, 50 frames of 0.01.

use std::error::Error;
use std::io::{self, Write};

use tadmor_engine::{Central2D, SolverConfig};
use tadmor_physics::{MinMod, Scenario, ShallowWater};

// ─── Run parameters ─────────────────────────────────────────────

const DEFAULT_CELLS: usize = 200;
const DEFAULT_FRAMES: usize = 50;
const FRAME_TIME: f64 = 0.01;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "dam_break".to_string());
    let cells: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_CELLS);
    let frames: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_FRAMES);

    let scenario = Scenario::by_name(&name).ok_or_else(|| {
        let known: Vec<_> = Scenario::names().collect();
        format!("unknown scenario '{name}' (known: {})", known.join(", "))
    })?;
    println!("{}: {}", scenario.name(), scenario.summary());

    let config = SolverConfig::new(Scenario::DOMAIN, Scenario::DOMAIN, cells, cells);
    let mut sim = Central2D::new(config, ShallowWater::default(), MinMod::default())?;
    sim.initialize(|x, y, cell| scenario.apply(x, y, cell));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    sim.solution_check(&mut out)?;

    let mut half_steps = 0;
    for _ in 0..frames {
        let stats = sim.run(FRAME_TIME)?;
        half_steps += stats.half_steps;
        sim.solution_check(&mut out)?;
    }
    out.flush()?;

    println!(
        "t = {:.3} after {half_steps} half-steps on {}x{} cells",
        sim.time(),
        sim.xsize(),
        sim.ysize()
    );
    Ok(())
}
