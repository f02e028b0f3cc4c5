//! Benchmark profiles for the Tadmor solver.
//!
//! - [`reference_profile`]: 200x200 dam break (40K cells), the classic
//!   timing configuration
//! - [`stress_profile`]: 1000x1000 dam break (1M cells)
//! - [`noisy_profile`]: seeded random pond for limiter-heavy workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tadmor_engine::{Central2D, ConfigError, SolverConfig};
use tadmor_physics::{noisy_pond, scenario, MinMod, Scenario, ShallowWater};

/// Shallow-water solver with the default limiter.
pub type ShallowSolver = Central2D<ShallowWater, MinMod>;

fn dam_break(cells: usize) -> Result<ShallowSolver, ConfigError> {
    let config = SolverConfig::new(Scenario::DOMAIN, Scenario::DOMAIN, cells, cells);
    let mut sim = Central2D::new(config, ShallowWater::default(), MinMod::default())?;
    sim.initialize(scenario::dam_break);
    Ok(sim)
}

/// Build the reference profile: dam break on a 200x200 grid.
pub fn reference_profile() -> Result<ShallowSolver, ConfigError> {
    dam_break(200)
}

/// Build the stress profile: dam break on a 1000x1000 grid.
pub fn stress_profile() -> Result<ShallowSolver, ConfigError> {
    dam_break(1000)
}

/// Build a `cells`×`cells` pond with 5% noise in every field.
pub fn noisy_profile(cells: usize, seed: u64) -> Result<ShallowSolver, ConfigError> {
    let config = SolverConfig::new(Scenario::DOMAIN, Scenario::DOMAIN, cells, cells);
    let mut sim = Central2D::new(config, ShallowWater::default(), MinMod::default())?;
    sim.initialize(noisy_pond(seed, 0.05));
    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_is_valid() {
        let sim = reference_profile().unwrap();
        assert_eq!(sim.xsize(), 200);
        assert_eq!(sim.ysize(), 200);
        let report = sim.diagnostics().unwrap();
        assert_eq!(report.h_max, 1.5);
        assert_eq!(report.h_min, 1.0);
    }

    #[test]
    fn noisy_profile_is_reproducible() {
        let a = noisy_profile(16, 7).unwrap();
        let b = noisy_profile(16, 7).unwrap();
        for k in 0..3 {
            assert_eq!(a.interior_field(k), b.interior_field(k));
        }
    }
}
