//! The [`Central2D`] solver: state ownership and the time loop.

use std::ops::{Index, IndexMut};
use std::time::Instant;

use smallvec::SmallVec;
use tadmor_core::{Limiter, Parity, Physics, SolverError, WaveSpeeds};
use tadmor_grid::{apply_periodic, FieldGrid, GridLayout};

use crate::cfl::{CflController, StepPlan};
use crate::config::{ConfigError, SolverConfig};
use crate::metrics::RunStats;
use crate::stepper::{self, Scratch};

/// Landing steps below this fraction of the stable step are logged.
const TINY_LANDING_FRACTION: f64 = 0.01;

/// Jiang–Tadmor staggered central-scheme solver on a periodic rectangle.
///
/// Owns the state `U` and every derived array; all storage is allocated
/// by [`new`](Self::new) and reused in place. Physics and limiter are
/// held by value and resolved at compile time.
///
/// Between calls to [`run`](Self::run) the state always lives on the
/// primary grid: entry `(x, y)` is the average over the cell centered at
/// `((x + ½)·dx, (y + ½)·dy)`.
///
/// # Examples
///
/// ```
/// use tadmor_engine::{Central2D, SolverConfig};
/// use tadmor_physics::{scenario, MinMod, ShallowWater};
///
/// let config = SolverConfig::new(2.0, 2.0, 32, 32);
/// let mut sim = Central2D::new(config, ShallowWater::default(), MinMod::default()).unwrap();
/// sim.initialize(scenario::dam_break);
/// let stats = sim.run(0.05).unwrap();
/// assert_eq!(stats.half_steps % 2, 0);
/// assert!(sim.diagnostics().unwrap().h_min > 0.0);
/// ```
#[derive(Debug)]
pub struct Central2D<P: Physics, L: Limiter> {
    layout: GridLayout,
    width: f64,
    height: f64,
    dx: f64,
    dy: f64,
    controller: CflController,
    u: FieldGrid,
    scratch: Scratch,
    physics: P,
    limiter: L,
    time: f64,
    parity: Parity,
    last_stats: RunStats,
}

impl<P: Physics, L: Limiter> Central2D<P, L> {
    /// Validate `config` and allocate a zeroed solver.
    pub fn new(config: SolverConfig, physics: P, limiter: L) -> Result<Self, ConfigError> {
        let layout = config.layout(P::NFIELD)?;
        log::debug!(
            "central2d: {}x{} cells, {} fields, physics={}, limiter={}, cfl={}",
            layout.nx(),
            layout.ny(),
            layout.nfield(),
            physics.name(),
            limiter.name(),
            config.cfl,
        );
        Ok(Self {
            layout,
            width: config.width,
            height: config.height,
            dx: config.dx(),
            dy: config.dy(),
            controller: CflController::new(config.cfl),
            u: FieldGrid::new(layout),
            scratch: Scratch::new(layout),
            physics,
            limiter,
            time: 0.0,
            parity: Parity::Primary,
            last_stats: RunStats::default(),
        })
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Interior cells along x.
    pub fn xsize(&self) -> usize {
        self.layout.nx()
    }

    /// Interior cells along y.
    pub fn ysize(&self) -> usize {
        self.layout.ny()
    }

    /// Physical extent along x.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Physical extent along y.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Cell width.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell height.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Target CFL number.
    pub fn cfl(&self) -> f64 {
        self.controller.cfl()
    }

    /// Simulated time advanced so far, summed over every `run`.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Grid the state currently lives on. Always
    /// [`Parity::Primary`] outside `run`.
    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Statistics of the most recent `run`.
    pub fn last_stats(&self) -> &RunStats {
        &self.last_stats
    }

    /// The physics collaborator.
    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// The limiter collaborator.
    pub fn limiter(&self) -> &L {
        &self.limiter
    }

    /// Value of field `k` at interior cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Out-of-range coordinates either panic or alias a ghost cell; no
    /// bounds checking is done beyond slice indexing.
    #[inline]
    pub fn get(&self, k: usize, x: usize, y: usize) -> f32 {
        self[(k, x, y)]
    }

    /// Overwrite field `k` at interior cell `(x, y)`.
    #[inline]
    pub fn set(&mut self, k: usize, x: usize, y: usize, value: f32) {
        self[(k, x, y)] = value;
    }

    /// Copy of field `k` over the interior, row-major (`ysize` rows of
    /// `xsize` values).
    pub fn interior_field(&self, k: usize) -> Vec<f32> {
        let (nx, ny) = (self.layout.nx(), self.layout.ny());
        let data = self.u.as_slice();
        let mut out = Vec::with_capacity(nx * ny);
        for y in 0..ny {
            let start = self.layout.interior_offset(k, 0, y);
            out.extend_from_slice(&data[start..start + nx]);
        }
        out
    }

    /// Padded state storage, ghosts included.
    pub(crate) fn state(&self) -> &FieldGrid {
        &self.u
    }

    /// Set every interior cell from `init(x, y, cell)`, called once per
    /// cell in row-major order with the cell-center coordinates.
    ///
    /// `cell` holds the current values of all fields and is written back
    /// after the call.
    pub fn initialize<F>(&mut self, mut init: F)
    where
        F: FnMut(f64, f64, &mut [f32]),
    {
        let nfield = self.layout.nfield();
        let mut cell: SmallVec<[f32; 4]> = SmallVec::from_elem(0.0, nfield);
        for iy in 0..self.layout.ny() {
            let y = (iy as f64 + 0.5) * self.dy;
            for ix in 0..self.layout.nx() {
                let x = (ix as f64 + 0.5) * self.dx;
                for (k, c) in cell.iter_mut().enumerate() {
                    *c = self[(k, ix, iy)];
                }
                init(x, y, cell.as_mut_slice());
                for (k, &c) in cell.iter().enumerate() {
                    self[(k, ix, iy)] = c;
                }
            }
        }
    }

    // ── Time stepping ──────────────────────────────────────────────

    /// Advance the solution by `duration` time units from the current
    /// time.
    ///
    /// Always takes whole (even, odd) pairs of half-steps, so the state
    /// returns on the primary grid. The final pair shrinks to land on
    /// `duration` exactly. `run(0.0)` does nothing.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidDuration`] if `duration` is negative,
    ///   NaN, or infinite. The state is untouched.
    /// - [`SolverError::StepCollapsed`] if the stability bound yields a
    ///   zero or non-finite step. The state holds the last completed
    ///   macro-step.
    pub fn run(&mut self, duration: f64) -> Result<RunStats, SolverError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SolverError::InvalidDuration { value: duration });
        }
        let started = Instant::now();
        let mut stats = RunStats::default();
        let mut t = 0.0;
        let mut done = duration == 0.0;

        while !done {
            let speeds = self.prepare_even_half_step();
            let plan = self
                .controller
                .plan(t, duration, speeds, self.dx, self.dy);
            if !(plan.dt > 0.0 && plan.dt.is_finite()) {
                self.time += t;
                self.last_stats = stats;
                return Err(SolverError::StepCollapsed {
                    time: self.time,
                    dt: plan.dt,
                });
            }
            if plan.finishing && plan.dt < TINY_LANDING_FRACTION * plan.cfl_dt {
                log::warn!(
                    "landing step dt={:.3e} is below {}% of the stable step {:.3e}",
                    plan.dt,
                    TINY_LANDING_FRACTION * 100.0,
                    plan.cfl_dt,
                );
            }

            self.advance_half_step(&plan);
            self.prepare_odd_half_step();
            self.advance_half_step(&plan);

            stats.record_macro_step(plan.dt, plan.courant);
            t += 2.0 * plan.dt;
            done = plan.finishing;
            log::debug!(
                "macro step {}: dt={:.4e}, courant={:.3}, t={:.6}",
                stats.macro_steps,
                plan.dt,
                plan.courant,
                self.time + t,
            );
        }
        debug_assert!(self.parity.is_primary(), "run ended on the staggered grid");

        self.time += duration;
        stats.simulated = duration;
        stats.elapsed_us = started.elapsed().as_micros() as u64;
        log::info!(
            "run complete: {} macro steps, simulated {} in {} us (t={})",
            stats.macro_steps,
            duration,
            stats.elapsed_us,
            self.time,
        );
        self.last_stats = stats.clone();
        Ok(stats)
    }

    /// Boundary fill, fluxes, wave speeds and limited derivatives for the
    /// half-step that opens a pair.
    fn prepare_even_half_step(&mut self) -> WaveSpeeds {
        apply_periodic(&mut self.u);
        let speeds = stepper::compute_fg_speeds(&self.physics, &self.u, &mut self.scratch);
        stepper::limited_derivs(&self.limiter, &self.u, &mut self.scratch);
        speeds
    }

    /// As [`prepare_even_half_step`](Self::prepare_even_half_step) without
    /// the wave-speed sweep: the odd half-step reuses the pair's dt.
    fn prepare_odd_half_step(&mut self) {
        apply_periodic(&mut self.u);
        stepper::compute_fg(&self.physics, &self.u, &mut self.scratch);
        stepper::limited_derivs(&self.limiter, &self.u, &mut self.scratch);
    }

    fn advance_half_step(&mut self, plan: &StepPlan) {
        let dtcdx2 = (0.5 * plan.dt / self.dx) as f32;
        let dtcdy2 = (0.5 * plan.dt / self.dy) as f32;
        stepper::compute_step(
            &self.physics,
            &mut self.u,
            &mut self.scratch,
            self.parity,
            dtcdx2,
            dtcdy2,
        );
        self.parity = self.parity.toggled();
    }
}

impl<P: Physics, L: Limiter> Index<(usize, usize, usize)> for Central2D<P, L> {
    type Output = f32;

    #[inline]
    fn index(&self, (k, x, y): (usize, usize, usize)) -> &f32 {
        &self.u.as_slice()[self.layout.interior_offset(k, x, y)]
    }
}

impl<P: Physics, L: Limiter> IndexMut<(usize, usize, usize)> for Central2D<P, L> {
    #[inline]
    fn index_mut(&mut self, (k, x, y): (usize, usize, usize)) -> &mut f32 {
        let o = self.layout.interior_offset(k, x, y);
        &mut self.u.as_mut_slice()[o]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use tadmor_core::{Fields, FieldsMut};
    use tadmor_physics::{scenario, Centered, MinMod, ShallowWater};
    use tadmor_test_utils::LinearAdvection;

    fn shallow(nx: usize, ny: usize) -> Central2D<ShallowWater, MinMod> {
        Central2D::new(
            SolverConfig::new(2.0, 2.0, nx, ny),
            ShallowWater::default(),
            MinMod::default(),
        )
        .unwrap()
    }

    #[test]
    fn new_reports_geometry() {
        let sim = shallow(20, 10);
        assert_eq!(sim.xsize(), 20);
        assert_eq!(sim.ysize(), 10);
        assert_eq!(sim.dx(), 0.1);
        assert_eq!(sim.dy(), 0.2);
        assert_eq!(sim.cfl(), 0.45);
        assert_eq!(sim.width(), 2.0);
        assert_eq!(sim.height(), 2.0);
        assert_eq!(sim.time(), 0.0);
        assert_eq!(sim.parity(), Parity::Primary);
        assert_eq!(sim.physics().name(), "ShallowWater");
        assert_eq!(sim.limiter().name(), "MinMod");
    }

    #[test]
    fn new_rejects_bad_config() {
        let result = Central2D::new(
            SolverConfig::new(1.0, 1.0, 0, 4),
            ShallowWater::default(),
            MinMod::default(),
        );
        assert!(matches!(result, Err(ConfigError::Grid(_))));
    }

    #[test]
    fn initialize_uses_cell_centers() {
        let mut sim = shallow(4, 2);
        let mut seen = Vec::new();
        sim.initialize(|x, y, cell| {
            seen.push((x, y));
            cell[0] = (x + 10.0 * y) as f32;
        });
        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], (0.25, 0.5));
        assert_eq!(seen[7], (1.75, 1.5));
        assert_eq!(sim.get(0, 1, 1), 0.75 + 15.0);
        assert_eq!(sim.get(1, 1, 1), 0.0);
    }

    #[test]
    fn interior_field_is_row_major() {
        let mut sim = shallow(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                sim.set(2, x, y, (10 * y + x) as f32);
            }
        }
        assert_eq!(sim.interior_field(2), vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn run_zero_is_a_no_op() {
        let mut sim = shallow(8, 8);
        sim.initialize(scenario::dam_break);
        let before = sim.interior_field(0);
        let stats = sim.run(0.0).unwrap();
        assert_eq!(stats.half_steps, 0);
        assert_eq!(sim.interior_field(0), before);
        assert_eq!(sim.time(), 0.0);
    }

    #[test]
    fn run_rejects_invalid_durations() {
        let mut sim = shallow(8, 8);
        sim.initialize(scenario::pond);
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                sim.run(bad),
                Err(SolverError::InvalidDuration { .. })
            ));
        }
        assert_eq!(sim.time(), 0.0);
    }

    #[test]
    fn run_collapses_on_infinite_speed() {
        // Zero height makes the shallow-water speeds infinite.
        let mut sim = shallow(4, 4);
        sim.initialize(scenario::pond);
        sim.set(0, 1, 1, 0.0);
        sim.set(1, 1, 1, 1.0);
        let err = sim.run(1.0).unwrap_err();
        assert!(matches!(err, SolverError::StepCollapsed { .. }));
        assert!(sim.parity().is_primary());
    }

    #[test]
    fn repeated_runs_accumulate_time() {
        let mut sim = shallow(16, 16);
        sim.initialize(scenario::wave);
        sim.run(0.01).unwrap();
        sim.run(0.02).unwrap();
        assert!((sim.time() - 0.03).abs() < 1e-12);
        assert_eq!(sim.last_stats().simulated, 0.02);
        assert!(sim.parity().is_primary());
    }

    #[test]
    fn single_field_physics_runs() {
        let mut sim = Central2D::new(
            SolverConfig::new(1.0, 1.0, 16, 16),
            LinearAdvection::new(1.0, 0.5),
            Centered,
        )
        .unwrap();
        sim.initialize(|x, _y, cell| {
            cell[0] = (1.0 + 0.5 * (2.0 * std::f64::consts::PI * x).sin()) as f32;
        });
        let stats = sim.run(0.1).unwrap();
        assert!(stats.macro_steps > 0);
        assert!(stats.max_courant <= 0.45 * (1.0 + 1e-9));
    }

    /// Linear advection that counts its wave-speed sweeps.
    struct CountingSpeeds {
        inner: LinearAdvection,
        sweeps: Cell<u64>,
    }

    impl Physics for CountingSpeeds {
        const NFIELD: usize = 1;

        fn name(&self) -> &str {
            "counting"
        }

        fn flux(&self, f: FieldsMut<'_>, g: FieldsMut<'_>, u: Fields<'_>) {
            self.inner.flux(f, g, u);
        }

        fn wave_speed(&self, speeds: &mut WaveSpeeds, u: Fields<'_>) {
            self.sweeps.set(self.sweeps.get() + 1);
            self.inner.wave_speed(speeds, u);
        }
    }

    #[test]
    fn wave_speeds_measured_once_per_macro_step() {
        let physics = CountingSpeeds {
            inner: LinearAdvection::new(1.0, 0.5),
            sweeps: Cell::new(0),
        };
        let mut sim =
            Central2D::new(SolverConfig::new(1.0, 1.0, 8, 8), physics, Centered).unwrap();
        sim.initialize(|_x, _y, cell| cell[0] = 1.0);
        let stats = sim.run(0.3).unwrap();
        assert!(stats.macro_steps > 1);
        assert_eq!(sim.physics().sweeps.get(), stats.macro_steps);
    }

    proptest! {
        #[test]
        fn accessor_round_trips(
            k in 0usize..3,
            x in 0usize..7,
            y in 0usize..5,
            value in -1.0e3f32..1.0e3,
        ) {
            let mut sim = shallow(7, 5);
            sim.set(k, x, y, value);
            prop_assert_eq!(sim.get(k, x, y), value);
            prop_assert_eq!(sim[(k, x, y)], value);
            prop_assert_eq!(sim.state().get(k, x + 3, y + 3), value);
        }
    }
}
