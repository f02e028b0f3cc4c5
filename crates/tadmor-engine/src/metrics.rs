//! Per-run metrics for the time stepper.
//!
//! [`RunStats`] summarizes one call to
//! [`Central2D::run()`](crate::Central2D::run): how many steps were taken,
//! the range of step sizes, and how close the run came to the stability
//! bound.

/// Counters and extrema collected during a single `run()`.
///
/// Wall-clock time is in microseconds. Step sizes and simulated time are
/// in the solver's time units. `min_dt` and `max_dt` stay at zero for a
/// run that took no steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Half-steps taken. Always even.
    pub half_steps: u64,
    /// Macro-steps (even + odd half-step pairs) taken.
    pub macro_steps: u64,
    /// Smallest half-step size used.
    pub min_dt: f64,
    /// Largest half-step size used.
    pub max_dt: f64,
    /// Largest Courant number `max(cx/dx, cy/dy)·dt` over all macro-steps.
    pub max_courant: f64,
    /// Simulated time advanced by the run.
    pub simulated: f64,
    /// Wall-clock time for the entire run, in microseconds.
    pub elapsed_us: u64,
}

impl RunStats {
    /// Fold one macro-step of half-step size `dt` and Courant number
    /// `courant` into the totals.
    pub(crate) fn record_macro_step(&mut self, dt: f64, courant: f64) {
        if self.macro_steps == 0 {
            self.min_dt = dt;
            self.max_dt = dt;
        } else {
            self.min_dt = self.min_dt.min(dt);
            self.max_dt = self.max_dt.max(dt);
        }
        self.max_courant = self.max_courant.max(courant);
        self.macro_steps += 1;
        self.half_steps += 2;
        self.simulated += 2.0 * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = RunStats::default();
        assert_eq!(s.half_steps, 0);
        assert_eq!(s.macro_steps, 0);
        assert_eq!(s.min_dt, 0.0);
        assert_eq!(s.max_dt, 0.0);
        assert_eq!(s.max_courant, 0.0);
        assert_eq!(s.simulated, 0.0);
        assert_eq!(s.elapsed_us, 0);
    }

    #[test]
    fn record_tracks_extrema_and_counts() {
        let mut s = RunStats::default();
        s.record_macro_step(0.25, 0.45);
        s.record_macro_step(0.5, 0.4);
        s.record_macro_step(0.125, 0.1);
        assert_eq!(s.macro_steps, 3);
        assert_eq!(s.half_steps, 6);
        assert_eq!(s.min_dt, 0.125);
        assert_eq!(s.max_dt, 0.5);
        assert_eq!(s.max_courant, 0.45);
        assert_eq!(s.simulated, 1.75);
    }
}
