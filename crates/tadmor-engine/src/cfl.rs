//! CFL-limited step-size selection.

use tadmor_core::WaveSpeeds;

/// The step chosen for one macro-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPlan {
    /// Half-step size, used unchanged by both half-steps of the pair.
    pub dt: f64,
    /// The stability-limited half-step before the landing rule.
    pub cfl_dt: f64,
    /// `true` if this macro-step lands exactly on the target time.
    pub finishing: bool,
    /// Courant number `max(cx/dx, cy/dy)·dt` of the chosen step.
    pub courant: f64,
}

/// Picks the half-step size from the measured wave speeds.
///
/// ```text
/// dt = cfl / max(cx/dx, cy/dy)
/// ```
///
/// If two half-steps of that size would reach or pass the target time,
/// the step shrinks to `(target − t)/2` so the macro-step lands on the
/// target exactly. The landing step is never larger than the stable one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CflController {
    cfl: f64,
}

impl CflController {
    /// Controller targeting Courant number `cfl`.
    pub fn new(cfl: f64) -> Self {
        Self { cfl }
    }

    /// Target Courant number.
    pub fn cfl(&self) -> f64 {
        self.cfl
    }

    /// Plan the next macro-step from time `t` towards `target`.
    pub fn plan(&self, t: f64, target: f64, speeds: WaveSpeeds, dx: f64, dy: f64) -> StepPlan {
        let rate = (f64::from(speeds.cx) / dx).max(f64::from(speeds.cy) / dy);
        let cfl_dt = self.cfl / rate;
        let finishing = t + 2.0 * cfl_dt >= target;
        let dt = if finishing {
            ((target - t) / 2.0).min(cfl_dt)
        } else {
            cfl_dt
        };
        StepPlan {
            dt,
            cfl_dt,
            finishing,
            courant: rate * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dt_follows_fastest_axis() {
        let ctl = CflController::new(0.5);
        let speeds = WaveSpeeds { cx: 2.0, cy: 1.0 };
        // cx/dx = 20, cy/dy = 20 → tie.
        let plan = ctl.plan(0.0, 100.0, speeds, 0.1, 0.05);
        assert_eq!(plan.dt, 0.5 / 20.0);
        assert!(!plan.finishing);
        assert_eq!(plan.dt, plan.cfl_dt);
        assert!((plan.courant - 0.5).abs() < 1e-12);

        let plan = ctl.plan(0.0, 100.0, WaveSpeeds { cx: 1.0, cy: 4.0 }, 0.1, 0.1);
        assert_eq!(plan.dt, 0.5 / 40.0);
    }

    #[test]
    fn landing_step_hits_target() {
        let ctl = CflController::new(0.5);
        let speeds = WaveSpeeds { cx: 1.0, cy: 1.0 };
        // Stable dt is 0.05; two of those pass the target.
        let plan = ctl.plan(0.95, 1.0, speeds, 0.1, 0.1);
        assert!(plan.finishing);
        assert!((plan.dt - 0.025).abs() < 1e-12);
        assert!(plan.dt <= plan.cfl_dt);
        assert!(plan.courant < 0.5);
    }

    #[test]
    fn exact_fit_finishes() {
        let ctl = CflController::new(0.5);
        let speeds = WaveSpeeds { cx: 1.0, cy: 1.0 };
        let plan = ctl.plan(0.0, 0.5, speeds, 0.5, 0.5);
        assert!(plan.finishing);
        assert_eq!(plan.dt, 0.25);
    }

    #[test]
    fn floor_speeds_give_huge_but_finite_step() {
        let ctl = CflController::new(0.45);
        let plan = ctl.plan(0.0, 1.0, WaveSpeeds::floor(), 0.01, 0.01);
        assert!(plan.finishing);
        assert_eq!(plan.dt, 0.5);
    }

    proptest! {
        #[test]
        fn courant_never_exceeds_target(
            cx in 0.0f32..100.0,
            cy in 0.0f32..100.0,
            dx in 1e-3f64..1.0,
            dy in 1e-3f64..1.0,
            t in 0.0f64..10.0,
            remaining in 1e-6f64..10.0,
            cfl in 0.05f64..0.9,
        ) {
            let mut speeds = WaveSpeeds::floor();
            speeds.observe(cx, cy);
            let plan = CflController::new(cfl).plan(t, t + remaining, speeds, dx, dy);
            prop_assert!(plan.dt > 0.0);
            prop_assert!(plan.dt <= plan.cfl_dt);
            prop_assert!(plan.courant <= cfl * (1.0 + 1e-12));
            if plan.finishing {
                prop_assert!((t + 2.0 * plan.dt - (t + remaining)).abs() <= 1e-9 * (1.0 + t));
            }
        }
    }
}
