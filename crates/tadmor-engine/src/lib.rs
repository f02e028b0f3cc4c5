//! Jiang–Tadmor staggered central-scheme time stepper.
//!
//! [`Central2D`] advances a hyperbolic conservation law
//! `U_t + F(U)_x + G(U)_y = 0` on a periodic rectangle. It is generic over
//! the [`Physics`](tadmor_core::Physics) that supplies fluxes and wave
//! speeds and the [`Limiter`](tadmor_core::Limiter) that supplies slopes.
//!
//! # Half-step pipeline
//!
//! 1. Periodic ghost fill
//! 2. Fluxes and wave speeds over the padded grid
//! 3. Step size from the [`CflController`] (first half-step of a pair)
//! 4. Limited derivatives of `U`, `F` and `G`
//! 5. Predictor, flux of the prediction, corrector
//! 6. Copy back with a parity-dependent shift
//!
//! Two half-steps (primary, then staggered) form one macro-step, so
//! [`Central2D::run`] always returns on the primary grid.
//!
//! # Logging
//!
//! Uses the `log` facade: `debug` per macro-step, `info` per run, `warn`
//! for degenerate landing steps, `error` on a failed positivity check.
//! No logger is installed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cfl;
pub mod config;
pub mod diagnostics;
pub mod metrics;
pub mod solver;
mod stepper;

pub use cfl::{CflController, StepPlan};
pub use config::{ConfigError, SolverConfig};
pub use diagnostics::DiagnosticReport;
pub use metrics::RunStats;
pub use solver::Central2D;
