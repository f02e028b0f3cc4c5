//! Tadmor: a Jiang–Tadmor staggered central scheme for 2D hyperbolic
//! conservation laws on a periodic rectangle.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tadmor sub-crates. For most users, adding `tadmor` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tadmor::prelude::*;
//!
//! let config = SolverConfig::new(2.0, 2.0, 64, 64);
//! let mut sim = Central2D::new(config, ShallowWater::default(), MinMod::default()).unwrap();
//! sim.initialize(tadmor::physics::scenario::disk);
//!
//! let before = sim.diagnostics().unwrap();
//! let stats = sim.run(0.05).unwrap();
//! let after = sim.diagnostics().unwrap();
//!
//! assert_eq!(sim.parity(), Parity::Primary);
//! assert!(stats.max_courant <= sim.cfl() * (1.0 + 1e-6));
//! assert!((after.volume - before.volume).abs() < 1e-4);
//! ```
//!
//! # Custom physics
//!
//! Any system of `NFIELD` conserved fields plugs in through
//! [`Physics`](types::Physics). Field 0 must be strictly positive for the
//! diagnostics to accept the state.
//!
//! ```rust
//! use tadmor::prelude::*;
//!
//! /// `u_t + (a·u)_x = 0`.
//! struct Advect(f32);
//!
//! impl Physics for Advect {
//!     const NFIELD: usize = 1;
//!     fn name(&self) -> &str { "advect" }
//!     fn flux(&self, mut f: FieldsMut<'_>, mut g: FieldsMut<'_>, u: Fields<'_>) {
//!         for (fi, ui) in f.field_mut(0).iter_mut().zip(u.field(0)) {
//!             *fi = self.0 * ui;
//!         }
//!         g.field_mut(0).fill(0.0);
//!     }
//!     fn wave_speed(&self, speeds: &mut WaveSpeeds, _u: Fields<'_>) {
//!         speeds.observe(self.0.abs(), 0.0);
//!     }
//! }
//!
//! let config = SolverConfig::new(1.0, 1.0, 16, 4);
//! let mut sim = Central2D::new(config, Advect(1.0), Centered).unwrap();
//! sim.initialize(|x, _y, cell| cell[0] = 2.0 + x as f32);
//! sim.run(0.25).unwrap();
//! assert!(sim.diagnostics().unwrap().h_min > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tadmor-core` | Physics and limiter contracts, field views, errors |
//! | [`grid`] | `tadmor-grid` | Ghost-padded storage and periodic boundaries |
//! | [`physics`] | `tadmor-physics` | Shallow water, limiters, scenarios |
//! | [`engine`] | `tadmor-engine` | The solver, step control, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core contracts and error types (`tadmor-core`).
///
/// Contains the [`types::Physics`] and [`types::Limiter`] traits, the
/// strided [`types::Fields`] views they operate on, and the solver errors.
pub use tadmor_core as types;

/// Ghost-padded grid storage (`tadmor-grid`).
///
/// Most users never touch this directly; [`engine::Central2D`] owns its
/// grids.
pub use tadmor_grid as grid;

/// Reference physics, limiters and initial conditions (`tadmor-physics`).
pub use tadmor_physics as physics;

/// The time stepper and its configuration (`tadmor-engine`).
pub use tadmor_engine as engine;

/// Common imports for typical Tadmor usage.
///
/// ```rust
/// use tadmor::prelude::*;
/// ```
pub mod prelude {
    // Contracts
    pub use tadmor_core::{Fields, FieldsMut, Limiter, Parity, Physics, WaveSpeeds};

    // Errors
    pub use tadmor_core::{DiagnosticError, SolverError};

    // Reference collaborators
    pub use tadmor_physics::{Centered, MinMod, Scenario, ShallowWater};

    // Engine
    pub use tadmor_engine::{
        Central2D, ConfigError, DiagnosticReport, RunStats, SolverConfig,
    };
}
