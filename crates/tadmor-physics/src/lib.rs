//! Reference collaborators for the Tadmor solver.
//!
//! - [`ShallowWater`]: the shallow-water equations over `[h, hu, hv]`
//! - [`MinMod`] and [`Centered`]: slope limiters
//! - [`scenario`]: named initial conditions and a seeded random state
//!
//! The engine only depends on the [`Physics`](tadmor_core::Physics) and
//! [`Limiter`](tadmor_core::Limiter) contracts; anything here can be
//! swapped for a user-supplied implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod limiters;
pub mod scenario;
pub mod shallow_water;

pub use limiters::{Centered, MinMod, MinModBuilder};
pub use scenario::{noisy_pond, Scenario};
pub use shallow_water::{ShallowWater, ShallowWaterBuilder};
