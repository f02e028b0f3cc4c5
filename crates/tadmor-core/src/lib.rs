//! Core types and traits for the Tadmor central-scheme solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the whole workspace: the [`Physics`] and
//! [`Limiter`] collaborator contracts, the strided [`Fields`] views they
//! operate on, the staggered-grid [`Parity`] cycle, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod parity;
pub mod traits;
pub mod view;

pub use error::{DiagnosticError, SolverError};
pub use parity::Parity;
pub use traits::{Limiter, Physics, WaveSpeeds};
pub use view::{Fields, FieldsMut};
