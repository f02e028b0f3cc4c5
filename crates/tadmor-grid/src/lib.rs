//! Ghost-padded grid storage for the Tadmor solver.
//!
//! A grid holds `nfield` scalar fields over `nx × ny` interior cells,
//! padded on every side by [`GridLayout::NGHOST`] ghost cells. Each field
//! is one contiguous block (channel-major), so stencil sweeps run over
//! long alias-free slices.
//!
//! - [`GridLayout`]: offset arithmetic and periodic wrap
//! - [`FieldGrid`]: the owned storage plus strided views
//! - [`apply_periodic`]: fills ghost cells by wraparound

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod layout;
pub mod storage;

pub use boundary::apply_periodic;
pub use error::GridError;
pub use layout::{Axis, GridLayout};
pub use storage::FieldGrid;
