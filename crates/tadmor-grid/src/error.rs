//! Error types for grid construction.

use crate::layout::Axis;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis has zero interior cells.
    EmptyAxis {
        /// The offending axis.
        axis: Axis,
    },
    /// The grid was asked to hold zero fields.
    NoFields,
    /// The padded element count does not fit in `usize`.
    Overflow {
        /// Interior cells along x.
        nx: usize,
        /// Interior cells along y.
        ny: usize,
        /// Number of fields.
        nfield: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { axis } => {
                write!(f, "grid must have at least one interior cell along {axis}")
            }
            Self::NoFields => write!(f, "grid must hold at least one field"),
            Self::Overflow { nx, ny, nfield } => {
                write!(f, "padded grid {nx}x{ny} with {nfield} fields overflows usize")
            }
        }
    }
}

impl std::error::Error for GridError {}
