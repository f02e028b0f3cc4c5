//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] is the construction input for
//! [`Central2D`](crate::Central2D). [`validate()`](SolverConfig::validate)
//! checks every invariant the stepper relies on before any storage is
//! allocated.

use std::error::Error;
use std::fmt;

use tadmor_grid::{Axis, GridError, GridLayout};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SolverConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid shape is invalid (zero cells, zero fields, or overflow).
    Grid(GridError),
    /// A physical domain extent is NaN, infinite, zero, or negative.
    InvalidExtent {
        /// The offending axis.
        axis: Axis,
        /// The invalid value.
        value: f64,
    },
    /// The CFL number is NaN, infinite, zero, or negative.
    InvalidCfl {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidExtent { axis, value } => {
                write!(f, "{axis} extent must be finite and positive, got {value}")
            }
            Self::InvalidCfl { value } => {
                write!(f, "cfl must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Geometry and stability parameters for a [`Central2D`](crate::Central2D).
///
/// The domain is the rectangle `[0, width] × [0, height]`, divided into
/// `nx × ny` equal cells.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Physical extent along x.
    pub width: f64,
    /// Physical extent along y.
    pub height: f64,
    /// Interior cells along x.
    pub nx: usize,
    /// Interior cells along y.
    pub ny: usize,
    /// Target CFL number. Default: 0.45.
    pub cfl: f64,
}

impl SolverConfig {
    /// Default CFL number.
    pub const DEFAULT_CFL: f64 = 0.45;

    /// Configuration for a `width × height` domain on an `nx × ny` grid,
    /// with the default CFL number.
    pub fn new(width: f64, height: f64, nx: usize, ny: usize) -> Self {
        Self {
            width,
            height,
            nx,
            ny,
            cfl: Self::DEFAULT_CFL,
        }
    }

    /// Replace the CFL number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Cell width `width / nx`.
    pub fn dx(&self) -> f64 {
        self.width / self.nx as f64
    }

    /// Cell height `height / ny`.
    pub fn dy(&self) -> f64 {
        self.height / self.ny as f64
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Non-empty grid.
        if self.nx == 0 {
            return Err(GridError::EmptyAxis { axis: Axis::X }.into());
        }
        if self.ny == 0 {
            return Err(GridError::EmptyAxis { axis: Axis::Y }.into());
        }
        // 2. Positive, finite extents.
        for (axis, value) in [(Axis::X, self.width), (Axis::Y, self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidExtent { axis, value });
            }
        }
        // 3. Positive, finite CFL number.
        if !self.cfl.is_finite() || self.cfl <= 0.0 {
            return Err(ConfigError::InvalidCfl { value: self.cfl });
        }
        Ok(())
    }

    /// Validate and build the padded layout for `nfield` fields.
    pub(crate) fn layout(&self, nfield: usize) -> Result<GridLayout, ConfigError> {
        self.validate()?;
        Ok(GridLayout::new(self.nx, self.ny, nfield)?)
    }
}
