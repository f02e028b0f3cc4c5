//! Error types for the Tadmor solver.
//!
//! Organized by the surface that produces them: the time loop
//! ([`SolverError`]) and the conservation/positivity probe
//! ([`DiagnosticError`]). Grid construction errors live in `tadmor-grid`
//! and configuration errors in `tadmor-engine`.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from `Central2D::run()`.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// The requested duration is negative, NaN, or infinite.
    InvalidDuration {
        /// The rejected duration.
        value: f64,
    },
    /// The stability bound collapsed to a zero or non-finite step,
    /// typically because the wave speeds blew up.
    StepCollapsed {
        /// Solver time at which the step was planned.
        time: f64,
        /// The rejected half-step size.
        dt: f64,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration { value } => {
                write!(f, "run duration must be finite and >= 0, got {value}")
            }
            Self::StepCollapsed { time, dt } => {
                write!(f, "step size collapsed to {dt} at t = {time}")
            }
        }
    }
}

impl Error for SolverError {}

/// Errors from the diagnostic probe.
///
/// [`NonPositiveHeight`](DiagnosticError::NonPositiveHeight) is fatal:
/// the scheme assumes a strictly positive height-like field, and once
/// that is lost the state carries no meaningful solution. No recovery is
/// defined; callers must stop advancing the solver.
#[derive(Debug)]
pub enum DiagnosticError {
    /// The height-like field (field 0) is zero, negative, or NaN.
    NonPositiveHeight {
        /// Interior x coordinate of the first offending cell.
        x: usize,
        /// Interior y coordinate of the first offending cell.
        y: usize,
        /// The offending value.
        value: f32,
    },
    /// Writing the report to the output sink failed.
    Io(io::Error),
}

impl fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveHeight { x, y, value } => {
                write!(f, "non-positive height {value} at cell ({x}, {y})")
            }
            Self::Io(e) => write!(f, "diagnostic output failed: {e}"),
        }
    }
}

impl Error for DiagnosticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DiagnosticError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_duration_display() {
        let err = SolverError::InvalidDuration { value: -1.0 };
        let msg = format!("{err}");
        assert!(msg.contains("-1"));
        assert!(msg.contains("duration"));
    }

    #[test]
    fn step_collapsed_display() {
        let err = SolverError::StepCollapsed { time: 0.5, dt: 0.0 };
        assert!(format!("{err}").contains("t = 0.5"));
    }

    #[test]
    fn non_positive_height_display_names_cell() {
        let err = DiagnosticError::NonPositiveHeight {
            x: 3,
            y: 7,
            value: -0.5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("(3, 7)"));
        assert!(msg.contains("-0.5"));
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_chains_source() {
        let err: DiagnosticError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, DiagnosticError::Io(_)));
        assert!(err.source().is_some());
    }
}
