//! Conservation and positivity probe.
//!
//! The scheme conserves every field up to rounding on a periodic domain,
//! and the height-like field 0 must stay strictly positive. The probe
//! reports the totals and the range of field 0 so drift and blow-up are
//! visible between runs.

use std::fmt;
use std::io;

use smallvec::SmallVec;
use tadmor_core::{DiagnosticError, Limiter, Physics};
use tadmor_grid::{FieldGrid, GridLayout};

use crate::solver::Central2D;

/// Totals and extrema over the interior cells.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagnosticReport {
    /// Integral of field 0 (`Σ h · dx · dy`).
    pub volume: f64,
    /// Integrals of fields `1..nfield`, in field order.
    pub momentum: SmallVec<[f64; 2]>,
    /// Minimum of field 0.
    pub h_min: f32,
    /// Maximum of field 0.
    pub h_max: f32,
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-")?;
        writeln!(f, "  Volume: {}", self.volume)?;
        write!(f, "  Momentum: (")?;
        for (i, m) in self.momentum.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{m}")?;
        }
        writeln!(f, ")")?;
        writeln!(f, "  Range: [{}, {}]", self.h_min, self.h_max)
    }
}

/// Scan the interior of `u`, accumulating in `f64`.
///
/// Stops at the first cell (row-major) whose field 0 is not strictly
/// positive.
pub(crate) fn survey(u: &FieldGrid, cell_area: f64) -> Result<DiagnosticReport, DiagnosticError> {
    let layout: GridLayout = *u.layout();
    let data = u.as_slice();
    let first = data[layout.interior_offset(0, 0, 0)];
    let mut h_min = first;
    let mut h_max = first;
    let mut volume = 0.0f64;
    let mut momentum: SmallVec<[f64; 2]> = SmallVec::from_elem(0.0, layout.nfield() - 1);

    for y in 0..layout.ny() {
        for x in 0..layout.nx() {
            let h = data[layout.interior_offset(0, x, y)];
            if !(h > 0.0) {
                log::error!("non-positive height {h} at cell ({x}, {y})");
                return Err(DiagnosticError::NonPositiveHeight { x, y, value: h });
            }
            volume += f64::from(h);
            h_min = h_min.min(h);
            h_max = h_max.max(h);
            for (k, m) in momentum.iter_mut().enumerate() {
                *m += f64::from(data[layout.interior_offset(k + 1, x, y)]);
            }
        }
    }

    volume *= cell_area;
    for m in &mut momentum {
        *m *= cell_area;
    }
    Ok(DiagnosticReport {
        volume,
        momentum,
        h_min,
        h_max,
    })
}

impl<P: Physics, L: Limiter> Central2D<P, L> {
    /// Conservation totals and the range of field 0.
    ///
    /// # Errors
    ///
    /// [`DiagnosticError::NonPositiveHeight`] if any interior field-0
    /// value is zero, negative, or NaN. The solution is unusable from
    /// that point on; callers must stop advancing it.
    pub fn diagnostics(&self) -> Result<DiagnosticReport, DiagnosticError> {
        survey(self.state(), self.dx() * self.dy())
    }

    /// Compute [`diagnostics`](Self::diagnostics) and write the report to
    /// `out`:
    ///
    /// ```text
    /// -
    ///   Volume: <v>
    ///   Momentum: (<mx>, <my>)
    ///   Range: [<min>, <max>]
    /// ```
    ///
    /// Nothing is written when the check fails.
    pub fn solution_check<W: io::Write>(
        &self,
        out: &mut W,
    ) -> Result<DiagnosticReport, DiagnosticError> {
        let report = self.diagnostics()?;
        write!(out, "{report}")?;
        Ok(report)
    }
}
