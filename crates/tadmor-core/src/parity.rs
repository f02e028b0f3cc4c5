//! The staggered-grid [`Parity`] cycle.

use std::fmt;

/// Which grid the stored solution currently lives on.
///
/// The Jiang–Tadmor scheme alternates between the primary grid and a
/// grid offset by half a cell in both directions. Entry `(x, y)` on the
/// primary grid is the average over the cell centered at
/// `((x + ½)dx, (y + ½)dy)`; after one half-step the same entry describes
/// the cell centered one half cell further along both axes.
///
/// Every half-step toggles the parity. Because the solver only ever runs
/// whole (even, odd) pairs, callers outside the solver always observe
/// [`Parity::Primary`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Values on the primary grid (even half-steps start here).
    #[default]
    Primary,
    /// Values on the half-cell-offset grid (odd half-steps start here).
    Staggered,
}

impl Parity {
    /// The index shift applied by a half-step starting on this grid:
    /// 0 for [`Primary`](Parity::Primary), 1 for
    /// [`Staggered`](Parity::Staggered).
    pub fn shift(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Staggered => 1,
        }
    }

    /// The parity after one more half-step.
    pub fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Staggered,
            Self::Staggered => Self::Primary,
        }
    }

    /// Returns `true` on the primary grid.
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Staggered => write!(f, "staggered"),
        }
    }
}
