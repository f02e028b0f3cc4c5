//! Offset arithmetic for ghost-padded, channel-major grids.

use crate::error::GridError;
use std::fmt;

/// A grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (fastest-varying in memory).
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Shape of a padded multi-field grid and the mapping from
/// `(field, x, y)` to a flat offset.
///
/// Two coordinate systems are in use:
///
/// - **padded** coordinates `x ∈ [0, nx_all)`, `y ∈ [0, ny_all)`, with
///   the lower-left ghost cell at `(0, 0)`. All stencil code works here.
/// - **interior** (application) coordinates `x ∈ [0, nx)`, `y ∈ [0, ny)`,
///   shifted by [`NGHOST`](Self::NGHOST) along both axes.
///
/// # Examples
///
/// ```
/// use tadmor_grid::GridLayout;
///
/// let layout = GridLayout::new(4, 2, 3).unwrap();
/// assert_eq!(layout.nx_all(), 10);
/// assert_eq!(layout.ny_all(), 8);
/// assert_eq!(layout.offset(1, 2, 3), (8 + 3) * 10 + 2);
/// assert_eq!(layout.interior_offset(0, 0, 0), layout.offset(0, 3, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    nx: usize,
    ny: usize,
    nx_all: usize,
    ny_all: usize,
    nfield: usize,
}

impl GridLayout {
    /// Ghost-layer width on every side. Three layers cover the
    /// dependency cone of one full (even + odd) step.
    pub const NGHOST: usize = 3;

    /// Create a layout for `nfield` fields over `nx × ny` interior cells.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyAxis`] if `nx` or `ny` is zero
    /// - [`GridError::NoFields`] if `nfield` is zero
    /// - [`GridError::Overflow`] if the padded size overflows `usize`
    pub fn new(nx: usize, ny: usize, nfield: usize) -> Result<Self, GridError> {
        if nx == 0 {
            return Err(GridError::EmptyAxis { axis: Axis::X });
        }
        if ny == 0 {
            return Err(GridError::EmptyAxis { axis: Axis::Y });
        }
        if nfield == 0 {
            return Err(GridError::NoFields);
        }
        let overflow = || GridError::Overflow { nx, ny, nfield };
        let nx_all = nx.checked_add(2 * Self::NGHOST).ok_or_else(overflow)?;
        let ny_all = ny.checked_add(2 * Self::NGHOST).ok_or_else(overflow)?;
        nx_all
            .checked_mul(ny_all)
            .and_then(|n| n.checked_mul(nfield))
            .ok_or_else(overflow)?;
        Ok(Self {
            nx,
            ny,
            nx_all,
            ny_all,
            nfield,
        })
    }

    /// Interior cells along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Interior cells along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Padded cells along x.
    pub fn nx_all(&self) -> usize {
        self.nx_all
    }

    /// Padded cells along y.
    pub fn ny_all(&self) -> usize {
        self.ny_all
    }

    /// Number of fields.
    pub fn nfield(&self) -> usize {
        self.nfield
    }

    /// Elements per field block (`nx_all * ny_all`).
    pub fn field_stride(&self) -> usize {
        self.nx_all * self.ny_all
    }

    /// Total element count over all fields.
    pub fn len(&self) -> usize {
        self.nfield * self.field_stride()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat offset of padded coordinate `(x, y)` in field `k`.
    #[inline]
    pub fn offset(&self, k: usize, x: usize, y: usize) -> usize {
        (k * self.ny_all + y) * self.nx_all + x
    }

    /// Flat offset of interior coordinate `(x, y)` in field `k`.
    #[inline]
    pub fn interior_offset(&self, k: usize, x: usize, y: usize) -> usize {
        self.offset(k, x + Self::NGHOST, y + Self::NGHOST)
    }

    /// Flat offset of the canonical interior cell that padded coordinate
    /// `(x, y)` wraps onto under periodic boundaries.
    #[inline]
    pub fn wrapped_offset(&self, k: usize, x: usize, y: usize) -> usize {
        self.offset(k, wrap(x, self.nx), wrap(y, self.ny))
    }

    /// Returns `true` if padded coordinate `(x, y)` is a ghost cell.
    pub fn is_ghost(&self, x: usize, y: usize) -> bool {
        let g = Self::NGHOST;
        x < g || y < g || x >= self.nx + g || y >= self.ny + g
    }
}

/// Map padded coordinate `c` onto `[NGHOST, n + NGHOST)` modulo `n`.
///
/// Uses the Euclidean remainder so axes narrower than the ghost layer
/// still wrap correctly.
#[inline]
fn wrap(c: usize, n: usize) -> usize {
    let g = GridLayout::NGHOST;
    (c as isize - g as isize).rem_euclid(n as isize) as usize + g
}
