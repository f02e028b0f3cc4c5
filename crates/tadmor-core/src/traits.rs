//! Collaborator contracts consumed by the stepper.
//!
//! The solver is generic over a [`Physics`] and a [`Limiter`]. Both are
//! resolved at compile time, so the inner loops pay nothing for the
//! abstraction barrier. Any pair satisfying these contracts can be
//! substituted without touching the stepper.

use crate::view::{Fields, FieldsMut};

/// Running maximum of the characteristic wave speeds along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpeeds {
    /// Maximum speed along x.
    pub cx: f32,
    /// Maximum speed along y.
    pub cy: f32,
}

impl WaveSpeeds {
    /// Seed value for the running maximum.
    ///
    /// A tiny positive floor keeps the CFL division finite when the
    /// measured speeds are zero (e.g. zero-flux physics).
    pub const FLOOR: f32 = 1.0e-15;

    /// A fresh accumulator seeded at [`FLOOR`](Self::FLOOR).
    pub fn floor() -> Self {
        Self {
            cx: Self::FLOOR,
            cy: Self::FLOOR,
        }
    }

    /// Fold one observation into the running maximum.
    #[inline]
    pub fn observe(&mut self, cx: f32, cy: f32) {
        self.cx = self.cx.max(cx);
        self.cy = self.cy.max(cy);
    }
}

impl Default for WaveSpeeds {
    fn default() -> Self {
        Self::floor()
    }
}

/// Flux and wave-speed evaluator for a hyperbolic system
/// `U_t + F(U)_x + G(U)_y = 0`.
///
/// # Contract
///
/// - Both calls are batched: they cover every cell of the run in one
///   call and must not be specialized per cell by the caller.
/// - `flux` writes `F(U)` and `G(U)` for every cell of the run into the
///   same positions of `f` and `g`.
/// - `wave_speed` only ever raises `speeds`; it never resets it.
/// - Both must be deterministic.
///
/// # Examples
///
/// Constant-velocity advection of a single scalar:
///
/// ```
/// use tadmor_core::{Fields, FieldsMut, Physics, WaveSpeeds};
///
/// struct Advect { a: f32, b: f32 }
///
/// impl Physics for Advect {
///     const NFIELD: usize = 1;
///
///     fn name(&self) -> &str { "advect" }
///
///     fn flux(&self, mut f: FieldsMut<'_>, mut g: FieldsMut<'_>, u: Fields<'_>) {
///         for ((fi, gi), ui) in f.field_mut(0).iter_mut().zip(g.field_mut(0)).zip(u.field(0)) {
///             *fi = self.a * ui;
///             *gi = self.b * ui;
///         }
///     }
///
///     fn wave_speed(&self, speeds: &mut WaveSpeeds, _u: Fields<'_>) {
///         speeds.observe(self.a.abs(), self.b.abs());
///     }
/// }
///
/// let data = [1.0f32, 2.0];
/// let mut fx = [0.0f32; 2];
/// let mut gy = [0.0f32; 2];
/// let phys = Advect { a: 2.0, b: -1.0 };
/// phys.flux(FieldsMut::new(&mut fx, 2, 2), FieldsMut::new(&mut gy, 2, 2), Fields::new(&data, 2, 2));
/// assert_eq!(fx, [2.0, 4.0]);
/// assert_eq!(gy, [-1.0, -2.0]);
/// ```
pub trait Physics {
    /// Number of conserved fields. Field 0 is the height-like quantity
    /// checked for positivity by diagnostics; the remaining fields are
    /// reported as momentum-like totals.
    const NFIELD: usize;

    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Compute `F(U)` into `f` and `G(U)` into `g` for every cell of `u`.
    fn flux(&self, f: FieldsMut<'_>, g: FieldsMut<'_>, u: Fields<'_>);

    /// Raise `speeds` to cover the wave speeds of every cell of `u`.
    fn wave_speed(&self, speeds: &mut WaveSpeeds, u: Fields<'_>);
}

/// Slope limiter producing a scaled derivative from three consecutive
/// samples along one axis.
///
/// Must be pure and elementwise: the result depends only on the three
/// arguments. The returned value is the cell-width-scaled derivative
/// (a difference, not a difference quotient).
pub trait Limiter {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Limited derivative at the center of `(um, u0, up)`.
    fn limdiff(&self, um: f32, u0: f32, up: f32) -> f32;
}
