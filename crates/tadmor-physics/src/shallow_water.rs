//! Two-dimensional shallow-water equations.
//!
//! Conserved fields are `[h, hu, hv]`: water height and the two momentum
//! components. Fluxes:
//! ```text
//! F(U) = [hu, hu²/h + g h²/2, hu·hv/h]
//! G(U) = [hv, hu·hv/h,        hv²/h + g h²/2]
//! ```
//! The characteristic speeds along each axis are `|u| ± √(g h)`, so the
//! wave-speed bound is `|hu/h| + √(g h)` along x and `|hv/h| + √(g h)`
//! along y.
//!
//! Constructed via the builder pattern: [`ShallowWater::builder`].

use tadmor_core::{Fields, FieldsMut, Physics, WaveSpeeds};

/// Index of the height field.
pub const H: usize = 0;
/// Index of the x-momentum field.
pub const HU: usize = 1;
/// Index of the y-momentum field.
pub const HV: usize = 2;

/// Shallow-water physics with constant gravitational acceleration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShallowWater {
    gravity: f32,
}

/// Builder for [`ShallowWater`].
pub struct ShallowWaterBuilder {
    gravity: f32,
}

impl ShallowWater {
    /// Standard gravitational acceleration used by default.
    pub const DEFAULT_GRAVITY: f32 = 9.8;

    /// Create a new builder for configuring a `ShallowWater` physics.
    pub fn builder() -> ShallowWaterBuilder {
        ShallowWaterBuilder {
            gravity: Self::DEFAULT_GRAVITY,
        }
    }

    /// Gravitational acceleration.
    pub fn gravity(&self) -> f32 {
        self.gravity
    }
}

impl Default for ShallowWater {
    fn default() -> Self {
        Self {
            gravity: Self::DEFAULT_GRAVITY,
        }
    }
}

impl ShallowWaterBuilder {
    /// Set the gravitational acceleration (default: 9.8). Must be > 0.
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Build the physics, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `gravity` is not finite and > 0.
    pub fn build(self) -> Result<ShallowWater, String> {
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(format!(
                "gravity must be finite and > 0, got {}",
                self.gravity
            ));
        }
        Ok(ShallowWater {
            gravity: self.gravity,
        })
    }
}

impl Physics for ShallowWater {
    const NFIELD: usize = 3;

    fn name(&self) -> &str {
        "ShallowWater"
    }

    fn flux(&self, f: FieldsMut<'_>, g: FieldsMut<'_>, u: Fields<'_>) {
        let [h, hu, hv] = u.split::<3>();
        let [fh, fhu, fhv] = f.split_mut::<3>();
        let [gh, ghu, ghv] = g.split_mut::<3>();
        let half_g = 0.5 * self.gravity;

        for i in 0..u.ncell() {
            let (hi, hui, hvi) = (h[i], hu[i], hv[i]);
            let inv_h = 1.0 / hi;
            let cross = hui * hvi * inv_h;
            let pressure = half_g * hi * hi;

            fh[i] = hui;
            fhu[i] = hui * hui * inv_h + pressure;
            fhv[i] = cross;

            gh[i] = hvi;
            ghu[i] = cross;
            ghv[i] = hvi * hvi * inv_h + pressure;
        }
    }

    fn wave_speed(&self, speeds: &mut WaveSpeeds, u: Fields<'_>) {
        let [h, hu, hv] = u.split::<3>();
        let mut cx = speeds.cx;
        let mut cy = speeds.cy;
        for i in 0..u.ncell() {
            let hi = h[i];
            let root_gh = (self.gravity * hi).sqrt();
            cx = cx.max((hu[i] / hi).abs() + root_gh);
            cy = cy.max((hv[i] / hi).abs() + root_gh);
        }
        speeds.observe(cx, cy);
    }
}
