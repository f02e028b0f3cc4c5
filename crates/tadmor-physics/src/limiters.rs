//! Reference slope limiters.
//!
//! - [`MinMod`]: the minmod family. The default `θ = 2` is the
//!   monotonized-central limiter; [`MinMod::classic`] (`θ = 1`) is the
//!   most dissipative member.
//! - [`Centered`]: the unlimited centered difference. Only stable for
//!   smooth solutions; useful for convergence tests.

use tadmor_core::Limiter;

/// Minmod of two values: the one of smaller magnitude if both share a
/// sign, zero otherwise.
#[inline]
fn xmin(a: f32, b: f32) -> f32 {
    (0.5f32.copysign(a) + 0.5f32.copysign(b)) * a.abs().min(b.abs())
}

/// Generalized minmod limiter with steepness parameter `theta ∈ [1, 2]`.
///
/// ```text
/// limdiff(um, u0, up) = xmin(θ·xmin(u0 − um, up − u0), (up − um)/2)
/// ```
///
/// Constructed via [`MinMod::builder`], or [`Default`] for `θ = 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMod {
    theta: f32,
}

/// Builder for [`MinMod`].
pub struct MinModBuilder {
    theta: f32,
}

impl MinMod {
    /// Default steepness (monotonized central).
    pub const DEFAULT_THETA: f32 = 2.0;

    /// Create a new builder for configuring a `MinMod` limiter.
    pub fn builder() -> MinModBuilder {
        MinModBuilder {
            theta: Self::DEFAULT_THETA,
        }
    }

    /// The classic minmod limiter (`θ = 1`).
    pub fn classic() -> Self {
        Self { theta: 1.0 }
    }

    /// Steepness parameter.
    pub fn theta(&self) -> f32 {
        self.theta
    }
}

impl Default for MinMod {
    fn default() -> Self {
        Self {
            theta: Self::DEFAULT_THETA,
        }
    }
}

impl MinModBuilder {
    /// Set the steepness (default: 2.0). Must lie in `[1, 2]`.
    pub fn theta(mut self, theta: f32) -> Self {
        self.theta = theta;
        self
    }

    /// Build the limiter, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `theta` is NaN or outside `[1, 2]`.
    pub fn build(self) -> Result<MinMod, String> {
        if !(1.0..=2.0).contains(&self.theta) {
            return Err(format!("theta must lie in [1, 2], got {}", self.theta));
        }
        Ok(MinMod { theta: self.theta })
    }
}

impl Limiter for MinMod {
    fn name(&self) -> &str {
        "MinMod"
    }

    #[inline]
    fn limdiff(&self, um: f32, u0: f32, up: f32) -> f32 {
        let left = u0 - um;
        let right = up - u0;
        let centered = 0.5 * (up - um);
        xmin(self.theta * xmin(left, right), centered)
    }
}

/// Unlimited centered difference `(up − um)/2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Centered;

impl Limiter for Centered {
    fn name(&self) -> &str {
        "Centered"
    }

    #[inline]
    fn limdiff(&self, um: f32, _u0: f32, up: f32) -> f32 {
        0.5 * (up - um)
    }
}
