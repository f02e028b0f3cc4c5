//! Test utilities and mock physics for Tadmor development.
//!
//! Provides minimal [`Physics`] implementations for exercising the
//! stepper without shallow-water nonlinearity, plus tolerance helpers
//! in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{assert_close, max_abs_diff, relative_drift, sine_x};

use tadmor_core::{Fields, FieldsMut, Physics, WaveSpeeds};

/// Constant-velocity advection of one scalar: `F = a·u`, `G = b·u`.
///
/// The exact solution translates the initial condition by `(a·t, b·t)`,
/// which makes it the reference problem for checking staggering and
/// accuracy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAdvection {
    pub a: f32,
    pub b: f32,
}

impl LinearAdvection {
    pub fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }
}

impl Physics for LinearAdvection {
    const NFIELD: usize = 1;

    fn name(&self) -> &str {
        "LinearAdvection"
    }

    fn flux(&self, mut f: FieldsMut<'_>, mut g: FieldsMut<'_>, u: Fields<'_>) {
        let u = u.field(0);
        for (fi, ui) in f.field_mut(0).iter_mut().zip(u) {
            *fi = self.a * ui;
        }
        for (gi, ui) in g.field_mut(0).iter_mut().zip(u) {
            *gi = self.b * ui;
        }
    }

    fn wave_speed(&self, speeds: &mut WaveSpeeds, _u: Fields<'_>) {
        speeds.observe(self.a.abs(), self.b.abs());
    }
}

/// Three-field physics with identically zero flux and zero speed.
///
/// Every state is steady; the step size is bounded only by the
/// [`WaveSpeeds::FLOOR`] seed, so a run finishes in one macro-step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroFlux;

impl Physics for ZeroFlux {
    const NFIELD: usize = 3;

    fn name(&self) -> &str {
        "ZeroFlux"
    }

    fn flux(&self, f: FieldsMut<'_>, g: FieldsMut<'_>, _u: Fields<'_>) {
        for field in f.split_mut::<3>().into_iter().chain(g.split_mut::<3>()) {
            field.fill(0.0);
        }
    }

    fn wave_speed(&self, _speeds: &mut WaveSpeeds, _u: Fields<'_>) {}
}
