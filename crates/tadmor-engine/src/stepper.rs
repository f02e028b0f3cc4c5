//! Kernels of one Jiang–Tadmor half-step.
//!
//! A half-step on parity `io` (0 on the primary grid, 1 on the staggered
//! grid) runs, in order:
//!
//! 1. [`compute_fg_speeds`]: fluxes `F`, `G` of `U` over the whole padded
//!    grid, plus the wave-speed maximum. The odd half-step reuses the
//!    even step size and calls [`compute_fg`] instead.
//! 2. [`limited_derivs`]: `Ux`, `Uy` from `U`, `Fx` from `F`, `Gy` from `G`.
//! 3. [`compute_step`]: predictor, flux of the prediction, corrector and
//!    the shifted copy back into `U`.
//!
//! The periodic boundary fill runs before step 1 and lives in
//! `tadmor-grid`.

use tadmor_core::{Limiter, Parity, Physics, WaveSpeeds};
use tadmor_grid::{FieldGrid, GridLayout};

/// Derived arrays reused by every half-step. All share the state's
/// layout and are allocated once.
#[derive(Clone, Debug)]
pub(crate) struct Scratch {
    pub(crate) f: FieldGrid,
    pub(crate) g: FieldGrid,
    pub(crate) ux: FieldGrid,
    pub(crate) uy: FieldGrid,
    pub(crate) fx: FieldGrid,
    pub(crate) gy: FieldGrid,
    pub(crate) v: FieldGrid,
}

impl Scratch {
    pub(crate) fn new(layout: GridLayout) -> Self {
        Self {
            f: FieldGrid::new(layout),
            g: FieldGrid::new(layout),
            ux: FieldGrid::new(layout),
            uy: FieldGrid::new(layout),
            fx: FieldGrid::new(layout),
            gy: FieldGrid::new(layout),
            v: FieldGrid::new(layout),
        }
    }
}

/// Evaluate `F(U)` and `G(U)` over every padded cell.
pub(crate) fn compute_fg<P: Physics>(physics: &P, u: &FieldGrid, scratch: &mut Scratch) {
    physics.flux(scratch.f.whole_mut(), scratch.g.whole_mut(), u.whole());
}

/// [`compute_fg`] plus the maximum wave speeds, seeded at
/// [`WaveSpeeds::FLOOR`].
pub(crate) fn compute_fg_speeds<P: Physics>(
    physics: &P,
    u: &FieldGrid,
    scratch: &mut Scratch,
) -> WaveSpeeds {
    compute_fg(physics, u, scratch);
    let mut speeds = WaveSpeeds::floor();
    physics.wave_speed(&mut speeds, u.whole());
    speeds
}

/// Apply `limiter` along one axis to every cell of `src` except the first
/// and last padded row, writing into `dst`.
///
/// With `stride == 1` the stencil runs along x and wraps across rows at
/// the ghost columns `0` and `nx_all − 1`; those results are never read.
fn limit_axis<L: Limiter>(limiter: &L, src: &[f32], dst: &mut [f32], stride: usize, nx_all: usize) {
    let hi = src.len() - nx_all;
    for i in nx_all..hi {
        dst[i] = limiter.limdiff(src[i - stride], src[i], src[i + stride]);
    }
}

/// Fill `Ux`, `Uy`, `Fx`, `Gy` field by field.
pub(crate) fn limited_derivs<L: Limiter>(limiter: &L, u: &FieldGrid, scratch: &mut Scratch) {
    let layout = *u.layout();
    let nx_all = layout.nx_all();
    let Scratch {
        f, g, ux, uy, fx, gy, ..
    } = scratch;

    for k in 0..layout.nfield() {
        let uk = u.field(k);
        limit_axis(limiter, uk, ux.field_mut(k), 1, nx_all);
        limit_axis(limiter, f.field(k), fx.field_mut(k), 1, nx_all);
        limit_axis(limiter, uk, uy.field_mut(k), nx_all, nx_all);
        limit_axis(limiter, g.field(k), gy.field_mut(k), nx_all, nx_all);
    }
}

/// Advance `u` by one half-step of size `dt` starting on `parity`.
///
/// `dtcdx2 = dt/(2dx)` and `dtcdy2 = dt/(2dy)`. Expects fresh ghosts,
/// fluxes and limited derivatives. Leaves `u` on the opposite parity;
/// its ghost cells hold stale values until the next boundary fill.
pub(crate) fn compute_step<P: Physics>(
    physics: &P,
    u: &mut FieldGrid,
    scratch: &mut Scratch,
    parity: Parity,
    dtcdx2: f32,
    dtcdy2: f32,
) {
    let layout = *u.layout();
    let (nx_all, ny_all) = (layout.nx_all(), layout.ny_all());
    let Scratch {
        f,
        g,
        ux,
        uy,
        fx,
        gy,
        v,
    } = scratch;

    // ── Predictor ───────────────────────────────────────────────────
    for k in 0..layout.nfield() {
        let (uk, fxk, gyk) = (u.field(k), fx.field(k), gy.field(k));
        let vk = v.field_mut(k);
        for iy in 1..ny_all - 1 {
            let row = iy * nx_all;
            for i in row + 1..row + nx_all - 1 {
                vk[i] = uk[i] - dtcdx2 * fxk[i] - dtcdy2 * gyk[i];
            }
        }
    }

    // ── Flux at the half step ───────────────────────────────────────
    let ncell = nx_all - 2;
    for iy in 1..ny_all - 1 {
        let jj = layout.offset(0, 1, iy);
        physics.flux(f.view_mut(jj, ncell), g.view_mut(jj, ncell), v.view(jj, ncell));
    }

    // ── Corrector ───────────────────────────────────────────────────
    let io = parity.shift();
    let lo = GridLayout::NGHOST - io;
    let (x_hi, y_hi) = (layout.nx() + lo, layout.ny() + lo);
    for k in 0..layout.nfield() {
        let (uk, uxk, uyk) = (u.field(k), ux.field(k), uy.field(k));
        let (fk, gk) = (f.field(k), g.field(k));
        let vk = v.field_mut(k);
        for iy in lo..y_hi {
            for ix in lo..x_hi {
                let i00 = iy * nx_all + ix;
                let i10 = i00 + 1;
                let i01 = i00 + nx_all;
                let i11 = i01 + 1;
                let average = uk[i00] + uk[i10] + uk[i01] + uk[i11];
                let dux = uxk[i10] - uxk[i00] + uxk[i11] - uxk[i01];
                let duy = uyk[i01] - uyk[i00] + uyk[i11] - uyk[i10];
                let df = fk[i10] - fk[i00] + fk[i11] - fk[i01];
                let dg = gk[i01] - gk[i00] + gk[i11] - gk[i10];
                vk[i00] = 0.2500 * average - 0.0625 * (dux + duy) - dtcdx2 * df - dtcdy2 * dg;
            }
        }
    }

    // ── Copy back with the parity shift ─────────────────────────────
    u.copy_shifted_from(v, io);
}
