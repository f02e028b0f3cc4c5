//! Named shallow-water initial conditions.
//!
//! Every scenario is posed on the square `[0, 2] × [0, 2]`
//! ([`Scenario::DOMAIN`]) and writes one `[h, hu, hv]` cell at a time,
//! matching the closure shape taken by `Central2D::initialize`.
//!
//! | Name | Initial state |
//! |------|---------------|
//! | `pond` | still water, `h = 1` |
//! | `dam_break` | still water with a raised central column of radius ½ |
//! | `wave` | `h = 1 + 0.2 sin(πx)`, at rest |
//! | `river` | uniform flow, `h = 1`, `hu = 1` |
//! | `disk` | smooth cosine bump of radius ½ at the center |
//! | `column` | `h = 2` inside a central disk of radius 0.4, `h = 1` outside |
//!
//! The registry preserves the order above.

use std::f64::consts::PI;
use std::sync::OnceLock;

use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::shallow_water::{H, HU, HV};

/// A named initial condition.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    name: &'static str,
    summary: &'static str,
    init: fn(f64, f64, &mut [f32]),
}

impl Scenario {
    /// Side length of the square domain every scenario is posed on.
    pub const DOMAIN: f64 = 2.0;

    /// Look up a scenario by name.
    pub fn by_name(name: &str) -> Option<Scenario> {
        registry().get(name).copied()
    }

    /// Registered names, in registration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        registry().keys().copied()
    }

    /// Every registered scenario, in registration order.
    pub fn all() -> impl Iterator<Item = Scenario> {
        registry().values().copied()
    }

    /// Registry key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Write the state at point `(x, y)` into `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` holds fewer than three fields.
    pub fn apply(&self, x: f64, y: f64, cell: &mut [f32]) {
        (self.init)(x, y, cell)
    }
}

fn registry() -> &'static IndexMap<&'static str, Scenario> {
    static REGISTRY: OnceLock<IndexMap<&'static str, Scenario>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let entries = [
            Scenario {
                name: "pond",
                summary: "still water at unit depth",
                init: pond,
            },
            Scenario {
                name: "dam_break",
                summary: "raised central water column released at t = 0",
                init: dam_break,
            },
            Scenario {
                name: "wave",
                summary: "sinusoidal height profile along x",
                init: wave,
            },
            Scenario {
                name: "river",
                summary: "uniform flow along x",
                init: river,
            },
            Scenario {
                name: "disk",
                summary: "smooth radially symmetric bump",
                init: disk,
            },
            Scenario {
                name: "column",
                summary: "sharp 2:1 circular step at rest",
                init: column,
            },
        ];
        entries.into_iter().map(|s| (s.name, s)).collect()
    })
}

fn still(cell: &mut [f32], h: f64) {
    cell[H] = h as f32;
    cell[HU] = 0.0;
    cell[HV] = 0.0;
}

/// Still water at unit depth.
pub fn pond(_x: f64, _y: f64, cell: &mut [f32]) {
    still(cell, 1.0);
}

/// Unit depth plus a column of height 0.5 within radius ½ of the center.
pub fn dam_break(x: f64, y: f64, cell: &mut [f32]) {
    let (x, y) = (x - 1.0, y - 1.0);
    let raised = x * x + y * y < 0.25 + 1.0e-5;
    still(cell, if raised { 1.5 } else { 1.0 });
}

/// `h = 1 + 0.2 sin(πx)`, at rest.
pub fn wave(x: f64, _y: f64, cell: &mut [f32]) {
    still(cell, 1.0 + 0.2 * (PI * x).sin());
}

/// Uniform flow: `h = 1`, `hu = 1`, `hv = 0`.
pub fn river(_x: f64, _y: f64, cell: &mut [f32]) {
    cell[H] = 1.0;
    cell[HU] = 1.0;
    cell[HV] = 0.0;
}

/// Cosine bump of amplitude 0.1 and radius ½ centered in the domain.
pub fn disk(x: f64, y: f64, cell: &mut [f32]) {
    let r = ((x - 1.0).powi(2) + (y - 1.0).powi(2)).sqrt();
    let bump = if r < 0.5 {
        0.05 * (1.0 + (2.0 * PI * r).cos())
    } else {
        0.0
    };
    still(cell, 1.0 + bump);
}

/// Still water at `h = 2` inside a disk of radius 0.4 centered in the
/// domain, `h = 1` outside.
pub fn column(x: f64, y: f64, cell: &mut [f32]) {
    let r2 = (x - 1.0).powi(2) + (y - 1.0).powi(2);
    still(cell, if r2 < 0.16 { 2.0 } else { 1.0 });
}

/// Unit-depth water with independent uniform perturbations of every
/// field, drawn from a ChaCha8 stream seeded with `seed`.
///
/// Each field receives `amplitude · U(-1, 1)`. Heights stay positive for
/// `amplitude < 1`. The closure ignores its coordinates and draws in call
/// order, so the same seed over the same grid gives the same state.
pub fn noisy_pond(seed: u64, amplitude: f32) -> impl FnMut(f64, f64, &mut [f32]) {
    debug_assert!(
        (0.0..1.0).contains(&amplitude),
        "amplitude {amplitude} would allow non-positive heights"
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    move |_x: f64, _y: f64, cell: &mut [f32]| {
        for (k, v) in cell.iter_mut().enumerate() {
            let noise = amplitude * (2.0 * rng.random::<f32>() - 1.0);
            *v = if k == H { 1.0 + noise } else { noise };
        }
    }
}
