//! Initial-condition fixtures and tolerance helpers.

use std::f64::consts::PI;

/// Scalar initial condition `1 + amplitude · sin(2π x / period)` in field
/// 0; every other field is zeroed.
pub fn sine_x(amplitude: f64, period: f64) -> impl FnMut(f64, f64, &mut [f32]) {
    move |x: f64, _y: f64, cell: &mut [f32]| {
        cell.fill(0.0);
        cell[0] = (1.0 + amplitude * (2.0 * PI * x / period).sin()) as f32;
    }
}

/// Largest elementwise `|a[i] − b[i]|`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// `|after − before| / scale`, with `scale = max(|before|, 1)`.
pub fn relative_drift(before: f64, after: f64) -> f64 {
    (after - before).abs() / before.abs().max(1.0)
}

/// Assert `|actual − expected| ≤ tol`, naming `what` on failure.
#[track_caller]
pub fn assert_close(what: &str, actual: f64, expected: f64, tol: f64) {
    let err = (actual - expected).abs();
    assert!(
        err <= tol,
        "{what}: expected {expected}, got {actual} (|err| = {err:e} > {tol:e})"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_fixture_hits_extrema() {
        let mut init = sine_x(0.5, 1.0);
        let mut cell = [7.0f32; 2];
        init(0.25, 0.0, &mut cell);
        assert!((cell[0] - 1.5).abs() < 1e-6);
        assert_eq!(cell[1], 0.0);
        init(0.75, 3.0, &mut cell);
        assert!((cell[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn max_abs_diff_picks_worst() {
        assert_eq!(max_abs_diff(&[1.0, 2.0, 3.0], &[1.0, 2.5, 2.0]), 1.0);
        assert_eq!(max_abs_diff(&[], &[]), 0.0);
    }

    #[test]
    fn drift_is_relative_to_large_values() {
        assert_eq!(relative_drift(100.0, 101.0), 0.01);
        assert_eq!(relative_drift(0.0, 0.5), 0.5);
    }

    #[test]
    #[should_panic(expected = "volume")]
    fn assert_close_names_quantity() {
        assert_close("volume", 1.0, 2.0, 0.5);
    }
}
