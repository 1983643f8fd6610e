//! Smooth ("fractional iteration count") coloring.

use libm::{log, sqrt};

/// Color for points that never escaped: near-black.
const INTERIOR: [u8; 4] = [10, 10, 10, 255];

/// Map an escape result to RGBA.
///
/// Escaped points get a red ramp from the normalized smooth count
/// `s = (iterations + 1 - log2(ln|z|)) / limit`, where `(zx, zy)` is the
/// iterate at loop exit. The `f64` to `u8` cast saturates, so values of `s`
/// outside `[0, 1]` pin to the ends of the ramp.
pub fn colorize(iterations: u64, limit: u64, zx: f64, zy: f64) -> [u8; 4] {
    if iterations == limit {
        return INTERIOR;
    }

    let mut s = iterations as f64 + 1.0 - log(log(sqrt(zx * zx + zy * zy))) / log(2.0);
    s /= limit as f64;

    [(s * 250.0) as u8, 10, 10, 255]
}
