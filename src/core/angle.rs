//! Angle helpers shared by the camera, projector and zoom sequencer.
//!
//! Every public angle in the crate is kept normalized in the half-open
//! range `(-PI, PI]`; deltas and interpolation always take the shorter
//! wraparound path, so a heading can spin forever without accumulating.

use std::f32::consts::{PI, TAU};

/// Normalize an angle into `(-PI, PI]`.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    let r = (a + PI).rem_euclid(TAU) - PI;
    if r > -PI {
        r
    } else {
        r + TAU
    }
}

/// Shortest signed difference `a - b`, normalized into `(-PI, PI]`.
#[inline]
pub fn angular_delta(a: f32, b: f32) -> f32 {
    normalize_angle(a - b)
}

/// Plain linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate between two headings along the shorter arc.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    normalize_angle(a + angular_delta(b, a) * t)
}

/// Hermite smoothstep of `x` across `[edge0, edge1]`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Decelerating cubic ease-out, `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}
