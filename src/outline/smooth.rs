//! Corner smoothing
//!
//! Replaces a polyline with quadratic segments: each segment lands on the
//! midpoint of a consecutive point pair, with its control point pulled from
//! the first point toward that midpoint by `corner_radius / divisor`. The
//! smoothed path visits only midpoints; curvature bends toward each original
//! vertex in proportion to the corner radius.
//!
//! The divisor is a per-shape historical constant (30 for the shell, 20 for
//! the meat) and must not be unified.

use glam::DVec2;

use super::path::Path;

/// Append one smoothing segment from `p1` toward `p2`
#[inline]
pub fn append_corner(path: &mut Path, p1: DVec2, p2: DVec2, corner_radius: f64, divisor: f64) {
    let mid = (p1 + p2) * 0.5;
    let ctrl = p1 + (mid - p1) * (corner_radius / divisor);
    path.quad_to(ctrl, mid);
}

/// Append smoothing segments over every consecutive pair in `points`
pub fn append_corners(path: &mut Path, points: &[DVec2], corner_radius: f64, divisor: f64) {
    for pair in points.windows(2) {
        append_corner(path, pair[0], pair[1], corner_radius, divisor);
    }
}
