//! Nutgen - deterministic procedural walnut silhouettes
//!
//! Core modules:
//! - `outline`: seeded stream, radial sampling, corner smoothing, assembly
//! - `config`: data-driven shape tuning
//! - `error`: generation error types
//!
//! The same seed text always reproduces bit-for-bit identical geometry for
//! the same dimensions. Generation is pure and synchronous: one call builds
//! its own stream and buffers, returns an immutable path, and leaves nothing
//! behind.

pub mod config;
pub mod error;
pub mod outline;

pub use config::{GeneratorConfig, MeatConfig, ShapeKind, ShellConfig};
pub use error::{GenError, Result};
pub use outline::{
    Generator, MeatOutline, Outline, Path, PathCommand, SeededStream, meat_outline, shell_outline,
};

use glam::DVec2;

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Mirror a point across the vertical line `x = axis_x`
#[inline]
pub fn mirror_x(p: DVec2, axis_x: f64) -> DVec2 {
    DVec2::new(axis_x + (axis_x - p.x), p.y)
}
