//! Shape engine facade
//!
//! Orchestrates stream, sampler, smoother and mirror assembly for the two
//! silhouettes. Every call is self-contained: fresh stream, fresh buffers,
//! immutable path out. Interleaving calls with other seeds cannot perturb a
//! result, and calling twice with the same inputs reproduces it bit for bit.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use log::debug;

use super::path::Path;
use super::sample::{ArcSweep, ProtrusionSet, sample_arc};
use super::smooth;
use super::stream::SeededStream;
use crate::config::{GeneratorConfig, ShapeKind};
use crate::error::{GenError, Result};
use crate::mirror_x;

/// Shell outline plus the geometry it was derived from
#[derive(Debug, Clone)]
pub struct Outline {
    pub path: Path,
    pub center: DVec2,
    pub base_radius: f64,
}

/// Meat outline: two independently closed lobes sharing no geometry
#[derive(Debug, Clone)]
pub struct MeatOutline {
    pub left: Path,
    pub right: Path,
    pub center: DVec2,
    pub base_radius: f64,
}

/// Parameterized generator for both silhouettes
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the outer shell ring
    ///
    /// Samples the left half across a half-turn, mirrors it across the
    /// vertical center line in reverse order for the right half, and closes
    /// the ring with one final smoothing segment back to the start point.
    pub fn shell(&self, seed: &str, width: f64, height: f64) -> Result<Outline> {
        validate_dimensions(width, height)?;
        let cfg = &self.config.shell;

        let mut stream = SeededStream::new(seed);
        let center = DVec2::new(width / 2.0, height / 2.0);
        let point_count = draw_point_count(&mut stream, cfg.min_points, cfg.max_points);
        let base_radius = width.min(height) * cfg.base_radius_ratio;
        let corner_radius = stream.draw() * cfg.corner_radius_max;

        let sweep = ArcSweep {
            center,
            base_radius,
            start: FRAC_PI_2,
            end: FRAC_PI_2 + PI,
            point_count,
        };
        let left = sample_arc(
            &mut stream,
            &sweep,
            cfg.radius_variation,
            cfg.length_multiplier,
            None,
        )?;
        let right: Vec<DVec2> = left.iter().rev().map(|&p| mirror_x(p, center.x)).collect();

        let mut path = Path::with_capacity(left.len() + right.len() + 2);
        path.move_to(left[0]);
        smooth::append_corners(&mut path, &left, corner_radius, cfg.corner_divisor);
        smooth::append_corners(&mut path, &right, corner_radius, cfg.corner_divisor);
        smooth::append_corner(
            &mut path,
            right[right.len() - 1],
            left[0],
            corner_radius,
            cfg.corner_divisor,
        );
        path.close();

        debug!(
            "shell seed={seed:?} sampled={} corner_radius={corner_radius:.3}",
            point_count + 1
        );
        Ok(Outline {
            path,
            center,
            base_radius,
        })
    }

    /// Generate the two-lobe meat silhouette
    ///
    /// The left lobe is a C-shaped outer sweep with protrusion spikes plus a
    /// shorter inner return arc. The right lobe is a pure mirror of the left
    /// lobe's point set across the shared vertical center - same order, no
    /// new stream draws - smoothed and closed independently.
    pub fn meat(&self, seed: &str, width: f64, height: f64) -> Result<MeatOutline> {
        validate_dimensions(width, height)?;
        let cfg = &self.config.meat;

        let mut stream = SeededStream::new(&format!("{seed}{}", cfg.stream_suffix));
        let vertical_offset = height * cfg.vertical_offset_ratio;
        let center = DVec2::new(width / 2.0, height / 2.0 + vertical_offset);
        let point_count = draw_point_count(&mut stream, cfg.min_points, cfg.max_points);
        let base_radius = width.min(height) * cfg.base_radius_ratio;
        let corner_radius = stream.draw() * cfg.corner_radius_max;

        // The lobes sit slightly off the shared center so they do not overlap
        let offset = base_radius * cfg.horizontal_offset_ratio;
        let left_center = DVec2::new(center.x - offset, center.y);
        let lobe_radius = base_radius * cfg.outer_radius_ratio;

        // Outer sweep runs from the bottom, up the left side, to the top
        let outer = ArcSweep {
            center: left_center,
            base_radius: lobe_radius,
            start: PI * 1.5,
            end: PI * 0.5,
            point_count,
        };
        let protrusions = ProtrusionSet::draw(&mut stream, &outer, cfg);
        let mut points = sample_arc(
            &mut stream,
            &outer,
            cfg.radius_variation,
            cfg.length_multiplier,
            Some(&protrusions),
        )?;

        // Shorter inner return arc closes the C back toward the start region
        let inner = ArcSweep {
            center: left_center,
            base_radius: lobe_radius * cfg.inner_radius_ratio,
            start: outer.end,
            end: outer.start,
            point_count: point_count / 3,
        };
        points.extend(sample_arc(
            &mut stream,
            &inner,
            cfg.inner_radius_variation,
            1.0,
            None,
        )?);

        let left = close_lobe(&points, corner_radius, cfg.corner_divisor);
        let mirrored: Vec<DVec2> = points.iter().map(|&p| mirror_x(p, center.x)).collect();
        let right = close_lobe(&mirrored, corner_radius, cfg.corner_divisor);

        debug!(
            "meat seed={seed:?} sampled={} protrusions={}",
            points.len(),
            protrusions.len()
        );
        Ok(MeatOutline {
            left,
            right,
            center,
            base_radius,
        })
    }

    /// Unified entry point: the paths for either silhouette kind
    pub fn generate(
        &self,
        kind: ShapeKind,
        seed: &str,
        width: f64,
        height: f64,
    ) -> Result<Vec<Path>> {
        match kind {
            ShapeKind::Shell => Ok(vec![self.shell(seed, width, height)?.path]),
            ShapeKind::Meat => {
                let meat = self.meat(seed, width, height)?;
                Ok(vec![meat.left, meat.right])
            }
        }
    }
}

/// Generate a shell path with the default configuration
pub fn shell_outline(seed: &str, width: f64, height: f64) -> Result<Path> {
    Generator::default()
        .shell(seed, width, height)
        .map(|outline| outline.path)
}

/// Generate the two meat lobe paths with the default configuration
pub fn meat_outline(seed: &str, width: f64, height: f64) -> Result<(Path, Path)> {
    Generator::default()
        .meat(seed, width, height)
        .map(|meat| (meat.left, meat.right))
}

/// Draw a point count: `floor(draw * max) + min`
fn draw_point_count(stream: &mut SeededStream, min: u32, max: u32) -> u32 {
    (stream.draw() * max as f64).floor() as u32 + min
}

fn validate_dimensions(width: f64, height: f64) -> Result<()> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(GenError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Smooth a lobe's point list into its own closed sub-path
fn close_lobe(points: &[DVec2], corner_radius: f64, divisor: f64) -> Path {
    let mut path = Path::with_capacity(points.len() + 1);
    path.move_to(points[0]);
    smooth::append_corners(&mut path, points, corner_radius, divisor);
    path.close();
    path
}
