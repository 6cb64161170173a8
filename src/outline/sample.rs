//! Radial point sampling
//!
//! Walks an angular sweep and emits radius-perturbed points, one stream draw
//! per point. The meat lobes additionally overlay protrusions: localized
//! radius spikes with Gaussian-like angular falloff.
//!
//! A sampling pass is consume-once: every produced point advances the stream,
//! so the same pass can never be replayed against the same stream state.

use glam::DVec2;

use super::stream::SeededStream;
use crate::config::{MeatConfig, VariationRange};
use crate::error::{GenError, Result};
use crate::polar_to_cartesian;

/// Parameters for one angular sampling pass
#[derive(Debug, Clone, Copy)]
pub struct ArcSweep {
    /// Center the radii are measured from
    pub center: DVec2,
    /// Unperturbed radius
    pub base_radius: f64,
    /// First angle (radians), sampled inclusively
    pub start: f64,
    /// Last angle (radians), sampled inclusively
    pub end: f64,
    /// Number of angular steps; the pass emits `point_count + 1` points
    pub point_count: u32,
}

impl ArcSweep {
    /// Signed angular span of the sweep
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Angular spike overlay for the meat lobes
///
/// Angles are drawn once per generation, in draw order. Strength and
/// sharpness are NOT cached here: every qualifying point evaluation draws
/// fresh values, so a protrusion's magnitude varies continuously as the
/// sweep passes it. That per-point redraw is observable in the rendered
/// shapes and is part of the output contract.
#[derive(Debug, Clone)]
pub struct ProtrusionSet {
    angles: Vec<f64>,
    strength_max: f64,
    sharpness: VariationRange,
    threshold: f64,
}

impl ProtrusionSet {
    /// Draw a fresh protrusion set within the sweep's span
    pub fn draw(stream: &mut SeededStream, sweep: &ArcSweep, config: &MeatConfig) -> Self {
        debug_assert!(config.max_protrusions >= config.min_protrusions);
        let draw_width = (config.max_protrusions - config.min_protrusions + 1) as f64;
        let count = (stream.draw() * draw_width).floor() as u32 + config.min_protrusions;

        let span = sweep.span();
        let angles = (0..count)
            .map(|_| sweep.start + stream.draw() * span)
            .collect();

        Self {
            angles,
            strength_max: config.protrusion_strength_max,
            sharpness: config.protrusion_sharpness,
            threshold: config.protrusion_threshold,
        }
    }

    /// Number of protrusions in the set
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Additional radius contributed at `angle`
    ///
    /// Draws a fresh strength and sharpness for every protrusion within the
    /// angular threshold; nearby protrusions stack additively.
    pub fn boost(&self, stream: &mut SeededStream, angle: f64, base_radius: f64) -> f64 {
        let mut extra = 0.0;
        for &protrusion_angle in &self.angles {
            let angle_diff = (angle - protrusion_angle).abs();
            if angle_diff < self.threshold {
                let strength = stream.draw() * self.strength_max;
                let sharpness = self.sharpness.sample(stream.draw());
                extra += base_radius * strength * (-sharpness * angle_diff * angle_diff).exp();
            }
        }
        extra
    }
}

/// Sample `point_count + 1` radius-perturbed points along a sweep
///
/// Each point draws once for its radius jitter; with a protrusion set, each
/// qualifying protrusion draws twice more. The jittered radius is scaled by
/// `length_multiplier`; protrusion boosts are not.
pub fn sample_arc(
    stream: &mut SeededStream,
    sweep: &ArcSweep,
    variation: VariationRange,
    length_multiplier: f64,
    protrusions: Option<&ProtrusionSet>,
) -> Result<Vec<DVec2>> {
    if sweep.point_count == 0 {
        return Err(GenError::InvariantViolation("arc sampled with zero point count"));
    }

    let span = sweep.span();
    let mut points = Vec::with_capacity(sweep.point_count as usize + 1);

    for i in 0..=sweep.point_count {
        let t = i as f64 / sweep.point_count as f64;
        let angle = sweep.start + span * t;

        let mut radius = sweep.base_radius * length_multiplier * variation.sample(stream.draw());
        if let Some(set) = protrusions {
            radius += set.boost(stream, angle, sweep.base_radius);
        }

        let point = sweep.center + polar_to_cartesian(radius, angle);
        if !point.is_finite() {
            return Err(GenError::InvariantViolation("non-finite sample coordinate"));
        }
        points.push(point);
    }

    Ok(points)
}
