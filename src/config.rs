//! Data-driven shape tuning
//!
//! Every constant the generator draws against lives here so both silhouettes
//! can be tweaked without touching the sampling code. Defaults reproduce the
//! canonical walnut look; overriding any field changes the geometry for every
//! seed, so treat the defaults as part of the output contract.

use serde::{Deserialize, Serialize};

/// Which silhouette to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    /// Outer single-ring symmetric silhouette
    #[default]
    Shell,
    /// Inner two-lobe C-shaped silhouette
    Meat,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Shell => "shell",
            ShapeKind::Meat => "meat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shell" => Some(ShapeKind::Shell),
            "meat" => Some(ShapeKind::Meat),
            _ => None,
        }
    }
}

/// Multiplicative jitter band mapped from a unit stream draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariationRange {
    pub min: f64,
    pub max: f64,
}

impl VariationRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit draw into the band
    #[inline]
    pub fn sample(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

/// Shell silhouette tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    // === Size and position ===
    /// Base radius as a ratio of min(width, height)
    pub base_radius_ratio: f64,
    /// Scale applied to every sampled radius (1.0 = no-op)
    pub length_multiplier: f64,

    // === Shape generation ===
    /// Fewest points on the sampled half (draw floor is added to this)
    pub min_points: u32,
    /// Width of the point-count draw; count is `floor(draw * max) + min`
    pub max_points: u32,
    /// Corner radius draw ceiling
    pub corner_radius_max: f64,
    /// Divisor pulling curve control points toward each vertex
    pub corner_divisor: f64,
    /// Multiplicative radius jitter per sampled point
    pub radius_variation: VariationRange,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            base_radius_ratio: 0.4,
            length_multiplier: 1.0,
            min_points: 4,
            max_points: 30,
            corner_radius_max: 15.0,
            corner_divisor: 30.0,
            radius_variation: VariationRange::new(0.8, 1.2),
        }
    }
}

/// Meat silhouette tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeatConfig {
    // === Size and position ===
    /// Base radius as a ratio of min(width, height)
    pub base_radius_ratio: f64,
    /// Vertical center shift as a ratio of height
    pub vertical_offset_ratio: f64,
    /// Per-lobe horizontal center shift as a ratio of base radius
    pub horizontal_offset_ratio: f64,
    /// Lobe sampling radius as a ratio of base radius
    pub outer_radius_ratio: f64,
    /// Closing return arc radius as a ratio of the lobe radius
    pub inner_radius_ratio: f64,
    /// Scale applied to the outer sweep radius (1.0 = no-op)
    pub length_multiplier: f64,

    // === Shape generation ===
    /// Fewest points on the outer sweep (draw floor is added to this)
    pub min_points: u32,
    /// Width of the point-count draw; count is `floor(draw * max) + min`
    pub max_points: u32,
    /// Corner radius draw ceiling
    pub corner_radius_max: f64,
    /// Divisor pulling curve control points toward each vertex
    pub corner_divisor: f64,
    /// Multiplicative radius jitter on the outer sweep
    pub radius_variation: VariationRange,
    /// Multiplicative radius jitter on the closing return arc
    pub inner_radius_variation: VariationRange,

    // === Protrusions ===
    /// Fewest protrusions per lobe
    pub min_protrusions: u32,
    /// Most protrusions per lobe
    pub max_protrusions: u32,
    /// Strength draw ceiling (fraction of the lobe radius)
    pub protrusion_strength_max: f64,
    /// Sharpness draw band; higher values decay faster
    pub protrusion_sharpness: VariationRange,
    /// Angular distance (radians) within which a protrusion affects a point
    pub protrusion_threshold: f64,

    // === Stream derivation ===
    /// Appended to the seed text so the meat draws from its own stream
    pub stream_suffix: String,
}

impl Default for MeatConfig {
    fn default() -> Self {
        Self {
            base_radius_ratio: 0.25,
            vertical_offset_ratio: 0.02,
            horizontal_offset_ratio: 0.1,
            outer_radius_ratio: 0.9,
            inner_radius_ratio: 0.4,
            length_multiplier: 1.0,
            min_points: 15,
            max_points: 40,
            corner_radius_max: 15.0,
            corner_divisor: 20.0,
            radius_variation: VariationRange::new(0.8, 1.0),
            inner_radius_variation: VariationRange::new(0.8, 1.0),
            min_protrusions: 3,
            max_protrusions: 7,
            protrusion_strength_max: 0.4,
            protrusion_sharpness: VariationRange::new(5.0, 20.0),
            protrusion_threshold: 0.5,
            stream_suffix: "_pearl".to_string(),
        }
    }
}

/// Combined tuning for both silhouettes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub shell: ShellConfig,
    pub meat: MeatConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_roundtrip() {
        assert_eq!(ShapeKind::from_str("shell"), Some(ShapeKind::Shell));
        assert_eq!(ShapeKind::from_str("MEAT"), Some(ShapeKind::Meat));
        assert_eq!(ShapeKind::from_str("kernel"), None);
        assert_eq!(ShapeKind::Meat.as_str(), "meat");
    }

    #[test]
    fn test_variation_range_sample() {
        let band = VariationRange::new(0.8, 1.2);
        assert!((band.sample(0.0) - 0.8).abs() < 1e-12);
        assert!((band.sample(1.0) - 1.2).abs() < 1e-12);
        assert!((band.sample(0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"shell": {"base_radius_ratio": 0.3}}"#).unwrap();
        assert!((config.shell.base_radius_ratio - 0.3).abs() < 1e-12);
        assert_eq!(config.shell.min_points, 4);
        assert_eq!(config.meat, MeatConfig::default());
    }
}
