use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::flavor::AXIS_COUNT;

/// Empirical center-to-apex divisor: `radius = size / 2.5` leaves room for axis
/// labels, where `size / 2` would not.
pub const DEFAULT_RADIUS_DIVISOR: f64 = 2.5;
pub const DEFAULT_RING_COUNT: u32 = 4;
pub const DEFAULT_RING_STEP: f64 = 0.25;

pub const FULL_SIZE: f64 = 300.0;
pub const MINI_SIZE: f64 = 150.0;

/// Default display strings for the six sakenowa axes, in `f1..f6` order.
/// Localization is a caller concern; override with [`ChartSpec::with_labels`].
pub const DEFAULT_AXIS_LABELS: [&str; AXIS_COUNT] =
    ["Floral", "Mellow", "Rich", "Mild", "Dry", "Light"];

/// Horizontal label nudges for the full preset: right-leaning axes push right,
/// left-leaning push left, the vertical axes stay centered.
const FULL_LABEL_OFFSETS: [f64; AXIS_COUNT] = [0.0, 12.0, 12.0, 0.0, -12.0, -12.0];

/// The two presentation presets. Geometry is identical between them; only size
/// and optional elements differ, so list and detail views always agree visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    Full,
    Mini,
}

impl ChartVariant {
    pub fn spec(self) -> ChartSpec {
        match self {
            ChartVariant::Full => ChartSpec::full(),
            ChartVariant::Mini => ChartSpec::mini(),
        }
    }
}

impl FromStr for ChartVariant {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "mini" => Ok(Self::Mini),
            _ => Err(()),
        }
    }
}

/// Rendering configuration for one chart. All former magic numbers (the `2.5`
/// radius divisor, the `0.25` ring step) live here as overridable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Square pixel extent of the drawing surface.
    pub size: f64,
    /// Center-to-apex distance in pixels.
    pub radius: f64,
    /// Number of concentric reference polygons.
    pub ring_count: u32,
    /// Scale spacing between consecutive reference polygons.
    pub ring_step: f64,
    /// Axis display strings; `None` draws no labels (the mini preset).
    pub labels: Option<[String; AXIS_COUNT]>,
    /// Per-axis horizontal label nudge, to keep side labels off the chart.
    pub label_offsets: Option<[f64; AXIS_COUNT]>,
}

impl ChartSpec {
    /// Full-size detail chart: 300x300, four rings at 0.25 steps, labeled axes.
    pub fn full() -> Self {
        Self {
            size: FULL_SIZE,
            radius: FULL_SIZE / DEFAULT_RADIUS_DIVISOR,
            ring_count: DEFAULT_RING_COUNT,
            ring_step: DEFAULT_RING_STEP,
            labels: Some(DEFAULT_AXIS_LABELS.map(str::to_string)),
            label_offsets: Some(FULL_LABEL_OFFSETS),
        }
    }

    /// Miniature list-view chart: 150x150, same rings, no labels.
    pub fn mini() -> Self {
        Self {
            size: MINI_SIZE,
            radius: MINI_SIZE / DEFAULT_RADIUS_DIVISOR,
            ring_count: DEFAULT_RING_COUNT,
            ring_step: DEFAULT_RING_STEP,
            labels: None,
            label_offsets: None,
        }
    }

    /// Resizes the chart, re-deriving the radius from the current size/radius
    /// ratio so a resized preset keeps its proportions.
    pub fn with_size(mut self, size: f64) -> Self {
        let divisor = if self.radius > 0.0 {
            self.size / self.radius
        } else {
            DEFAULT_RADIUS_DIVISOR
        };
        self.size = size;
        self.radius = size / divisor;
        self
    }

    pub fn with_labels(mut self, labels: [&str; AXIS_COUNT]) -> Self {
        self.labels = Some(labels.map(str::to_string));
        self
    }

    pub fn without_labels(mut self) -> Self {
        self.labels = None;
        self.label_offsets = None;
        self
    }

    pub fn with_rings(mut self, count: u32, step: f64) -> Self {
        self.ring_count = count;
        self.ring_step = step;
        self
    }

    /// A spec that cannot describe a drawable chart is a caller bug and fails
    /// fast, unlike flavor-value problems which degrade to `0.0`.
    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(Error::DegenerateSpec { size: self.size });
        }
        Ok(())
    }

    /// Builds a preset spec with site-config overrides applied
    /// (`chart.size`, `chart.radiusDivisor`, `chart.ringCount`, `chart.ringStep`).
    pub fn from_config(variant: ChartVariant, config: &ChartConfig) -> Self {
        let mut spec = variant.spec();
        let divisor = config
            .get_f64("chart.radiusDivisor")
            .unwrap_or(DEFAULT_RADIUS_DIVISOR);
        if let Some(size) = config.get_f64("chart.size") {
            spec.size = size;
        }
        spec.radius = spec.size / divisor;
        if let Some(count) = config.get_u32("chart.ringCount") {
            spec.ring_count = count;
        }
        if let Some(step) = config.get_f64("chart.ringStep") {
            spec.ring_step = step;
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_preset_derives_radius_from_divisor() {
        let spec = ChartSpec::full();
        assert_eq!(spec.size, 300.0);
        assert_eq!(spec.radius, 120.0);
        assert_eq!(spec.ring_count, 4);
        assert_eq!(spec.ring_step, 0.25);
        assert!(spec.labels.is_some());
    }

    #[test]
    fn mini_preset_shares_ring_setup_and_drops_labels() {
        let spec = ChartSpec::mini();
        assert_eq!(spec.size, 150.0);
        assert_eq!(spec.radius, 60.0);
        assert_eq!(spec.ring_count, ChartSpec::full().ring_count);
        assert_eq!(spec.ring_step, ChartSpec::full().ring_step);
        assert!(spec.labels.is_none());
        assert!(spec.label_offsets.is_none());
    }

    #[test]
    fn with_size_keeps_proportions() {
        let spec = ChartSpec::full().with_size(500.0);
        assert_eq!(spec.size, 500.0);
        assert_eq!(spec.radius, 200.0);
    }

    #[test]
    fn validate_rejects_non_positive_size() {
        assert!(ChartSpec::full().with_size(0.0).validate().is_err());
        assert!(ChartSpec::full().with_size(-10.0).validate().is_err());
        assert!(ChartSpec::full().validate().is_ok());
    }

    #[test]
    fn from_config_applies_overrides() {
        let cfg = ChartConfig::from_value(json!({
            "chart": {"size": 200, "radiusDivisor": 2.0, "ringCount": 5, "ringStep": 0.2}
        }));
        let spec = ChartSpec::from_config(ChartVariant::Full, &cfg);
        assert_eq!(spec.size, 200.0);
        assert_eq!(spec.radius, 100.0);
        assert_eq!(spec.ring_count, 5);
        assert_eq!(spec.ring_step, 0.2);
    }

    #[test]
    fn variant_parses_from_cli_strings() {
        assert_eq!("full".parse::<ChartVariant>(), Ok(ChartVariant::Full));
        assert_eq!(" MINI ".parse::<ChartVariant>(), Ok(ChartVariant::Mini));
        assert!("medium".parse::<ChartVariant>().is_err());
    }
}
