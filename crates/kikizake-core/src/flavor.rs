use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// The flavor model is a fixed hexagon: six axes, in the upstream `f1..f6` order.
pub const AXIS_COUNT: usize = 6;

/// A six-dimensional normalized flavor profile.
///
/// Each attribute is the proportion (`0.0..=1.0`) of a reference maximum along one
/// fixed taste/aroma axis. Values outside that range are kept as-is: they plot
/// outside or inside the reference hexagon, which is meaningful, so nothing here
/// clamps. Non-finite values are replaced with `0.0` at ingestion and again before
/// geometry, so `NaN` never reaches a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FlavorVector {
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub f4: f64,
    pub f5: f64,
    pub f6: f64,
}

impl FlavorVector {
    pub fn new(f1: f64, f2: f64, f3: f64, f4: f64, f5: f64, f6: f64) -> Self {
        Self {
            f1,
            f2,
            f3,
            f4,
            f5,
            f6,
        }
    }

    pub fn from_values(values: [f64; AXIS_COUNT]) -> Self {
        let [f1, f2, f3, f4, f5, f6] = values;
        Self::new(f1, f2, f3, f4, f5, f6)
    }

    /// Attribute values in axis order. The index-to-axis mapping is fixed here,
    /// not reconstructed from string keys at each use site.
    pub fn values(&self) -> [f64; AXIS_COUNT] {
        [self.f1, self.f2, self.f3, self.f4, self.f5, self.f6]
    }

    /// Values with non-finite entries replaced by `0.0`.
    pub fn sanitized(&self) -> [f64; AXIS_COUNT] {
        self.values().map(|v| if v.is_finite() { v } else { 0.0 })
    }

    /// Builds a vector from the upstream data-source shape: a JSON mapping with
    /// keys `f1..f6`, each a number or a decimal string. A missing, non-numeric,
    /// or non-finite attribute becomes `0.0`; unknown keys are ignored.
    pub fn from_value(doc: &Value) -> Self {
        const KEYS: [&str; AXIS_COUNT] = ["f1", "f2", "f3", "f4", "f5", "f6"];
        let values = KEYS.map(|key| {
            let raw = doc.get(key);
            match raw.and_then(coerce_f64) {
                Some(v) if v.is_finite() => v,
                _ => {
                    if raw.is_some() {
                        tracing::debug!(key, "unusable flavor attribute, substituting 0.0");
                    }
                    0.0
                }
            }
        });
        Self::from_values(values)
    }

    /// Parses a JSON document and ingests it via [`FlavorVector::from_value`].
    ///
    /// A structurally invalid document is a caller bug and errors; attribute-level
    /// problems inside a valid document never do.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&doc))
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
