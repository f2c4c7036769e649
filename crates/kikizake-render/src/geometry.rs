use std::f64::consts::{FRAC_PI_2, TAU};

use kikizake_core::{AXIS_COUNT, ChartSpec, FlavorVector};

use crate::Result;
use crate::model::{ChartDrawing, Point, Primitive, StyleTag};

/// Angle of axis `index`, offset so axis 0 points straight up. This rotation is
/// a fixed visual convention; labels and list/detail charts rely on it matching.
pub fn axis_angle(index: usize) -> f64 {
    -FRAC_PI_2 + (index as f64) * (TAU / AXIS_COUNT as f64)
}

fn project(center: Point, radius: f64, angle: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

/// Computes the chart drawing for one flavor vector.
///
/// Pure: reads only its inputs, returns a fresh drawing, keeps no state between
/// calls. Out-of-range flavor values are plotted as-is (no clamping); non-finite
/// values are treated as `0.0` so `NaN` never enters the geometry.
pub fn render(flavor: &FlavorVector, spec: &ChartSpec) -> Result<ChartDrawing> {
    spec.validate()?;
    tracing::trace!(size = spec.size, radius = spec.radius, "rendering flavor chart");

    let center = Point {
        x: spec.size / 2.0,
        y: spec.size / 2.0,
    };
    let radius = spec.radius;
    let values = flavor.sanitized();

    let mut primitives: Vec<Primitive> = Vec::new();

    if spec.ring_step > 0.0 {
        for ring in 1..=spec.ring_count {
            let scale = spec.ring_step * ring as f64;
            let points = (0..AXIS_COUNT)
                .map(|i| project(center, radius * scale, axis_angle(i)))
                .collect();
            primitives.push(Primitive::Polygon {
                points,
                style: StyleTag::ReferenceRing,
            });
        }
    }

    let data_points = (0..AXIS_COUNT)
        .map(|i| project(center, radius * values[i], axis_angle(i)))
        .collect();
    primitives.push(Primitive::Polygon {
        points: data_points,
        style: StyleTag::DataFill,
    });

    // Spokes come after the data polygon so they layer on top of the fill.
    for i in 0..AXIS_COUNT {
        primitives.push(Primitive::Line {
            from: center,
            to: project(center, radius, axis_angle(i)),
            style: StyleTag::Spoke,
        });
    }

    if let Some(labels) = &spec.labels {
        for (i, text) in labels.iter().enumerate() {
            let dx = spec.label_offsets.map_or(0.0, |offsets| offsets[i]);
            primitives.push(Primitive::Label {
                at: project(center, radius, axis_angle(i)),
                dx,
                text: text.clone(),
                style: StyleTag::Label,
            });
        }
    }

    Ok(ChartDrawing {
        size: spec.size,
        center,
        radius,
        primitives,
    })
}
