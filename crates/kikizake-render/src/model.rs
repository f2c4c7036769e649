use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in it {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }
}

/// Visual role of a primitive. Serialized names are the wire-level style tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    ReferenceRing,
    DataFill,
    Spoke,
    Label,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Primitive {
    /// Closed polygon through `points` (reference rings, the data fill).
    Polygon { points: Vec<Point>, style: StyleTag },
    /// Line segment (axis spokes).
    Line {
        from: Point,
        to: Point,
        style: StyleTag,
    },
    /// Axis label anchored at `at`, nudged horizontally by `dx`.
    Label {
        at: Point,
        dx: f64,
        text: String,
        style: StyleTag,
    },
}

impl Primitive {
    pub fn style(&self) -> StyleTag {
        match self {
            Primitive::Polygon { style, .. }
            | Primitive::Line { style, .. }
            | Primitive::Label { style, .. } => *style,
        }
    }
}

/// The renderer's output: an ordered sequence of shapes describing one chart.
///
/// Primitive order is stacking order — reference rings, then the data polygon,
/// then spokes, then labels. The drawing holds no reference to any page or
/// surface; it is produced, handed to the caller, materialized once, discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDrawing {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub primitives: Vec<Primitive>,
}

impl ChartDrawing {
    pub fn primitives_with(&self, tag: StyleTag) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.style() == tag)
    }

    /// The six data-polygon vertices, in axis order.
    pub fn data_polygon(&self) -> Option<&[Point]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Polygon { points, style } if *style == StyleTag::DataFill => {
                Some(points.as_slice())
            }
            _ => None,
        })
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.primitives.iter().flat_map(|p| match p {
            Primitive::Polygon { points, .. } => points.clone(),
            Primitive::Line { from, to, .. } => vec![*from, *to],
            Primitive::Label { at, dx, .. } => vec![Point {
                x: at.x + dx,
                y: at.y,
            }],
        }))
    }
}
