use std::fmt::Write as _;

use kikizake_core::ChartConfig;

use crate::model::{ChartDrawing, Primitive, StyleTag};

/// Colors and strokes for the SVG backend. Defaults follow the page styling the
/// chart shipped with; all values are overridable via `theme.*` config keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub background: String,
    pub font_family: String,
    pub ring_color: String,
    pub ring_opacity: f64,
    pub ring_stroke_width: f64,
    pub data_color: String,
    pub data_opacity: f64,
    pub data_stroke_width: f64,
    pub spoke_color: String,
    pub spoke_stroke_width: f64,
    pub label_color: String,
    pub label_font_size: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            font_family: r#""trebuchet ms",verdana,arial,sans-serif"#.to_string(),
            ring_color: "#DEDEDE".to_string(),
            ring_opacity: 0.3,
            ring_stroke_width: 1.0,
            data_color: "hsl(240, 100%, 76.2745098039%)".to_string(),
            data_opacity: 0.5,
            data_stroke_width: 2.0,
            spoke_color: "#333333".to_string(),
            spoke_stroke_width: 2.0,
            label_color: "#333333".to_string(),
            label_font_size: 12.0,
        }
    }
}

impl ChartTheme {
    pub fn from_config(config: &ChartConfig) -> Self {
        let mut theme = Self::default();
        let mut set_str = |slot: &mut String, key: &str| {
            if let Some(v) = config.get_str(key) {
                *slot = v.to_string();
            }
        };
        set_str(&mut theme.background, "theme.background");
        set_str(&mut theme.font_family, "theme.fontFamily");
        set_str(&mut theme.ring_color, "theme.ringColor");
        set_str(&mut theme.data_color, "theme.dataColor");
        set_str(&mut theme.spoke_color, "theme.spokeColor");
        set_str(&mut theme.label_color, "theme.labelColor");
        if let Some(v) = config.get_f64("theme.ringOpacity") {
            theme.ring_opacity = v;
        }
        if let Some(v) = config.get_f64("theme.dataOpacity") {
            theme.data_opacity = v;
        }
        if let Some(v) = config.get_f64("theme.labelFontSize") {
            theme.label_font_size = v;
        }
        theme
    }
}

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `<svg id>` value; also scopes the emitted CSS. Sanitize caller-supplied
    /// ids first (`kikizake::render::sanitize_svg_id`).
    pub chart_id: Option<String>,
    pub theme: ChartTheme,
}

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn style_class(tag: StyleTag) -> &'static str {
    match tag {
        StyleTag::ReferenceRing => "flavorRing",
        StyleTag::DataFill => "flavorData",
        StyleTag::Spoke => "flavorSpoke",
        StyleTag::Label => "flavorAxisLabel",
    }
}

fn chart_css(chart_id: &str, theme: &ChartTheme) -> String {
    let id = escape_xml(chart_id);
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"#{}{{font-family:{};}}"#,
        id, theme.font_family
    );
    let _ = write!(
        &mut out,
        r#"#{} .flavorRing{{fill:{};fill-opacity:{};stroke:{};stroke-width:{};}}"#,
        id,
        theme.ring_color,
        fmt(theme.ring_opacity),
        theme.ring_color,
        fmt(theme.ring_stroke_width)
    );
    let _ = write!(
        &mut out,
        r#"#{} .flavorData{{fill:{};fill-opacity:{};stroke:{};stroke-width:{};}}"#,
        id,
        theme.data_color,
        fmt(theme.data_opacity),
        theme.data_color,
        fmt(theme.data_stroke_width)
    );
    let _ = write!(
        &mut out,
        r#"#{} .flavorSpoke{{stroke:{};stroke-width:{};}}"#,
        id,
        theme.spoke_color,
        fmt(theme.spoke_stroke_width)
    );
    let _ = write!(
        &mut out,
        r#"#{} .flavorAxisLabel{{dominant-baseline:middle;text-anchor:middle;font-size:{}px;fill:{};}}"#,
        id,
        fmt(theme.label_font_size),
        theme.label_color
    );
    out
}

/// Materializes a drawing as a standalone SVG document.
///
/// Primitives are emitted in drawing order, which is already stacking order, so
/// the document needs no z-index tricks. Infallible: a `ChartDrawing` is always
/// representable.
pub fn render_drawing_svg(drawing: &ChartDrawing, options: &SvgRenderOptions) -> String {
    let chart_id = options.chart_id.as_deref().unwrap_or("flavor-chart");
    let chart_id_esc = escape_xml(chart_id);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="{s}" height="{s}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {s} {s}" style="background-color: {bg};">"#,
        id = chart_id_esc,
        s = fmt(drawing.size),
        bg = escape_xml(&options.theme.background),
    );

    let _ = write!(
        &mut out,
        "<style>{}</style>",
        chart_css(chart_id, &options.theme)
    );

    for primitive in &drawing.primitives {
        match primitive {
            Primitive::Polygon { points, style } => {
                let mut attr = String::new();
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        attr.push(' ');
                    }
                    let _ = write!(&mut attr, "{},{}", fmt(p.x), fmt(p.y));
                }
                let _ = write!(
                    &mut out,
                    r#"<polygon points="{points}" class="{class}"/>"#,
                    points = escape_xml(&attr),
                    class = style_class(*style)
                );
            }
            Primitive::Line { from, to, style } => {
                let _ = write!(
                    &mut out,
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" class="{class}"/>"#,
                    x1 = fmt(from.x),
                    y1 = fmt(from.y),
                    x2 = fmt(to.x),
                    y2 = fmt(to.y),
                    class = style_class(*style)
                );
            }
            Primitive::Label {
                at,
                dx,
                text,
                style,
            } => {
                let _ = write!(
                    &mut out,
                    r#"<text x="{x}" y="{y}" dx="{dx}" class="{class}">{text}</text>"#,
                    x = fmt(at.x),
                    y = fmt(at.y),
                    dx = fmt(*dx),
                    class = style_class(*style),
                    text = escape_xml(text)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
