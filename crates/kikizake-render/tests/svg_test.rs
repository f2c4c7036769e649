use kikizake_core::{ChartConfig, ChartSpec, FlavorVector};
use kikizake_render::svg::{ChartTheme, SvgRenderOptions, render_drawing_svg};
use kikizake_render::render;
use serde_json::json;

fn sample_flavor() -> FlavorVector {
    FlavorVector::new(0.8, 0.45, 0.6, 0.3, 0.9, 0.2)
}

#[test]
fn full_chart_svg_structure() {
    let drawing = render(&sample_flavor(), &ChartSpec::full()).expect("render ok");
    let svg = render_drawing_svg(&drawing, &SvgRenderOptions::default());

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 300 300""#));
    assert!(svg.contains(r#"id="flavor-chart""#));

    // 4 reference rings + 1 data polygon, 6 spokes, 6 labels.
    assert_eq!(svg.matches(r#"class="flavorRing""#).count(), 4);
    assert_eq!(svg.matches(r#"class="flavorData""#).count(), 1);
    assert_eq!(svg.matches(r#"class="flavorSpoke""#).count(), 6);
    assert_eq!(svg.matches(r#"class="flavorAxisLabel""#).count(), 6);

    // Document order is stacking order.
    let last_ring = svg.rfind(r#"class="flavorRing""#).unwrap();
    let data = svg.find(r#"class="flavorData""#).unwrap();
    let first_spoke = svg.find(r#"class="flavorSpoke""#).unwrap();
    let last_spoke = svg.rfind(r#"class="flavorSpoke""#).unwrap();
    let first_label = svg.find(r#"class="flavorAxisLabel""#).unwrap();
    assert!(last_ring < data && data < first_spoke && last_spoke < first_label);
}

#[test]
fn mini_chart_svg_has_no_labels() {
    let drawing = render(&sample_flavor(), &ChartSpec::mini()).expect("render ok");
    let svg = render_drawing_svg(&drawing, &SvgRenderOptions::default());

    assert!(svg.contains(r#"viewBox="0 0 150 150""#));
    assert_eq!(svg.matches("<text").count(), 0);
    assert_eq!(svg.matches(r#"class="flavorSpoke""#).count(), 6);
}

#[test]
fn label_nudges_reach_the_markup() {
    let drawing = render(&sample_flavor(), &ChartSpec::full()).expect("render ok");
    let svg = render_drawing_svg(&drawing, &SvgRenderOptions::default());
    // Full preset nudges the right-leaning axes by +12 and left-leaning by -12.
    assert!(svg.contains(r#"dx="12""#));
    assert!(svg.contains(r#"dx="-12""#));
}

#[test]
fn chart_id_scopes_the_css() {
    let drawing = render(&sample_flavor(), &ChartSpec::mini()).expect("render ok");
    let options = SvgRenderOptions {
        chart_id: Some("sake-42".to_string()),
        ..Default::default()
    };
    let svg = render_drawing_svg(&drawing, &options);
    assert!(svg.contains(r#"id="sake-42""#));
    assert!(svg.contains("#sake-42 .flavorData"));
}

#[test]
fn label_text_is_xml_escaped() {
    let spec = ChartSpec::full().with_labels(["A & B", "<x>", "\"q\"", "d", "e", "f"]);
    let drawing = render(&sample_flavor(), &spec).expect("render ok");
    let svg = render_drawing_svg(&drawing, &SvgRenderOptions::default());
    assert!(svg.contains("A &amp; B"));
    assert!(svg.contains("&lt;x&gt;"));
    assert!(!svg.contains("<x>"));
}

#[test]
fn theme_overrides_from_config() {
    let cfg = ChartConfig::from_value(json!({
        "theme": {"dataColor": "#9a3b4c", "dataOpacity": 0.8, "background": "transparent"}
    }));
    let theme = ChartTheme::from_config(&cfg);
    assert_eq!(theme.data_color, "#9a3b4c");
    assert_eq!(theme.data_opacity, 0.8);
    assert_eq!(theme.background, "transparent");
    // Untouched keys keep their defaults.
    assert_eq!(theme.ring_color, ChartTheme::default().ring_color);

    let drawing = render(&sample_flavor(), &ChartSpec::mini()).expect("render ok");
    let svg = render_drawing_svg(
        &drawing,
        &SvgRenderOptions {
            chart_id: None,
            theme,
        },
    );
    assert!(svg.contains("#9a3b4c"));
    assert!(svg.contains("background-color: transparent"));
}

#[test]
fn drawing_serializes_with_wire_style_tags() {
    let drawing = render(&sample_flavor(), &ChartSpec::full()).expect("render ok");
    let doc = serde_json::to_value(&drawing).expect("serialize ok");
    let styles: Vec<&str> = doc["primitives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["style"].as_str().unwrap())
        .collect();
    assert!(styles.contains(&"reference-ring"));
    assert!(styles.contains(&"data-fill"));
    assert!(styles.contains(&"spoke"));
    assert!(styles.contains(&"label"));
}
