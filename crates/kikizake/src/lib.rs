#![forbid(unsafe_code)]

//! `kikizake` renders the hexagonal sake flavor-profile radar chart, headless.
//!
//! The core model (flavor vectors, chart specs, config) is always available;
//! geometry and SVG output live behind the `render` feature:
//!
//! - `render`: enable [`render`] (drawing geometry, SVG backend, target registry)

pub use kikizake_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use kikizake_render::model::{Bounds, ChartDrawing, Point, Primitive, StyleTag};
    pub use kikizake_render::svg::{ChartTheme, SvgRenderOptions, render_drawing_svg};
    pub use kikizake_render::target::TargetRegistry;
    pub use kikizake_render::{geometry, render};

    #[derive(Debug, thiserror::Error)]
    pub enum ChartError {
        #[error(transparent)]
        Core(#[from] kikizake_core::Error),
        #[error(transparent)]
        Render(#[from] kikizake_render::Error),
    }

    pub type Result<T> = std::result::Result<T, ChartError>;

    /// Converts an arbitrary string into a conservative SVG `id` token suitable
    /// for embedding several charts in the same page.
    ///
    /// The root `<svg id="...">` value scopes the emitted CSS; duplicated or
    /// hostile ids would make chart styles bleed into each other. This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `k-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "k-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "k-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "k" {
            return "k-untitled".to_string();
        }
        out.to_string()
    }

    /// Computes the drawing for one flavor vector and materializes it as SVG.
    pub fn render_flavor_svg(
        flavor: &kikizake_core::FlavorVector,
        spec: &kikizake_core::ChartSpec,
        options: &SvgRenderOptions,
    ) -> Result<String> {
        let drawing = kikizake_render::render(flavor, spec)?;
        Ok(render_drawing_svg(&drawing, options))
    }

    /// Renders a chart into a registered target slot, replacing whatever the
    /// slot held before.
    ///
    /// Returns `Ok(false)` without doing any work when the target does not
    /// exist — absent targets are the caller's lookout, not a failure.
    pub fn render_into(
        registry: &mut TargetRegistry,
        target_id: &str,
        flavor: &kikizake_core::FlavorVector,
        spec: &kikizake_core::ChartSpec,
        options: &SvgRenderOptions,
    ) -> Result<bool> {
        if !registry.is_registered(target_id) {
            return Ok(false);
        }
        let mut options = options.clone();
        options.chart_id = Some(sanitize_svg_id(target_id));
        let svg = render_flavor_svg(flavor, spec, &options)?;
        Ok(registry.attach(target_id, svg))
    }

}
