//! SVG rendering of gauges.
//!
//! [`SvgCanvas`] turns canvas calls into SVG elements; [`render_svg`] paints
//! a whole gauge into a standalone `<svg>` document:
//!
//! ```
//! use arcgauge_core::GaugeInput;
//! use arcgauge_widgets::render_svg;
//!
//! let svg = render_svg(&GaugeInput::new(50.0, 100.0)).expect("valid size");
//! assert!(svg.starts_with("<svg "));
//! assert!(svg.contains(r#"d="M 7 100 A 83 83 0 1 1 173 100""#));
//! ```

use crate::radial_gauge::{paint_geometry, RadialGauge};
use arcgauge_core::draw::format_coord;
use arcgauge_core::{
    compute_gauge, ArcPath, Canvas, GaugeInput, Point, Result, Size, StrokeStyle, TextStyle,
    Transform2D,
};
use tracing::trace;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A [`Canvas`] that accumulates SVG elements.
#[derive(Debug, Clone, Default)]
pub struct SvgCanvas {
    elements: Vec<String>,
    transform_stack: Vec<Transform2D>,
}

impl SvgCanvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted elements, one per canvas call.
    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Wrap the elements in an `<svg>` root of the given size.
    #[must_use]
    pub fn finish(self, size: Size) -> String {
        let width = format_coord(size.width);
        let height = format_coord(size.height);

        let mut svg = format!(
            "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Canvas for SvgCanvas {
    fn stroke_arc(&mut self, path: &ArcPath, style: &StrokeStyle) {
        let t = self.current_transform();
        let mut path = *path;
        path.start = t.apply(path.start);
        path.end = t.apply(path.end);

        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="{}"/>"#,
            path.to_svg_path(),
            style.color.to_css(),
            format_coord(style.width),
            style.cap.as_str()
        ));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let position = self.current_transform().apply(position);
        self.elements.push(format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="central" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
            format_coord(position.x),
            format_coord(position.y),
            style.anchor.as_str(),
            format_coord(style.size),
            style.weight.numeric(),
            style.color.to_css(),
            xml_escape(text)
        ));
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}

/// Render a gauge as a standalone SVG document.
///
/// The document is as large as the gauge's measured size, including the
/// caption line when a caption is set.
pub fn render_svg(input: &GaugeInput) -> Result<String> {
    let geometry = compute_gauge(input)?;
    let gauge = RadialGauge::from_input(input.clone());

    let mut canvas = SvgCanvas::new();
    paint_geometry(
        &mut canvas,
        &geometry,
        &input.style.sanitized(),
        gauge.caption_anchor(&geometry),
    );

    trace!(elements = canvas.elements().len(), "rendered gauge svg");
    Ok(canvas.finish(gauge.preferred_size(&geometry)))
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
