//! Half-circle gauge widget.

use arcgauge_core::{
    compute_gauge, widget::LayoutResult, Canvas, Color, Constraints, FontWeight, GaugeConfig,
    GaugeGeometry, GaugeInput, GaugeStyle, NumberLocale, Point, Rect, Size, StrokeStyle,
    TextStyle, Transform2D, TypeId, ValueFormatter, Widget,
};
use tracing::{debug, warn};

/// Line height of the caption relative to its font size.
const CAPTION_LINE_HEIGHT: f64 = 1.5;
/// The caption is pulled up into the label area by this much.
const CAPTION_PULL_UP: f64 = 4.0;

/// Radial gauge widget: a track arc, a value arc and the value, percent and
/// caption labels.
///
/// The gauge paints at its measured size from the top-left corner of its
/// layout bounds. Bounds smaller than that size scale the whole drawing down
/// to fit; a gauge that was never laid out has empty bounds and paints
/// nothing.
///
/// # Examples
///
/// ```
/// use arcgauge_core::{Constraints, RecordingCanvas, Rect, Widget};
/// use arcgauge_widgets::RadialGauge;
///
/// let mut gauge = RadialGauge::new(50.0, 100.0).label("VIP");
/// let size = gauge.measure(Constraints::unbounded());
/// gauge.layout(Rect::new(0.0, 0.0, size.width, size.height));
///
/// let mut canvas = RecordingCanvas::new();
/// gauge.paint(&mut canvas);
/// assert_eq!(canvas.arcs().count(), 2);
/// assert_eq!(canvas.texts().collect::<Vec<_>>(), ["50", "50%", "VIP"]);
/// ```
#[derive(Debug, Clone)]
pub struct RadialGauge {
    input: GaugeInput,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl Default for RadialGauge {
    fn default() -> Self {
        Self::from_input(GaugeInput::default())
    }
}

impl RadialGauge {
    /// Create a gauge with the default style.
    #[must_use]
    pub fn new(value: f64, max: f64) -> Self {
        Self::from_input(GaugeInput::new(value, max))
    }

    /// Wrap an existing gauge input.
    #[must_use]
    pub fn from_input(input: GaugeInput) -> Self {
        Self {
            input,
            test_id_value: None,
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Create a gauge from a parsed configuration document.
    #[must_use]
    pub fn from_config(value: f64, max: f64, config: &GaugeConfig) -> Self {
        Self::new(value, max)
            .label(config.label.clone())
            .style(config.style.clone())
            .formatter(config.format.clone())
    }

    /// Set the caption.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.input = self.input.label(label);
        self
    }

    /// Replace the style.
    #[must_use]
    pub fn style(mut self, style: GaugeStyle) -> Self {
        self.input = self.input.style(style);
        self
    }

    /// Set the drawing diameter.
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.input = self.input.size(size);
        self
    }

    /// Set the arc thickness.
    #[must_use]
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.input = self.input.stroke_width(width);
        self
    }

    /// Set the value arc and track colors.
    #[must_use]
    pub fn colors(mut self, color: Color, track_color: Color) -> Self {
        self.input = self.input.colors(color, track_color);
        self
    }

    /// Set the locale of the default formatter.
    #[must_use]
    pub fn locale(mut self, locale: NumberLocale) -> Self {
        self.input = self.input.locale(locale);
        self
    }

    /// Use a custom value formatter.
    #[must_use]
    pub fn formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.input = self.input.formatter(formatter);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Update the displayed value.
    pub fn set_value(&mut self, value: f64) {
        self.input.value = value;
    }

    /// Update the scale maximum.
    pub fn set_max(&mut self, max: f64) {
        self.input.max = max;
    }

    /// Get the gauge input.
    #[must_use]
    pub fn input(&self) -> &GaugeInput {
        &self.input
    }

    /// Compute the current geometry, or `None` for an invalid size.
    #[must_use]
    pub fn geometry(&self) -> Option<GaugeGeometry> {
        match compute_gauge(&self.input) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                warn!(error = %err, "radial gauge not drawn");
                None
            }
        }
    }

    /// Height of the caption line, zero when there is no caption.
    #[must_use]
    pub fn caption_height(&self) -> f64 {
        if self.input.label.is_empty() {
            0.0
        } else {
            self.input
                .style
                .sanitized()
                .caption_font_size
                .mul_add(CAPTION_LINE_HEIGHT, -CAPTION_PULL_UP)
                .max(0.0)
        }
    }

    pub(crate) fn preferred_size(&self, geometry: &GaugeGeometry) -> Size {
        Size::new(
            geometry.viewport.width,
            geometry.viewport.height + self.caption_height(),
        )
    }

    /// Factor that fits the measured drawing into the layout bounds.
    fn fit_scale(&self, preferred: Size) -> f64 {
        let available = self.bounds.size();
        if available.contains(&preferred) {
            return 1.0;
        }
        let scale = (available.width / preferred.width).min(available.height / preferred.height);
        if scale.is_finite() {
            scale.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub(crate) fn caption_anchor(&self, geometry: &GaugeGeometry) -> Point {
        Point::new(
            geometry.viewport.width / 2.0,
            geometry.viewport.height + self.caption_height() / 2.0,
        )
    }
}

/// Paint a computed gauge relative to the canvas origin.
pub(crate) fn paint_geometry(
    canvas: &mut dyn Canvas,
    geometry: &GaugeGeometry,
    style: &GaugeStyle,
    caption_anchor: Point,
) {
    canvas.stroke_arc(
        &geometry.track_path,
        &StrokeStyle::new(style.track_color, geometry.stroke_width),
    );
    if let Some(value_path) = &geometry.value_path {
        canvas.stroke_arc(
            value_path,
            &StrokeStyle::new(style.color, geometry.stroke_width),
        );
    }

    canvas.draw_text(
        &geometry.value_label,
        geometry.value_anchor,
        &TextStyle {
            size: style.value_font_size,
            color: style.text_color,
            weight: FontWeight::Semibold,
            ..TextStyle::default()
        },
    );
    canvas.draw_text(
        &geometry.percent_label,
        geometry.percent_anchor,
        &TextStyle {
            size: style.percent_font_size,
            color: style.muted_text_color,
            ..TextStyle::default()
        },
    );

    if let Some(caption) = &geometry.caption {
        canvas.draw_text(
            caption,
            caption_anchor,
            &TextStyle {
                size: style.caption_font_size,
                color: style.muted_text_color,
                ..TextStyle::default()
            },
        );
    }
}

impl Widget for RadialGauge {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = self
            .geometry()
            .map_or(Size::ZERO, |geometry| self.preferred_size(&geometry));
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(geometry) = self.geometry() else {
            return;
        };

        let scale = self.fit_scale(self.preferred_size(&geometry));
        let fitted;
        let (gauge, geometry) = if scale < 1.0 {
            debug!(scale, "radial gauge scaled down to its bounds");
            let style = self.input.style.sanitized().scaled(scale);
            fitted = Self::from_input(self.input.clone().style(style));
            let Some(geometry) = fitted.geometry() else {
                return;
            };
            (&fitted, geometry)
        } else {
            (self, geometry)
        };

        let origin = self.bounds.origin();
        canvas.push_transform(Transform2D::translate(origin.x, origin.y));
        paint_geometry(
            canvas,
            &geometry,
            &gauge.input.style.sanitized(),
            gauge.caption_anchor(&geometry),
        );
        canvas.pop_transform();
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcgauge_core::draw::DrawCommand;
    use arcgauge_core::RecordingCanvas;

    fn painted(gauge: &RadialGauge) -> RecordingCanvas {
        let mut gauge = gauge.clone();
        let size = gauge.measure(Constraints::unbounded());
        gauge.layout(Rect::new(0.0, 0.0, size.width, size.height));

        let mut canvas = RecordingCanvas::new();
        gauge.paint(&mut canvas);
        canvas
    }

    // ===== Construction Tests =====

    #[test]
    fn test_radial_gauge_new() {
        let gauge = RadialGauge::new(30.0, 60.0);
        assert_eq!(gauge.input().value, 30.0);
        assert_eq!(gauge.input().max, 60.0);
        assert!(gauge.input().label.is_empty());
    }

    #[test]
    fn test_radial_gauge_default() {
        let gauge = RadialGauge::default();
        assert_eq!(gauge.input().value, 0.0);
        assert_eq!(gauge.input().max, 100.0);
        assert_eq!(gauge.bounds(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_radial_gauge_builder() {
        let gauge = RadialGauge::new(1.0, 2.0)
            .label("Active")
            .size(240.0)
            .stroke_width(20.0)
            .colors(Color::MUTED, Color::WHITE)
            .locale(NumberLocale::EnUs)
            .test_id("active-gauge");

        let input = gauge.input();
        assert_eq!(input.label, "Active");
        assert_eq!(input.style.size, 240.0);
        assert_eq!(input.style.stroke_width, 20.0);
        assert_eq!(input.style.color, Color::MUTED);
        assert_eq!(input.style.track_color, Color::WHITE);
        assert_eq!(input.locale, NumberLocale::EnUs);
        assert_eq!(Widget::test_id(&gauge), Some("active-gauge"));
    }

    #[test]
    fn test_radial_gauge_from_config() {
        let config = GaugeConfig::from_yaml("label: Trial\nformat:\n  suffix: \" pcs\"\n")
            .expect("valid config");
        let gauge = RadialGauge::from_config(1200.0, 2000.0, &config);

        let geometry = gauge.geometry().expect("valid size");
        assert_eq!(geometry.value_label, "1\u{a0}200 pcs");
        assert_eq!(geometry.caption.as_deref(), Some("Trial"));
    }

    #[test]
    fn test_radial_gauge_set_value() {
        let mut gauge = RadialGauge::new(10.0, 100.0);
        gauge.set_value(80.0);
        gauge.set_max(160.0);
        assert_eq!(gauge.geometry().expect("valid size").percent_label, "50%");
    }

    #[test]
    fn test_radial_gauge_type_id() {
        let gauge = RadialGauge::default();
        assert_eq!(Widget::type_id(&gauge), TypeId::of::<RadialGauge>());
    }

    // ===== Measure / Layout Tests =====

    #[test]
    fn test_radial_gauge_measure_without_caption() {
        let gauge = RadialGauge::new(50.0, 100.0);
        let size = gauge.measure(Constraints::unbounded());
        assert_eq!(size, Size::new(180.0, 120.0));
    }

    #[test]
    fn test_radial_gauge_measure_with_caption() {
        let gauge = RadialGauge::new(50.0, 100.0).label("VIP");
        assert_eq!(gauge.caption_height(), 14.0);
        let size = gauge.measure(Constraints::unbounded());
        assert_eq!(size, Size::new(180.0, 134.0));
    }

    #[test]
    fn test_radial_gauge_measure_constrained() {
        let gauge = RadialGauge::new(50.0, 100.0);
        let size = gauge.measure(Constraints::loose(Size::new(100.0, 100.0)));
        assert_eq!(size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_radial_gauge_measure_invalid_size() {
        let gauge = RadialGauge::new(50.0, 100.0).size(0.0);
        assert_eq!(gauge.measure(Constraints::unbounded()), Size::ZERO);
    }

    #[test]
    fn test_radial_gauge_layout() {
        let mut gauge = RadialGauge::default();
        let result = gauge.layout(Rect::new(5.0, 6.0, 180.0, 120.0));
        assert_eq!(result.size, Size::new(180.0, 120.0));
        assert_eq!(gauge.bounds(), Rect::new(5.0, 6.0, 180.0, 120.0));
    }

    // ===== Paint Tests =====

    #[test]
    fn test_radial_gauge_paint_order() {
        let canvas = painted(&RadialGauge::new(50.0, 100.0).label("VIP"));

        assert_eq!(canvas.command_count(), 5);
        assert!(matches!(canvas.commands()[0], DrawCommand::Arc { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Arc { .. }));
        assert_eq!(
            canvas.texts().collect::<Vec<_>>(),
            vec!["50", "50%", "VIP"]
        );
    }

    #[test]
    fn test_radial_gauge_paint_zero_skips_value_arc() {
        let canvas = painted(&RadialGauge::new(0.0, 100.0));

        assert_eq!(canvas.arcs().count(), 1);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["0", "0%"]);
    }

    #[test]
    fn test_radial_gauge_paint_uses_colors() {
        let green = Color::from_rgb8(0x52, 0xc4, 0x1a);
        let canvas = painted(&RadialGauge::new(75.0, 100.0).colors(green, Color::WHITE));

        let strokes: Vec<_> = canvas.arcs().map(|(_, style)| style.color).collect();
        assert_eq!(strokes, vec![Color::WHITE, green]);
        assert!(canvas.arcs().all(|(_, style)| style.width == 14.0));
    }

    #[test]
    fn test_radial_gauge_paint_text_styles() {
        let canvas = painted(&RadialGauge::new(50.0, 100.0));

        let styles: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { style, .. } => Some(style),
                DrawCommand::Arc { .. } => None,
            })
            .collect();
        assert_eq!(styles[0].size, 18.0);
        assert_eq!(styles[0].weight, FontWeight::Semibold);
        assert_eq!(styles[0].color, Color::TEXT);
        assert_eq!(styles[1].size, 11.0);
        assert_eq!(styles[1].color, Color::MUTED);
    }

    #[test]
    fn test_radial_gauge_paint_position_from_layout() {
        let mut gauge = RadialGauge::new(50.0, 100.0).label("VIP");
        gauge.layout(Rect::new(50.0, 100.0, 180.0, 134.0));
        let mut canvas = RecordingCanvas::new();
        gauge.paint(&mut canvas);

        let (track, _) = canvas.arcs().next().expect("track arc");
        assert!(track.start.distance(&Point::new(57.0, 200.0)) < 1e-9);
        assert!(track.end.distance(&Point::new(223.0, 200.0)) < 1e-9);

        match &canvas.commands()[4] {
            DrawCommand::Text { position, .. } => {
                assert_eq!(*position, Point::new(140.0, 227.0));
            }
            DrawCommand::Arc { .. } => panic!("Expected Text command for caption"),
        }
        assert_eq!(canvas.transform_depth(), 0);
    }

    #[test]
    fn test_radial_gauge_paint_fits_constrained_bounds() {
        let mut gauge = RadialGauge::new(50.0, 100.0).label("VIP");
        let size = gauge.measure(Constraints::loose(Size::new(100.0, 100.0)));
        gauge.layout(Rect::new(0.0, 0.0, size.width, size.height));

        let mut canvas = RecordingCanvas::new();
        gauge.paint(&mut canvas);

        assert_eq!(canvas.arcs().count(), 2);
        for (path, style) in canvas.arcs() {
            assert!(style.width < 14.0);
            for point in [path.start, path.end] {
                assert!(point.x >= 0.0 && point.x <= 100.0);
                assert!(point.y >= 0.0 && point.y <= 100.0);
            }
            // The top of the half-circle stays inside the bounds too.
            assert!(path.start.y - path.radius - style.width / 2.0 >= 0.0);
            assert!(path.start.x - style.width / 2.0 >= -1e-9);
        }
        for cmd in canvas.commands() {
            if let DrawCommand::Text { position, .. } = cmd {
                assert!(position.y >= 0.0 && position.y <= 100.0);
            }
        }
    }

    #[test]
    fn test_radial_gauge_paint_larger_bounds_keeps_intrinsic_size() {
        let mut gauge = RadialGauge::new(50.0, 100.0);
        gauge.layout(Rect::new(0.0, 0.0, 400.0, 400.0));

        let mut canvas = RecordingCanvas::new();
        gauge.paint(&mut canvas);
        let (track, style) = canvas.arcs().next().expect("track arc");
        assert_eq!(track.radius, 83.0);
        assert_eq!(style.width, 14.0);
    }

    #[test]
    fn test_radial_gauge_paint_before_layout_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        RadialGauge::new(50.0, 100.0).paint(&mut canvas);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_radial_gauge_paint_invalid_size_draws_nothing() {
        let canvas = painted(&RadialGauge::new(50.0, 100.0).size(-1.0));
        assert!(canvas.is_empty());
        assert_eq!(canvas.transform_depth(), 0);
    }

    #[test]
    fn test_radial_gauge_paint_custom_formatter() {
        let gauge = RadialGauge::new(0.25, 1.0).formatter(|v: f64| format!("{:.0} pts", v * 100.0));
        let canvas = painted(&gauge);
        assert_eq!(canvas.texts().next(), Some("25 pts"));
    }

    #[test]
    fn test_radial_gauge_paint_serializes() {
        let canvas = painted(&RadialGauge::new(50.0, 100.0));
        let json = serde_json::to_value(canvas.commands()).expect("serializable");
        assert_eq!(json.as_array().map(Vec::len), Some(4));
    }
}
