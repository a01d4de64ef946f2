//! Half-circle gauge geometry.
//!
//! [`compute_gauge`] maps a value/max pair and a [`GaugeStyle`] to two arcs
//! and two labels:
//!
//! - the **track**, a fixed half-circle from angle π (left) to 0 (right);
//! - the **value arc**, the same start point swept by `fraction · π`.
//!
//! Angles use the mathematical convention while layout y grows downward, so
//! the half-circle bulges upward on screen and its chord sits on the center
//! line. The center is pushed down by `vertical_offset` so the drawing fits a
//! `size × (size / 2 + label_area)` box with room for the labels.
//!
//! The engine is fail-soft: out-of-range values clamp the fraction, a
//! non-positive `max` or a non-finite value yields an empty gauge, and an
//! oversized stroke width is clamped. Only a style with no drawable area is
//! rejected.
//!
//! # Examples
//!
//! ```
//! use arcgauge_core::{compute_gauge, GaugeInput};
//!
//! let geometry = compute_gauge(&GaugeInput::new(50.0, 100.0)).expect("valid size");
//! assert_eq!(geometry.fraction, 0.5);
//! assert_eq!(geometry.radius, 83.0);
//! assert_eq!(geometry.percent_label, "50%");
//! assert_eq!(
//!     geometry.track_path.to_svg_path(),
//!     "M 7 100 A 83 83 0 1 1 173 100"
//! );
//! ```

use crate::config::GaugeStyle;
use crate::draw::ArcPath;
use crate::error::Result;
use crate::format::{format_number, NumberLocale, ValueFormatter};
use crate::geometry::{Point, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Angle of the arc start (left end of the half-circle).
pub const START_ANGLE: f64 = PI;
/// Angle of the arc end (right end of the half-circle).
pub const END_ANGLE: f64 = 0.0;

/// Both arcs are drawn in the same direction so they overlay.
const SWEEP_CLOCKWISE: bool = true;

/// `value / max` clamped to `[0, 1]`.
///
/// A non-positive or NaN `max` and a non-finite `value` give zero.
#[must_use]
pub fn gauge_fraction(value: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    // `max > 0.0` is false for NaN as well.
    let raw = if max > 0.0 { value / max } else { 0.0 };
    // Negative zero collapses to zero so the label never reads "-0%".
    if raw > 0.0 {
        raw.min(1.0)
    } else {
        0.0
    }
}

/// Everything the engine needs to draw one gauge.
#[derive(Clone)]
pub struct GaugeInput {
    /// Current measurement; may be negative or exceed `max`.
    pub value: f64,
    /// Upper bound of the scale.
    pub max: f64,
    /// Caption below the gauge; empty suppresses it.
    pub label: String,
    /// Visual parameters.
    pub style: GaugeStyle,
    /// Locale of the default value formatter.
    pub locale: NumberLocale,
    formatter: Option<Arc<dyn ValueFormatter>>,
}

impl fmt::Debug for GaugeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaugeInput")
            .field("value", &self.value)
            .field("max", &self.max)
            .field("label", &self.label)
            .field("style", &self.style)
            .field("locale", &self.locale)
            .field("custom_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl Default for GaugeInput {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl GaugeInput {
    /// Create an input with the default style and formatter.
    #[must_use]
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            label: String::new(),
            style: GaugeStyle::default(),
            locale: NumberLocale::default(),
            formatter: None,
        }
    }

    /// Set the caption.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replace the whole style.
    #[must_use]
    pub fn style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the drawing diameter.
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.style.size = size;
        self
    }

    /// Set the arc thickness.
    #[must_use]
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.style.stroke_width = width;
        self
    }

    /// Set the value arc and track colors.
    #[must_use]
    pub fn colors(mut self, color: Color, track_color: Color) -> Self {
        self.style.color = color;
        self.style.track_color = track_color;
        self
    }

    /// Set the locale of the default formatter.
    #[must_use]
    pub fn locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Use a custom value formatter instead of the locale default.
    #[must_use]
    pub fn formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Check whether a custom formatter is set.
    #[must_use]
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Display label for the raw value.
    #[must_use]
    pub fn value_label(&self) -> String {
        match &self.formatter {
            Some(formatter) => formatter.format_value(self.value),
            None => format_number(self.value, self.locale),
        }
    }

    /// Compute the geometry; see [`compute_gauge`].
    pub fn compute(&self) -> Result<GaugeGeometry> {
        compute_gauge(self)
    }
}

/// Render-ready gauge geometry and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeGeometry {
    /// `value / max` clamped to `[0, 1]`.
    pub fraction: f64,
    /// Arc radius.
    pub radius: f64,
    /// Circle center.
    pub center: Point,
    /// Stroke width after clamping.
    pub stroke_width: f64,
    /// Drawing box: `size × (size / 2 + label_area)`.
    pub viewport: Size,
    /// End angle of the value arc in radians, between π and 0.
    pub sweep_angle: f64,
    /// Full half-circle background arc.
    pub track_path: ArcPath,
    /// Filled arc; `None` when the fraction is zero.
    pub value_path: Option<ArcPath>,
    /// Rounded clamped percentage, e.g. `"50%"`.
    pub percent_label: String,
    /// Formatted raw value.
    pub value_label: String,
    /// Anchor of the value label.
    pub value_anchor: Point,
    /// Anchor of the percent label.
    pub percent_anchor: Point,
    /// Caption below the drawing, if any.
    pub caption: Option<String>,
}

impl GaugeGeometry {
    /// Angular length of the value arc in degrees.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        (START_ANGLE - self.sweep_angle).to_degrees()
    }

    /// Check whether the value arc is drawn.
    #[must_use]
    pub fn has_value_arc(&self) -> bool {
        self.value_path.is_some()
    }
}

/// Compute the gauge geometry for `input`.
///
/// # Errors
///
/// Returns [`crate::GaugeError::InvalidSize`] when `style.size` is not a
/// positive finite number. Every other input produces a valid geometry.
pub fn compute_gauge(input: &GaugeInput) -> Result<GaugeGeometry> {
    input.style.validate()?;
    let style = &input.style.sanitized();

    if !input.value.is_finite() {
        debug!(value = input.value, "non-finite gauge value drawn as empty");
    }
    let fraction = gauge_fraction(input.value, input.max);

    let size = style.size;
    let stroke_width = style.effective_stroke_width();
    let radius = (size - stroke_width) / 2.0;
    let center = Point::new(size / 2.0, size / 2.0 + style.vertical_offset);

    let sweep_angle = (START_ANGLE - END_ANGLE).mul_add(-fraction, START_ANGLE);

    // The track ends sit on the center line; sin(π) is not exactly zero.
    let arc_start = center.offset(-radius, 0.0);
    let arc_end = center.offset(radius, 0.0);
    let value_end = Point::on_circle(center, radius, sweep_angle);

    // A half-circle has equal short and long arcs; the flag plus the sweep
    // direction pins it to the upper half.
    let track_path = ArcPath::circular(arc_start, arc_end, radius, true, SWEEP_CLOCKWISE);
    if fraction > 0.0 && value_end == arc_start {
        debug!(fraction, "value arc shorter than coordinate precision, not drawn");
    }
    let value_path = (fraction > 0.0 && value_end != arc_start).then(|| {
        ArcPath::circular(arc_start, value_end, radius, fraction > 0.5, SWEEP_CLOCKWISE)
    });

    let percent_label = format!("{}%", (fraction * 100.0).round());
    let value_label = input.value_label();

    let geometry = GaugeGeometry {
        fraction,
        radius,
        center,
        stroke_width,
        viewport: Size::new(size, size / 2.0 + style.label_area),
        sweep_angle,
        track_path,
        value_path,
        percent_label,
        value_label,
        value_anchor: center.offset(0.0, style.value_text_offset),
        percent_anchor: center.offset(0.0, style.percent_text_offset),
        caption: (!input.label.is_empty()).then(|| input.label.clone()),
    };

    trace!(
        value = input.value,
        max = input.max,
        fraction,
        radius,
        "computed gauge geometry"
    );

    Ok(geometry)
}
