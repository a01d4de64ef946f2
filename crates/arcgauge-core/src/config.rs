//! Gauge style configuration.
//!
//! Every field has a named default matching the dashboard gauge, so a style
//! document only needs to list what it overrides:
//!
//! ```
//! use arcgauge_core::GaugeStyle;
//!
//! let style = GaugeStyle::from_yaml("size: 240\ncolor: \"#8c8c8c\"\n").expect("valid style");
//! assert_eq!(style.size, 240.0);
//! assert_eq!(style.stroke_width, 14.0);
//! ```

use crate::error::{GaugeError, Result};
use crate::format::NumberFormat;
use crate::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default overall drawing diameter.
pub const DEFAULT_SIZE: f64 = 180.0;
/// Default arc thickness.
pub const DEFAULT_STROKE_WIDTH: f64 = 14.0;
/// Default downward shift of the circle center.
pub const DEFAULT_VERTICAL_OFFSET: f64 = 10.0;
/// Default height reserved for labels below the half-circle.
pub const DEFAULT_LABEL_AREA: f64 = 30.0;

/// Visual parameters of a gauge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaugeStyle {
    /// Overall drawing diameter; the drawing is `size` wide.
    pub size: f64,
    /// Arc thickness; the radius is `(size - stroke_width) / 2`.
    pub stroke_width: f64,
    /// Value arc color.
    pub color: Color,
    /// Background track color.
    pub track_color: Color,
    /// Shift of the circle center below `size / 2`.
    pub vertical_offset: f64,
    /// Height added below the half-circle for the labels.
    pub label_area: f64,
    /// Vertical offset of the value label from the center.
    pub value_text_offset: f64,
    /// Vertical offset of the percent label from the center.
    pub percent_text_offset: f64,
    /// Font size of the value label.
    pub value_font_size: f64,
    /// Font size of the percent label.
    pub percent_font_size: f64,
    /// Font size of the caption.
    pub caption_font_size: f64,
    /// Value label color.
    pub text_color: Color,
    /// Percent label and caption color.
    pub muted_text_color: Color,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: Color::PRIMARY,
            track_color: Color::TRACK,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            label_area: DEFAULT_LABEL_AREA,
            value_text_offset: -8.0,
            percent_text_offset: 10.0,
            value_font_size: 18.0,
            percent_font_size: 11.0,
            caption_font_size: 12.0,
            text_color: Color::TEXT,
            muted_text_color: Color::MUTED,
        }
    }
}

impl GaugeStyle {
    /// Parse a style from YAML; missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Reject styles with no drawable area.
    pub fn validate(&self) -> Result<()> {
        if self.size.is_finite() && self.size > 0.0 {
            Ok(())
        } else {
            Err(GaugeError::InvalidSize { size: self.size })
        }
    }

    /// Copy with every non-finite layout field replaced by its default.
    ///
    /// Covers the offsets, `label_area` and font sizes; `size` and
    /// `stroke_width` are handled by
    /// [`validate`](Self::validate) and
    /// [`effective_stroke_width`](Self::effective_stroke_width).
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            vertical_offset: finite_or(
                self.vertical_offset,
                defaults.vertical_offset,
                "vertical_offset",
            ),
            label_area: finite_or(self.label_area, defaults.label_area, "label_area"),
            value_text_offset: finite_or(
                self.value_text_offset,
                defaults.value_text_offset,
                "value_text_offset",
            ),
            percent_text_offset: finite_or(
                self.percent_text_offset,
                defaults.percent_text_offset,
                "percent_text_offset",
            ),
            value_font_size: finite_or(
                self.value_font_size,
                defaults.value_font_size,
                "value_font_size",
            ),
            percent_font_size: finite_or(
                self.percent_font_size,
                defaults.percent_font_size,
                "percent_font_size",
            ),
            caption_font_size: finite_or(
                self.caption_font_size,
                defaults.caption_font_size,
                "caption_font_size",
            ),
            ..self.clone()
        }
    }

    /// Copy with every length multiplied by `factor`; colors are kept.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            size: self.size * factor,
            stroke_width: self.stroke_width * factor,
            vertical_offset: self.vertical_offset * factor,
            label_area: self.label_area * factor,
            value_text_offset: self.value_text_offset * factor,
            percent_text_offset: self.percent_text_offset * factor,
            value_font_size: self.value_font_size * factor,
            percent_font_size: self.percent_font_size * factor,
            caption_font_size: self.caption_font_size * factor,
            ..self.clone()
        }
    }

    /// Stroke width clamped so the radius stays positive.
    ///
    /// Negative or NaN widths become zero; widths of `size` or more become
    /// `size - 1` (or zero for gauges smaller than one unit).
    #[must_use]
    pub fn effective_stroke_width(&self) -> f64 {
        let max_width = (self.size - 1.0).max(0.0);
        let width = self.stroke_width;

        if width.is_nan() || width < 0.0 {
            debug!(stroke_width = width, "negative stroke width clamped to 0");
            0.0
        } else if width >= self.size {
            debug!(
                stroke_width = width,
                size = self.size,
                clamped = max_width,
                "stroke width not smaller than gauge size, clamped"
            );
            max_width
        } else {
            width
        }
    }
}

fn finite_or(value: f64, default: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        debug!(field, value, default, "non-finite style field replaced by default");
        default
    }
}

/// A complete gauge description: style, value format and caption.
///
/// ```
/// use arcgauge_core::GaugeConfig;
///
/// let config = GaugeConfig::from_yaml(
///     "label: Subscriptions\nformat:\n  suffix: \" ₸\"\nstyle:\n  color: \"#8c8c8c\"\n",
/// )
/// .expect("valid config");
/// assert_eq!(config.label, "Subscriptions");
/// assert_eq!(config.format.suffix, " ₸");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Caption below the gauge; empty suppresses it.
    pub label: String,
    /// Value label format.
    pub format: NumberFormat,
    /// Visual parameters.
    pub style: GaugeStyle,
}

impl GaugeConfig {
    /// Parse a gauge description from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.style.validate()?;
        Ok(config)
    }
}
