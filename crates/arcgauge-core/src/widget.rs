//! Widget and canvas traits.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Position self within allocated bounds
//! 3. **Paint**: Emit draw operations onto a [`Canvas`]
//!
//! # Examples
//!
//! ```
//! use arcgauge_core::{FontWeight, TextAnchor, TextStyle, TypeId};
//!
//! let style = TextStyle::default();
//! assert_eq!(style.weight, FontWeight::Normal);
//! assert_eq!(style.anchor, TextAnchor::Middle);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::{ArcPath, StrokeStyle, Transform2D};
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw operations.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend: circular arc
/// strokes and positioned text.
pub trait Canvas {
    /// Stroke a circular arc.
    fn stroke_arc(&mut self, path: &ArcPath, style: &StrokeStyle);

    /// Draw text anchored at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

/// Text style for rendering.
///
/// # Examples
///
/// ```
/// use arcgauge_core::{Color, FontWeight, TextStyle};
///
/// let value_style = TextStyle {
///     size: 18.0,
///     color: Color::from_hex("#000000e0").expect("valid hex"),
///     weight: FontWeight::Semibold,
///     ..TextStyle::default()
/// };
/// assert_eq!(value_style.weight.numeric(), 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in layout units
    pub size: f64,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Horizontal anchoring relative to the position
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Middle,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// CSS numeric weight.
    #[must_use]
    pub const fn numeric(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Text starts at the position
    Start,
    /// Text is centered on the position
    #[default]
    Middle,
    /// Text ends at the position
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_distinct() {
        assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
        assert_ne!(TypeId::of::<u8>(), TypeId::of::<u16>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.anchor, TextAnchor::Middle);
    }

    #[test]
    fn test_font_weight_numeric() {
        assert_eq!(FontWeight::Light.numeric(), 300);
        assert_eq!(FontWeight::Normal.numeric(), 400);
        assert_eq!(FontWeight::Medium.numeric(), 500);
        assert_eq!(FontWeight::Semibold.numeric(), 600);
        assert_eq!(FontWeight::Bold.numeric(), 700);
    }

    #[test]
    fn test_text_anchor_keywords() {
        assert_eq!(TextAnchor::Start.as_str(), "start");
        assert_eq!(TextAnchor::Middle.as_str(), "middle");
        assert_eq!(TextAnchor::End.as_str(), "end");
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
