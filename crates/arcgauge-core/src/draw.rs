//! Draw commands for rendering backends.
//!
//! A gauge reduces to circular arc strokes and positioned text; backends that
//! speak declarative path strings can use [`ArcPath::to_svg_path`], others can
//! consume [`ArcPath::commands`] directly.

use crate::widget::TextStyle;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Stroke style for arc rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in layout units
    pub width: f64,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl StrokeStyle {
    /// Solid butt-capped stroke.
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

impl LineCap {
    /// SVG `stroke-linecap` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A single path primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Move the pen without drawing.
    MoveTo(Point),
    /// Circular or elliptical arc from the current pen position.
    ArcTo {
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
        /// Rotation of the ellipse x-axis in degrees
        x_axis_rotation: f64,
        /// Select the arc spanning more than 180°
        large_arc: bool,
        /// Draw in the positive-angle (clockwise on screen) direction
        sweep: bool,
        /// End point
        to: Point,
    },
}

/// A circular arc between two points, in move-to + arc-to form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    /// Pen start
    pub start: Point,
    /// Arc end
    pub end: Point,
    /// Radius, used for both axes
    pub radius: f64,
    /// Always zero for circular arcs
    pub x_axis_rotation: f64,
    /// Large-arc flag
    pub large_arc: bool,
    /// Sweep flag
    pub sweep: bool,
}

impl ArcPath {
    /// Create an unrotated circular arc.
    #[must_use]
    pub const fn circular(start: Point, end: Point, radius: f64, large_arc: bool, sweep: bool) -> Self {
        Self {
            start,
            end,
            radius,
            x_axis_rotation: 0.0,
            large_arc,
            sweep,
        }
    }

    /// Primitive list for backends without a path-string parser.
    #[must_use]
    pub fn commands(&self) -> [PathCommand; 2] {
        [
            PathCommand::MoveTo(self.start),
            PathCommand::ArcTo {
                rx: self.radius,
                ry: self.radius,
                x_axis_rotation: self.x_axis_rotation,
                large_arc: self.large_arc,
                sweep: self.sweep,
                to: self.end,
            },
        ]
    }

    /// SVG path data: `M sx sy A r r rot large sweep ex ey`.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} A {} {} {} {} {} {} {}",
            format_coord(self.start.x),
            format_coord(self.start.y),
            format_coord(self.radius),
            format_coord(self.radius),
            format_coord(self.x_axis_rotation),
            u8::from(self.large_arc),
            u8::from(self.sweep),
            format_coord(self.end.x),
            format_coord(self.end.y),
        )
    }

    /// Check that every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.radius.is_finite()
            && self.x_axis_rotation.is_finite()
    }
}

/// Format a layout coordinate at full precision.
///
/// Uses the shortest representation that round-trips, so distinct points
/// never print the same. Negative zero prints as `0`.
#[must_use]
pub fn format_coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// 2D translation applied by a canvas to everything it draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Horizontal offset
    pub dx: f64,
    /// Vertical offset
    pub dy: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self { dx: 0.0, dy: 0.0 }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Chain transforms: first apply self, then apply other.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self::translate(self.dx + other.dx, self.dy + other.dy)
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        point.offset(self.dx, self.dy)
    }
}

/// Drawing primitive - all gauge rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke a circular arc
    Arc {
        /// Arc geometry
        path: ArcPath,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a text command.
    #[must_use]
    pub fn text(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position,
            style,
        }
    }
}
