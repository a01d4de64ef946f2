//! Canvas implementations for rendering.

use crate::draw::{ArcPath, DrawCommand, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::Point;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Recorded coordinates have the active transforms applied, so the command
/// list describes the final drawing. This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to another process)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Recorded arc strokes, in paint order.
    pub fn arcs(&self) -> impl Iterator<Item = (&ArcPath, &StrokeStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Arc { path, style } => Some((path, style)),
            DrawCommand::Text { .. } => None,
        })
    }

    /// Recorded text contents, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            DrawCommand::Arc { .. } => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_arc(&mut self, path: &ArcPath, style: &StrokeStyle) {
        let t = self.current_transform();
        let mut path = *path;
        path.start = t.apply(path.start);
        path.end = t.apply(path.end);
        self.commands.push(DrawCommand::Arc {
            path,
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let position = self.current_transform().apply(position);
        self.commands
            .push(DrawCommand::text(text, position, style.clone()));
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
