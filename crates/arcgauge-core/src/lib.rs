//! Core types for arcgauge, a half-circle gauge engine.
//!
//! This crate provides:
//! - The gauge engine: [`compute_gauge`] turns a [`GaugeInput`] into a
//!   render-ready [`GaugeGeometry`] (track arc, value arc, labels)
//! - Value formatting: [`format_number`], [`NumberFormat`], [`ValueFormatter`]
//! - Style configuration: [`GaugeStyle`], [`GaugeConfig`]
//! - Rendering primitives: [`ArcPath`], [`DrawCommand`], the [`Canvas`] and
//!   [`Widget`] traits and a [`RecordingCanvas`]
//!
//! The engine is a pure function; it holds no state and may be called from
//! any number of threads.

pub mod canvas;
mod color;
pub mod config;
mod constraints;
pub mod draw;
mod error;
pub mod format;
pub mod gauge;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use config::{GaugeConfig, GaugeStyle};
pub use constraints::Constraints;
pub use draw::{ArcPath, DrawCommand, LineCap, PathCommand, StrokeStyle, Transform2D};
pub use error::{GaugeError, Result};
pub use format::{format_number, format_number_with, NumberFormat, NumberLocale, ValueFormatter};
pub use gauge::{compute_gauge, gauge_fraction, GaugeGeometry, GaugeInput};
pub use geometry::{Point, Rect, Size};
pub use widget::{
    Canvas, FontWeight, LayoutResult, TextAnchor, TextStyle, TypeId, Widget,
};
