//! Rendering adapters for arcgauge.
//!
//! - [`RadialGauge`]: a [`Widget`](arcgauge_core::Widget) that paints a gauge
//!   onto any [`Canvas`](arcgauge_core::Canvas)
//! - [`SvgCanvas`] and [`render_svg`]: standalone SVG output

pub mod radial_gauge;
pub mod svg;

pub use radial_gauge::RadialGauge;
pub use svg::{render_svg, SvgCanvas};
