//! Error types for arcgauge-core.

use thiserror::Error;

/// Errors surfaced by the gauge engine.
///
/// Out-of-range values, a non-positive `max` and oversized stroke widths are
/// all clamped; only configurations with no drawable area are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaugeError {
    /// The drawing diameter is zero, negative or not finite.
    #[error("invalid gauge size {size}: must be positive and finite")]
    InvalidSize {
        /// The rejected size
        size: f64,
    },

    /// A style or gauge configuration document could not be parsed.
    #[error("invalid gauge configuration: {0}")]
    Config(String),
}

impl From<serde_yaml_ng::Error> for GaugeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias for gauge operations.
pub type Result<T> = std::result::Result<T, GaugeError>;
