//! Quiver - Coordinate builders for directional arrow glyphs.
//!
//! Quiver computes the outline coordinates of arrow symbols used to annotate
//! line features on a map. Two glyph styles are supported: a stick arrow (a
//! stem with an open chevron head) and a filled arrow (one tapered polygon).
//! Both can be drawn with a curved stem.
//!
//! The [`arrow`] module holds the pure geometry builders. [`ArrowBuilder`]
//! wraps them with request validation, configured base styles and output
//! formatting.

pub mod arrow;
pub mod config;

mod error;
mod format;

pub use quiver_core::{bezier, geometry, style};

pub use error::QuiverError;
pub use format::format_rings;

use std::{fmt, str::FromStr};

use log::{debug, trace};
use serde::Deserialize;

use config::AppConfig;
use geometry::Ring;
use style::StyleRecord;

/// The glyph style to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    /// A stem polyline with an optional open chevron head
    Stick,
    /// A single closed polygon with an integrated head
    Filled,
}

impl FromStr for ArrowKind {
    type Err = QuiverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stick" => Ok(Self::Stick),
            "filled" => Ok(Self::Filled),
            _ => Err(QuiverError::UnknownArrowKind(s.to_string())),
        }
    }
}

impl fmt::Display for ArrowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stick => f.write_str("stick"),
            Self::Filled => f.write_str("filled"),
        }
    }
}

/// Builder for validated arrow glyph requests.
///
/// # Examples
///
/// ```rust
/// use quiver::{ArrowBuilder, ArrowKind, style::StyleRecord};
///
/// let builder = ArrowBuilder::default();
/// let style = StyleRecord::new().with("arrow-stem-curve", 30.0);
///
/// let rings = builder
///     .build(ArrowKind::Stick, 50.0, &style)
///     .expect("Failed to build arrow");
/// assert_eq!(rings.len(), 2);
///
/// let text = builder.format(&rings);
/// assert_eq!(text.lines().count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ArrowBuilder {
    config: AppConfig,
}

impl ArrowBuilder {
    /// Create a new arrow builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Base style and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the rings of an arrow of `total_len`.
    ///
    /// `style` is applied over the configured base style.
    ///
    /// # Errors
    ///
    /// Returns [`QuiverError::InvalidLength`] when `total_len` is not a
    /// positive finite number.
    pub fn build(
        &self,
        kind: ArrowKind,
        total_len: f64,
        style: &StyleRecord,
    ) -> Result<Vec<Ring>, QuiverError> {
        if !total_len.is_finite() || total_len <= 0.0 {
            return Err(QuiverError::InvalidLength(total_len));
        }

        let style = style.merged_over(self.config.style());
        debug!(kind:%, total_len, options = style.len(); "Building arrow");

        let rings = match kind {
            ArrowKind::Stick => arrow::build_stick_arrow(&style, total_len),
            ArrowKind::Filled => arrow::build_filled_arrow(total_len, &style),
        };
        trace!(rings:?; "Built arrow rings");

        Ok(rings)
    }

    /// Format rings as text using the configured precision.
    pub fn format(&self, rings: &[Ring]) -> String {
        format_rings(rings, self.config.output().precision())
    }
}
