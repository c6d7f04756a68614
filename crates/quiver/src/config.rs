//! Configuration types for Quiver arrow generation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and output settings.
//! - [`OutputConfig`] - Controls how coordinate rings are written out.
//!
//! The `[style]` section is a [`StyleRecord`] applied beneath every request's
//! own style, so a deployment can change house defaults such as
//! `arrow-head-width` without touching call sites.
//!
//! # Example
//!
//! ```
//! # use quiver::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [style]
//!     arrow-head-width = 12
//!
//!     [output]
//!     precision = 2
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.output().precision(), 2);
//! assert_eq!(config.style().len(), 1);
//! ```

use serde::Deserialize;

use quiver_core::style::StyleRecord;

/// Default number of decimal places in formatted output.
const DEFAULT_PRECISION: usize = 3;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Base style applied beneath each request's style.
    #[serde(default)]
    style: StyleRecord,

    /// Output formatting section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given base style and output settings.
    pub fn new(style: StyleRecord, output: OutputConfig) -> Self {
        Self { style, output }
    }

    /// Returns the base style.
    pub fn style(&self) -> &StyleRecord {
        &self.style
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Decimal places written for each coordinate.
    #[serde(default = "default_precision")]
    precision: usize,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the given precision.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Returns the number of decimal places written for each coordinate.
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}
