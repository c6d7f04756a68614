//! Error types for Quiver operations.
//!
//! This module provides the main error type [`QuiverError`]. The geometry
//! builders themselves never fail; errors come from validating requests
//! and from loading configuration or style text.

use std::io;

use thiserror::Error;

use quiver_core::style::StyleError;

/// The main error type for Quiver operations.
#[derive(Debug, Error)]
pub enum QuiverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Arrow length must be a positive finite number, got {0}")]
    InvalidLength(f64),

    #[error("Unknown arrow kind `{0}`, valid kinds: stick, filled")]
    UnknownArrowKind(String),
}
