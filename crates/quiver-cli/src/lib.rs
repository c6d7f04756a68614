//! CLI logic for the Quiver arrow tool.
//!
//! This module contains the core CLI logic: it resolves configuration,
//! builds the requested arrow and writes its coordinate rings.

pub mod config;
pub mod error_adapter;

mod args;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use quiver::{ArrowBuilder, ArrowKind, QuiverError, style::StyleRecord};

/// Run the Quiver CLI application
///
/// Builds the arrow described by `args` and writes its rings, one per line,
/// to the output file or to stdout.
///
/// # Errors
///
/// Returns `QuiverError` for:
/// - Configuration loading errors
/// - Unknown arrow kinds
/// - Malformed style options
/// - Invalid lengths
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), QuiverError> {
    info!(kind = args.kind, length = args.length; "Building arrow");

    let app_config = config::load_config(args.config.as_ref())?;
    let kind: ArrowKind = args.kind.parse()?;

    let mut style = StyleRecord::new();
    for assignment in &args.style {
        style.set_assignment(assignment)?;
    }

    let builder = ArrowBuilder::new(app_config);
    let rings = builder.build(kind, args.length, &style)?;
    let text = builder.format(&rings);

    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!(output_file = path, rings = rings.len(); "Coordinates written");
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }

    Ok(())
}
