//! Command-line argument definitions for the Quiver CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the arrow kind and length, style
//! options, output path, configuration file, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Quiver arrow tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Arrow kind to build
    #[arg(help = "Arrow kind: stick or filled")]
    pub kind: String,

    /// Total arrow length
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: f64,

    /// Style option as NAME=VALUE, may be repeated
    #[arg(short, long, value_name = "NAME=VALUE")]
    pub style: Vec<String>,

    /// Path to the output file; coordinates go to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
