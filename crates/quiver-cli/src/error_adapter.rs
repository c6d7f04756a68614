//! Error adapter for converting QuiverError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error, fmt};

use miette::Diagnostic as MietteDiagnostic;

use quiver::QuiverError;

/// Adapter that renders a [`QuiverError`] as a miette diagnostic with an
/// error code and help text.
pub struct ErrorAdapter<'a> {
    err: &'a QuiverError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a QuiverError) -> Self {
        Self { err }
    }

    fn code_str(&self) -> &'static str {
        match self.err {
            QuiverError::Io(_) => "quiver::io",
            QuiverError::Config(_) => "quiver::config",
            QuiverError::Style(_) => "quiver::style",
            QuiverError::InvalidLength(_) => "quiver::length",
            QuiverError::UnknownArrowKind(_) => "quiver::kind",
        }
    }

    fn help_str(&self) -> &'static str {
        match self.err {
            QuiverError::Io(_) => "check that the output path is writable",
            QuiverError::Config(_) => "check the TOML syntax of the configuration file",
            QuiverError::Style(_) => {
                "style options are written as NAME=VALUE, e.g. arrow-stem-curve=30"
            }
            QuiverError::InvalidLength(_) => "pass a length greater than zero with --length",
            QuiverError::UnknownArrowKind(_) => "use `stick` or `filled`",
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.err.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.help_str()))
    }
}
