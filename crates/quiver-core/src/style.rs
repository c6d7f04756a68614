//! Style options read by the arrow builders.
//!
//! A [`StyleRecord`] is a read-only map of named options, each holding a
//! number or a string. The builders never look keys up by raw string;
//! they go through the [`ArrowOption`] table and one of two resolution
//! rules:
//!
//! - [`StyleRecord::resolve`]: the value wins when it is present, non-zero
//!   and not NaN. Otherwise the default applies.
//! - [`StyleRecord::resolve_non_negative`]: the value wins when it is present
//!   and `>= 0`, so zero is a legal override.
//!
//! String values that parse as a number are read as that number. Any other
//! string reads as absent.
//!
//! # Example
//!
//! ```
//! use quiver_core::style::{ArrowOption, StyleRecord};
//!
//! let style = StyleRecord::new()
//!     .with("arrow-head-angle", 60.0)
//!     .with("arrow-min-stem", "0");
//!
//! assert_eq!(style.resolve(ArrowOption::HeadAngle, 90.0), 60.0);
//! assert_eq!(style.resolve(ArrowOption::HeadWidth, 9.0), 9.0);
//! assert_eq!(style.resolve_non_negative(ArrowOption::MinStem, 0.4), 0.0);
//! ```

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading style options from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("style option `{0}` is missing `=` between name and value")]
    MissingSeparator(String),

    #[error("style option `{0}` has an empty name")]
    EmptyKey(String),

    #[error("style option `{0}` has an empty value")]
    EmptyValue(String),

    #[error("unknown arrow option `{0}`")]
    UnknownOption(String),
}

/// A single style option value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Reads text as a number when possible, keeping it as text otherwise.
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(text.to_string()),
        }
    }

    /// Returns the numeric reading of this value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// The options the arrow builders read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowOption {
    /// `arrow-head-angle`: full opening angle of the head, in degrees
    HeadAngle,
    /// `arrow-head-width`: width of the head at its base
    HeadWidth,
    /// `arrow-stem-curve`: signed total turning angle of the stem, in degrees
    StemCurve,
    /// `arrow-stem-width`: width of a filled stem at the head junction
    StemWidth,
    /// `arrow-stem-taper`: fraction in [0, 1] narrowing the filled stem base
    StemTaper,
    /// `arrow-min-stem`: fraction of the total length reserved for the stem
    MinStem,
    /// `rotation`: final orientation, in clockwise degrees
    Rotation,
    /// `arrow-direction`: fallback orientation for filled arrows
    Direction,
}

impl ArrowOption {
    /// Every option, in declaration order.
    pub const ALL: [ArrowOption; 8] = [
        Self::HeadAngle,
        Self::HeadWidth,
        Self::StemCurve,
        Self::StemWidth,
        Self::StemTaper,
        Self::MinStem,
        Self::Rotation,
        Self::Direction,
    ];

    /// Returns the style key for this option.
    pub fn key(self) -> &'static str {
        match self {
            Self::HeadAngle => "arrow-head-angle",
            Self::HeadWidth => "arrow-head-width",
            Self::StemCurve => "arrow-stem-curve",
            Self::StemWidth => "arrow-stem-width",
            Self::StemTaper => "arrow-stem-taper",
            Self::MinStem => "arrow-min-stem",
            Self::Rotation => "rotation",
            Self::Direction => "arrow-direction",
        }
    }
}

impl FromStr for ArrowOption {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| StyleError::UnknownOption(s.to_string()))
    }
}

impl fmt::Display for ArrowOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A read-only mapping of named style options.
///
/// Keys outside the [`ArrowOption`] table are kept but ignored by the
/// builders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StyleRecord {
    options: BTreeMap<String, StyleValue>,
}

impl StyleRecord {
    /// Creates an empty style record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.options.insert(key.into(), value.into());
    }

    /// Parses a `name=value` assignment and stores it.
    ///
    /// # Errors
    ///
    /// Returns a [`StyleError`] when the separator, name or value is missing.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), StyleError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| StyleError::MissingSeparator(assignment.to_string()))?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(StyleError::EmptyKey(assignment.to_string()));
        }
        if value.is_empty() {
            return Err(StyleError::EmptyValue(key.to_string()));
        }
        self.set(key, StyleValue::parse(value));
        Ok(())
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.options.get(key)
    }

    /// Returns the numeric value of `option`, if present and numeric.
    pub fn number(&self, option: ArrowOption) -> Option<f64> {
        self.get(option.key()).and_then(StyleValue::as_number)
    }

    /// Resolves `option`, falling back to `default` when the value is
    /// absent, zero or NaN.
    pub fn resolve(&self, option: ArrowOption, default: f64) -> f64 {
        match self.number(option) {
            Some(value) if value != 0.0 && !value.is_nan() => value,
            _ => default,
        }
    }

    /// Resolves `option`, falling back to `default` unless the value is
    /// present and not negative.
    pub fn resolve_non_negative(&self, option: ArrowOption, default: f64) -> f64 {
        match self.number(option) {
            Some(value) if value >= 0.0 => value,
            _ => default,
        }
    }

    /// Returns a new record holding `base`'s options overridden by this record's.
    pub fn merged_over(&self, base: &StyleRecord) -> StyleRecord {
        let mut options = base.options.clone();
        options.extend(self.options.clone());
        Self { options }
    }

    /// Returns the number of stored options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if no options are stored.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.options.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}
