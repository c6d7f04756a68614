//! Arrow glyph builders.
//!
//! This module turns a requested total length and a [`StyleRecord`] into the
//! coordinate rings of a directional arrow glyph. Two glyph styles exist:
//!
//! - [`build_stick_arrow`]: a stem polyline plus an optional open chevron head
//! - [`build_filled_arrow`]: one closed, tapered polygon with an integrated head
//!
//! Both builders work in a local frame anchored at the origin with the arrow
//! pointing up (+y), and rotate their rings as the very last step.
//!
//! The builders perform no validation. Lengths that are not strictly
//! positive, or angles outside their domain, produce non-finite coordinates
//! instead of errors; see [`crate::ArrowBuilder`] for a validating entry
//! point.
//!
//! [`StyleRecord`]: quiver_core::style::StyleRecord

mod curved;
mod filled;
mod head;
mod stick;

pub use curved::{arc_points, curved_arrow_ring};
pub use filled::{HalfWidths, build_filled_arrow};
pub use head::{HeadSize, head_length, min_stem_ratio, scale_factor};
pub use stick::build_stick_arrow;

/// Fallback values applied when a style omits an option.
pub mod defaults {
    /// Share of the total length reserved for the stem.
    pub const MIN_STEM_RATIO: f64 = 0.4;

    /// Head opening angle of stick arrows, in degrees.
    pub const STICK_HEAD_ANGLE: f64 = 90.0;
    /// Head width of stick arrows.
    pub const STICK_HEAD_WIDTH: f64 = 9.0;

    /// Head opening angle of filled arrows, in degrees.
    pub const FILLED_HEAD_ANGLE: f64 = 40.0;
    /// Stem width of filled arrows.
    pub const FILLED_STEM_WIDTH: f64 = 2.0;
    /// Filled head width as a multiple of the stem width.
    pub const FILLED_HEAD_WIDTH_RATIO: f64 = 3.0;

    /// Stem curvature, in degrees.
    pub const STEM_CURVE: f64 = 0.0;
    /// Stem taper fraction.
    pub const STEM_TAPER: f64 = 0.0;
    /// Final rotation, in degrees.
    pub const ROTATION: f64 = 0.0;

    /// Largest curvature magnitude a filled stem is drawn curved with.
    pub const MAX_FILLED_CURVE: f64 = 90.0;
}
