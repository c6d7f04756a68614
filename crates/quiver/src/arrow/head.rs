//! Head dimensions and length-capping.

use log::trace;

use quiver_core::style::{ArrowOption, StyleRecord};

use super::defaults;

/// Returns the length of a head of the given base width and full opening
/// angle (degrees).
///
/// The angle must lie in (0, 180); other angles yield infinite or negative
/// lengths.
pub fn head_length(head_width: f64, head_angle: f64) -> f64 {
    let length_to_width = 1.0 / (head_angle.to_radians() / 2.0).tan() / 2.0;
    head_width * length_to_width
}

/// Returns the factor in (0, 1] that shrinks a head so it takes at most
/// `1 - min_stem_ratio` of the total length.
pub fn scale_factor(total_len: f64, unscaled_head_len: f64, min_stem_ratio: f64) -> f64 {
    let max_head_pct = 1.0 - min_stem_ratio;
    let head_pct = unscaled_head_len / total_len;
    if head_pct > max_head_pct {
        max_head_pct / head_pct
    } else {
        1.0
    }
}

/// Resolves `arrow-min-stem`, where zero is a legal value.
pub fn min_stem_ratio(style: &StyleRecord) -> f64 {
    style.resolve_non_negative(ArrowOption::MinStem, defaults::MIN_STEM_RATIO)
}

/// Head dimensions after length-capping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadSize {
    width: f64,
    length: f64,
    scale: f64,
}

impl HeadSize {
    /// Sizes a head of `width` and `angle` for an arrow of `total_len`.
    pub fn fit(total_len: f64, width: f64, angle: f64, min_stem_ratio: f64) -> Self {
        let unscaled_len = head_length(width, angle);
        let scale = scale_factor(total_len, unscaled_len, min_stem_ratio);
        trace!(total_len, unscaled_len, scale; "Fitted arrow head");

        Self {
            width: width * scale,
            length: unscaled_len * scale,
            scale,
        }
    }

    /// Returns the scaled head width.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the scaled head length.
    pub fn length(self) -> f64 {
        self.length
    }

    /// Returns the factor applied to the unscaled head.
    pub fn scale(self) -> f64 {
        self.scale
    }
}
