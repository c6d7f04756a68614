//! Filled arrows: one closed polygon with an integrated head.

use log::debug;

use quiver_core::{
    geometry::{Point, Ring},
    style::{ArrowOption, StyleRecord},
};

use super::{
    curved::curved_arrow_ring,
    defaults,
    head::{HeadSize, min_stem_ratio},
};

/// Half-widths of a filled outline at its base, at the stem/head junction,
/// and across the head shoulders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfWidths {
    pub base: f64,
    pub stem: f64,
    pub head: f64,
}

/// Builds a filled arrow of `total_len` as a single closed ring.
///
/// A stem curvature of zero, or one beyond 90 degrees either way, draws a
/// straight 8-point outline. Anything in between draws a curved stem that
/// bends toward the side the arrow points to.
///
/// # Example
///
/// ```
/// use quiver::arrow::build_filled_arrow;
/// use quiver_core::style::StyleRecord;
///
/// let rings = build_filled_arrow(100.0, &StyleRecord::new());
/// assert_eq!(rings.len(), 1);
/// assert_eq!(rings[0].len(), 8);
/// assert!(rings[0].is_closed());
/// ```
pub fn build_filled_arrow(total_len: f64, style: &StyleRecord) -> Vec<Ring> {
    let min_stem = min_stem_ratio(style);
    let head_angle = style.resolve(ArrowOption::HeadAngle, defaults::FILLED_HEAD_ANGLE);
    let direction = style.resolve(
        ArrowOption::Rotation,
        style.resolve(ArrowOption::Direction, defaults::ROTATION),
    );
    let unscaled_stem_width = style.resolve(ArrowOption::StemWidth, defaults::FILLED_STEM_WIDTH);
    let unscaled_head_width = style.resolve(
        ArrowOption::HeadWidth,
        unscaled_stem_width * defaults::FILLED_HEAD_WIDTH_RATIO,
    );

    let head = HeadSize::fit(total_len, unscaled_head_width, head_angle, min_stem);
    let stem_width = unscaled_stem_width * head.scale();
    let stem_taper = style.resolve(ArrowOption::StemTaper, defaults::STEM_TAPER);
    let mut stem_curve = style.resolve(ArrowOption::StemCurve, defaults::STEM_CURVE);
    let stem_len = total_len - head.length();

    let stem_dx = stem_width / 2.0;
    let widths = HalfWidths {
        base: stem_dx * (1.0 - stem_taper),
        stem: stem_dx,
        head: head.width() / 2.0,
    };

    debug!(
        total_len,
        head_len = head.length(),
        scale = head.scale(),
        stem_curve,
        direction;
        "Building filled arrow"
    );

    let mut ring = if stem_curve == 0.0 || stem_curve.abs() > defaults::MAX_FILLED_CURVE {
        straight_arrow_ring(stem_len, head.length(), widths)
    } else {
        if direction > 0.0 {
            stem_curve = -stem_curve;
        }
        curved_arrow_ring(stem_len, head.length(), stem_curve, widths)
    };

    ring.rotate(direction);
    vec![ring]
}

fn straight_arrow_ring(stem_len: f64, head_len: f64, widths: HalfWidths) -> Ring {
    Ring::new(vec![
        Point::new(widths.base, 0.0),
        Point::new(widths.stem, stem_len),
        Point::new(widths.head, stem_len),
        Point::new(0.0, stem_len + head_len),
        Point::new(-widths.head, stem_len),
        Point::new(-widths.stem, stem_len),
        Point::new(-widths.base, 0.0),
        Point::new(widths.base, 0.0),
    ])
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, x: f64, y: f64) {
        assert_approx_eq!(f64, actual.x(), x, epsilon = 1e-9);
        assert_approx_eq!(f64, actual.y(), y, epsilon = 1e-9);
    }

    #[test]
    fn test_default_filled_arrow() {
        let rings = build_filled_arrow(100.0, &StyleRecord::new());
        assert_eq!(rings.len(), 1);

        let ring = &rings[0];
        let head_len = 6.0 / (2.0 * 20f64.to_radians().tan());
        let stem_len = 100.0 - head_len;
        let points = ring.points();

        assert_eq!(ring.len(), 8);
        assert_eq!(points[0], Point::new(1.0, 0.0));
        assert_eq!(points[7], Point::new(1.0, 0.0));
        assert_point_eq(points[1], 1.0, stem_len);
        assert_point_eq(points[2], 3.0, stem_len);
        assert_point_eq(points[3], 0.0, 100.0);
        assert_point_eq(points[4], -3.0, stem_len);
        assert_point_eq(points[5], -1.0, stem_len);
        assert_point_eq(points[6], -1.0, 0.0);
    }

    #[test]
    fn test_head_width_defaults_to_three_stem_widths() {
        let style = StyleRecord::new().with("arrow-stem-width", 4.0);
        let rings = build_filled_arrow(200.0, &style);
        let points = rings[0].points();

        assert_approx_eq!(f64, points[1].x(), 2.0, epsilon = 1e-12);
        assert_approx_eq!(f64, points[2].x(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_taper_narrows_base() {
        let style = StyleRecord::new().with("arrow-stem-taper", 0.5);
        let rings = build_filled_arrow(100.0, &style);
        let points = rings[0].points();

        assert_point_eq(points[0], 0.5, 0.0);
        assert_point_eq(points[6], -0.5, 0.0);
        assert_approx_eq!(f64, points[1].x(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_taper_meets_at_a_point() {
        let style = StyleRecord::new().with("arrow-stem-taper", 1.0);
        let rings = build_filled_arrow(100.0, &style);
        assert_point_eq(rings[0].points()[0], 0.0, 0.0);
    }

    #[test]
    fn test_short_arrow_scales_head_and_stem() {
        // Default head length is about 8.24; on a 10 unit arrow only 6 is allowed
        let rings = build_filled_arrow(10.0, &StyleRecord::new());
        let points = rings[0].points();
        let scale = 6.0 / (6.0 / (2.0 * 20f64.to_radians().tan()));

        assert_point_eq(points[3], 0.0, 10.0);
        assert_approx_eq!(f64, points[1].y(), 4.0, epsilon = 1e-9);
        assert_approx_eq!(f64, points[1].x(), scale, epsilon = 1e-9);
        assert_approx_eq!(f64, points[2].x(), 3.0 * scale, epsilon = 1e-9);
    }

    #[test]
    fn test_extreme_curve_draws_straight() {
        let style = StyleRecord::new().with("arrow-stem-curve", 120.0);
        let rings = build_filled_arrow(100.0, &style);
        assert_eq!(rings[0].len(), 8);
    }

    #[test]
    fn test_curve_draws_curved_outline() {
        let style = StyleRecord::new().with("arrow-stem-curve", 30.0);
        let rings = build_filled_arrow(100.0, &style);
        let ring = &rings[0];

        assert!(ring.len() > 8);
        assert!(ring.is_closed());
        // Tip leans right for a positive curve with no rotation
        let tip = ring.points()[ring.len() - 3];
        assert!(tip.x() > 0.0);
    }

    #[test]
    fn test_curved_outline_point_count() {
        let style = StyleRecord::new().with("arrow-stem-curve", 30.0);
        let rings = build_filled_arrow(100.0, &style);
        assert_eq!(rings[0].len(), 24);
    }

    #[test]
    fn test_positive_direction_flips_curve() {
        let flipped = build_filled_arrow(
            100.0,
            &StyleRecord::new()
                .with("arrow-stem-curve", 30.0)
                .with("rotation", 90.0),
        );
        let mut expected = build_filled_arrow(
            100.0,
            &StyleRecord::new().with("arrow-stem-curve", -30.0),
        );
        expected[0].rotate(90.0);

        assert_eq!(flipped[0].len(), expected[0].len());
        for (a, b) in flipped[0].iter().zip(expected[0].iter()) {
            assert_point_eq(*a, b.x(), b.y());
        }
    }

    #[test]
    fn test_arrow_direction_used_without_rotation() {
        let rings = build_filled_arrow(
            100.0,
            &StyleRecord::new().with("arrow-direction", 90.0),
        );
        // Pointing east: the tip lies on +x
        assert_point_eq(rings[0].points()[3], 100.0, 0.0);
    }

    #[test]
    fn test_rotation_wins_over_arrow_direction() {
        let rings = build_filled_arrow(
            100.0,
            &StyleRecord::new()
                .with("rotation", 180.0)
                .with("arrow-direction", 90.0),
        );
        assert_point_eq(rings[0].points()[3], 0.0, -100.0);
    }

    #[test]
    fn test_zero_min_stem_lets_head_fill_arrow() {
        // With no stem reserved the head is scaled to the whole length
        let style = StyleRecord::new().with("arrow-min-stem", 0.0);
        let rings = build_filled_arrow(4.0, &style);
        let points = rings[0].points();
        assert_approx_eq!(f64, points[1].y(), 0.0, epsilon = 1e-9);
        assert_point_eq(points[3], 0.0, 4.0);
    }
}
