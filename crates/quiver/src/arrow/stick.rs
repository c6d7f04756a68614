//! Stick arrows: a stem polyline with an open chevron head.

use log::debug;

use quiver_core::{
    bezier::add_curve_control_points,
    geometry::{Point, Ring, rotate_rings},
    style::{ArrowOption, StyleRecord},
};

use super::{
    defaults,
    head::{HeadSize, min_stem_ratio},
};

/// Builds a stick arrow of `total_len`.
///
/// Returns `[stem]` when the fitted head has no length, else `[stem, head]`.
/// The stem starts at the origin. A non-zero `arrow-stem-curve` bends the
/// stem into a Bezier arc that meets the head square-on at the tip.
///
/// # Example
///
/// ```
/// use quiver::arrow::build_stick_arrow;
/// use quiver_core::{geometry::Point, style::StyleRecord};
///
/// let rings = build_stick_arrow(&StyleRecord::new(), 50.0);
/// assert_eq!(rings.len(), 2);
/// assert_eq!(rings[0].first(), Some(Point::new(0.0, 0.0)));
/// assert_eq!(rings[1].len(), 3);
/// ```
pub fn build_stick_arrow(style: &StyleRecord, total_len: f64) -> Vec<Ring> {
    let min_stem = min_stem_ratio(style);
    let head_angle = style.resolve(ArrowOption::HeadAngle, defaults::STICK_HEAD_ANGLE);
    let curve = style.resolve(ArrowOption::StemCurve, defaults::STEM_CURVE);
    let head_width = style.resolve(ArrowOption::HeadWidth, defaults::STICK_HEAD_WIDTH);
    let rotation = style.resolve(ArrowOption::Rotation, defaults::ROTATION);

    let head = HeadSize::fit(total_len, head_width, head_angle, min_stem);
    let tip = stick_tip(total_len, curve);

    debug!(
        total_len,
        head_len = head.length(),
        scale = head.scale(),
        curve,
        rotation;
        "Building stick arrow"
    );

    let mut stem = Ring::new(vec![Point::new(0.0, 0.0), tip]);
    if curve != 0.0 {
        add_curve_control_points(&mut stem, curve);
    }

    let mut rings = vec![stem];
    if head.length() != 0.0 && !head.length().is_nan() {
        let half_width = head.width() / 2.0;
        rings.push(Ring::new(vec![
            tip.add_point(Point::new(-half_width, -head.length())),
            tip,
            tip.add_point(Point::new(half_width, -head.length())),
        ]));
    }

    rotate_rings(&mut rings, rotation);
    rings
}

/// Places the tip so an arc turning through `curve` degrees from the origin
/// arrives heading straight up.
fn stick_tip(total_len: f64, curve: f64) -> Point {
    let theta = (curve / 2.0).abs().to_radians();
    let side = if curve > 0.0 { -1.0 } else { 1.0 };
    Point::new(total_len * theta.sin() * side, total_len * theta.cos())
}
