//! Cubic Bezier approximation of circular arcs.
//!
//! Curved stick-arrow stems are emitted as a single cubic Bezier segment
//! whose control points follow a circular arc of a given signed total
//! turning angle. The returned ring keeps both original endpoints exactly
//! and inserts the two control points between them, so a renderer can draw
//! it with one `C` path command.
//!
//! Curvature follows the stick tip convention: a positive angle turns the
//! path clockwise (the stem starts leaning left and ends pointing up).

use log::trace;

use crate::geometry::{Point, Ring};

/// Returns the two control points of a cubic Bezier approximating a circular
/// arc from `start` to `end` with signed total turning angle `curvature`
/// (degrees).
///
/// Each handle is tangent to the arc at its endpoint and has length
/// `4/3 * tan(theta/4) * radius`.
pub fn arc_control_points(start: Point, end: Point, curvature: f64) -> (Point, Point) {
    let chord = end.sub_point(start);
    let chord_len = chord.hypot();
    let theta = curvature.to_radians();
    let radius = chord_len / (2.0 * (theta / 2.0).sin());
    let handle = 4.0 / 3.0 * (theta / 4.0).tan() * radius;

    let direction = chord.scale(1.0 / chord_len);
    // Tangents lean half the turning angle to either side of the chord
    let start_tangent = direction.rotate(-curvature / 2.0);
    let end_tangent = direction.rotate(curvature / 2.0);

    (
        start.add_point(start_tangent.scale(handle)),
        end.sub_point(end_tangent.scale(handle)),
    )
}

/// Converts a two-point ring into the cubic Bezier `[p0, c1, c2, p1]`.
///
/// Rings that do not hold exactly two distinct points, and zero or
/// non-finite curvature, leave the ring untouched.
pub fn add_curve_control_points(ring: &mut Ring, curvature: f64) {
    if curvature == 0.0 || !curvature.is_finite() {
        return;
    }
    let &[start, end] = ring.points() else {
        trace!(points = ring.len(); "Skipping control points for non-segment ring");
        return;
    };
    if start == end {
        return;
    }

    let (c1, c2) = arc_control_points(start, end, curvature);
    *ring = Ring::new(vec![start, c1, c2, end]);
}
