//! Curved stem outlines for filled arrows.
//!
//! The stem centerline follows a circular arc with a signed total turning
//! angle. Each side of the stem is sampled in closed form from its own arc,
//! which is tangent to the y-axis where the stem meets the head, so the head
//! always sits square on the stem.

use std::f64::consts::PI;

use log::trace;

use quiver_core::geometry::{Point, Ring};

use super::filled::HalfWidths;

/// Angular spacing between arc samples, in degrees.
const SAMPLE_SPACING_DEGREES: f64 = 5.0;

/// Builds the closed outline of a filled arrow whose stem curves through
/// `curvature` degrees.
///
/// The ring starts at the left stem/head corner, runs down the left side of
/// the stem, across the (possibly tapered) base, up the right side, then
/// around the head back to where it started.
pub fn curved_arrow_ring(
    stem_len: f64,
    head_len: f64,
    curvature: f64,
    widths: HalfWidths,
) -> Ring {
    let theta = curvature.abs().to_radians();
    let sign = if curvature > 0.0 { 1.0 } else { -1.0 };
    let dx = stem_len * (theta / 2.0).sin() * sign;
    let dy = stem_len * (theta / 2.0).cos();

    let right_corner = Point::new(widths.stem + dx, dy);
    let left_corner = Point::new(-widths.stem + dx, dy);
    let head = [
        right_corner,
        Point::new(widths.head + dx, dy),
        Point::new(dx, head_len + dy),
        Point::new(-widths.head + dx, dy),
        left_corner,
    ];

    // Keep the base perpendicular to the stem's starting direction
    let ax = widths.base * theta.cos();
    let ay = widths.base * theta.sin() * -sign;

    let mut ring = Ring::new(arc_points(Point::new(-ax, -ay), left_corner));
    let mut right = Ring::new(arc_points(Point::new(ax, ay), right_corner));
    right.reverse();
    right.pop();
    ring.append(right);
    ring.append(Ring::new(head.to_vec()));

    trace!(curvature, points = ring.len(); "Built curved arrow outline");
    ring
}

/// Samples the circular arc joining a stem base corner `base` to the stem
/// corner `stem` at the head junction.
///
/// The arc is tangent to the vertical at `stem`. The result starts at
/// `stem`, walks along the arc and ends at `base`. Sample density is fixed
/// in angle: `round(sweep_degrees / 5) + 2` interior points.
///
/// Inputs whose chord cannot lie on such an arc (for instance a perfectly
/// vertical chord) produce NaN samples. When the sweep itself is NaN no
/// samples are taken and only the two endpoints are returned.
pub fn arc_points(base: Point, stem: Point) -> Vec<Point> {
    let (ax, ay) = (base.x(), base.y());
    let (bx, by) = (stem.x(), stem.y());
    let dx = bx - ax;
    let dy = by - ay;
    let dy1 = (dy * dy - dx * dx) / (2.0 * dy);
    let dy2 = dy - dy1;
    let dx2 = dx.hypot(dy) / 2.0;
    let theta = PI - (dx2 / dy2).asin() * 2.0;
    let radius = dy2 / (theta / 2.0).tan();
    let sign = if bx > ax { 1.0 } else { -1.0 };

    let count = sample_count(theta);
    let increment = theta / (count + 1) as f64;

    let mut points = Vec::with_capacity(count + 2);
    points.push(stem);
    for i in 1..=count {
        let phi = i as f64 * increment / 2.0;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let chord = sin_phi * radius * 2.0;
        points.push(Point::new(bx - sin_phi * chord * sign, by - cos_phi * chord));
    }
    points.push(base);
    points
}

fn sample_count(sweep: f64) -> usize {
    if sweep.is_nan() {
        return 0;
    }
    (sweep.to_degrees() / SAMPLE_SPACING_DEGREES).round() as usize + 2
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn widths() -> HalfWidths {
        HalfWidths {
            base: 1.0,
            stem: 1.0,
            head: 3.0,
        }
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.0), 2);
        assert_eq!(sample_count(30f64.to_radians()), 8);
        assert_eq!(sample_count(90f64.to_radians()), 20);
    }

    #[test]
    fn test_sample_count_nan_sweep_takes_no_samples() {
        assert_eq!(sample_count(f64::NAN), 0);
    }

    #[test]
    fn test_arc_points_endpoints() {
        let base = Point::new(0.0, 0.0);
        let stem = Point::new(10.0, 10.0);
        let points = arc_points(base, stem);

        assert_eq!(points.first(), Some(&stem));
        assert_eq!(points.last(), Some(&base));
    }

    #[test]
    fn test_arc_points_quarter_circle() {
        // A quarter circle of radius 10 centered at (0, 10), tangent to the
        // vertical at (10, 10).
        let points = arc_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));

        // 90 degrees of sweep gives 20 interior samples
        assert_eq!(points.len(), 22);
        for point in &points {
            let distance = point.sub_point(Point::new(0.0, 10.0)).hypot();
            assert_approx_eq!(f64, distance, 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_arc_points_bend_side() {
        let right = arc_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let left = arc_points(Point::new(0.0, 0.0), Point::new(-10.0, 10.0));

        for (r, l) in right.iter().zip(left.iter()) {
            assert_approx_eq!(f64, r.x(), -l.x(), epsilon = 1e-9);
            assert_approx_eq!(f64, r.y(), l.y(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_arc_points_vertical_chord_is_nan() {
        let points = arc_points(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert!(points.iter().any(|p| !p.is_finite()));
    }

    #[test]
    fn test_curved_ring_is_closed() {
        let ring = curved_arrow_ring(90.0, 8.0, 30.0, widths());
        assert!(ring.is_closed());
    }

    #[test]
    fn test_curved_ring_head_is_offset_with_curve() {
        let stem_len = 90.0;
        let head_len = 8.0;
        let ring = curved_arrow_ring(stem_len, head_len, 40.0, widths());

        let dx = stem_len * 20f64.to_radians().sin();
        let dy = stem_len * 20f64.to_radians().cos();
        let tip = ring.points()[ring.len() - 3];
        assert_approx_eq!(f64, tip.x(), dx, epsilon = 1e-9);
        assert_approx_eq!(f64, tip.y(), dy + head_len, epsilon = 1e-9);
    }

    #[test]
    fn test_curved_ring_sign_mirrors_outline() {
        let positive = curved_arrow_ring(80.0, 6.0, 45.0, widths());
        let negative = curved_arrow_ring(80.0, 6.0, -45.0, widths());

        assert_eq!(positive.len(), negative.len());
        // The closing point repeats the left junction corner, which mirrors
        // onto the right corner, so compare the distinct points only.
        let distinct = positive.len() - 1;
        let mut mirrored: Vec<(f64, f64)> = negative.points()[..distinct]
            .iter()
            .map(|p| (-p.x(), p.y()))
            .collect();
        let mut expected: Vec<(f64, f64)> = positive.points()[..distinct]
            .iter()
            .map(|p| (p.x(), p.y()))
            .collect();
        mirrored.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (m, e) in mirrored.iter().zip(expected.iter()) {
            assert_approx_eq!(f64, m.0, e.0, epsilon = 1e-9);
            assert_approx_eq!(f64, m.1, e.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_curved_ring_point_count() {
        // Each side sweeps 30 degrees: 8 samples plus 2 endpoints. The sides
        // share one junction point and the head adds five.
        let ring = curved_arrow_ring(90.0, 8.0, 30.0, widths());
        assert_eq!(ring.len(), 24);

        let ring = curved_arrow_ring(90.0, 8.0, 90.0, widths());
        assert_eq!(ring.len(), 48);
    }
}
