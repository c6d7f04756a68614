//! Geometric primitives for arrow glyph coordinates.
//!
//! Every coordinate lives in a local Cartesian frame anchored at the origin,
//! with y increasing "forward". Builders assemble [`Ring`]s in that frame and
//! orient them as a last step with [`rotate_rings`].
//!
//! # Rotation convention
//!
//! Angles are in degrees and positive values rotate **clockwise**, matching
//! compass bearings: a ring pointing up (+y) rotated by 90 points along +x.

use std::{slice, vec};

/// A point in the local, unrotated frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns true if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotates the point about the origin by `degrees`, clockwise.
    pub fn rotate(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.rotate_by(sin, cos)
    }

    fn rotate_by(self, sin: f64, cos: f64) -> Self {
        Self {
            x: self.x * cos + self.y * sin,
            y: self.y * cos - self.x * sin,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of points describing one stem or head outline.
///
/// A ring may be an open polyline (stick stems and heads) or a closed
/// polygon whose first point is repeated at the end (filled outlines).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Creates a ring from the given points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points of the ring in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points in the ring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns the last point, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns true if the ring has more than one point and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.len() > 1 && self.first() == self.last()
    }

    /// Appends a point to the end of the ring.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Removes and returns the last point.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Reverses the order of the points in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Moves every point of `other` onto the end of this ring.
    pub fn append(&mut self, other: Ring) {
        self.points.extend(other.points);
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Rotates every point about the origin in place.
    ///
    /// A zero or non-finite angle leaves the ring untouched.
    pub fn rotate(&mut self, degrees: f64) {
        if degrees == 0.0 || !degrees.is_finite() {
            return;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        for point in &mut self.points {
            *point = point.rotate_by(sin, cos);
        }
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Ring {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Ring {
    type Item = Point;
    type IntoIter = vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ring {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Rotates all points of all rings about the origin in place.
///
/// Positive degrees rotate clockwise. A zero or non-finite angle is a no-op.
pub fn rotate_rings(rings: &mut [Ring], degrees: f64) {
    for ring in rings {
        ring.rotate(degrees);
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f64, actual.x(), expected.x(), epsilon = 1e-9);
        assert_approx_eq!(f64, actual.y(), expected.y(), epsilon = 1e-9);
    }

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.25);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.25);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_hypot_and_scale() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::new(2.0, 3.0).scale(2.5), Point::new(5.0, 7.5));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, -1.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_rotate_is_clockwise() {
        // Up rotated a quarter turn points east
        assert_point_eq(Point::new(0.0, 1.0).rotate(90.0), Point::new(1.0, 0.0));
        assert_point_eq(Point::new(1.0, 0.0).rotate(90.0), Point::new(0.0, -1.0));
        assert_point_eq(Point::new(0.0, 2.0).rotate(-90.0), Point::new(-2.0, 0.0));
        assert_point_eq(Point::new(3.0, 4.0).rotate(180.0), Point::new(-3.0, -4.0));
    }

    #[test]
    fn test_ring_accessors() {
        let mut ring = Ring::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(ring.len(), 2);
        assert!(!ring.is_empty());
        assert!(!ring.is_closed());

        ring.push(Point::new(0.0, 0.0));
        assert!(ring.is_closed());
        assert_eq!(ring.pop(), Some(Point::new(0.0, 0.0)));

        ring.reverse();
        assert_eq!(ring.first(), Some(Point::new(1.0, 1.0)));
        assert_eq!(ring.last(), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_ring_single_point_is_not_closed() {
        let ring = Ring::new(vec![Point::new(2.0, 2.0)]);
        assert!(!ring.is_closed());
        assert!(!Ring::default().is_closed());
    }

    #[test]
    fn test_ring_append() {
        let mut ring: Ring = vec![Point::new(0.0, 0.0)].into();
        ring.append(Ring::from_iter([Point::new(1.0, 0.0), Point::new(2.0, 0.0)]));
        let xs: Vec<f64> = ring.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_ring_rotate_zero_is_identity() {
        let original = Ring::new(vec![Point::new(1.5, -2.0), Point::new(0.1, 7.0)]);
        let mut ring = original.clone();
        ring.rotate(0.0);
        assert_eq!(ring, original);
    }

    #[test]
    fn test_ring_rotate_non_finite_is_noop() {
        let original = Ring::new(vec![Point::new(1.0, 2.0)]);
        let mut ring = original.clone();
        ring.rotate(f64::NAN);
        assert_eq!(ring, original);
    }

    #[test]
    fn test_rotate_rings_rotates_every_ring() {
        let mut rings = vec![
            Ring::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)]),
            Ring::new(vec![Point::new(-1.0, 9.0), Point::new(0.0, 10.0)]),
        ];
        rotate_rings(&mut rings, 90.0);

        assert_point_eq(rings[0].points()[0], Point::new(0.0, 0.0));
        assert_point_eq(rings[0].points()[1], Point::new(10.0, 0.0));
        assert_point_eq(rings[1].points()[0], Point::new(9.0, 1.0));
        assert_point_eq(rings[1].points()[1], Point::new(10.0, 0.0));
    }
}
