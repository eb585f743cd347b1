//! Geometric primitives for page-layout analysis.
//!
//! PDF coordinate math is decimal, not binary: a word's bounding box comes
//! straight out of content-stream operands, and comparing those operands
//! with binary floating point invites off-by-an-epsilon gap thresholds.
//! Every type here stores `rust_decimal::Decimal` coordinates; only the
//! [`distance`] module's `euclidean`, `weighted_euclidean`, and `angle`
//! fall back to `f64` for `sqrt`/`atan2`, as the specification allows.

pub mod distance;

use rust_decimal::Decimal;

/// A 2D point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// X coordinate.
    pub x: Decimal,
    /// Y coordinate.
    pub y: Decimal,
}

impl Point {
    /// Create a new point.
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }
}

/// A 2D displacement in document space.
///
/// Kept distinct from [`Point`] even though the two share a representation:
/// a `Transform` treats vectors and points differently in principle (see
/// [`crate::transform::Transform::transform_vector`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// X component.
    pub x: Decimal,
    /// Y component.
    pub y: Decimal,
}

impl Vector {
    /// Create a new vector.
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle using PDF's bottom-origin convention:
/// `bottom <= top` and `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    left: Decimal,
    right: Decimal,
    bottom: Decimal,
    top: Decimal,
}

impl Rectangle {
    /// Build a rectangle directly from its edges. Edges are normalized
    /// (min/max'd) rather than rejected, so callers can pass corners in
    /// either order.
    pub fn new(left: Decimal, right: Decimal, bottom: Decimal, top: Decimal) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    /// Build the smallest axis-aligned rectangle spanning a set of corner
    /// points. Used by [`crate::transform::Transform::transform_rect`]: an
    /// affine map can rotate or skew a rectangle's corners away from
    /// axis-alignment, and this re-derives the enclosing box from whatever
    /// four points result.
    pub fn from_corners(corners: &[Point; 4]) -> Self {
        let mut min_x = corners[0].x;
        let mut max_x = corners[0].x;
        let mut min_y = corners[0].y;
        let mut max_y = corners[0].y;
        for p in &corners[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Self {
            left: min_x,
            right: max_x,
            bottom: min_y,
            top: max_y,
        }
    }

    /// Build a rectangle from two opposite corners, in any order.
    pub fn from_points(x0: Decimal, y0: Decimal, x1: Decimal, y1: Decimal) -> Self {
        Self::new(x0, x1, y0, y1)
    }

    /// Left edge (minimum X).
    pub fn left(&self) -> Decimal {
        self.left
    }

    /// Right edge (maximum X).
    pub fn right(&self) -> Decimal {
        self.right
    }

    /// Bottom edge (minimum Y, PDF bottom-origin convention).
    pub fn bottom(&self) -> Decimal {
        self.bottom
    }

    /// Top edge (maximum Y, PDF bottom-origin convention).
    pub fn top(&self) -> Decimal {
        self.top
    }

    /// Width (`right - left`).
    pub fn width(&self) -> Decimal {
        self.right - self.left
    }

    /// Height (`top - bottom`).
    pub fn height(&self) -> Decimal {
        self.top - self.bottom
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// The four corners in `[top_left, top_right, bottom_left, bottom_right]` order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point {
        let two = Decimal::from(2);
        Point::new(self.left + self.width() / two, self.bottom + self.height() / two)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.min(other.bottom),
            top: self.top.max(other.top),
        }
    }
}

/// A directed line segment, used by the segment variant of
/// [`distance::find_index_nearest_segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment {
    /// Segment start point.
    pub start: Point,
    /// Segment end point.
    pub end: Point,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn rectangle_normalizes_reversed_edges() {
        let r = Rectangle::new(d(10), d(0), d(5), d(0));
        assert_eq!(r.left(), d(0));
        assert_eq!(r.right(), d(10));
        assert_eq!(r.bottom(), d(0));
        assert_eq!(r.top(), d(5));
    }

    #[test]
    fn rectangle_width_and_height() {
        let r = Rectangle::from_points(d(10), d(20), d(110), d(70));
        assert_eq!(r.width(), d(100));
        assert_eq!(r.height(), d(50));
    }

    #[test]
    fn rectangle_from_corners_rederives_bbox() {
        let corners = [
            Point::new(d(5), d(10)),
            Point::new(d(15), d(12)),
            Point::new(d(4), d(0)),
            Point::new(d(20), d(2)),
        ];
        let r = Rectangle::from_corners(&corners);
        assert_eq!(r.left(), d(4));
        assert_eq!(r.right(), d(20));
        assert_eq!(r.bottom(), d(0));
        assert_eq!(r.top(), d(12));
    }

    #[test]
    fn rectangle_union() {
        let a = Rectangle::new(d(0), d(50), d(0), d(50));
        let b = Rectangle::new(d(25), d(75), d(25), d(75));
        let u = a.union(&b);
        assert_eq!(u.left(), d(0));
        assert_eq!(u.bottom(), d(0));
        assert_eq!(u.right(), d(75));
        assert_eq!(u.top(), d(75));
    }

    #[test]
    fn rectangle_center() {
        let r = Rectangle::new(d(0), d(100), d(0), d(50));
        let c = r.center();
        assert_eq!(c.x, d(50));
        assert_eq!(c.y, d(25));
    }
}
