//! Distance measures and nearest-neighbor search over typed collections.
//!
//! These are the stateless primitives downstream layout analysis (column
//! alignment, caption association, reading-order repair) builds on top of
//! the segmenter's output. Everything here is generic over the caller's
//! element type via projection closures, the same shape the teacher crate
//! uses for its spatial filters in `layout::TextSpanSpatial`.

use crate::error::{Error, Result};
use crate::geometry::{LineSegment, Point};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Euclidean distance between two points, computed in `f64` (the spec
/// allows floating point here since a square root has no exact decimal
/// form).
pub fn euclidean(p: Point, q: Point) -> f64 {
    weighted_euclidean(p, q, 1.0, 1.0)
}

/// Euclidean distance with independent weights on each axis.
pub fn weighted_euclidean(p: Point, q: Point, wx: f64, wy: f64) -> f64 {
    let dx = to_f64(q.x) - to_f64(p.x);
    let dy = to_f64(q.y) - to_f64(p.y);
    (wx * dx * dx + wy * dy * dy).sqrt()
}

/// Manhattan (taxicab) distance. Stays in exact decimal arithmetic since
/// it needs no square root.
pub fn manhattan(p: Point, q: Point) -> Decimal {
    (q.x - p.x).abs() + (q.y - p.y).abs()
}

/// Angle from `p` to `q` in degrees, via `atan2(dy, dx)`.
pub fn angle(p: Point, q: Point) -> f64 {
    let dx = to_f64(q.x) - to_f64(p.x);
    let dy = to_f64(q.y) - to_f64(p.y);
    dy.atan2(dx).to_degrees()
}

/// Absolute vertical separation between two points.
pub fn vertical(p: Point, q: Point) -> Decimal {
    (q.y - p.y).abs()
}

/// Absolute horizontal separation between two points.
pub fn horizontal(p: Point, q: Point) -> Decimal {
    (q.x - p.x).abs()
}

/// Linear scan for the candidate nearest to `element`'s projection,
/// excluding candidates equal to `element` itself.
///
/// Returns `(index, distance)` of the closest qualifying candidate, or
/// `(-1, f64::INFINITY)` if every candidate was excluded by the equality
/// check. Fails with [`Error::InvalidArgument`] if `candidates` is empty —
/// there's nothing to project against regardless of exclusion.
///
/// Generic over two independent projected feature types, `C` for candidates
/// and `P` for the pivot element, so the same scan serves both the
/// point-based variant below (`C = P = Point`) and the segment-based variant
/// (`C = LineSegment`, `P = Point`).
pub fn find_index_nearest<T, C, P>(
    element: &T,
    candidates: &[T],
    candidate_projection: impl Fn(&T) -> C,
    pivot_projection: impl Fn(&T) -> P,
    distance: impl Fn(C, P) -> f64,
) -> Result<(i64, f64)>
where
    T: PartialEq,
{
    if candidates.is_empty() {
        return Err(Error::InvalidArgument(
            "candidates must not be empty".to_string(),
        ));
    }

    let pivot = pivot_projection(element);
    let mut best_index: i64 = -1;
    let mut best_distance = f64::INFINITY;

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate == element {
            continue;
        }
        let d = distance(candidate_projection(candidate), pivot);
        if d < best_distance {
            best_distance = d;
            best_index = index as i64;
        }
    }

    Ok((best_index, best_distance))
}

/// [`find_index_nearest`] specialized for point projections.
pub fn find_index_nearest_point<T>(
    element: &T,
    candidates: &[T],
    projection: impl Fn(&T) -> Point,
) -> Result<(i64, f64)>
where
    T: PartialEq,
{
    find_index_nearest(element, candidates, &projection, &projection, euclidean)
}

/// [`find_index_nearest`] specialized for line-segment projections.
///
/// Semantics are identical to the point variant: the caller supplies how
/// to project a candidate to a segment, how to project the pivot element
/// to a point, and a distance function between the two.
pub fn find_index_nearest_segment<T>(
    element: &T,
    candidates: &[T],
    segment_projection: impl Fn(&T) -> LineSegment,
    pivot_projection: impl Fn(&T) -> Point,
    distance: impl Fn(LineSegment, Point) -> f64,
) -> Result<(i64, f64)>
where
    T: PartialEq,
{
    find_index_nearest(element, candidates, segment_projection, pivot_projection, distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn p(x: i64, y: i64) -> Point {
        Point::new(d(x), d(y))
    }

    #[test]
    fn euclidean_distance_3_4_5() {
        assert_eq!(euclidean(p(0, 0), p(3, 4)), 5.0);
    }

    #[test]
    fn manhattan_distance_is_exact() {
        assert_eq!(manhattan(p(0, 0), p(3, 4)), d(7));
    }

    #[test]
    fn vertical_and_horizontal_separation() {
        assert_eq!(vertical(p(1, 5), p(9, 20)), d(15));
        assert_eq!(horizontal(p(1, 5), p(9, 20)), d(8));
    }

    #[test]
    fn angle_right_is_zero_degrees() {
        assert_eq!(angle(p(0, 0), p(5, 0)), 0.0);
    }

    #[test]
    fn angle_up_is_90_degrees() {
        assert!((angle(p(0, 0), p(0, 5)) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn find_index_nearest_excludes_self_and_picks_closest() {
        let candidates = vec![p(0, 0), p(1, 0), p(2, 0)];
        let pivot = candidates[0];
        let (index, dist) =
            find_index_nearest_point(&pivot, &candidates, |p| *p).expect("non-empty");
        assert_eq!(index, 1);
        assert_eq!(dist, 1.0);
    }

    #[test]
    fn find_index_nearest_rejects_empty_candidates() {
        let candidates: Vec<Point> = vec![];
        let pivot = p(0, 0);
        let err = find_index_nearest_point(&pivot, &candidates, |p| *p).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument("candidates must not be empty".to_string())
        );
    }

    #[test]
    fn find_index_nearest_returns_sentinel_when_all_excluded() {
        let candidates = vec![p(0, 0)];
        let pivot = p(0, 0);
        let (index, dist) =
            find_index_nearest_point(&pivot, &candidates, |p| *p).expect("non-empty");
        assert_eq!(index, -1);
        assert_eq!(dist, f64::INFINITY);
    }
}
