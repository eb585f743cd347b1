//! Affine transformation matrix for mapping PDF device-space geometry.
//!
//! PDF content streams describe a 3×3 homogeneous transform in
//! column-convention as the six-tuple `(a, b, c, d, e, f)`:
//!
//! ```text
//! [ A  B  0 ]
//! [ C  D  0 ]
//! [ E  F  1 ]
//! ```
//!
//! The third column (`r1, r2, r3`) is always `(0, 0, 1)` for genuine PDF
//! transforms but is retained so that composing a `Transform` with a
//! non-affine (projective) matrix stays exact instead of silently
//! truncating. See `examples/scostello-pdf_oxide/src/content/graphics_state.rs`
//! for the teacher's six-field `Matrix`, which this generalizes to nine.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rectangle, Vector};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// A 3×3 affine (occasionally projective) transformation matrix.
///
/// Layout, matching `M[row, col]`:
///
/// ```text
/// row 0: A, B, r1
/// row 1: C, D, r2
/// row 2: E, F, r3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    /// Horizontal scaling component.
    pub a: Decimal,
    /// Rotation/skew component.
    pub b: Decimal,
    /// Rotation/skew component.
    pub c: Decimal,
    /// Vertical scaling component.
    pub d: Decimal,
    /// Horizontal translation.
    pub e: Decimal,
    /// Vertical translation.
    pub f: Decimal,
    /// Third-column entry retained for composition with projective matrices.
    pub r1: Decimal,
    /// Third-column entry retained for composition with projective matrices.
    pub r2: Decimal,
    /// Third-column entry retained for composition with projective matrices;
    /// `1` for every genuine PDF transform.
    pub r3: Decimal,
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            a: Decimal::ONE,
            b: Decimal::ZERO,
            c: Decimal::ZERO,
            d: Decimal::ONE,
            e: Decimal::ZERO,
            f: Decimal::ZERO,
            r1: Decimal::ZERO,
            r2: Decimal::ZERO,
            r3: Decimal::ONE,
        }
    }

    /// Build from all nine entries, in row-major reading order
    /// `(a, b, c, d, e, f, r1, r2, r3)`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_values_9(
        a: Decimal,
        b: Decimal,
        c: Decimal,
        d: Decimal,
        e: Decimal,
        f: Decimal,
        r1: Decimal,
        r2: Decimal,
        r3: Decimal,
    ) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            r1,
            r2,
            r3,
        }
    }

    /// Build from the canonical PDF 6-tuple `(a, b, c, d, e, f)`; the third
    /// column defaults to `(0, 0, 1)`.
    pub fn from_values_6(a: Decimal, b: Decimal, c: Decimal, d: Decimal, e: Decimal, f: Decimal) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            r1: Decimal::ZERO,
            r2: Decimal::ZERO,
            r3: Decimal::ONE,
        }
    }

    /// Build from `(a, b, c, d)` only; translations and the third column
    /// default to zero (except `r3 = 1`).
    pub fn from_values_4(a: Decimal, b: Decimal, c: Decimal, d: Decimal) -> Self {
        Self::from_values_6(a, b, c, d, Decimal::ZERO, Decimal::ZERO)
    }

    /// Build from a slice of length 9, 6, or 4. Any other length fails with
    /// [`Error::InvalidArgument`].
    pub fn from_array(values: &[Decimal]) -> Result<Self> {
        match values.len() {
            9 => Ok(Self::from_values_9(
                values[0], values[1], values[2], values[3], values[4], values[5], values[6],
                values[7], values[8],
            )),
            6 => Ok(Self::from_values_6(
                values[0], values[1], values[2], values[3], values[4], values[5],
            )),
            4 => Ok(Self::from_values_4(values[0], values[1], values[2], values[3])),
            other => Err(Error::InvalidArgument(format!(
                "Transform::from_array expects length 4, 6, or 9, got {other}"
            ))),
        }
    }

    /// A pure translation by `(x, y)`.
    pub fn get_translation(x: Decimal, y: Decimal) -> Self {
        let mut m = Self::identity();
        m.e = x;
        m.f = y;
        m
    }

    /// Map a point: `(A·x + C·y + E, B·x + D·y + F)`.
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Map a vector using the same formula as [`Self::transform_point`],
    /// translation included.
    ///
    /// Mathematically a direction should be translation-invariant; this
    /// preserves the source's behavior verbatim for bit-exact
    /// compatibility rather than silently diverging from it.
    pub fn transform_vector(&self, v: Vector) -> Vector {
        Vector::new(
            self.a * v.x + self.c * v.y + self.e,
            self.b * v.x + self.d * v.y + self.f,
        )
    }

    /// Map a rectangle by transforming its four corners independently and
    /// re-deriving the axis-aligned enclosing box.
    pub fn transform_rect(&self, rect: Rectangle) -> Rectangle {
        let corners = rect.corners();
        let mapped = [
            self.transform_point(corners[0]),
            self.transform_point(corners[1]),
            self.transform_point(corners[2]),
            self.transform_point(corners[3]),
        ];
        Rectangle::from_corners(&mapped)
    }

    /// Pure horizontal mapping with `y = 0`: `A·x + E`.
    pub fn transform_x(&self, x: Decimal) -> Decimal {
        self.a * x + self.e
    }

    /// Translate the origin by `(x, y)`, updating only the translation row.
    pub fn translate(&self, x: Decimal, y: Decimal) -> Self {
        Self {
            e: x * self.a + y * self.c + self.e,
            f: x * self.b + y * self.d + self.f,
            r3: x * self.r1 + y * self.r2 + self.r3,
            ..*self
        }
    }

    /// Element at `(row, col)`. Both must be in `[0, 3)`.
    pub fn at(&self, row: isize, col: isize) -> Result<Decimal> {
        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return Err(Error::OutOfRange { row, col });
        }
        Ok(self.get_unchecked(row as usize, col as usize))
    }

    fn get_unchecked(&self, row: usize, col: usize) -> Decimal {
        match (row, col) {
            (0, 0) => self.a,
            (0, 1) => self.b,
            (0, 2) => self.r1,
            (1, 0) => self.c,
            (1, 1) => self.d,
            (1, 2) => self.r2,
            (2, 0) => self.e,
            (2, 1) => self.f,
            (2, 2) => self.r3,
            _ => unreachable!("bounds already checked by callers within this module"),
        }
    }

    /// Standard 3×3 matrix product `self · other`.
    pub fn multiply(&self, other: &Transform) -> Transform {
        let mut out = [[Decimal::ZERO; 3]; 3];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = Decimal::ZERO;
                for k in 0..3 {
                    sum += self.get_unchecked(row, k) * other.get_unchecked(k, col);
                }
                out[row][col] = sum;
            }
        }
        Transform {
            a: out[0][0],
            b: out[0][1],
            r1: out[0][2],
            c: out[1][0],
            d: out[1][1],
            r2: out[1][2],
            e: out[2][0],
            f: out[2][1],
            r3: out[2][2],
        }
    }

    /// Elementwise scalar multiplication.
    pub fn multiply_scalar(&self, scalar: Decimal) -> Transform {
        Transform {
            a: self.a * scalar,
            b: self.b * scalar,
            c: self.c * scalar,
            d: self.d * scalar,
            e: self.e * scalar,
            f: self.f * scalar,
            r1: self.r1 * scalar,
            r2: self.r2 * scalar,
            r3: self.r3 * scalar,
        }
    }

    /// Horizontal scaling factor.
    ///
    /// When there's no rotation/skew (`B == 0 && C == 0`) this is exactly
    /// `A`, sign included. Otherwise it's decomposed from a
    /// rotation-then-scale as `sqrt(A^2 + B^2)`, a non-negative magnitude.
    /// That square root forces a promotion to `f64`; callers accept the
    /// precision loss.
    pub fn scaling_factor_x(&self) -> f64 {
        if self.b.is_zero() && self.c.is_zero() {
            return self.a.to_f64().unwrap_or(0.0);
        }
        let a = self.a.to_f64().unwrap_or(0.0);
        let b = self.b.to_f64().unwrap_or(0.0);
        (a * a + b * b).sqrt()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}\r\n{},{},{}\r\n{},{},{}",
            self.a, self.b, self.r1, self.c, self.d, self.r2, self.e, self.f, self.r3
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn identity_is_neutral_for_multiply() {
        let m = Transform::from_values_6(d(2), d(1), d(0), d(3), d(5), d(7));
        assert_eq!(Transform::identity().multiply(&m), m);
        assert_eq!(m.multiply(&Transform::identity()), m);
    }

    #[test]
    fn multiply_is_associative() {
        let a = Transform::from_values_6(d(1), d(2), d(3), d(4), d(5), d(6));
        let b = Transform::from_values_6(d(2), d(0), d(1), d(1), d(0), d(3));
        let c = Transform::get_translation(d(4), d(9));
        assert_eq!(a.multiply(&b).multiply(&c), a.multiply(&b.multiply(&c)));
    }

    #[test]
    fn identity_round_trip() {
        let p = Point::new(Decimal::new(35, 1), Decimal::new(-225, 2));
        assert_eq!(Transform::identity().transform_point(p), p);
    }

    #[test]
    fn translation_transforms_point() {
        let m = Transform::get_translation(d(10), d(20));
        let p = m.transform_point(Point::new(5.into(), 10.into()));
        assert_eq!(p, Point::new(d(15), d(30)));
    }

    #[test]
    fn translation_composition() {
        let m = Transform::get_translation(d(2), d(3)).multiply(&Transform::get_translation(d(5), d(7)));
        let p = m.transform_point(Point::new(d(0), d(0)));
        assert_eq!(p, Point::new(d(7), d(10)));
    }

    #[test]
    fn transform_rect_rederives_axis_aligned_box() {
        let m = Transform::get_translation(d(10), d(20));
        let rect = Rectangle::new(d(0), d(5), d(0), d(5));
        let mapped = m.transform_rect(rect);
        assert_eq!(mapped.left(), d(10));
        assert_eq!(mapped.bottom(), d(20));
        assert_eq!(mapped.right(), d(15));
        assert_eq!(mapped.top(), d(25));
    }

    #[test]
    fn scaling_factor_for_pure_scale() {
        let m = Transform::from_values_6(d(3), d(0), d(0), d(5), d(0), d(0));
        assert_eq!(m.scaling_factor_x(), 3.0);
    }

    #[test]
    fn scaling_factor_for_rotate_scale_45_degrees() {
        let sx = 2.0_f64;
        let sy = 4.0_f64;
        let theta = std::f64::consts::FRAC_PI_4;
        let a = Decimal::from_f64_retain(sx * theta.cos()).unwrap();
        let b = Decimal::from_f64_retain(sx * theta.sin()).unwrap();
        let c = Decimal::from_f64_retain(-sy * theta.sin()).unwrap();
        let dd = Decimal::from_f64_retain(sy * theta.cos()).unwrap();
        let m = Transform::from_values_6(a, b, c, dd, Decimal::ZERO, Decimal::ZERO);
        assert!((m.scaling_factor_x() - sx).abs() < 1e-6);
    }

    #[test]
    fn from_array_rejects_bad_lengths() {
        for len in [0usize, 1, 2, 3, 5, 7, 8, 10] {
            let values = vec![Decimal::ZERO; len];
            assert!(Transform::from_array(&values).is_err());
        }
    }

    #[test]
    fn from_array_accepts_valid_lengths() {
        assert!(Transform::from_array(&vec![Decimal::ZERO; 4]).is_ok());
        assert!(Transform::from_array(&vec![Decimal::ZERO; 6]).is_ok());
        assert!(Transform::from_array(&vec![Decimal::ZERO; 9]).is_ok());
    }

    #[test]
    fn indexing_reads_expected_layout() {
        let m = Transform::from_values_9(d(1), d(2), d(3), d(4), d(5), d(6), d(7), d(8), d(9));
        assert_eq!(m.at(0, 0).unwrap(), d(1));
        assert_eq!(m.at(0, 1).unwrap(), d(2));
        assert_eq!(m.at(0, 2).unwrap(), d(7));
        assert_eq!(m.at(2, 0).unwrap(), d(5));
        assert_eq!(m.at(2, 2).unwrap(), d(9));
    }

    #[test]
    fn indexing_out_of_range_fails() {
        let m = Transform::identity();
        assert!(matches!(m.at(3, 0), Err(Error::OutOfRange { row: 3, col: 0 })));
        assert!(matches!(m.at(0, -1), Err(Error::OutOfRange { row: 0, col: -1 })));
    }

    #[test]
    fn display_is_crlf_separated_rows() {
        let m = Transform::identity();
        let text = m.to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("\r\n"));
    }
}
