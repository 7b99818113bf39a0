//! This module solves a triangle's interior angles from its three side lengths.
//!
//! Validation and solving are a single operation: the strict triangle inequality is checked
//! first, and only then are two angles computed via the law of cosines, with the third derived
//! as the remainder to 180° so the angle-sum invariant holds exactly rather than through three
//! independent inverse-cosine evaluations.

use crate::error::TriqError;
use serde::{Deserialize, Serialize};

/// The three side lengths of the charge triangle, in meters.
///
/// The labels follow the charge layout: `a` spans q1–q3, `b` spans q1–q2, and `c` spans q2–q3.
/// The struct itself is a plain value; validity is established by
/// [`solve_angles`](TriangleSides::solve_angles), which rejects any sides that fail the strict
/// triangle inequality (this also rules out zero and negative lengths).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleSides {
    /// Distance between q1 and q3.
    pub a: f64,
    /// Distance between q1 and q2.
    pub b: f64,
    /// Distance between q2 and q3.
    pub c: f64,
}

/// The three interior angles of the charge triangle, in degrees, at full precision.
///
/// Each angle is named for the vertex it sits at; it is opposite the side not touching that
/// vertex (the angle at q1 is opposite side `c`, at q2 opposite `a`, at q3 opposite `b`). The
/// three values sum to exactly 180 by construction. Force decomposition must use these
/// full-precision values; [`rounded`](TriangleAngles::rounded) produces a copy for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleAngles {
    /// The interior angle at the q1 vertex.
    pub at_q1: f64,
    /// The interior angle at the q2 vertex.
    pub at_q2: f64,
    /// The interior angle at the q3 vertex.
    pub at_q3: f64,
}

impl TriangleAngles {
    /// Returns the sum of the three angles, in degrees.
    pub fn sum(&self) -> f64 {
        self.at_q1 + self.at_q2 + self.at_q3
    }

    /// Returns a copy with each angle rounded to the given number of decimal places.
    ///
    /// This is the presentation copy; feeding rounded angles back into force computation would
    /// compound the rounding error and is not supported by the engine.
    pub fn rounded(&self, decimals: u32) -> TriangleAngles {
        let factor = 10f64.powi(decimals as i32);
        let round = |angle: f64| (angle * factor).round() / factor;

        TriangleAngles {
            at_q1: round(self.at_q1),
            at_q2: round(self.at_q2),
            at_q3: round(self.at_q3),
        }
    }
}

impl TriangleSides {
    /// Creates a side-length triple. No validation happens here; see
    /// [`solve_angles`](TriangleSides::solve_angles).
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns `true` when the sides satisfy the strict triangle inequality on all three
    /// permutations.
    pub fn is_valid(&self) -> bool {
        let Self { a, b, c } = *self;
        a + b > c && a + c > b && b + c > a
    }

    /// Solves the interior angles from the side lengths.
    ///
    /// The angle at q2 (opposite side `a`) and the angle at q3 (opposite side `b`) come from
    /// the law of cosines; the angle at q1 is derived as 180° minus the other two, which
    /// guarantees the sum-to-180° invariant exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TriqError::TriangleInvalid`] when the sides fail the strict triangle
    /// inequality; no angles are produced and no downstream force computation may proceed.
    ///
    /// # Examples
    ///
    /// ```
    /// use triq::TriangleSides;
    ///
    /// let angles = TriangleSides::new(1.0, 1.0, 1.0).solve_angles().unwrap();
    /// assert!((angles.at_q3 - 60.0).abs() < 1e-12);
    ///
    /// assert!(TriangleSides::new(1.0, 1.0, 5.0).solve_angles().is_err());
    /// ```
    pub fn solve_angles(&self) -> Result<TriangleAngles, TriqError> {
        let Self { a, b, c } = *self;

        if !self.is_valid() {
            return Err(TriqError::TriangleInvalid { a, b, c });
        }

        let at_q2 = ((b * b + c * c - a * a) / (2.0 * b * c)).acos().to_degrees();
        let at_q3 = ((a * a + c * c - b * b) / (2.0 * a * c)).acos().to_degrees();
        let at_q1 = 180.0 - at_q2 - at_q3;

        Ok(TriangleAngles {
            at_q1,
            at_q2,
            at_q3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equilateral_angles() {
        let angles = TriangleSides::new(1.0, 1.0, 1.0).solve_angles().unwrap();

        assert_relative_eq!(angles.at_q1, 60.0, epsilon = 1e-12);
        assert_relative_eq!(angles.at_q2, 60.0, epsilon = 1e-12);
        assert_relative_eq!(angles.at_q3, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_right_triangle_angles() {
        // 3-4-5: the right angle sits at q1, opposite the hypotenuse c.
        let angles = TriangleSides::new(3.0, 4.0, 5.0).solve_angles().unwrap();

        assert_relative_eq!(angles.at_q1, 90.0, epsilon = 1e-9);
        assert_relative_eq!(angles.at_q2, 36.86989764584402, epsilon = 1e-9);
        assert_relative_eq!(angles.at_q3, 53.13010235415598, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_sum_is_exactly_180() {
        let cases = [
            (1.0, 1.0, 1.0),
            (3.0, 4.0, 5.0),
            (2.0, 2.0, 3.0),
            (7.3, 9.1, 11.6),
            (0.001, 0.001, 0.0015),
        ];

        for (a, b, c) in cases {
            let angles = TriangleSides::new(a, b, c).solve_angles().unwrap();
            assert_relative_eq!(angles.sum(), 180.0, epsilon = 1e-10);
            assert_relative_eq!(angles.rounded(2).sum(), 180.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_impossible_sides_are_rejected() {
        let err = TriangleSides::new(1.0, 1.0, 5.0).solve_angles().unwrap_err();
        assert!(matches!(
            err,
            TriqError::TriangleInvalid { a, b, c } if a == 1.0 && b == 1.0 && c == 5.0
        ));
    }

    #[test]
    fn test_degenerate_boundary_is_rejected() {
        // 2 + 2 = 4: collinear points, strict inequality fails.
        assert!(TriangleSides::new(2.0, 2.0, 4.0).solve_angles().is_err());
    }

    #[test]
    fn test_non_positive_sides_are_rejected() {
        assert!(TriangleSides::new(0.0, 3.0, 3.0).solve_angles().is_err());
        assert!(TriangleSides::new(-1.0, 3.0, 3.0).solve_angles().is_err());
    }

    #[test]
    fn test_rounded_display_copy() {
        let angles = TriangleSides::new(3.0, 4.0, 5.0).solve_angles().unwrap();
        let display = angles.rounded(2);

        assert_eq!(display.at_q2, 36.87);
        assert_eq!(display.at_q3, 53.13);
        assert_relative_eq!(display.sum(), 180.0, epsilon = 1e-9);
    }
}
