use tracing::debug;

use crate::error::GeometryError;
use crate::math::{solve_side, STRAIGHT_ANGLE};

use super::validate::validate;
use super::{Characteristics, Shape};

/// A triangle defined by one side and its two adjacent angles (ASA).
///
/// Side `a` lies between angles `A` and `B`, so it is opposite the derived
/// angle `C`. The remaining sides come from the law of sines:
///
/// `b = a * sin(B) / sin(C)`, `c = a * sin(A) / sin(C)`.
///
/// Neither `C` nor the derived sides are stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General {
    side_a: f64,
    angle_a: f64,
    angle_b: f64,
}

impl General {
    /// Creates a new triangle from side `a` and its adjacent angles in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the side is not positive, an angle is outside
    /// `(0°, 180°)`, the angles sum to 180° or more, or the third angle is
    /// degenerate.
    pub fn new(side_a: f64, angle_a: f64, angle_b: f64) -> Result<Self, GeometryError> {
        let angle_c = validate(side_a, angle_a, angle_b)?;
        debug!(side_a, angle_a, angle_b, angle_c, "general triangle constructed");
        Ok(Self {
            side_a,
            angle_a,
            angle_b,
        })
    }

    #[must_use]
    pub fn side_a(&self) -> f64 {
        self.side_a
    }

    #[must_use]
    pub fn angle_a(&self) -> f64 {
        self.angle_a
    }

    #[must_use]
    pub fn angle_b(&self) -> f64 {
        self.angle_b
    }

    /// Returns the derived third angle in degrees.
    #[must_use]
    pub fn angle_c(&self) -> f64 {
        STRAIGHT_ANGLE - self.angle_a - self.angle_b
    }

    /// Side opposite angle `B`.
    #[must_use]
    pub fn side_b(&self) -> f64 {
        solve_side(self.side_a, self.angle_c(), self.angle_b)
    }

    /// Side opposite angle `A`.
    #[must_use]
    pub fn side_c(&self) -> f64 {
        solve_side(self.side_a, self.angle_c(), self.angle_a)
    }
}

impl Shape for General {
    fn perimeter(&self) -> f64 {
        self.side_a + self.side_b() + self.side_c()
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics {
            sides: [self.side_a, self.side_b(), self.side_c()],
            angles: [self.angle_a, self.angle_b, self.angle_c()],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn side_six_angles_fifty_sixty() {
        let t = General::new(6.0, 50.0, 60.0).unwrap();
        assert_abs_diff_eq!(t.angle_c(), 70.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.side_b(), 5.529_629_910_641_258, epsilon = 1e-9);
        assert_abs_diff_eq!(t.side_c(), 4.891_244_814_575_428, epsilon = 1e-9);
        assert_abs_diff_eq!(t.perimeter(), 16.420_874_725_216_684, epsilon = 1e-9);
    }

    #[test]
    fn characteristics_order() {
        let t = General::new(6.0, 50.0, 60.0).unwrap();
        let c = t.characteristics();
        assert_relative_eq!(c.sides[0], 6.0);
        assert_relative_eq!(c.sides[1], t.side_b());
        assert_relative_eq!(c.sides[2], t.side_c());
        assert_relative_eq!(c.angles[0], 50.0);
        assert_relative_eq!(c.angles[1], 60.0);
        assert_relative_eq!(c.angles[2], t.angle_c());
    }

    #[test]
    fn sixty_sixty_is_equilateral() {
        let t = General::new(3.0, 60.0, 60.0).unwrap();
        assert_relative_eq!(t.side_b(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(t.side_c(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(t.perimeter(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn obtuse_third_angle() {
        let t = General::new(1.0, 20.0, 30.0).unwrap();
        assert_relative_eq!(t.angle_c(), 130.0, epsilon = 1e-12);
        // The side opposite the largest angle is the longest.
        assert!(t.side_a() > t.side_b());
        assert!(t.side_b() > t.side_c());
    }

    #[test]
    fn angle_sum_over_straight() {
        assert!(General::new(6.0, 170.0, 20.0).is_err());
    }

    #[test]
    fn angle_sum_exactly_straight() {
        assert!(General::new(6.0, 90.0, 90.0).is_err());
    }

    #[test]
    fn negative_side() {
        assert!(General::new(-1.0, 50.0, 60.0).is_err());
    }

    #[test]
    fn angle_out_of_range() {
        assert!(General::new(1.0, 0.0, 60.0).is_err());
        assert!(General::new(1.0, 180.0, 60.0).is_err());
        assert!(General::new(1.0, 60.0, -1.0).is_err());
    }

    #[test]
    fn nearly_collinear_is_rejected() {
        assert!(General::new(1.0, 90.0, 90.0 - 1e-12).is_err());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let t = General::new(6.0, 50.0, 60.0).unwrap();
        assert_eq!(t.perimeter().to_bits(), t.perimeter().to_bits());
        assert_eq!(t.characteristics(), t.characteristics());
    }
}
