use tracing::debug;

use crate::error::GeometryError;

use super::validate::validate;
use super::{Characteristics, Shape};

/// Interior angle of an equilateral triangle, in degrees.
const EQUILATERAL_ANGLE: f64 = 60.0;

/// A triangle with three equal sides and three 60° angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equilateral {
    side: f64,
}

impl Equilateral {
    /// Creates a new equilateral triangle.
    ///
    /// Goes through the same validation as [`super::General`] with both known
    /// angles fixed at 60°.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not positive.
    pub fn new(side: f64) -> Result<Self, GeometryError> {
        validate(side, EQUILATERAL_ANGLE, EQUILATERAL_ANGLE)?;
        debug!(side, "equilateral triangle constructed");
        Ok(Self { side })
    }

    /// Returns the common side length.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Equilateral {
    fn perimeter(&self) -> f64 {
        3.0 * self.side
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics {
            sides: [self.side; 3],
            angles: [EQUILATERAL_ANGLE; 3],
        }
    }
}
