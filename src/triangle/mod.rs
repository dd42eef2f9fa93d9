mod equilateral;
mod general;
pub mod validate;

pub use equilateral::Equilateral;
pub use general::General;

use crate::error::GeometryError;
use crate::report::Report;

/// Which construction a triangle was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    Equilateral,
    General,
}

/// Side lengths and interior angles (degrees) of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Characteristics {
    /// Sides `[a, b, c]`.
    pub sides: [f64; 3],
    /// Angles `[A, B, C]` in degrees.
    pub angles: [f64; 3],
}

/// Queries shared by every triangle.
pub trait Shape {
    /// Sum of the three side lengths.
    fn perimeter(&self) -> f64;

    /// Side lengths and angles of the triangle.
    fn characteristics(&self) -> Characteristics;
}

/// A validated triangle.
///
/// Instances only come from the validating constructors, so every live
/// `Triangle` has positive sides, angles within `(0°, 180°)` summing to 180°,
/// and a non-vanishing third angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Triangle {
    Equilateral(Equilateral),
    General(General),
}

impl Triangle {
    /// Creates an equilateral triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not positive.
    pub fn equilateral(side: f64) -> Result<Self, GeometryError> {
        Equilateral::new(side).map(Self::Equilateral)
    }

    /// Creates a triangle from one side and its two adjacent angles (degrees).
    ///
    /// # Errors
    ///
    /// Returns an error if the side is not positive, an angle is outside
    /// `(0°, 180°)`, or the angles cannot close a triangle.
    pub fn general(side_a: f64, angle_a: f64, angle_b: f64) -> Result<Self, GeometryError> {
        General::new(side_a, angle_a, angle_b).map(Self::General)
    }

    #[must_use]
    pub fn kind(&self) -> TriangleKind {
        match self {
            Self::Equilateral(_) => TriangleKind::Equilateral,
            Self::General(_) => TriangleKind::General,
        }
    }

    /// Bundles kind, characteristics and perimeter for a reporting sink.
    #[must_use]
    pub fn report(&self) -> Report {
        let Characteristics { sides, angles } = self.characteristics();
        Report {
            kind: self.kind(),
            sides,
            angles,
            perimeter: self.perimeter(),
        }
    }
}

impl Shape for Triangle {
    fn perimeter(&self) -> f64 {
        match self {
            Self::Equilateral(t) => t.perimeter(),
            Self::General(t) => t.perimeter(),
        }
    }

    fn characteristics(&self) -> Characteristics {
        match self {
            Self::Equilateral(t) => t.characteristics(),
            Self::General(t) => t.characteristics(),
        }
    }
}

impl From<Equilateral> for Triangle {
    fn from(t: Equilateral) -> Self {
        Self::Equilateral(t)
    }
}

impl From<General> for Triangle {
    fn from(t: General) -> Self {
        Self::General(t)
    }
}
