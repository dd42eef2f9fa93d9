//! Parameter validation shared by every triangle variant.
//!
//! Each check returns [`GeometryError::InvalidGeometry`] on failure. NaN inputs
//! fail every comparison and are rejected as well.

use tracing::debug;

use crate::error::GeometryError;
use crate::math::{DEGENERATE_EPSILON, STRAIGHT_ANGLE};

fn invalid(message: String) -> GeometryError {
    debug!(%message, "triangle parameters rejected");
    GeometryError::InvalidGeometry(message)
}

/// Checks that a side length is strictly positive.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if `value <= 0` or is NaN.
pub fn validate_side(value: f64) -> Result<f64, GeometryError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(format!("side length must be > 0 (got {value})")))
    }
}

/// Checks that an angle in degrees lies strictly within `(0, 180)`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if the angle is out of range or NaN.
pub fn validate_angle(value: f64) -> Result<f64, GeometryError> {
    if value > 0.0 && value < STRAIGHT_ANGLE {
        Ok(value)
    } else {
        Err(invalid(format!("angle must be within (0°, 180°) (got {value})")))
    }
}

/// Derives the third angle from the other two: `180 - angle_a - angle_b`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if the derived angle is not
/// within `(0, 180)`.
pub fn derive_third_angle(angle_a: f64, angle_b: f64) -> Result<f64, GeometryError> {
    let angle_c = STRAIGHT_ANGLE - angle_a - angle_b;
    if angle_c <= 0.0 {
        return Err(invalid(format!(
            "sum of two angles must be < 180° (got {angle_a} + {angle_b})"
        )));
    }
    // Unreachable after `validate_angle` on both inputs.
    if angle_c >= STRAIGHT_ANGLE {
        return Err(invalid(format!(
            "sum of two angles must be > 0° (got {angle_a} + {angle_b})"
        )));
    }
    Ok(angle_c)
}

/// Rejects an angle whose sine vanishes, which would collapse the triangle.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if `|sin(angle_c)| < 1e-9`.
pub fn validate_non_degenerate(angle_c: f64) -> Result<f64, GeometryError> {
    if angle_c.to_radians().sin().abs() < DEGENERATE_EPSILON {
        Err(invalid(format!(
            "angles do not form a triangle (third angle {angle_c}°)"
        )))
    } else {
        Ok(angle_c)
    }
}

/// Runs the full pipeline for one side and its two adjacent angles, returning
/// the derived third angle.
///
/// # Errors
///
/// Returns the first [`GeometryError::InvalidGeometry`] raised by the
/// individual checks.
pub fn validate(side: f64, angle_a: f64, angle_b: f64) -> Result<f64, GeometryError> {
    validate_side(side)?;
    validate_angle(angle_a)?;
    validate_angle(angle_b)?;
    let angle_c = derive_third_angle(angle_a, angle_b)?;
    validate_non_degenerate(angle_c)
}
