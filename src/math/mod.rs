pub mod law_of_sines;

pub use law_of_sines::solve_side;

/// Smallest `|sin(angle)|` accepted before a triangle is considered collapsed
/// onto a line.
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Tolerance for checking that the three angles of a triangle add up to 180°.
pub const ANGLE_SUM_TOLERANCE: f64 = 1e-9;

/// Sum of interior angles of a triangle, in degrees.
pub const STRAIGHT_ANGLE: f64 = 180.0;
