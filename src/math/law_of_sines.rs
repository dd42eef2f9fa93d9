/// Law of sines side solving.
///
/// `known_side / sin(known_angle) == target_side / sin(target_angle)`, so the
/// side opposite `target_angle` is
/// `known_side * sin(target_angle) / sin(known_angle)`.
///
/// Angles are given in degrees and converted to radians before evaluation.
/// The caller guarantees `sin(known_angle)` is not close to zero; triangle
/// construction rejects such inputs.
#[must_use]
pub fn solve_side(known_side: f64, known_angle: f64, target_angle: f64) -> f64 {
    known_side * target_angle.to_radians().sin() / known_angle.to_radians().sin()
}
