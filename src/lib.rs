pub mod error;
pub mod math;
pub mod report;
pub mod triangle;

pub use error::{GeometryError, Result, TrigonError};
pub use report::{ConsoleSink, Report, ReportSink};
pub use triangle::{Characteristics, Equilateral, General, Shape, Triangle, TriangleKind};

/// Builds the two demonstration triangles and emits their reports to `sink`.
///
/// # Errors
///
/// Returns [`TrigonError::Geometry`] if a triangle fails validation and
/// [`TrigonError::Report`] if the sink cannot write.
pub fn run_demo(sink: &mut impl ReportSink) -> Result<()> {
    let equilateral = Triangle::equilateral(5.0)?;
    sink.emit(&equilateral.report())?;

    let general = Triangle::general(6.0, 50.0, 60.0)?;
    sink.emit(&general.report())?;
    Ok(())
}
