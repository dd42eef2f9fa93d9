//! Reporting sink for computed triangle data.
//!
//! The core hands over a finished [`Report`]; sinks only format it.

use std::io::{self, Write};

use crate::triangle::TriangleKind;

/// Already-computed values of one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub kind: TriangleKind,
    /// Sides `[a, b, c]`.
    pub sides: [f64; 3],
    /// Angles `[A, B, C]` in degrees.
    pub angles: [f64; 3],
    pub perimeter: f64,
}

/// Destination for triangle reports.
pub trait ReportSink {
    /// Emits one report.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    fn emit(&mut self, report: &Report) -> io::Result<()>;
}

/// Writes reports as indented, human-readable text.
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the demo heading followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying output fails.
    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "=== Triangle demonstration ===")?;
        writeln!(self.out)
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        let [a, b, c] = report.sides;
        let [angle_a, angle_b, angle_c] = report.angles;
        match report.kind {
            TriangleKind::Equilateral => {
                writeln!(self.out, "Equilateral triangle:")?;
                writeln!(self.out, "  Sides: {a}, {b}, {c}")?;
                writeln!(self.out, "  Angles: {angle_a}°, {angle_b}°, {angle_c}°")?;
            }
            TriangleKind::General => {
                writeln!(self.out, "General triangle:")?;
                writeln!(
                    self.out,
                    "  Angles: {angle_a:.2}°, {angle_b:.2}°, {angle_c:.2}°"
                )?;
                writeln!(self.out, "  Sides: a={a:.2}, b={b:.2}, c={c:.2}")?;
            }
        }
        writeln!(self.out, "  Perimeter: {:.2}", report.perimeter)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
