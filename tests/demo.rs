#![allow(clippy::unwrap_used)]

use std::io;

use trigon::{run_demo, ConsoleSink, Report, ReportSink, Triangle, TrigonError};

#[test]
fn demo_output() {
    let mut sink = ConsoleSink::new(Vec::new());
    sink.banner().unwrap();
    run_demo(&mut sink).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    let expected = "\
=== Triangle demonstration ===

Equilateral triangle:
  Sides: 5, 5, 5
  Angles: 60°, 60°, 60°
  Perimeter: 15.00

General triangle:
  Angles: 50.00°, 60.00°, 70.00°
  Sides: a=6.00, b=5.53, c=4.89
  Perimeter: 16.42

";
    assert_eq!(text, expected);
}

#[derive(Default)]
struct Collect(Vec<Report>);

impl ReportSink for Collect {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        self.0.push(*report);
        Ok(())
    }
}

#[test]
fn demo_hands_reports_in_order() {
    let mut sink = Collect::default();
    run_demo(&mut sink).unwrap();
    assert_eq!(sink.0.len(), 2);
    assert_eq!(sink.0[0], Triangle::equilateral(5.0).unwrap().report());
    assert_eq!(sink.0[1], Triangle::general(6.0, 50.0, 60.0).unwrap().report());
}

struct Broken;

impl ReportSink for Broken {
    fn emit(&mut self, _report: &Report) -> io::Result<()> {
        Err(io::Error::other("closed"))
    }
}

#[test]
fn sink_failure_surfaces_as_report_error() {
    let err = run_demo(&mut Broken).unwrap_err();
    assert!(matches!(err, TrigonError::Report(_)));
}

#[test]
fn geometry_error_message_is_user_facing() {
    let err: TrigonError = Triangle::general(6.0, 170.0, 20.0).unwrap_err().into();
    assert!(matches!(err, TrigonError::Geometry(_)));
    assert_eq!(
        err.to_string(),
        "invalid geometry: sum of two angles must be < 180° (got 170 + 20)"
    );
}
