//! Trigon demo: prints an equilateral and an ASA-defined triangle.
//!
//! ```text
//! cargo run                      # report on stdout
//! RUST_LOG=trigon=debug cargo run  # with construction logs on stderr
//! ```

use std::io;
use std::process::ExitCode;

use trigon::{run_demo, ConsoleSink, TrigonError};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for trigon.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trigon=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("trigon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut sink = ConsoleSink::new(io::stdout().lock());
    let result = sink
        .banner()
        .map_err(TrigonError::from)
        .and_then(|()| run_demo(&mut sink));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(TrigonError::Geometry(err)) => {
            println!("error: {err}");
            ExitCode::FAILURE
        }
        Err(err @ TrigonError::Report(_)) => {
            tracing::error!(%err, "demo aborted");
            ExitCode::FAILURE
        }
    }
}
