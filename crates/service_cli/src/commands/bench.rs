//! Bench command implementation
//!
//! Times the inverse-transform Gaussian against the Ziggurat baseline.

use std::io::Write;

use tracing::info;
use variate_core::diagnostics::benchmark_gaussian_throughput_with;

use crate::output::Output;
use crate::{CliError, Result};

/// Run the bench command
pub fn run(draws: usize, seed: u64, output: &Output) -> Result<()> {
    if draws == 0 {
        return Err(CliError::InvalidArgument(
            "draws must be at least 1".to_string(),
        ));
    }

    info!(draws, seed, "Timing Gaussian throughput");
    let report = benchmark_gaussian_throughput_with(draws, seed);
    info!(
        seconds = report.inverse_transform_secs,
        slowdown = report.slowdown(),
        "Benchmark complete"
    );

    output.emit(&report, |w: &mut dyn Write| {
        writeln!(w, "draws:              {}", report.draws)?;
        writeln!(w, "inverse transform:  {:.6} s", report.inverse_transform_secs)?;
        writeln!(w, "ziggurat:           {:.6} s", report.ziggurat_secs)?;
        writeln!(w, "draws per second:   {:.0}", report.draws_per_sec())?;
        writeln!(w, "slowdown:           {:.2}x", report.slowdown())
    })
}
