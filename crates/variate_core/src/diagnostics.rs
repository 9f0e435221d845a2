//! Throughput diagnostics for the inverse-transform Gaussian.
//!
//! Times one million standard-normal draws through
//! [`gaussian_transform`] from a single fixed-seed source (no reseeding),
//! and, for comparison, the same number of Ziggurat draws from
//! `rand_distr::StandardNormal`.

use std::hint::black_box;
use std::time::Instant;

use tracing::info;

use crate::distributions::gaussian_transform;
use crate::rng::{UniformSource, VariateRng};

/// Number of draws timed by [`benchmark_gaussian_throughput`].
pub const BENCHMARK_DRAWS: usize = 1_000_000;

/// Seed used by [`benchmark_gaussian_throughput`].
pub const BENCHMARK_SEED: u64 = 4357;

/// Timing of one throughput run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThroughputReport {
    /// Number of variates drawn by each method.
    pub draws: usize,
    /// Wall-clock seconds for the inverse-transform Gaussian.
    pub inverse_transform_secs: f64,
    /// Wall-clock seconds for the Ziggurat baseline.
    pub ziggurat_secs: f64,
}

impl ThroughputReport {
    /// Inverse-transform draws per second.
    pub fn draws_per_sec(&self) -> f64 {
        if self.inverse_transform_secs > 0.0 {
            self.draws as f64 / self.inverse_transform_secs
        } else {
            f64::INFINITY
        }
    }

    /// How many times slower the inverse transform is than the Ziggurat.
    pub fn slowdown(&self) -> f64 {
        if self.ziggurat_secs > 0.0 {
            self.inverse_transform_secs / self.ziggurat_secs
        } else {
            f64::NAN
        }
    }
}

/// Times `draws` inverse-transform and Ziggurat Gaussian variates.
///
/// # Examples
///
/// ```rust
/// use variate_core::diagnostics::benchmark_gaussian_throughput_with;
///
/// let report = benchmark_gaussian_throughput_with(10_000, 1);
/// assert_eq!(report.draws, 10_000);
/// assert!(report.inverse_transform_secs >= 0.0);
/// ```
pub fn benchmark_gaussian_throughput_with(draws: usize, seed: u64) -> ThroughputReport {
    let mut rng = VariateRng::from_seed(seed);
    let start = Instant::now();
    for _ in 0..draws {
        black_box(gaussian_transform(rng.next_uniform(), 0.0, 1.0));
    }
    let inverse_transform_secs = start.elapsed().as_secs_f64();

    let mut rng = VariateRng::from_seed(seed);
    let start = Instant::now();
    for _ in 0..draws {
        black_box(rng.gen_normal());
    }
    let ziggurat_secs = start.elapsed().as_secs_f64();

    ThroughputReport {
        draws,
        inverse_transform_secs,
        ziggurat_secs,
    }
}

/// Times one million inverse-transform Gaussian variates.
///
/// Returns the elapsed wall-clock seconds and logs them at `info`.
pub fn benchmark_gaussian_throughput() -> f64 {
    let report = benchmark_gaussian_throughput_with(BENCHMARK_DRAWS, BENCHMARK_SEED);
    info!(
        draws = report.draws,
        ziggurat_secs = report.ziggurat_secs,
        "Time to generate 1M Gaussian variates: {:.6} s",
        report.inverse_transform_secs
    );
    report.inverse_transform_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_ratios() {
        let report = ThroughputReport {
            draws: 1_000,
            inverse_transform_secs: 0.5,
            ziggurat_secs: 0.25,
        };
        assert_eq!(report.draws_per_sec(), 2_000.0);
        assert_eq!(report.slowdown(), 2.0);
    }

    #[test]
    fn test_zero_draws() {
        let report = benchmark_gaussian_throughput_with(0, 1);
        assert_eq!(report.draws, 0);
        assert!(report.inverse_transform_secs >= 0.0);
    }
}
