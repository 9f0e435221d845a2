//! Variate CLI - Command Line Access to the Random Variate Generators
//!
//! # Commands
//!
//! - `variate gaussian | exponential | expo-gaussian | cauchy | levy | arcsine`
//!   - draw variates from one distribution
//! - `variate skewed-arcsine --shape M` - skewed arcsine with an explicit exponent
//! - `variate skewed-by-asymmetry --plr P` - skewed arcsine calibrated to an asymmetry
//! - `variate measure-asymmetry` / `variate check-calibration` - realised `A_LR`
//! - `variate calibrate --plr P` - print the shape exponent for an asymmetry
//! - `variate bench` - inverse-transform vs Ziggurat Gaussian throughput
//!
//! Results go to standard output (or `--output FILE`); logs go to standard
//! error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use variate_core::diagnostics::{BENCHMARK_DRAWS, BENCHMARK_SEED};
use variate_core::Sampler;

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::sample::{SampleRequest, Shape};
use config::{build_config, CliArgs, CliConfig, LogLevel};
use output::{Output, OutputFormat};

/// Random variate generators with skewed-arcsine asymmetry calibration
#[derive(Parser, Debug)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed seed for the uniform source
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level (overrides config file and environment)
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Write results to FILE instead of standard output
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed,
            log_level: cli.log_level,
            verbose: cli.verbose,
        }
    }
}

/// Number of variates to draw
#[derive(Args, Debug, Clone, Copy)]
struct Count {
    /// Number of variates
    #[arg(short, long, default_value_t = 1_000)]
    num: usize,
}

/// Interval `[a, b]` of the bounded families
#[derive(Args, Debug, Clone, Copy)]
struct Interval {
    /// Lower bound a
    #[arg(short = 'a', long = "lower", default_value_t = 0.0, allow_negative_numbers = true)]
    a: f64,

    /// Upper bound b
    #[arg(short = 'b', long = "upper", default_value_t = 1.0, allow_negative_numbers = true)]
    b: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Gaussian variates
    Gaussian {
        /// Mean
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        /// Variance (not standard deviation)
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        variance: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Exponential variates shifted by mu
    Exponential {
        /// Shift
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        /// Rate
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        lambda: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Exponentially modified Gaussian variates
    ExpoGaussian {
        /// Gaussian mean
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        /// Exponential rate
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        lambda: f64,
        /// Gaussian variance
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        variance: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Cauchy variates
    Cauchy {
        /// Location (scaled by gamma)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        /// Scale
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        gamma: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Lévy variates
    Levy {
        /// Location
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mu: f64,
        /// Scale
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        kappa: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Arcsine variates on [a, b]
    Arcsine {
        #[command(flatten)]
        interval: Interval,
        #[command(flatten)]
        count: Count,
    },

    /// Skewed-arcsine variates with shape exponent M
    SkewedArcsine {
        #[command(flatten)]
        interval: Interval,
        /// Shape exponent M (1 gives the plain arcsine)
        #[arg(short, long = "shape", allow_negative_numbers = true)]
        m: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Skewed-arcsine variates calibrated to a target asymmetry
    SkewedByAsymmetry {
        #[command(flatten)]
        interval: Interval,
        /// Target left-right asymmetry in (-1, 1)
        #[arg(short, long, allow_negative_numbers = true)]
        plr: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Realised left-right asymmetry for an explicit shape exponent
    MeasureAsymmetry {
        #[command(flatten)]
        interval: Interval,
        /// Shape exponent M
        #[arg(short, long = "shape", allow_negative_numbers = true)]
        m: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Realised left-right asymmetry for a calibrated target
    CheckCalibration {
        #[command(flatten)]
        interval: Interval,
        /// Target left-right asymmetry in (-1, 1)
        #[arg(short, long, allow_negative_numbers = true)]
        plr: f64,
        #[command(flatten)]
        count: Count,
    },

    /// Print the shape exponent M for a target asymmetry
    Calibrate {
        /// Target left-right asymmetry in (-1, 1)
        #[arg(short, long, allow_negative_numbers = true)]
        plr: f64,
    },

    /// Time inverse-transform Gaussian draws against the Ziggurat
    Bench {
        /// Number of draws per method
        #[arg(short = 'n', long, default_value_t = BENCHMARK_DRAWS)]
        draws: usize,
        /// Seed of the timed source
        #[arg(long = "bench-seed", default_value_t = BENCHMARK_SEED)]
        bench_seed: u64,
    },
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli, config: &CliConfig) -> Result<()> {
    let output = Output::new(cli.format, cli.output);
    let mut sampler = Sampler::new(config.sampler_config()?);
    info!(
        seed = sampler.source().seed(),
        policy = ?config.seed_policy(),
        "Sampler ready"
    );

    match cli.command {
        Commands::Gaussian { mu, variance, count } => commands::sample::run(
            &mut sampler,
            SampleRequest::Gaussian { mu, variance },
            count.num,
            &output,
        ),
        Commands::Exponential { mu, lambda, count } => commands::sample::run(
            &mut sampler,
            SampleRequest::Exponential { mu, lambda },
            count.num,
            &output,
        ),
        Commands::ExpoGaussian {
            mu,
            lambda,
            variance,
            count,
        } => commands::sample::run(
            &mut sampler,
            SampleRequest::ExpoGaussian {
                mu,
                lambda,
                variance,
            },
            count.num,
            &output,
        ),
        Commands::Cauchy { mu, gamma, count } => commands::sample::run(
            &mut sampler,
            SampleRequest::Cauchy { mu, gamma },
            count.num,
            &output,
        ),
        Commands::Levy { mu, kappa, count } => commands::sample::run(
            &mut sampler,
            SampleRequest::Levy { mu, kappa },
            count.num,
            &output,
        ),
        Commands::Arcsine { interval, count } => commands::sample::run(
            &mut sampler,
            SampleRequest::Arcsine {
                a: interval.a,
                b: interval.b,
            },
            count.num,
            &output,
        ),
        Commands::SkewedArcsine { interval, m, count } => commands::sample::run_skewed(
            &mut sampler,
            interval.a,
            interval.b,
            Shape::Exponent(m),
            count.num,
            &output,
        ),
        Commands::SkewedByAsymmetry {
            interval,
            plr,
            count,
        } => commands::sample::run_skewed(
            &mut sampler,
            interval.a,
            interval.b,
            Shape::Asymmetry(plr),
            count.num,
            &output,
        ),
        Commands::MeasureAsymmetry { interval, m, count } => commands::calibrate::run_measure(
            &mut sampler,
            interval.a,
            interval.b,
            m,
            count.num,
            &output,
        ),
        Commands::CheckCalibration {
            interval,
            plr,
            count,
        } => commands::calibrate::run_check(
            &mut sampler,
            interval.a,
            interval.b,
            plr,
            count.num,
            &output,
        ),
        Commands::Calibrate { plr } => commands::calibrate::run(&sampler, plr, &output),
        Commands::Bench { draws, bench_seed } => commands::bench::run(draws, bench_seed, &output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli));

    let level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default();
    init_tracing(level);

    let result = config
        .map_err(CliError::from)
        .and_then(|config| run(cli, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
