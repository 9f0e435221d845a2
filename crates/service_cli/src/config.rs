//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`VARIATE_SEED`, `VARIATE_MAX_REJECTIONS`,
//!    `VARIATE_LOG_LEVEL`)
//! 3. Config file
//! 4. Default values
//!
//! ```toml
//! seed = 4357
//! max_consecutive_rejections = 10000
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use variate_core::rng::SeedPolicy;
use variate_core::sampler::DEFAULT_MAX_CONSECUTIVE_REJECTIONS;
use variate_core::SamplerConfig;

/// Environment variable holding a fixed seed.
pub const ENV_SEED: &str = "VARIATE_SEED";
/// Environment variable holding the consecutive-rejection cap.
pub const ENV_MAX_REJECTIONS: &str = "VARIATE_MAX_REJECTIONS";
/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "VARIATE_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, ignoring case
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
    }

    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Fixed seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
    /// Reseed from the wall clock before every draw (ignored when `seed` is set)
    pub clock_per_draw: bool,
    /// Consecutive non-finite draws tolerated before a run fails
    pub max_consecutive_rejections: usize,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            clock_per_draw: false,
            max_consecutive_rejections: DEFAULT_MAX_CONSECUTIVE_REJECTIONS,
            log_level: LogLevel::Info,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `lookup`, keyed by environment variable name
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &seed)?);
        }
        if let Some(cap) = lookup(ENV_MAX_REJECTIONS) {
            self.max_consecutive_rejections = parse_env(ENV_MAX_REJECTIONS, &cap)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::parse(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_consecutive_rejections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_consecutive_rejections",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        Ok(())
    }

    /// The seeding policy these settings select
    pub fn seed_policy(&self) -> SeedPolicy {
        match (self.seed, self.clock_per_draw) {
            (Some(seed), _) => SeedPolicy::Fixed(seed),
            (None, true) => SeedPolicy::ClockPerDraw,
            (None, false) => SeedPolicy::Entropy,
        }
    }

    /// Build the sampler configuration
    pub fn sampler_config(&self) -> variate_core::Result<SamplerConfig> {
        SamplerConfig::builder()
            .seed_policy(self.seed_policy())
            .max_consecutive_rejections(self.max_consecutive_rejections)
            .build()
    }
}

fn parse_env<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_overrides(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
