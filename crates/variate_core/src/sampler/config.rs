//! Sampler configuration.
//!
//! This module provides [`SamplerConfig`] and its builder.

use crate::error::{Result, SamplerError};
use crate::rng::SeedPolicy;

/// Default cap on consecutive non-finite draws before a call fails.
pub const DEFAULT_MAX_CONSECUTIVE_REJECTIONS: usize = 10_000;

/// Sampler configuration.
///
/// Immutable; use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::SeedPolicy;
/// use variate_core::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .max_consecutive_rejections(500)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed_policy(), SeedPolicy::Fixed(42));
/// assert_eq!(config.max_consecutive_rejections(), 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// How the uniform source is seeded.
    seed_policy: SeedPolicy,
    /// Retry cap for the rejection loop.
    max_consecutive_rejections: usize,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the seeding policy.
    #[inline]
    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Returns the retry cap.
    #[inline]
    pub fn max_consecutive_rejections(&self) -> usize {
        self.max_consecutive_rejections
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the retry cap is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_consecutive_rejections == 0 {
            return Err(SamplerError::invalid(
                "max_consecutive_rejections",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            max_consecutive_rejections: DEFAULT_MAX_CONSECUTIVE_REJECTIONS,
        }
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    seed_policy: Option<SeedPolicy>,
    max_consecutive_rejections: Option<usize>,
}

impl SamplerConfigBuilder {
    /// Sets the seeding policy.
    #[inline]
    pub fn seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = Some(seed_policy);
        self
    }

    /// Shorthand for `seed_policy(SeedPolicy::Fixed(seed))`.
    #[inline]
    pub fn seed(self, seed: u64) -> Self {
        self.seed_policy(SeedPolicy::Fixed(seed))
    }

    /// Sets the cap on consecutive non-finite draws.
    #[inline]
    pub fn max_consecutive_rejections(mut self, cap: usize) -> Self {
        self.max_consecutive_rejections = Some(cap);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the retry cap is zero.
    pub fn build(self) -> Result<SamplerConfig> {
        let defaults = SamplerConfig::default();
        let config = SamplerConfig {
            seed_policy: self.seed_policy.unwrap_or(defaults.seed_policy),
            max_consecutive_rejections: self
                .max_consecutive_rejections
                .unwrap_or(defaults.max_consecutive_rejections),
        };
        config.validate()?;
        Ok(config)
    }
}
