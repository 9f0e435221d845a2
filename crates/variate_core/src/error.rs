//! Error types for the variate generators.
//!
//! Every generator either returns the full requested sequence or fails with a
//! [`SamplerError`]; partial results are never handed back.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplerError>;

/// Sampling error.
///
/// # Examples
///
/// ```
/// use variate_core::SamplerError;
///
/// let err = SamplerError::invalid("lambda", "must be positive, got -1");
/// assert_eq!(
///     err.to_string(),
///     "Invalid parameter 'lambda': must be positive, got -1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// A distribution, calibration or configuration parameter is out of its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// The rejection loop hit its retry cap before collecting every draw.
    #[error(
        "Sampling exhausted for {distribution}: produced {produced} of {requested} \
         after {rejections} consecutive non-finite draws"
    )]
    SamplingExhausted {
        /// Name of the distribution being sampled.
        distribution: &'static str,
        /// Number of samples requested.
        requested: usize,
        /// Number of finite samples collected before giving up.
        produced: usize,
        /// Consecutive rejections that triggered the failure.
        rejections: usize,
    },
}

impl SamplerError {
    /// Shorthand for [`SamplerError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Fails unless `value` is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SamplerError::invalid(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SamplerError::invalid(
            name,
            format!("must be positive, got {}", value),
        ))
    }
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SamplerError::invalid(
            name,
            format!("must be non-negative, got {}", value),
        ))
    }
}

/// Fails unless both bounds are finite and `a <= b`.
pub(crate) fn ensure_bounds(a: f64, b: f64) -> Result<()> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    if a <= b {
        Ok(())
    } else {
        Err(SamplerError::invalid(
            "a",
            format!("lower bound {} exceeds upper bound {}", a, b),
        ))
    }
}
