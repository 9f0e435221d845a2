//! Gaussian (normal) distribution via the inverse error function.

use std::f64::consts::SQRT_2;

use super::InverseTransform;
use crate::error::{ensure_finite, ensure_non_negative, Result};
use crate::math::erf_inv;
use crate::rng::{draw_uniform, UniformSource};

/// Gaussian transform `erf_inv(2u − 1)·√2·σ + μ`.
///
/// Returns `-∞` at `u = 0`.
///
/// # Examples
/// ```
/// use variate_core::distributions::gaussian_transform;
///
/// assert_eq!(gaussian_transform(0.5, 3.0, 2.0), 3.0);
/// assert!(gaussian_transform(0.0, 0.0, 1.0).is_infinite());
/// ```
#[inline]
pub fn gaussian_transform(u: f64, mu: f64, sigma: f64) -> f64 {
    erf_inv(2.0 * u - 1.0) * SQRT_2 * sigma + mu
}

/// Gaussian distribution parameters.
///
/// Parameterised by variance; the transform uses `σ = √variance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    /// Mean.
    pub mu: f64,
    /// Variance (σ²), non-negative.
    pub variance: f64,
}

impl Gaussian {
    /// Creates validated Gaussian parameters.
    ///
    /// # Errors
    ///
    /// Fails if `mu` is not finite or `variance` is negative or not finite.
    pub fn new(mu: f64, variance: f64) -> Result<Self> {
        let params = Self { mu, variance };
        params.validate()?;
        Ok(params)
    }

    /// Standard deviation σ.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl InverseTransform for Gaussian {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("mu", self.mu)?;
        ensure_non_negative("variance", self.variance)
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        gaussian_transform(draw_uniform(source), self.mu, self.sigma())
    }
}
