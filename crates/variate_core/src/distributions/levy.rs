//! Lévy distribution.

use super::InverseTransform;
use crate::error::{ensure_finite, ensure_positive, Result};
use crate::math::erf_inv;
use crate::rng::{draw_uniform, UniformSource};

/// Lévy transform `μ + κ / (2·erf_inv(1 − u)²)`.
///
/// `u = 0` maps to `μ` exactly; `u → 1` diverges.
///
/// # Examples
/// ```
/// use variate_core::distributions::levy_transform;
///
/// assert_eq!(levy_transform(0.0, 1.5, 2.0), 1.5);
/// ```
#[inline]
pub fn levy_transform(u: f64, mu: f64, kappa: f64) -> f64 {
    let z = erf_inv(1.0 - u);
    mu + kappa / (2.0 * z * z)
}

/// Lévy distribution parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Levy {
    /// Location.
    pub mu: f64,
    /// Scale κ, positive.
    pub kappa: f64,
}

impl Levy {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Fails if `mu` is not finite or `kappa` is not positive.
    pub fn new(mu: f64, kappa: f64) -> Result<Self> {
        let params = Self { mu, kappa };
        params.validate()?;
        Ok(params)
    }
}

impl InverseTransform for Levy {
    fn name(&self) -> &'static str {
        "levy"
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("mu", self.mu)?;
        ensure_positive("kappa", self.kappa)
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        levy_transform(draw_uniform(source), self.mu, self.kappa)
    }
}
