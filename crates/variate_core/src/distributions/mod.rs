//! # Inverse-Transform Distributions
//!
//! Each distribution is a small immutable parameter record plus a pure
//! transform from one (or two) uniform draws to a variate:
//!
//! | Distribution | Transform |
//! |--------------|-----------|
//! | [`Gaussian`] | `erf_inv(2U − 1)·√2·σ + μ` |
//! | [`Exponential`] | `−ln(1 − U)/λ + μ` |
//! | [`ExpoGaussian`] | Gaussian(U) + Exponential(V) − σ/λ |
//! | [`Cauchy`] | `γ·(tan(π(U − ½)) + μ)` |
//! | [`Levy`] | `μ + κ / (2·erf_inv(1 − U)²)` |
//! | [`Arcsine`] | `sin²(πU/2)·(b − a) + a` |
//! | [`SkewedArcsine`] | `sin(πU/2)^(2/M)·(b − a) + a` |
//!
//! The transforms are exposed as free functions (`gaussian_transform`, ...)
//! so pointwise properties can be checked without any randomness. The
//! parameter records implement [`InverseTransform`], which is what the
//! [`SampleLoop`](crate::sampler::SampleLoop) drives.
//!
//! A transform may return a non-finite value at the edges of its input
//! domain (for instance `U = 0` for the Gaussian). The sampling loop
//! discards such draws.

mod arcsine;
mod cauchy;
mod exponential;
mod gaussian;
mod levy;

pub use arcsine::{arcsine_transform, skewed_arcsine_transform, Arcsine, SkewedArcsine};
pub use cauchy::{cauchy_transform, Cauchy};
pub use exponential::{
    expo_gaussian_transform, exponential_transform, ExpoGaussian, Exponential,
};
pub use gaussian::{gaussian_transform, Gaussian};
pub use levy::{levy_transform, Levy};

use crate::error::Result;
use crate::rng::UniformSource;

/// A distribution that can be sampled by transforming uniform draws.
///
/// Dispatch is static; the sampling loop is generic over both the
/// distribution and the uniform source.
pub trait InverseTransform {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidParameter`](crate::SamplerError::InvalidParameter)
    /// naming the offending field.
    fn validate(&self) -> Result<()>;

    /// Draws one candidate variate. The result may be non-finite.
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64;
}

impl<D: InverseTransform + ?Sized> InverseTransform for &D {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        (**self).draw(source)
    }
}
