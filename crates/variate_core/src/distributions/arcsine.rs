//! Arcsine and skewed-arcsine distributions on `[a, b]`.
//!
//! The skewed family raises `sin(πU/2)` to the power `2/M` instead of 2.
//! `M = 1` is the plain arcsine; `M < 1` pushes mass towards `a` and
//! `M > 1` towards `b`. The shape exponent is usually derived from a target
//! left-right asymmetry with [`calibration`](crate::calibration).

use std::f64::consts::FRAC_PI_2;

use super::InverseTransform;
use crate::error::{ensure_bounds, ensure_positive, Result};
use crate::rng::{draw_uniform, UniformSource};

/// Arcsine transform `sin²(πu/2)·(b − a) + a`.
///
/// # Examples
/// ```
/// use variate_core::distributions::arcsine_transform;
///
/// assert_eq!(arcsine_transform(0.0, 2.0, 5.0), 2.0);
/// assert!((arcsine_transform(0.5, 0.0, 1.0) - 0.5).abs() < 1e-15);
/// ```
#[inline]
pub fn arcsine_transform(u: f64, a: f64, b: f64) -> f64 {
    let s = (FRAC_PI_2 * u).sin();
    s * s * (b - a) + a
}

/// Skewed-arcsine transform `sin(πu/2)^(2/m)·(b − a) + a`.
///
/// For `m = 1` this is [`arcsine_transform`] exactly.
///
/// # Examples
/// ```
/// use variate_core::distributions::{arcsine_transform, skewed_arcsine_transform};
///
/// let u = 0.37;
/// assert_eq!(
///     skewed_arcsine_transform(u, -1.0, 3.0, 1.0),
///     arcsine_transform(u, -1.0, 3.0),
/// );
/// ```
#[inline]
pub fn skewed_arcsine_transform(u: f64, a: f64, b: f64, m: f64) -> f64 {
    let s = (FRAC_PI_2 * u).sin();
    let y = if m == 1.0 { s * s } else { s.powf(2.0 / m) };
    y * (b - a) + a
}

/// Arcsine distribution on `[a, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arcsine {
    /// Lower bound.
    pub a: f64,
    /// Upper bound.
    pub b: f64,
}

impl Arcsine {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Fails if either bound is not finite or `a > b`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let params = Self { a, b };
        params.validate()?;
        Ok(params)
    }
}

impl InverseTransform for Arcsine {
    fn name(&self) -> &'static str {
        "arcsine"
    }

    fn validate(&self) -> Result<()> {
        ensure_bounds(self.a, self.b)
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        arcsine_transform(draw_uniform(source), self.a, self.b)
    }
}

/// Skewed-arcsine distribution on `[a, b]` with shape exponent `m`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkewedArcsine {
    /// Lower bound.
    pub a: f64,
    /// Upper bound.
    pub b: f64,
    /// Shape exponent M, positive; the transform exponent is `2/M`.
    pub m: f64,
}

impl SkewedArcsine {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Fails if the bounds are invalid or `m` is not positive and finite.
    pub fn new(a: f64, b: f64, m: f64) -> Result<Self> {
        let params = Self { a, b, m };
        params.validate()?;
        Ok(params)
    }
}

impl InverseTransform for SkewedArcsine {
    fn name(&self) -> &'static str {
        "skewed_arcsine"
    }

    fn validate(&self) -> Result<()> {
        ensure_bounds(self.a, self.b)?;
        ensure_positive("m", self.m)
    }

    #[inline]
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        skewed_arcsine_transform(draw_uniform(source), self.a, self.b, self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_arcsine_quantiles() {
        // CDF of the arcsine on [0, 1] is (2/π)·asin(√x)
        let x = arcsine_transform(0.25, 0.0, 1.0);
        let cdf = (2.0 / std::f64::consts::PI) * x.sqrt().asin();
        assert!((cdf - 0.25).abs() < 1e-14);
    }

    #[test]
    fn test_skew_direction() {
        let u = 0.5;
        let plain = arcsine_transform(u, 0.0, 1.0);
        assert!(skewed_arcsine_transform(u, 0.0, 1.0, 0.5) < plain);
        assert!(skewed_arcsine_transform(u, 0.0, 1.0, 2.0) > plain);
    }

    #[test]
    fn test_degenerate_interval() {
        assert_eq!(skewed_arcsine_transform(0.9, 4.0, 4.0, 0.3), 4.0);
        assert!(Arcsine::new(4.0, 4.0).is_ok());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Arcsine::new(1.0, 0.0).is_err());
        assert!(SkewedArcsine::new(0.0, 1.0, 0.0).is_err());
        assert!(SkewedArcsine::new(0.0, 1.0, -0.5).is_err());
        assert!(SkewedArcsine::new(0.0, f64::NAN, 1.0).is_err());
    }

    proptest! {
        #[test]
        fn unit_shape_reduces_to_arcsine(
            u in 0.0_f64..1.0,
            a in -10.0_f64..10.0,
            width in 0.0_f64..10.0,
        ) {
            let b = a + width;
            prop_assert_eq!(skewed_arcsine_transform(u, a, b, 1.0), arcsine_transform(u, a, b));
        }

        #[test]
        fn skewed_stays_in_bounds(u in 0.0_f64..1.0, m in 0.05_f64..20.0) {
            let x = skewed_arcsine_transform(u, 2.0, 5.0, m);
            prop_assert!((2.0..=5.0).contains(&x));
        }
    }
}
