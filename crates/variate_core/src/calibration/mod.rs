//! # Asymmetry Calibration
//!
//! Maps a target left-right asymmetry `PLR ∈ (−1, 1)` to the shape exponent
//! `M` of the [`SkewedArcsine`](crate::distributions::SkewedArcsine)
//! distribution, and measures the asymmetry a sample set actually has.
//!
//! ## Empirical Fit
//!
//! Two regressions of the asymmetry against the fitted exponent `m` (where
//! the transform power is `1/m`) cover the two halves of the range:
//!
//! ```text
//! m1 = −ln((PLR + 1) / 1.40529) / 0.747437
//! m2 = (1 / 3.22864) · (1.44148 / (PLR + 0.561397) − 1)
//! m  = m1 if m1 > 0.6 else m2
//! ```
//!
//! The skewed transform here uses the power `2/M`, so `M = 2·m`. With that
//! scaling `PLR = 0` lands at `M ≈ 0.97`, next to the plain arcsine at
//! `M = 1`. The fit is accurate to a few hundredths over `PLR ∈ [−0.5, 0.7]`;
//! [`expected_asymmetry`] gives the exact value for any `M`.
//!
//! ## Module Structure
//!
//! - [`asymmetry`]: the `A_LR` statistic, streaming counter and closed form

pub mod asymmetry;

pub use asymmetry::{expected_asymmetry, left_right_asymmetry, AsymmetryCounter};

use crate::error::{ensure_finite, Result, SamplerError};

/// Constants of the empirical PLR → M regression.
///
/// [`CalibrationTable::DEFAULT`] holds the published fit; other tables can
/// be supplied after a recalibration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationTable {
    /// Scale inside the logarithm of the first branch.
    pub log_scale: f64,
    /// Divisor of the first branch.
    pub log_slope: f64,
    /// Divisor of the second branch.
    pub hyperbolic_slope: f64,
    /// Numerator of the second branch.
    pub hyperbolic_numerator: f64,
    /// Offset added to PLR in the second branch.
    pub hyperbolic_offset: f64,
    /// The first branch is used when its value exceeds this.
    pub break_point: f64,
}

impl CalibrationTable {
    /// The published fit.
    pub const DEFAULT: CalibrationTable = CalibrationTable {
        log_scale: 1.40529,
        log_slope: 0.747437,
        hyperbolic_slope: 3.22864,
        hyperbolic_numerator: 1.44148,
        hyperbolic_offset: 0.561397,
        break_point: 0.6,
    };

    /// First (logarithmic) branch.
    #[inline]
    pub fn log_branch(&self, plr: f64) -> f64 {
        -((plr + 1.0) / self.log_scale).ln() / self.log_slope
    }

    /// Second (hyperbolic) branch.
    #[inline]
    pub fn hyperbolic_branch(&self, plr: f64) -> f64 {
        (1.0 / self.hyperbolic_slope)
            * (self.hyperbolic_numerator / (plr + self.hyperbolic_offset) - 1.0)
    }

    /// The fitted exponent `m` for the `1/m` power convention.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `plr` is not in `(−1, 1)` or the selected branch
    /// is not a positive finite number.
    pub fn fit_exponent(&self, plr: f64) -> Result<f64> {
        ensure_finite("plr", plr)?;
        if plr <= -1.0 || plr >= 1.0 {
            return Err(SamplerError::invalid(
                "plr",
                format!("must lie in (-1, 1), got {}", plr),
            ));
        }

        let m1 = self.log_branch(plr);
        let m = if m1 > self.break_point {
            m1
        } else {
            self.hyperbolic_branch(plr)
        };

        if !m.is_finite() || m <= 0.0 {
            return Err(SamplerError::invalid(
                "plr",
                format!("asymmetry {} is outside the calibrated range (shape {})", plr, m),
            ));
        }
        Ok(m)
    }

    /// The shape exponent `M` for [`SkewedArcsine`](crate::distributions::SkewedArcsine).
    ///
    /// # Errors
    ///
    /// Same as [`CalibrationTable::fit_exponent`].
    pub fn shape_exponent(&self, plr: f64) -> Result<f64> {
        Ok(2.0 * self.fit_exponent(plr)?)
    }
}

impl Default for CalibrationTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shape exponent `M` for a target asymmetry, using the default table.
///
/// # Examples
///
/// ```rust
/// use variate_core::calibration::shape_exponent;
///
/// let m = shape_exponent(0.0).unwrap();
/// assert!((m - 1.0).abs() < 0.05);
///
/// assert!(shape_exponent(1.0).is_err());
/// ```
pub fn shape_exponent(plr: f64) -> Result<f64> {
    CalibrationTable::DEFAULT.shape_exponent(plr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_branch_selection() {
        let table = CalibrationTable::DEFAULT;
        // Strong left skew uses the logarithmic branch.
        let m = table.fit_exponent(-0.5).unwrap();
        assert_relative_eq!(m, table.log_branch(-0.5));
        assert!(m > 0.6);
        // Near zero the logarithmic branch falls below the break point.
        assert!(table.log_branch(0.0) <= 0.6);
        assert_relative_eq!(table.fit_exponent(0.0).unwrap(), table.hyperbolic_branch(0.0));
    }

    #[test]
    fn test_known_values() {
        let table = CalibrationTable::DEFAULT;
        assert_relative_eq!(table.fit_exponent(0.0).unwrap(), 0.485_550, epsilon = 1e-5);
        assert_relative_eq!(table.fit_exponent(-0.5).unwrap(), 1.382_579, epsilon = 1e-5);
        assert_relative_eq!(table.fit_exponent(0.7).unwrap(), 0.044_218, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_asymmetry_is_near_unit_shape() {
        let m = shape_exponent(0.0).unwrap();
        assert!((m - 1.0).abs() < 0.05, "M = {}", m);
    }

    #[test]
    fn test_shape_decreases_with_plr() {
        let plrs = [-0.9, -0.5, -0.2, 0.0, 0.3, 0.6, 0.85];
        let shapes: Vec<f64> = plrs.iter().map(|&p| shape_exponent(p).unwrap()).collect();
        for pair in shapes.windows(2) {
            assert!(pair[0] > pair[1], "{:?}", shapes);
        }
    }

    #[test]
    fn test_domain_violations() {
        assert!(shape_exponent(-1.0).is_err());
        assert!(shape_exponent(1.0).is_err());
        assert!(shape_exponent(f64::NAN).is_err());
        // Right at the top of the range the hyperbolic branch turns negative.
        assert!(shape_exponent(0.95).is_err());
    }
}
