//! Left-right asymmetry `A_LR` of skewed-arcsine samples.
//!
//! `A_LR = (L − R) / (L + R)` where `L` counts samples strictly below the
//! split point `(b − a)/2` and `R` the rest. The split point is measured
//! from zero, not from `a`, so it is the interval midpoint only when
//! `a = 0`.

use std::f64::consts::FRAC_2_PI;

/// Split point used by the asymmetry statistic.
#[inline]
pub fn split_point(a: f64, b: f64) -> f64 {
    (b - a) / 2.0
}

/// Streaming left/right counter.
///
/// # Examples
///
/// ```rust
/// use variate_core::calibration::AsymmetryCounter;
///
/// let mut counter = AsymmetryCounter::new(0.0, 1.0);
/// for &x in &[0.1, 0.2, 0.9] {
///     counter.push(x);
/// }
/// assert_eq!(counter.left(), 2);
/// assert!((counter.asymmetry() - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsymmetryCounter {
    split: f64,
    left: u64,
    right: u64,
}

impl AsymmetryCounter {
    /// Creates an empty counter for the interval `[a, b]`.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            split: split_point(a, b),
            left: 0,
            right: 0,
        }
    }

    /// Records one sample.
    #[inline]
    pub fn push(&mut self, x: f64) {
        if x < self.split {
            self.left += 1;
        } else {
            self.right += 1;
        }
    }

    /// Samples below the split point.
    #[inline]
    pub fn left(&self) -> u64 {
        self.left
    }

    /// Samples at or above the split point.
    #[inline]
    pub fn right(&self) -> u64 {
        self.right
    }

    /// The `A_LR` coefficient, `0.0` when nothing has been recorded.
    pub fn asymmetry(&self) -> f64 {
        let total = self.left + self.right;
        if total == 0 {
            return 0.0;
        }
        (self.left as f64 - self.right as f64) / total as f64
    }
}

/// `A_LR` of an existing sample set on `[a, b]`.
///
/// # Examples
///
/// ```rust
/// use variate_core::calibration::left_right_asymmetry;
///
/// assert_eq!(left_right_asymmetry(&[0.1, 0.9], 0.0, 1.0), 0.0);
/// assert_eq!(left_right_asymmetry(&[], 0.0, 1.0), 0.0);
/// ```
pub fn left_right_asymmetry(samples: &[f64], a: f64, b: f64) -> f64 {
    let mut counter = AsymmetryCounter::new(a, b);
    for &x in samples {
        counter.push(x);
    }
    counter.asymmetry()
}

/// Closed-form `A_LR` of the skewed arcsine with shape exponent `m` on `[a, b]`.
///
/// With `y = sin(πU/2)^(2/m)` a sample falls left when
/// `y < t = ½ − a/(b − a)`, which has probability `(2/π)·asin(t^(m/2))`
/// for `t ∈ (0, 1)`.
///
/// # Examples
///
/// ```rust
/// use variate_core::calibration::expected_asymmetry;
///
/// // The plain arcsine on [0, 1] is symmetric.
/// assert!(expected_asymmetry(0.0, 1.0, 1.0).abs() < 1e-15);
/// ```
pub fn expected_asymmetry(a: f64, b: f64, m: f64) -> f64 {
    let p_left = if b > a {
        let t = 0.5 - a / (b - a);
        if t <= 0.0 {
            0.0
        } else if t >= 1.0 {
            1.0
        } else {
            FRAC_2_PI * t.powf(m / 2.0).asin()
        }
    } else if a < split_point(a, b) {
        1.0
    } else {
        0.0
    };
    2.0 * p_left - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_split_point_ignores_lower_bound() {
        assert_eq!(split_point(2.0, 6.0), 2.0);
        // Every sample on [2, 6] is at or above 2.
        assert_eq!(left_right_asymmetry(&[2.0, 3.0, 5.9], 2.0, 6.0), -1.0);
        assert_eq!(expected_asymmetry(2.0, 6.0, 1.0), -1.0);
    }

    #[test]
    fn test_counter_boundary_goes_right() {
        let mut counter = AsymmetryCounter::new(0.0, 1.0);
        counter.push(0.5);
        assert_eq!(counter.right(), 1);
        assert_eq!(counter.asymmetry(), -1.0);
    }

    #[test]
    fn test_expected_asymmetry_direction() {
        assert!(expected_asymmetry(0.0, 1.0, 0.5) > 0.0);
        assert!(expected_asymmetry(0.0, 1.0, 2.0) < 0.0);
    }

    #[test]
    fn test_expected_asymmetry_known_value() {
        // m = 2: y = sin(πU/2), P(y < ½) = (2/π)·asin(½) = 1/3.
        assert_relative_eq!(expected_asymmetry(0.0, 1.0, 2.0), -1.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_negative_lower_bound() {
        // t = ½ + 1/2 = 1: every sample is left of the split at 1.
        assert_eq!(expected_asymmetry(-1.0, 1.0, 0.7), 1.0);
    }

    #[test]
    fn test_degenerate_interval() {
        assert_eq!(expected_asymmetry(-3.0, -3.0, 1.0), 1.0);
        assert_eq!(expected_asymmetry(3.0, 3.0, 1.0), -1.0);
        assert_eq!(expected_asymmetry(0.0, 0.0, 1.0), -1.0);
    }
}
