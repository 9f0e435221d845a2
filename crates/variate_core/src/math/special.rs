//! Inverse error function and standard normal quantile.
//!
//! Both functions share one kernel: Wichura's algorithm AS241 (PPND16),
//! a set of three rational approximations of the normal quantile with
//! relative accuracy of about 1e-16.
//!
//! Reference: Wichura, M. J. (1988). "Algorithm AS 241: The Percentage
//! Points of the Normal Distribution". Applied Statistics 37(3), 477-484.

use std::f64::consts::FRAC_1_SQRT_2;

/// Central region |p - 0.5| <= 0.425.
const SPLIT_CENTRAL: f64 = 0.425;

/// Tail boundary on sqrt(-ln r).
const SPLIT_TAIL: f64 = 5.0;

/// 0.425²
const CENTRAL_OFFSET: f64 = 0.180625;

#[allow(clippy::excessive_precision)]
const A: [f64; 8] = [
    3.387_132_872_796_366_608e0,
    1.331_416_678_917_843_774_5e2,
    1.971_590_950_306_551_442_7e3,
    1.373_169_376_550_946_112_5e4,
    4.592_195_393_154_987_145_7e4,
    6.726_577_092_700_870_085_3e4,
    3.343_057_558_358_812_810_5e4,
    2.509_080_928_730_122_672_7e3,
];

#[allow(clippy::excessive_precision)]
const B: [f64; 8] = [
    1.0,
    4.231_333_070_160_091_125_2e1,
    6.871_870_074_920_579_083_0e2,
    5.394_196_021_424_751_107_7e3,
    2.121_379_430_158_659_586_7e4,
    3.930_789_580_009_271_061_0e4,
    2.872_908_573_572_194_267_4e4,
    5.226_495_278_852_854_561_0e3,
];

#[allow(clippy::excessive_precision)]
const C: [f64; 8] = [
    1.423_437_110_749_683_577_34e0,
    4.630_337_846_156_545_295_90e0,
    5.769_497_221_460_691_405_50e0,
    3.647_848_324_763_204_605_04e0,
    1.270_458_252_452_368_382_58e0,
    2.417_807_251_774_506_117_70e-1,
    2.272_384_498_926_918_458_33e-2,
    7.745_450_142_783_414_076_40e-4,
];

#[allow(clippy::excessive_precision)]
const D: [f64; 8] = [
    1.0,
    2.053_191_626_637_758_821_87e0,
    1.676_384_830_183_803_849_40e0,
    6.897_673_349_851_000_045_50e-1,
    1.481_039_764_274_800_745_90e-1,
    1.519_866_656_361_645_719_66e-2,
    5.475_938_084_995_344_946_00e-4,
    1.050_750_071_644_416_843_24e-9,
];

#[allow(clippy::excessive_precision)]
const E: [f64; 8] = [
    6.657_904_643_501_103_777_20e0,
    5.463_784_911_164_114_369_90e0,
    1.784_826_539_917_291_335_80e0,
    2.965_605_718_285_048_912_30e-1,
    2.653_218_952_657_612_309_30e-2,
    1.242_660_947_388_078_438_60e-3,
    2.711_555_568_743_487_578_15e-5,
    2.010_334_399_292_288_132_65e-7,
];

#[allow(clippy::excessive_precision)]
const F: [f64; 8] = [
    1.0,
    5.998_322_065_558_879_376_90e-1,
    1.369_298_809_227_358_053_10e-1,
    1.487_536_129_085_061_485_25e-2,
    7.868_691_311_456_132_591_00e-4,
    1.846_318_317_510_054_681_80e-5,
    1.421_511_758_316_445_888_70e-7,
    2.044_263_103_389_939_785_64e-15,
];

/// Evaluates a degree-7 polynomial with Horner's method.
#[inline]
fn horner(coeffs: &[f64; 8], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// AS241 kernel.
///
/// `q` is the centred probability `p - 0.5` and `tail` the smaller tail
/// mass `min(p, 1 - p)`. Taking both lets callers pass whichever form they
/// can compute without cancellation.
#[inline]
fn ppnd16(q: f64, tail: f64) -> f64 {
    if q.abs() <= SPLIT_CENTRAL {
        let r = CENTRAL_OFFSET - q * q;
        return q * horner(&A, r) / horner(&B, r);
    }

    let r = (-tail.ln()).sqrt();
    let value = if r <= SPLIT_TAIL {
        let r = r - 1.6;
        horner(&C, r) / horner(&D, r)
    } else {
        let r = r - SPLIT_TAIL;
        horner(&E, r) / horner(&F, r)
    };

    if q < 0.0 {
        -value
    } else {
        value
    }
}

/// Inverse error function.
///
/// Returns `x` such that `erf(x) = y`.
///
/// # Returns
/// - `±∞` for `y = ±1`
/// - `NaN` for `|y| > 1` or `NaN` input
///
/// # Examples
/// ```
/// use variate_core::math::erf_inv;
///
/// assert_eq!(erf_inv(0.0), 0.0);
/// assert!((erf_inv(0.5) - 0.476_936_276_204_469_9).abs() < 1e-12);
/// assert_eq!(erf_inv(1.0), f64::INFINITY);
/// assert!(erf_inv(1.5).is_nan());
/// ```
pub fn erf_inv(y: f64) -> f64 {
    if y.is_nan() || y.abs() > 1.0 {
        return f64::NAN;
    }
    if y == 1.0 {
        return f64::INFINITY;
    }
    if y == -1.0 {
        return f64::NEG_INFINITY;
    }
    // erf_inv(y) = Φ⁻¹((1 + y) / 2) / √2
    let q = 0.5 * y;
    let tail = 0.5 * (1.0 - y.abs());
    ppnd16(q, tail) * FRAC_1_SQRT_2
}

/// Standard normal quantile function Φ⁻¹(p).
///
/// # Returns
/// - `-∞` for `p = 0`, `+∞` for `p = 1`
/// - `NaN` outside `[0, 1]`
///
/// # Examples
/// ```
/// use variate_core::math::norm_quantile;
///
/// assert!((norm_quantile(0.975) - 1.959_963_984_540_054).abs() < 1e-12);
/// ```
pub fn norm_quantile(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    ppnd16(p - 0.5, p.min(1.0 - p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_erf_inv_reference_values() {
        assert_relative_eq!(erf_inv(0.5), 0.476_936_276_204_469_9, max_relative = 1e-12);
        assert_relative_eq!(erf_inv(0.9), 1.163_087_153_676_674_3, max_relative = 1e-12);
        assert_relative_eq!(erf_inv(0.999), 2.326_753_765_513_524_6, max_relative = 1e-12);
        assert_relative_eq!(erf_inv(-0.5), -0.476_936_276_204_469_9, max_relative = 1e-12);
    }

    #[test]
    fn test_norm_quantile_reference_values() {
        assert_eq!(norm_quantile(0.5), 0.0);
        assert_relative_eq!(norm_quantile(0.975), 1.959_963_984_540_054, max_relative = 1e-12);
        assert_relative_eq!(norm_quantile(0.025), -1.959_963_984_540_054, max_relative = 1e-12);
        assert_relative_eq!(norm_quantile(0.999), 3.090_232_306_167_813_5, max_relative = 1e-12);
    }

    #[test]
    fn test_erf_inv_matches_quantile_relation() {
        for &p in &[0.01, 0.1, 0.3, 0.7, 0.95, 0.9999] {
            let via_erf = erf_inv(2.0 * p - 1.0) * std::f64::consts::SQRT_2;
            assert_relative_eq!(via_erf, norm_quantile(p), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_erf_inv_endpoints() {
        assert_eq!(erf_inv(1.0), f64::INFINITY);
        assert_eq!(erf_inv(-1.0), f64::NEG_INFINITY);
        assert!(erf_inv(1.0 + 1e-12).is_nan());
        assert!(erf_inv(f64::NAN).is_nan());
        assert!(norm_quantile(-0.1).is_nan());
        assert_eq!(norm_quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(norm_quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn test_erf_inv_small_argument_linear() {
        // erf_inv(y) ≈ (√π / 2) y for small y
        let y = 1e-10;
        assert_relative_eq!(erf_inv(y), 0.886_226_925_452_758 * y, max_relative = 1e-9);
    }

    #[test]
    fn test_far_tail_finite() {
        let x = erf_inv(1.0 - 1e-15);
        assert!(x.is_finite());
        assert!(x > 5.0 && x < 6.0);
        assert!(norm_quantile(1e-300).is_finite());
    }

    proptest! {
        #[test]
        fn erf_inv_is_odd(y in -0.999_999_f64..0.999_999) {
            prop_assert_eq!(erf_inv(-y), -erf_inv(y));
        }

        #[test]
        fn erf_inv_is_monotone(y in -0.999_f64..0.998) {
            prop_assert!(erf_inv(y + 1e-3) > erf_inv(y));
        }
    }
}
