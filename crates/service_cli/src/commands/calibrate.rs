//! Asymmetry calibration commands
//!
//! Maps a target left-right asymmetry to the skewed-arcsine shape exponent
//! and measures how well the mapping holds on a sample.

use std::io::Write;

use serde::Serialize;
use tracing::info;
use variate_core::calibration::CalibrationTable;
use variate_core::{expected_asymmetry, Sampler};

use crate::output::Output;
use crate::Result;

/// Shape exponent calibrated from a target asymmetry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calibration {
    /// Requested asymmetry.
    pub plr: f64,
    /// Shape exponent M.
    pub shape: f64,
    /// Closed-form asymmetry of M on `[0, 1]`.
    pub expected_asymmetry: f64,
}

/// Realised asymmetry of one sample run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsymmetryCheck {
    /// Requested asymmetry, when the shape was calibrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plr: Option<f64>,
    /// Shape exponent M.
    pub shape: f64,
    /// Number of draws.
    pub num: usize,
    /// Asymmetry measured on the draws.
    pub asymmetry: f64,
    /// Closed-form asymmetry for the same interval and M.
    pub expected_asymmetry: f64,
}

/// Calibrate a shape exponent from `plr`
pub fn calibrate(table: &CalibrationTable, plr: f64) -> variate_core::Result<Calibration> {
    let shape = table.shape_exponent(plr)?;
    Ok(Calibration {
        plr,
        shape,
        expected_asymmetry: expected_asymmetry(0.0, 1.0, shape),
    })
}

/// Run the calibrate command: print M for a target asymmetry
pub fn run(sampler: &Sampler, plr: f64, output: &Output) -> Result<()> {
    let calibration = calibrate(sampler.calibration(), plr)?;
    info!(
        plr,
        shape = calibration.shape,
        expected = calibration.expected_asymmetry,
        "Calibrated shape exponent"
    );
    output.emit(&calibration, |w: &mut dyn Write| writeln!(w, "{}", calibration.shape))
}

/// Run the measure-asymmetry command for an explicit M
pub fn run_measure(
    sampler: &mut Sampler,
    a: f64,
    b: f64,
    m: f64,
    num: usize,
    output: &Output,
) -> Result<()> {
    let asymmetry = sampler.measure_asymmetry(a, b, m, num)?;
    let check = AsymmetryCheck {
        plr: None,
        shape: m,
        num,
        asymmetry,
        expected_asymmetry: expected_asymmetry(a, b, m),
    };
    output.emit(&check, |w: &mut dyn Write| writeln!(w, "{}", check.asymmetry))
}

/// Run the check-calibration command: calibrate M from `plr`, sample, and
/// report the realised asymmetry
pub fn run_check(
    sampler: &mut Sampler,
    a: f64,
    b: f64,
    plr: f64,
    num: usize,
    output: &Output,
) -> Result<()> {
    let shape = sampler.calibration().shape_exponent(plr)?;
    let asymmetry = sampler.check_calibration(a, b, plr, num)?;
    let check = AsymmetryCheck {
        plr: Some(plr),
        shape,
        num,
        asymmetry,
        expected_asymmetry: expected_asymmetry(a, b, shape),
    };
    output.emit(&check, |w: &mut dyn Write| writeln!(w, "{}", check.asymmetry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_calibrate_zero_target() {
        let calibration = calibrate(&CalibrationTable::DEFAULT, 0.0).unwrap();
        assert_abs_diff_eq!(calibration.shape, 1.0, epsilon = 0.05);
        assert_abs_diff_eq!(calibration.expected_asymmetry, 0.0, epsilon = 0.05);
    }

    #[test]
    fn test_calibrate_rejects_out_of_range() {
        assert!(calibrate(&CalibrationTable::DEFAULT, 1.0).is_err());
        assert!(calibrate(&CalibrationTable::DEFAULT, -1.0).is_err());
    }

    #[test]
    fn test_calibrate_plain_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        let output = Output::new(OutputFormat::Plain, Some(path.clone()));

        run(&Sampler::from_seed(1), -0.5, &output).unwrap();

        let m: f64 = std::fs::read_to_string(&path).unwrap().trim().parse().unwrap();
        assert_abs_diff_eq!(m, 2.0 * 1.382_579, epsilon = 1e-4);
    }

    #[test]
    fn test_check_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("check.json");
        let output = Output::new(OutputFormat::Json, Some(path.clone()));

        run_check(&mut Sampler::from_seed(2), 0.0, 1.0, 0.3, 50_000, &output).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["plr"], 0.3);
        assert_eq!(value["num"], 50_000);
        let realised = value["asymmetry"].as_f64().unwrap();
        let expected = value["expected_asymmetry"].as_f64().unwrap();
        assert_abs_diff_eq!(realised, expected, epsilon = 0.02);
    }

    #[test]
    fn test_measure_omits_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("measure.json");
        let output = Output::new(OutputFormat::Json, Some(path.clone()));

        run_measure(&mut Sampler::from_seed(3), 0.0, 1.0, 1.0, 10_000, &output).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.get("plr").is_none());
        assert_eq!(value["shape"], 1.0);
    }
}
