//! The rejection loop shared by every generator.

use tracing::{debug, warn};

use super::config::DEFAULT_MAX_CONSECUTIVE_REJECTIONS;
use crate::distributions::InverseTransform;
use crate::error::{Result, SamplerError};
use crate::rng::UniformSource;

/// Draw-transform-reject loop.
///
/// Collects exactly `num` finite variates in production order. A
/// non-finite candidate (NaN or ±∞) is discarded and redrawn; more than
/// `max_consecutive_rejections` discards in a row fails the whole call.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::Exponential;
/// use variate_core::rng::VariateRng;
/// use variate_core::sampler::SampleLoop;
///
/// let mut rng = VariateRng::from_seed(1);
/// let dist = Exponential::new(0.0, 2.0).unwrap();
/// let xs = SampleLoop::default().run(&dist, &mut rng, 100).unwrap();
/// assert_eq!(xs.len(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleLoop {
    max_consecutive_rejections: usize,
}

impl Default for SampleLoop {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONSECUTIVE_REJECTIONS)
    }
}

impl SampleLoop {
    /// Creates a loop with the given retry cap (clamped to at least 1).
    pub fn new(max_consecutive_rejections: usize) -> Self {
        Self {
            max_consecutive_rejections: max_consecutive_rejections.max(1),
        }
    }

    /// Returns the retry cap.
    #[inline]
    pub fn max_consecutive_rejections(&self) -> usize {
        self.max_consecutive_rejections
    }

    /// Samples `num` finite variates from `dist`.
    ///
    /// Parameters are validated first; `num = 0` then returns an empty
    /// vector without touching the source.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `dist` fails validation
    /// - `SamplingExhausted` if the retry cap is hit
    pub fn run<D, S>(&self, dist: &D, source: &mut S, num: usize) -> Result<Vec<f64>>
    where
        D: InverseTransform + ?Sized,
        S: UniformSource + ?Sized,
    {
        let mut samples = Vec::with_capacity(num);
        self.for_each(dist, source, num, |x| samples.push(x))?;
        Ok(samples)
    }

    /// Feeds `num` finite variates from `dist` to `accept` without storing them.
    ///
    /// # Errors
    ///
    /// Same as [`SampleLoop::run`].
    pub fn for_each<D, S, F>(
        &self,
        dist: &D,
        source: &mut S,
        num: usize,
        mut accept: F,
    ) -> Result<()>
    where
        D: InverseTransform + ?Sized,
        S: UniformSource + ?Sized,
        F: FnMut(f64),
    {
        dist.validate()?;
        if num == 0 {
            return Ok(());
        }

        let mut produced = 0;
        let mut consecutive = 0;
        let mut total_rejections = 0_usize;

        while produced < num {
            let x = dist.draw(source);
            if x.is_finite() {
                accept(x);
                produced += 1;
                consecutive = 0;
                continue;
            }

            consecutive += 1;
            total_rejections += 1;
            if consecutive > self.max_consecutive_rejections {
                warn!(
                    distribution = dist.name(),
                    requested = num,
                    produced,
                    rejections = consecutive,
                    "Sampling exhausted"
                );
                return Err(SamplerError::SamplingExhausted {
                    distribution: dist.name(),
                    requested: num,
                    produced,
                    rejections: consecutive,
                });
            }
        }

        debug!(
            distribution = dist.name(),
            samples = num,
            rejected = total_rejections,
            "Sampling complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{Arcsine, ExpoGaussian, Gaussian};
    use crate::rng::VariateRng;

    /// Replays a fixed list of uniforms and counts calls.
    struct ScriptedSource {
        values: Vec<f64>,
        next: usize,
        reseeds: usize,
        per_draw: bool,
    }

    impl ScriptedSource {
        fn new(values: Vec<f64>) -> Self {
            Self {
                values,
                next: 0,
                reseeds: 0,
                per_draw: false,
            }
        }

        /// Asks the loop to reseed before every draw, like `ClockPerDraw`.
        fn reseeding(values: Vec<f64>) -> Self {
            Self {
                per_draw: true,
                ..Self::new(values)
            }
        }
    }

    impl UniformSource for ScriptedSource {
        fn reseed(&mut self, _seed: u64) {
            self.reseeds += 1;
        }

        fn next_uniform(&mut self) -> f64 {
            let u = self.values[self.next % self.values.len()];
            self.next += 1;
            u
        }

        fn reseeds_per_draw(&self) -> bool {
            self.per_draw
        }
    }

    /// Always yields NaN.
    struct Poisoned;

    impl InverseTransform for Poisoned {
        fn name(&self) -> &'static str {
            "poisoned"
        }

        fn validate(&self) -> Result<()> {
            Ok(())
        }

        fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
            let _ = source.next_uniform();
            f64::NAN
        }
    }

    #[test]
    fn test_zero_count_touches_nothing() {
        let mut source = ScriptedSource::reseeding(vec![0.5]);
        let dist = Arcsine::new(0.0, 1.0).unwrap();
        let out = SampleLoop::default().run(&dist, &mut source, 0).unwrap();
        assert!(out.is_empty());
        assert_eq!(source.next, 0);
        assert_eq!(source.reseeds, 0);
    }

    #[test]
    fn test_reseed_before_every_draw() {
        let mut source = ScriptedSource::reseeding(vec![0.25, 0.75]);
        let dist = Arcsine::new(0.0, 1.0).unwrap();
        let out = SampleLoop::default().run(&dist, &mut source, 5).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(source.next, 5);
        assert_eq!(source.reseeds, 5);
    }

    #[test]
    fn test_reseed_before_both_expo_gaussian_draws() {
        let mut source = ScriptedSource::reseeding(vec![0.25, 0.75]);
        let dist = ExpoGaussian::new(0.0, 1.0, 1.0).unwrap();
        let out = SampleLoop::default().run(&dist, &mut source, 5).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(source.next, 10);
        assert_eq!(source.reseeds, 10);
    }

    #[test]
    fn test_no_reseed_unless_requested() {
        let mut source = ScriptedSource::new(vec![0.25, 0.75]);
        let dist = Arcsine::new(0.0, 1.0).unwrap();
        SampleLoop::default().run(&dist, &mut source, 5).unwrap();
        assert_eq!(source.next, 5);
        assert_eq!(source.reseeds, 0);
    }

    #[test]
    fn test_non_finite_draws_are_skipped() {
        // u = 0 gives -∞ for the Gaussian.
        let mut source = ScriptedSource::new(vec![0.0, 0.5, 0.0, 0.0, 0.5]);
        let dist = Gaussian::new(1.0, 1.0).unwrap();
        let out = SampleLoop::default().run(&dist, &mut source, 2).unwrap();
        assert_eq!(out, vec![1.0, 1.0]);
        assert_eq!(source.next, 5);
    }

    #[test]
    fn test_retry_cap_fails_call() {
        let mut source = ScriptedSource::new(vec![0.5]);
        let err = SampleLoop::new(25)
            .run(&Poisoned, &mut source, 3)
            .unwrap_err();
        assert_eq!(
            err,
            SamplerError::SamplingExhausted {
                distribution: "poisoned",
                requested: 3,
                produced: 0,
                rejections: 26,
            }
        );
    }

    #[test]
    fn test_invalid_parameters_rejected_before_drawing() {
        let mut source = ScriptedSource::new(vec![0.5]);
        let dist = Arcsine { a: 1.0, b: 0.0 };
        assert!(SampleLoop::default().run(&dist, &mut source, 10).is_err());
        assert_eq!(source.next, 0);
    }

    #[test]
    fn test_for_each_streams_in_order() {
        let mut a = VariateRng::from_seed(11);
        let mut b = VariateRng::from_seed(11);
        let dist = Arcsine::new(0.0, 1.0).unwrap();
        let stored = SampleLoop::default().run(&dist, &mut a, 50).unwrap();
        let mut streamed = Vec::new();
        SampleLoop::default()
            .for_each(&dist, &mut b, 50, |x| streamed.push(x))
            .unwrap();
        assert_eq!(stored, streamed);
    }

    #[test]
    fn test_cap_clamped_to_one() {
        assert_eq!(SampleLoop::new(0).max_consecutive_rejections(), 1);
    }
}
