//! # Uniform Random Sources
//!
//! Every generator in this crate consumes independent uniform draws on
//! `[0, 1)` through the [`UniformSource`] trait. The source is owned by the
//! caller (or by a [`Sampler`](crate::Sampler)) and passed explicitly, so a
//! test can pin a seed and a production caller can seed from OS entropy.
//!
//! ## Module Structure
//!
//! - `prng`: [`VariateRng`], a `StdRng` wrapper with seed management and
//!   the [`SeedPolicy`] it was built from
//! - `clock`: wall-clock nanosecond timestamps used by
//!   [`SeedPolicy::ClockPerDraw`]
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::rng::{SeedPolicy, UniformSource, VariateRng};
//!
//! let mut rng = VariateRng::new(SeedPolicy::Fixed(12345));
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod clock;
mod prng;

pub use clock::timestamp_nanos;
pub use prng::{SeedPolicy, VariateRng};

/// A source of independent uniform variates on `[0, 1)`.
///
/// Implementations must be able to restart their stream from a 64-bit seed.
/// The sampling loop never reseeds unless the source asks for it through
/// [`UniformSource::reseeds_per_draw`].
pub trait UniformSource {
    /// Restarts the stream from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Returns the next uniform draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Whether the sampling loop should reseed from the wall clock before every draw.
    fn reseeds_per_draw(&self) -> bool {
        false
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    #[inline]
    fn reseeds_per_draw(&self) -> bool {
        (**self).reseeds_per_draw()
    }
}

/// Draws the next uniform, reseeding from the clock first when the source asks for it.
///
/// Custom [`InverseTransform`](crate::distributions::InverseTransform)
/// implementations should draw through this rather than calling
/// [`UniformSource::next_uniform`] directly.
#[inline]
pub fn draw_uniform<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    if source.reseeds_per_draw() {
        source.reseed(timestamp_nanos());
    }
    source.next_uniform()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_reproducible() {
        let mut a = VariateRng::new(SeedPolicy::Fixed(7));
        let mut b = VariateRng::new(SeedPolicy::Fixed(7));
        for _ in 0..16 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = VariateRng::new(SeedPolicy::Fixed(99));
        let first = rng.next_uniform();
        rng.next_uniform();
        rng.reseed(99);
        assert_eq!(rng.next_uniform(), first);
    }

    #[test]
    fn test_draw_uniform_through_mut_ref() {
        let mut rng = VariateRng::new(SeedPolicy::Fixed(1));
        let mut by_ref = &mut rng;
        let u = draw_uniform(&mut by_ref);
        assert!((0.0..1.0).contains(&u));
    }

    #[test]
    fn test_clock_policy_requests_reseed() {
        let rng = VariateRng::new(SeedPolicy::ClockPerDraw);
        assert!(rng.reseeds_per_draw());
        let rng = VariateRng::new(SeedPolicy::Entropy);
        assert!(!rng.reseeds_per_draw());
    }
}
