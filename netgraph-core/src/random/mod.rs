//! Random sources consumed by [`crate::Network`].
//!
//! The network never reaches for global randomness: every draw goes through
//! a [`RandomSource`] supplied at construction, so a seeded or scripted
//! source makes node values and link layouts reproducible.

mod sampling;

use rand::{SeedableRng, rngs::SmallRng};

/// Seed used by [`SeededRandom::default`] and the network builder.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Supplier of the three distributions a network draws from.
///
/// # Examples
/// ```
/// use netgraph_core::RandomSource;
///
/// /// Always answers with the same numbers.
/// struct Constant;
///
/// impl RandomSource for Constant {
///     fn normal(&mut self) -> f64 { 0.25 }
///     fn poisson(&mut self, _mean: f64) -> u64 { 1 }
///     fn uniform_double(&mut self, lo: f64, _hi: f64) -> f64 { lo }
/// }
///
/// let mut source = Constant;
/// assert_eq!(source.normal(), 0.25);
/// assert_eq!(source.poisson(3.0), 1);
/// assert_eq!(source.uniform_double(2.0, 5.0), 2.0);
/// ```
pub trait RandomSource {
    /// Draws from the standard normal distribution.
    fn normal(&mut self) -> f64;

    /// Draws from a Poisson distribution with the given mean.
    ///
    /// Callers pass a finite, non-negative mean.
    fn poisson(&mut self, mean: f64) -> u64;

    /// Draws uniformly from `[lo, hi)`.
    fn uniform_double(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn normal(&mut self) -> f64 {
        (**self).normal()
    }

    fn poisson(&mut self, mean: f64) -> u64 {
        (**self).poisson(mean)
    }

    fn uniform_double(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform_double(lo, hi)
    }
}

/// [`RandomSource`] backed by a seeded [`SmallRng`].
///
/// Two sources built from the same seed produce identical draw sequences.
///
/// # Examples
/// ```
/// use netgraph_core::{RandomSource, SeededRandom};
///
/// let mut left = SeededRandom::new(7);
/// let mut right = SeededRandom::new(7);
/// assert_eq!(left.normal(), right.normal());
/// assert_eq!(left.poisson(4.0), right.poisson(4.0));
/// assert_eq!(left.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    fn normal(&mut self) -> f64 {
        sampling::standard_normal(&mut self.rng)
    }

    fn poisson(&mut self, mean: f64) -> u64 {
        sampling::poisson(&mut self.rng, mean)
    }

    fn uniform_double(&mut self, lo: f64, hi: f64) -> f64 {
        sampling::uniform(&mut self.rng, lo, hi)
    }
}
