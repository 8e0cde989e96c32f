//! Distribution samplers layered over a uniform [`SmallRng`].

use rand::{Rng, rngs::SmallRng};
use rand_distr::{Poisson, StandardNormal};

pub(super) fn standard_normal(rng: &mut SmallRng) -> f64 {
    rng.sample(StandardNormal)
}

/// Above this mean the Poisson skewness (`mean^-1/2`) is below 1e-6 and
/// `rand_distr`'s log-gamma rejection test loses precision, so draws use the
/// normal approximation instead.
const NORMAL_APPROX_MIN_MEAN: f64 = 1.0e12;

/// Poisson draw in constant expected time for any mean. Zero, negative
/// and non-finite means draw zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Poisson variates are non-negative integers; the cast saturates at u64::MAX"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "the normal approximation scales a standard normal draw"
)]
pub(super) fn poisson(rng: &mut SmallRng, mean: f64) -> u64 {
    if !mean.is_finite() || mean <= 0.0 {
        return 0;
    }
    if mean >= NORMAL_APPROX_MIN_MEAN {
        let z: f64 = rng.sample(StandardNormal);
        return (mean + mean.sqrt() * z).round() as u64;
    }
    Poisson::new(mean).map_or(0, |distribution| rng.sample::<f64, _>(distribution) as u64)
}

/// Empty, inverted or overflowing ranges collapse to `lo`.
#[expect(
    clippy::float_arithmetic,
    reason = "range width is checked for overflow before sampling"
)]
pub(super) fn uniform(rng: &mut SmallRng, lo: f64, hi: f64) -> f64 {
    if lo < hi && (hi - lo).is_finite() {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
