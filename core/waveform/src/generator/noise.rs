use rand::{Rng as _, SeedableRng as _, rngs::SmallRng};

use crate::{constants::DEFAULT_NOISE_AMPLITUDE, generator::base::BaseGenerator};

/// Uniform white noise in `[-|amplitude|, |amplitude|]`.
///
/// Each draw is independent of the sample counter. Pass a seed to get a
/// reproducible sequence, otherwise the source is seeded from OS entropy.
#[derive(Debug, Clone)]
pub struct WhiteNoiseGenerator {
    base: BaseGenerator,
    rng: SmallRng,
}

impl WhiteNoiseGenerator {
    pub fn new(amplitude: f32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            base: BaseGenerator::new(amplitude),
            rng,
        }
    }

    pub fn base(&self) -> &BaseGenerator {
        &self.base
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let sample = self.base.amplitude().abs() * self.rng.gen_range(-1.0_f32..=1.0);
        self.base.advance(sample)
    }
}

impl Default for WhiteNoiseGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_AMPLITUDE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_amplitude_is_quarter() {
        let noise = WhiteNoiseGenerator::default();
        assert_eq!(noise.base().amplitude(), 0.25);
    }

    #[test]
    fn test_output_is_bounded_by_amplitude() {
        let mut noise = WhiteNoiseGenerator::new(0.25, Some(7));
        for _ in 0..10_000 {
            assert!(noise.next_sample().abs() <= 0.25);
        }
    }

    #[test]
    fn test_negative_amplitude_is_bounded_by_magnitude() {
        let mut noise = WhiteNoiseGenerator::new(-0.5, Some(7));
        for _ in 0..1_000 {
            assert!(noise.next_sample().abs() <= 0.5);
        }
    }

    #[test]
    fn test_mean_is_close_to_zero() {
        let draws = 10_000;
        let mut noise = WhiteNoiseGenerator::new(1.0, Some(42));
        let sum: f64 = (0..draws).map(|_| f64::from(noise.next_sample())).sum();
        let mean = sum / f64::from(draws);
        assert!(mean.abs() < 0.05, "mean was {mean}");
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let mut a = WhiteNoiseGenerator::new(1.0, Some(1234));
        let mut b = WhiteNoiseGenerator::new(1.0, Some(1234));
        for _ in 0..256 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = WhiteNoiseGenerator::new(1.0, Some(1));
        let mut b = WhiteNoiseGenerator::new(1.0, Some(2));
        let differs = (0..64).any(|_| a.next_sample() != b.next_sample());
        assert!(differs);
    }
}
