use crate::{constants::DEFAULT_TONE_AMPLITUDE, generator::base::BaseGenerator};

/// Square wave taken from the sign of the sine phase, so it swings between
/// `-amplitude` and `amplitude` (and is 0 where the sine is exactly 0).
#[derive(Debug, Clone, Copy)]
pub struct SquareGenerator {
    base: BaseGenerator,
}

impl SquareGenerator {
    pub fn new(amplitude: f32) -> Self {
        Self {
            base: BaseGenerator::new(amplitude),
        }
    }

    pub fn base(&self) -> &BaseGenerator {
        &self.base
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let sample = self.base.amplitude() * sign(self.base.phase().sin());
        self.base.advance(sample)
    }
}

impl Default for SquareGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TONE_AMPLITUDE)
    }
}

/// Unlike `f32::signum`, zero maps to zero.
#[inline]
pub(crate) fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::sine::SineGenerator;

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(0.1), 1.0);
        assert_eq!(sign(-3.0), -1.0);
    }

    #[test]
    fn test_first_sample_is_zero() {
        let mut square = SquareGenerator::default();
        assert_eq!(square.next_sample(), 0.0);
    }

    #[test]
    fn test_output_only_takes_three_levels() {
        let amplitude = 0.8;
        let mut square = SquareGenerator::new(amplitude);
        for _ in 0..5_000 {
            let sample = square.next_sample();
            assert!(
                sample == amplitude || sample == -amplitude || sample == 0.0,
                "unexpected level {sample}"
            );
        }
    }

    #[test]
    fn test_matches_sign_of_sine() {
        let amplitude = 1.5;
        let mut sine = SineGenerator::new(amplitude);
        let mut square = SquareGenerator::new(amplitude);

        for _ in 0..5_000 {
            let expected = amplitude * sign(sine.next_sample());
            assert_eq!(square.next_sample(), expected);
        }
    }
}
