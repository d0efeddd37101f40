use crate::{constants::DEFAULT_TONE_AMPLITUDE, generator::base::BaseGenerator};

/// `amplitude * sin(n / 16)` for the n-th sample.
#[derive(Debug, Clone, Copy)]
pub struct SineGenerator {
    base: BaseGenerator,
}

impl SineGenerator {
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
        let sample = self.base.amplitude() * self.base.phase().sin();
        self.base.advance(sample)
    }
}

impl Default for SineGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TONE_AMPLITUDE)
    }
}
