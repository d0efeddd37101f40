use crate::constants::PHASE_DIVISOR;

/// State shared by every generator variant.
#[derive(Debug, Clone, Copy)]
pub struct BaseGenerator {
    amplitude: f32,
    sample_count: u32,
    last_sample: f32,
}

impl BaseGenerator {
    pub fn new(amplitude: f32) -> Self {
        Self {
            amplitude,
            sample_count: 0,
            last_sample: -1.0,
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn last_sample(&self) -> f32 {
        self.last_sample
    }

    /// Phase of the current sample in radians.
    pub(crate) fn phase(&self) -> f32 {
        self.sample_count as f32 / PHASE_DIVISOR
    }

    /// Records `sample` as the latest output and moves to the next slot.
    /// The counter wraps instead of overflowing.
    pub(crate) fn advance(&mut self, sample: f32) -> f32 {
        self.last_sample = sample;
        self.sample_count = self.sample_count.wrapping_add(1);
        sample
    }
}
