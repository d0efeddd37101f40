use waveform::generator::ToneGenerator;

/// Body of the output callback: owns the generator and writes one generated
/// sample per frame, copied to every channel of that frame.
///
/// Runs on the driver thread, so `render` must not allocate, lock or panic.
#[derive(Debug, Clone)]
pub struct Renderer {
    generator: ToneGenerator,
    channels: usize,
}

impl Renderer {
    /// A channel count of 0 is treated as mono.
    pub fn new(generator: ToneGenerator, channels: u16) -> Self {
        Self {
            generator,
            channels: usize::from(channels.max(1)),
        }
    }

    pub fn generator(&self) -> &ToneGenerator {
        &self.generator
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Fills an interleaved buffer. A trailing partial frame still gets a
    /// fresh sample in every slot it has.
    #[inline]
    pub fn render(&mut self, out: &mut [f32]) {
        for frame in out.chunks_mut(self.channels) {
            frame.fill(self.generator.next_sample());
        }
    }
}
