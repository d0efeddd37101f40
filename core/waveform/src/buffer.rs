//! Interleaved block of raw audio bytes.
//!
//! Not used on the playback path; kept as a general-purpose building block
//! for code that moves audio around in fixed-size frames.

/// Sample encoding; the discriminant is the bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    Int16 = 16,
    #[default]
    Float32 = 32,
}

impl SampleFormat {
    pub fn bits(self) -> usize {
        self as usize
    }

    pub fn bytes_per_sample(self) -> usize {
        self.bits() / 8
    }
}

/// One block of `frame_size` frames with `channels` interleaved samples each.
///
/// The byte storage always holds exactly
/// `frame_size * channels * format.bytes_per_sample()` bytes. It is sized
/// once at construction and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    frame_size: u32,
    channels: u32,
    sample_rate: u32,
    format: SampleFormat,
    data: Box<[u8]>,
}

impl AudioBuffer {
    pub fn new(frame_size: u32, channels: u32, sample_rate: u32, format: SampleFormat) -> Self {
        let len = frame_size as usize * channels as usize * format.bytes_per_sample();

        Self {
            frame_size,
            channels,
            sample_rate,
            format,
            data: vec![0u8; len].into_boxed_slice(),
        }
    }

    pub fn float32(frame_size: u32, channels: u32, sample_rate: u32) -> Self {
        Self::new(frame_size, channels, sample_rate, SampleFormat::Float32)
    }

    /// Frames per block.
    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Storage size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of samples across all channels.
    pub fn n_samples(&self) -> usize {
        self.frame_size as usize * self.channels as usize
    }
}
