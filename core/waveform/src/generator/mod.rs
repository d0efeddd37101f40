use std::fmt;

use crate::{
    constants::{DEFAULT_NOISE_AMPLITUDE, DEFAULT_TONE_AMPLITUDE},
    generator::{
        base::BaseGenerator, noise::WhiteNoiseGenerator, sine::SineGenerator,
        square::SquareGenerator,
    },
};

pub mod base;
pub mod noise;
pub mod sine;
pub mod square;

/// Waveform selector as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaveformKind {
    #[default]
    Sine,
    Square,
    WhiteNoise,
}

impl WaveformKind {
    /// Numeric selector: 0 = sine, 1 = square, 2 = white noise.
    pub fn id(self) -> u32 {
        match self {
            Self::Sine => 0,
            Self::Square => 1,
            Self::WhiteNoise => 2,
        }
    }

    pub fn default_amplitude(self) -> f32 {
        match self {
            Self::Sine | Self::Square => DEFAULT_TONE_AMPLITUDE,
            Self::WhiteNoise => DEFAULT_NOISE_AMPLITUDE,
        }
    }

    /// Like `From<u32>` but `None` for unknown ids.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Sine),
            1 => Some(Self::Square),
            2 => Some(Self::WhiteNoise),
            _ => None,
        }
    }
}

/// Unknown ids fall back to sine.
impl From<u32> for WaveformKind {
    fn from(id: u32) -> Self {
        Self::from_id(id).unwrap_or_default()
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::WhiteNoise => "white noise",
        };
        f.write_str(name)
    }
}

/// A tone generator produces one sample per call.
///
/// `next_sample` is the only mutator. It is O(1), never allocates, never
/// locks and never fails, so it can run on the audio driver's callback
/// thread at whatever rate the driver pulls.
#[derive(Debug, Clone)]
pub enum ToneGenerator {
    Sine(SineGenerator),
    Square(SquareGenerator),
    WhiteNoise(WhiteNoiseGenerator),
}

impl ToneGenerator {
    /// Builds `kind` with its default amplitude. `seed` only affects noise.
    pub fn new(kind: WaveformKind, seed: Option<u64>) -> Self {
        Self::with_amplitude(kind, kind.default_amplitude(), seed)
    }

    pub fn with_amplitude(kind: WaveformKind, amplitude: f32, seed: Option<u64>) -> Self {
        match kind {
            WaveformKind::Sine => Self::Sine(SineGenerator::new(amplitude)),
            WaveformKind::Square => Self::Square(SquareGenerator::new(amplitude)),
            WaveformKind::WhiteNoise => {
                Self::WhiteNoise(WhiteNoiseGenerator::new(amplitude, seed))
            }
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        match self {
            Self::Sine(g) => g.next_sample(),
            Self::Square(g) => g.next_sample(),
            Self::WhiteNoise(g) => g.next_sample(),
        }
    }

    pub fn kind(&self) -> WaveformKind {
        match self {
            Self::Sine(_) => WaveformKind::Sine,
            Self::Square(_) => WaveformKind::Square,
            Self::WhiteNoise(_) => WaveformKind::WhiteNoise,
        }
    }

    fn base(&self) -> &BaseGenerator {
        match self {
            Self::Sine(g) => g.base(),
            Self::Square(g) => g.base(),
            Self::WhiteNoise(g) => g.base(),
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.base().amplitude()
    }

    pub fn sample_count(&self) -> u32 {
        self.base().sample_count()
    }
}
