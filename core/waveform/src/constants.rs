/// Tolerance used when comparing rendered samples.
pub const AUDIO_SAMPLE_EPSILON: f32 = 1e-6;

/// Sine and square advance by `1 / PHASE_DIVISOR` radians per sample, so the
/// pitch depends on the stream's sample rate.
pub const PHASE_DIVISOR: f32 = 16.0;

pub const DEFAULT_TONE_AMPLITUDE: f32 = 1.0;
pub const DEFAULT_NOISE_AMPLITUDE: f32 = 0.25;
