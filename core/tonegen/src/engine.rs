use std::fmt;

use waveform::generator::{ToneGenerator, WaveformKind};

use crate::{
    device_manager::{
        AudioDeviceError, AudioDeviceManager, OutputStream, StreamConfig,
        cpal_dm::CpalAudioDeviceManager,
    },
    renderer::Renderer,
};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Device(#[from] AudioDeviceError),
    #[error("invalid stream configuration: {sample_rate} Hz with {channels} channel(s)")]
    InvalidStreamConfig { sample_rate: u32, channels: u16 },
    #[error("a stream is already open")]
    StreamAlreadyOpen,
    #[error("no open stream")]
    StreamNotOpen,
    #[error("stream is already playing")]
    AlreadyPlaying,
    #[error("stream is not playing")]
    NotPlaying,
}

impl EngineError {
    /// Calls made in the wrong state, as opposed to driver failures.
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::AlreadyPlaying | Self::NotPlaying)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No stream open.
    Idle,
    /// Stream open and paused.
    Ready,
    Playing,
}

/// Plays a tone on an output stream.
///
/// `init` opens the stream and builds the generator, which is then owned by
/// the stream's callback. `stop` closes the stream again, so every
/// `start` needs a fresh `init` after a `stop`. Dropping a playing engine
/// stops it first.
///
/// The `try_*` methods return the failure; `init`, `start` and `stop` log
/// it and report `false` instead.
pub struct PlaybackEngine<D: AudioDeviceManager = CpalAudioDeviceManager> {
    device_manager: D,
    stream: Option<D::Stream>,
    playing: bool,
    sample_rate: u32,
    channels: u16,
    frames_per_buffer: Option<u32>,
    waveform: Option<WaveformKind>,
    seed: Option<u64>,
}

impl PlaybackEngine {
    pub fn new() -> Self {
        Self::with_device_manager(CpalAudioDeviceManager::new())
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: AudioDeviceManager> PlaybackEngine<D> {
    pub fn with_device_manager(device_manager: D) -> Self {
        Self {
            device_manager,
            stream: None,
            playing: false,
            sample_rate: 0,
            channels: 0,
            frames_per_buffer: None,
            waveform: None,
            seed: None,
        }
    }

    /// Seed for the white noise generator; `None` seeds from OS entropy.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Frames per callback to request from the driver.
    pub fn with_frames_per_buffer(mut self, frames: Option<u32>) -> Self {
        self.frames_per_buffer = frames;
        self
    }

    pub fn init(&mut self, sample_rate: u32, channels: u16, waveform_id: u32) -> bool {
        report("initialize playback", self.try_init(sample_rate, channels, waveform_id))
    }

    pub fn start(&mut self) -> bool {
        report("start playback", self.try_start())
    }

    pub fn stop(&mut self) -> bool {
        report("stop playback", self.try_stop())
    }

    /// Opens a paused stream on the default output device and builds the
    /// generator selected by `waveform_id` (unknown ids pick sine).
    pub fn try_init(
        &mut self,
        sample_rate: u32,
        channels: u16,
        waveform_id: u32,
    ) -> Result<(), EngineError> {
        if self.stream.is_some() {
            return Err(EngineError::StreamAlreadyOpen);
        }

        if sample_rate == 0 || channels == 0 {
            return Err(EngineError::InvalidStreamConfig {
                sample_rate,
                channels,
            });
        }

        let kind = WaveformKind::from_id(waveform_id).unwrap_or_else(|| {
            log::warn!("Unknown tone generator {waveform_id}, falling back to sine");
            WaveformKind::Sine
        });

        if channels > 1 {
            log::info!("Writing the mono tone to each of the {channels} channels");
        }

        let config = StreamConfig {
            sample_rate,
            channels,
            frames_per_buffer: self.frames_per_buffer,
        };
        let renderer = Renderer::new(ToneGenerator::new(kind, self.seed), channels);
        let stream = self.device_manager.open_output_stream(&config, renderer)?;

        self.stream = Some(stream);
        self.sample_rate = sample_rate;
        self.channels = channels;
        self.waveform = Some(kind);

        log::debug!(
            "Opened {kind} (id {}) stream at {sample_rate} Hz, {channels} channel(s)",
            kind.id()
        );
        Ok(())
    }

    pub fn try_start(&mut self) -> Result<(), EngineError> {
        if self.playing {
            return Err(EngineError::AlreadyPlaying);
        }

        let stream = self.stream.as_ref().ok_or(EngineError::StreamNotOpen)?;
        stream.play()?;
        self.playing = true;

        log::debug!("Playback started");
        Ok(())
    }

    /// Pauses and closes the stream. Closing drops the generator once the
    /// driver has finished its last callback.
    pub fn try_stop(&mut self) -> Result<(), EngineError> {
        if !self.playing {
            return Err(EngineError::NotPlaying);
        }

        if let Some(stream) = self.stream.as_ref() {
            stream.pause()?;
        }
        self.playing = false;
        self.stream = None;

        log::debug!("Playback stopped, stream closed");
        Ok(())
    }

    pub fn state(&self) -> EngineState {
        match (self.playing, self.stream.is_some()) {
            (true, _) => EngineState::Playing,
            (false, true) => EngineState::Ready,
            (false, false) => EngineState::Idle,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_stream_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Waveform chosen by the last successful `init`.
    pub fn waveform(&self) -> Option<WaveformKind> {
        self.waveform
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames_per_buffer(&self) -> Option<u32> {
        self.frames_per_buffer
    }
}

impl<D: AudioDeviceManager> Drop for PlaybackEngine<D> {
    fn drop(&mut self) {
        if self.playing {
            self.stop();
        }
    }
}

impl<D: AudioDeviceManager> fmt::Debug for PlaybackEngine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("state", &self.state())
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .field("frames_per_buffer", &self.frames_per_buffer)
            .field("waveform", &self.waveform)
            .finish_non_exhaustive()
    }
}

fn report(action: &str, result: Result<(), EngineError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) if e.is_state_error() => {
            log::warn!("Cannot {action}: {e}");
            false
        }
        Err(e) => {
            log::error!("Failed to {action}: {e}");
            false
        }
    }
}
