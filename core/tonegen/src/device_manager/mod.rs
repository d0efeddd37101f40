use crate::renderer::Renderer;

pub mod cpal_dm;

#[derive(Clone, Debug, thiserror::Error)]
pub enum AudioDeviceError {
    #[error("no default output device available")]
    DeviceNotFound,
    #[error("failed to open output stream: {0}")]
    StreamBuildFailed(String),
    #[error("failed to start output stream: {0}")]
    StreamStartFailed(String),
    #[error("failed to stop output stream: {0}")]
    StreamPauseFailed(String),
}

/// Parameters requested when opening an output stream. Samples are always
/// interleaved 32-bit floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    pub sample_rate: u32,
    pub channels: u16,
    /// Frames per callback; `None` lets the driver decide.
    pub frames_per_buffer: Option<u32>,
}

/// An open output stream. Dropping it closes the stream, after which the
/// driver no longer calls into the renderer.
pub trait OutputStream {
    fn play(&self) -> Result<(), AudioDeviceError>;
    fn pause(&self) -> Result<(), AudioDeviceError>;
}

pub trait AudioDeviceManager {
    type Stream: OutputStream;

    /// Opens a paused stream on the default output device. `renderer` is
    /// moved into the driver callback and lives as long as the stream.
    fn open_output_stream(
        &mut self,
        config: &StreamConfig,
        renderer: Renderer,
    ) -> Result<Self::Stream, AudioDeviceError>;
}
