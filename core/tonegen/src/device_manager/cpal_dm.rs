use super::{AudioDeviceManager, OutputStream, StreamConfig};
use crate::{device_manager::AudioDeviceError, renderer::Renderer};
use cpal::{
    OutputCallbackInfo,
    traits::{DeviceTrait as _, HostTrait as _, StreamTrait},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct CpalAudioDeviceManager;

impl CpalAudioDeviceManager {
    pub fn new() -> Self {
        Self
    }

    fn build_output_stream(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        mut renderer: Renderer,
    ) -> Result<cpal::Stream, AudioDeviceError> {
        let error_cb = move |err| {
            log::error!("Stream error: {err}");
        };

        log::debug!(
            "Building f32 output stream with {} interleaved channel(s)",
            renderer.channels()
        );

        let data_cb = move |data: &mut [f32], _: &OutputCallbackInfo| {
            renderer.render(data);
        };

        device
            .build_output_stream(config, data_cb, error_cb, None)
            .map_err(|e| AudioDeviceError::StreamBuildFailed(e.to_string()))
    }
}

impl AudioDeviceManager for CpalAudioDeviceManager {
    type Stream = cpal::Stream;

    fn open_output_stream(
        &mut self,
        config: &StreamConfig,
        renderer: Renderer,
    ) -> Result<cpal::Stream, AudioDeviceError> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or(AudioDeviceError::DeviceNotFound)?;

        if let Ok(name) = device.name() {
            log::info!("Using output device '{name}' on host {:?}", host.id());
        }

        let stream_config = cpal::StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: config
                .frames_per_buffer
                .map_or(cpal::BufferSize::Default, cpal::BufferSize::Fixed),
        };

        let stream = Self::build_output_stream(&device, &stream_config, renderer)?;

        // some backends start streams as soon as they are built
        if let Err(e) = StreamTrait::pause(&stream) {
            log::debug!("Could not pause freshly built stream: {e}");
        }

        Ok(stream)
    }
}

impl OutputStream for cpal::Stream {
    fn play(&self) -> Result<(), AudioDeviceError> {
        StreamTrait::play(self).map_err(|e| AudioDeviceError::StreamStartFailed(e.to_string()))
    }

    fn pause(&self) -> Result<(), AudioDeviceError> {
        StreamTrait::pause(self).map_err(|e| AudioDeviceError::StreamPauseFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waveform::generator::{ToneGenerator, WaveformKind};

    #[test]
    #[ignore = "requires an audio output device"]
    fn test_cpal_stream_initializes_successfully() {
        let mut manager = CpalAudioDeviceManager::new();
        let config = StreamConfig {
            sample_rate: 44100,
            channels: 1,
            frames_per_buffer: None,
        };
        let renderer = Renderer::new(ToneGenerator::new(WaveformKind::Sine, None), 1);

        let stream = manager.open_output_stream(&config, renderer);
        assert!(stream.is_ok(), "Stream should open successfully");
        assert!(OutputStream::play(&stream.unwrap()).is_ok());
    }
}
