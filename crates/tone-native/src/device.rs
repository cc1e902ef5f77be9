//! cpal binding for the audio session.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};

use tone_core::{AudioDevice, RenderSource, StreamFormat, ToneError};

/// Default output device of the default host, in its native mixer format.
#[derive(Default)]
pub struct CpalDevice {
    stream: Option<cpal::Stream>,
}

impl CpalDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }
}

impl AudioDevice for CpalDevice {
    fn open<S: RenderSource>(&mut self, mut source: S) -> Result<StreamFormat, ToneError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| ToneError::DeviceUnavailable("no default output device".into()))?;
        let supported = device
            .default_output_config()
            .map_err(ToneError::unavailable)?;
        let format = StreamFormat {
            sample_rate: supported.sample_rate().0,
            channels: supported.channels(),
        };
        log::info!(
            "[audio] {} on {:?}: {format}, {:?}",
            device.name().unwrap_or_else(|_| "unnamed device".into()),
            host.id(),
            supported.sample_format()
        );

        source.prepare(format);
        let config: cpal::StreamConfig = supported.config();
        let stream = match supported.sample_format() {
            SampleFormat::F32 => build_stream::<f32, S>(&device, &config, source),
            SampleFormat::F64 => build_stream::<f64, S>(&device, &config, source),
            SampleFormat::I8 => build_stream::<i8, S>(&device, &config, source),
            SampleFormat::I16 => build_stream::<i16, S>(&device, &config, source),
            SampleFormat::I32 => build_stream::<i32, S>(&device, &config, source),
            SampleFormat::I64 => build_stream::<i64, S>(&device, &config, source),
            SampleFormat::U8 => build_stream::<u8, S>(&device, &config, source),
            SampleFormat::U16 => build_stream::<u16, S>(&device, &config, source),
            SampleFormat::U32 => build_stream::<u32, S>(&device, &config, source),
            SampleFormat::U64 => build_stream::<u64, S>(&device, &config, source),
            other => Err(ToneError::DeviceUnavailable(format!(
                "unsupported sample format {other:?}"
            ))),
        }?;
        stream.play().map_err(ToneError::unavailable)?;
        self.stream = Some(stream);
        Ok(format)
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                log::warn!("[audio] pause on close failed: {err}");
            }
        }
    }
}

fn build_stream<T, S>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut source: S,
) -> Result<cpal::Stream, ToneError>
where
    T: SizedSample + FromSample<f32>,
    S: RenderSource,
{
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                source.render_with(data, |s| T::from_sample(s));
            },
            |err| log::error!("[audio] stream error: {err}"),
            None,
        )
        .map_err(ToneError::unavailable)
}
