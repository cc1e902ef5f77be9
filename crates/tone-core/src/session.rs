//! Audio device session: one long-lived connection to an output device.

use std::fmt;
use std::sync::Arc;

use crate::config::SynthConfig;
use crate::constants::SILENT_LEVEL;
use crate::error::Result;
use crate::oscillator::Oscillator;
use crate::params::OscillatorParams;
use crate::render::RenderSource;

/// Native format reported by the output device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz x {} ch", self.sample_rate, self.channels)
    }
}

/// Platform binding for an audio output.
///
/// `open` negotiates the device's native format, calls
/// [`RenderSource::prepare`] with it, hands the source to the platform's
/// audio thread and starts the data flow. From then on the platform decides
/// when the source is pulled.
pub trait AudioDevice {
    fn open<S: RenderSource>(&mut self, source: S) -> Result<StreamFormat>;

    /// Stop the data flow and release the device. Must tolerate repeat calls.
    fn close(&mut self);
}

pub struct AudioSession<D: AudioDevice> {
    device: D,
    config: SynthConfig,
    params: Arc<OscillatorParams>,
    format: Option<StreamFormat>,
}

impl<D: AudioDevice> AudioSession<D> {
    pub fn new(device: D, config: SynthConfig) -> Self {
        Self {
            device,
            config,
            params: Arc::new(OscillatorParams::new()),
            format: None,
        }
    }

    /// Open the device with a fresh oscillator bound to the shared parameters.
    ///
    /// On failure the session stays closed and can be retried later.
    pub fn open(&mut self) -> Result<StreamFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        self.config.validate()?;
        let oscillator = Oscillator::new(Arc::clone(&self.params), &self.config);
        match self.device.open(oscillator) {
            Ok(format) => {
                log::info!("[session] audio output open at {format}");
                self.format = Some(format);
                Ok(format)
            }
            Err(err) => {
                log::warn!("[session] {err}; continuing without sound");
                Err(err)
            }
        }
    }

    pub fn close(&mut self) {
        if self.format.take().is_some() {
            // leave the next open silent
            self.params.set_amplitude(SILENT_LEVEL);
            self.device.close();
            log::info!("[session] audio output closed");
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.format.is_some()
    }

    pub fn format(&self) -> Option<StreamFormat> {
        self.format
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn params(&self) -> &Arc<OscillatorParams> {
        &self.params
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

impl<D: AudioDevice> Drop for AudioSession<D> {
    fn drop(&mut self) {
        self.close();
    }
}
