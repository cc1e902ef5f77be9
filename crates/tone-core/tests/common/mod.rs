// In-process stand-in for a platform audio device.
// The test thread plays the role of the real-time thread by pulling buffers.

#![allow(dead_code)]

use tone_core::{
    AudioDevice, AudioSession, RenderSource, StreamFormat, SynthConfig, ToneController, ToneError,
};

type Pull = Box<dyn FnMut(&mut [f32]) + Send>;

pub struct ManualDevice {
    pub format: StreamFormat,
    pub fail: bool,
    pub opens: usize,
    pub closes: usize,
    pull: Option<Pull>,
}

impl ManualDevice {
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            format: StreamFormat {
                sample_rate,
                channels,
            },
            fail: false,
            opens: 0,
            closes: 0,
            pull: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(44_100, 1)
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.pull.is_some()
    }

    /// Pull `frames` interleaved frames. A closed device yields silence.
    pub fn pull(&mut self, frames: usize) -> Vec<f32> {
        let mut buf = vec![0.0; frames * usize::from(self.format.channels)];
        self.pull_into(&mut buf);
        buf
    }

    pub fn pull_into(&mut self, buf: &mut [f32]) {
        match self.pull.as_mut() {
            Some(render) => render(buf),
            None => buf.fill(0.0),
        }
    }
}

impl AudioDevice for ManualDevice {
    fn open<S: RenderSource>(&mut self, mut source: S) -> Result<StreamFormat, ToneError> {
        self.opens += 1;
        if self.fail {
            return Err(ToneError::DeviceUnavailable("no default output device".into()));
        }
        source.prepare(self.format);
        self.pull = Some(Box::new(move |buf: &mut [f32]| source.render(buf)));
        Ok(self.format)
    }

    fn close(&mut self) {
        self.closes += 1;
        self.pull = None;
    }
}

pub fn open_controller(
    sample_rate: u32,
    channels: u16,
    config: SynthConfig,
) -> ToneController<ManualDevice> {
    let session = AudioSession::new(ManualDevice::new(sample_rate, channels), config);
    let mut controller = ToneController::new(session);
    controller.open().expect("manual device opens");
    controller
}

pub fn render(controller: &mut ToneController<ManualDevice>, frames: usize) -> Vec<f32> {
    controller.session_mut().device_mut().pull(frames)
}

/// Channel 0 of an interleaved buffer.
pub fn mono(buf: &[f32], channels: usize) -> Vec<f32> {
    buf.iter().step_by(channels).copied().collect()
}

pub fn rising_zero_crossings(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count()
}

pub fn max_step(samples: &[f32]) -> f32 {
    samples
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(0.0, f32::max)
}
