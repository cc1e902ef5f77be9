use std::f32::consts::TAU;
use std::sync::Arc;

use crate::config::SynthConfig;
use crate::params::OscillatorParams;
use crate::session::StreamFormat;

/// Render-side sine oscillator.
///
/// Owns the phase accumulator and the smoothed output gain. Frequency and
/// target amplitude are read from the shared [`OscillatorParams`] every frame,
/// so a controller update lands on the next frame rendered.
#[derive(Debug)]
pub struct Oscillator {
    params: Arc<OscillatorParams>,
    phase: f32, // radians, kept in [0, TAU]
    gain: f32,  // amplitude actually applied; follows the shared target
    config: SynthConfig,
    ramp_step: f32,  // gain change per frame; 0 steps instantly
    rad_per_hz: f32, // TAU / sample_rate; 0 until prepared
    channels: usize,
}

impl Oscillator {
    pub fn new(params: Arc<OscillatorParams>, config: &SynthConfig) -> Self {
        Self {
            params,
            phase: 0.0,
            gain: 0.0,
            config: *config,
            ramp_step: 0.0,
            rad_per_hz: 0.0,
            channels: 1,
        }
    }

    /// Adopt the negotiated device format. Phase and gain carry over.
    pub fn prepare(&mut self, format: StreamFormat) {
        self.channels = usize::from(format.channels.max(1));
        if format.sample_rate == 0 {
            self.rad_per_hz = 0.0;
            self.ramp_step = 0.0;
            return;
        }
        self.rad_per_hz = TAU / format.sample_rate as f32;
        let frames = self.config.ramp_frames(format.sample_rate);
        self.ramp_step = if frames == 0 { 0.0 } else { 1.0 / frames as f32 };
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn gain(&self) -> f32 {
        self.gain
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn params(&self) -> &Arc<OscillatorParams> {
        &self.params
    }

    /// Produce one mono sample and advance the phase by one frame.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let frequency = self.params.frequency();
        let target = self.params.amplitude();
        if self.rad_per_hz == 0.0 || !frequency.is_finite() || !target.is_finite() {
            return 0.0;
        }

        self.follow(target.clamp(0.0, 1.0));
        let sample = if self.gain == 0.0 {
            0.0
        } else {
            self.phase.sin() * self.gain
        };

        self.phase += (frequency * self.rad_per_hz).max(0.0);
        if self.phase >= TAU {
            self.phase -= TAU;
            if self.phase >= TAU {
                // increment above TAU: frequency beyond the sample rate
                self.phase %= TAU;
            }
        }
        sample
    }

    #[inline]
    fn follow(&mut self, target: f32) {
        let delta = target - self.gain;
        if self.ramp_step == 0.0 || delta.abs() <= self.ramp_step {
            self.gain = target;
        } else {
            self.gain += self.ramp_step.copysign(delta);
        }
    }
}
