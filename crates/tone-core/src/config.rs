use crate::constants::{ACTIVE_LEVEL, DEFAULT_RAMP_MS};
use crate::error::{Result, ToneError};

/// User-tunable synthesis settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthConfig {
    /// Gain applied while a tone is held, in `[0, 1]`.
    pub active_level: f32,
    /// Duration of a full-scale amplitude change. Zero steps instantly.
    pub ramp_ms: f32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            active_level: ACTIVE_LEVEL,
            ramp_ms: DEFAULT_RAMP_MS,
        }
    }
}

impl SynthConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.active_level) {
            return Err(ToneError::InvalidConfig(format!(
                "active level {} outside [0, 1]",
                self.active_level
            )));
        }
        if !self.ramp_ms.is_finite() || self.ramp_ms < 0.0 {
            return Err(ToneError::InvalidConfig(format!(
                "ramp of {} ms must be finite and non-negative",
                self.ramp_ms
            )));
        }
        Ok(())
    }

    /// Number of frames a full-scale ramp spans at `sample_rate`.
    pub fn ramp_frames(&self, sample_rate: u32) -> u32 {
        (self.ramp_ms.max(0.0) as f64 * sample_rate as f64 / 1000.0).round() as u32
    }
}
