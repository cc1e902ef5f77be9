//! Control-thread API: hold a tone, release it.

use crate::constants::SILENT_LEVEL;
use crate::error::{Result, ToneError};
use crate::note::is_playable;
use crate::session::{AudioDevice, AudioSession, StreamFormat};

/// Monophonic tone controller.
///
/// Commands overwrite the shared oscillator parameters directly; nothing is
/// queued, so rapid press/drag/release gestures never build up work.
pub struct ToneController<D: AudioDevice> {
    session: AudioSession<D>,
    active: Option<f32>,
}

impl<D: AudioDevice> ToneController<D> {
    pub fn new(session: AudioSession<D>) -> Self {
        Self {
            session,
            active: None,
        }
    }

    /// Open the underlying session, logging rather than failing hard.
    pub fn open(&mut self) -> Result<StreamFormat> {
        self.session.open()
    }

    pub fn close(&mut self) {
        self.active = None;
        self.session.close();
    }

    /// Sound `frequency_hz` at the configured level.
    ///
    /// A tone already sounding at another pitch glides in place: the phase is
    /// left untouched. Does nothing while the session is closed.
    pub fn start_tone(&mut self, frequency_hz: f32) -> Result<()> {
        if !is_playable(frequency_hz) {
            return Err(ToneError::InvalidParameter {
                frequency: frequency_hz,
            });
        }
        if !self.session.is_open() {
            return Ok(());
        }
        let level = self.session.config().active_level;
        let params = self.session.params();
        if self.active == Some(frequency_hz)
            && params.frequency() == frequency_hz
            && params.amplitude() == level
        {
            return Ok(());
        }
        params.set_frequency(frequency_hz);
        params.set_amplitude(level);
        log::debug!("[tone] start {frequency_hz:.2} Hz");
        self.active = Some(frequency_hz);
        Ok(())
    }

    pub fn stop_tone(&mut self) {
        if self.active.take().is_some() {
            log::debug!("[tone] stop");
        }
        self.session.params().set_amplitude(SILENT_LEVEL);
    }

    pub fn active_frequency(&self) -> Option<f32> {
        self.active
    }

    pub fn session(&self) -> &AudioSession<D> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut AudioSession<D> {
        &mut self.session
    }
}
