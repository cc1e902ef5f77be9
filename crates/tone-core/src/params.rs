//! Oscillator parameters shared between the control thread and the audio thread.
//!
//! Each cell has exactly one writer. The controller writes `frequency` and
//! `amplitude`; the render side only reads them. A stale value for one buffer
//! is harmless for an audio signal, so every access is a `Relaxed` atomic and
//! the audio thread never waits on the control thread.

use std::sync::atomic::{AtomicU32, Ordering};

/// An `f32` stored as its bit pattern in an `AtomicU32`.
#[derive(Debug, Default)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

#[derive(Debug, Default)]
pub struct OscillatorParams {
    frequency: AtomicF32,
    amplitude: AtomicF32,
}

impl OscillatorParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency.load()
    }

    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude.load()
    }

    pub(crate) fn set_frequency(&self, hz: f32) {
        self.frequency.store(hz);
    }

    pub(crate) fn set_amplitude(&self, gain: f32) {
        self.amplitude.store(gain);
    }
}
