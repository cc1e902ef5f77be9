use crate::constants::{A4_HZ, A4_MIDI};

/// Equal-tempered frequency of a (possibly fractional) MIDI note number.
pub fn midi_to_hz(midi: f32) -> f32 {
    A4_HZ * (2.0_f32).powf((midi - A4_MIDI) / 12.0)
}

/// Returns true if `frequency_hz` can be fed to the oscillator.
#[inline]
pub fn is_playable(frequency_hz: f32) -> bool {
    frequency_hz.is_finite() && frequency_hz > 0.0
}
