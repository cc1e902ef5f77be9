// Tuning constants shared by the engine and the native frontend.

// Output level
pub const ACTIVE_LEVEL: f32 = 0.35; // linear gain while a tone is held; leaves mix headroom
pub const SILENT_LEVEL: f32 = 0.0;

// Click suppression
pub const DEFAULT_RAMP_MS: f32 = 0.0; // instantaneous amplitude steps in the core
pub const NATIVE_RAMP_MS: f32 = 5.0; // a few milliseconds is enough to hide mute/unmute clicks

// Reference pitches for the two default controls
pub const G4_HZ: f32 = 392.0;
pub const F4_HZ: f32 = 349.23;
pub const A4_HZ: f32 = 440.0;
pub const A4_MIDI: f32 = 69.0;
