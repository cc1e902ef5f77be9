pub mod device;
pub mod input;

pub use device::CpalDevice;
pub use input::{tone_key_for, HeldKeys, ToneCommand, ToneKey};
