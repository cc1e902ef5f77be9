//! Key-hold bookkeeping for the two tone keys.
//!
//! Keeps the press order so that releasing the sounding key falls back to a
//! key that is still held instead of cutting the tone.

use tone_core::{F4_HZ, G4_HZ};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneKey {
    G,
    F,
}

impl ToneKey {
    pub fn frequency(self) -> f32 {
        match self {
            ToneKey::G => G4_HZ,
            ToneKey::F => F4_HZ,
        }
    }
}

#[inline]
pub fn tone_key_for(key: &str) -> Option<ToneKey> {
    match key {
        "g" | "G" => Some(ToneKey::G),
        "f" | "F" => Some(ToneKey::F),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToneCommand {
    Start(f32),
    Stop,
}

#[derive(Debug, Default)]
pub struct HeldKeys {
    held: Vec<ToneKey>, // press order; the last entry is sounding
}

impl HeldKeys {
    pub fn sounding(&self) -> Option<ToneKey> {
        self.held.last().copied()
    }

    /// A fresh press sounds immediately. Repeats of a held key do nothing.
    pub fn press(&mut self, key: ToneKey) -> Option<ToneCommand> {
        if self.held.contains(&key) {
            return None;
        }
        self.held.push(key);
        Some(ToneCommand::Start(key.frequency()))
    }

    pub fn release(&mut self, key: ToneKey) -> Option<ToneCommand> {
        let pos = self.held.iter().position(|k| *k == key)?;
        let was_sounding = pos + 1 == self.held.len();
        self.held.remove(pos);
        if !was_sounding {
            return None;
        }
        Some(match self.sounding() {
            Some(next) => ToneCommand::Start(next.frequency()),
            None => ToneCommand::Stop,
        })
    }

    /// Forget every key, e.g. when the window loses focus mid-press.
    pub fn release_all(&mut self) -> Option<ToneCommand> {
        if self.held.is_empty() {
            return None;
        }
        self.held.clear();
        Some(ToneCommand::Stop)
    }
}
