// Host-side tests for the key-hold logic that feeds the tone controller.

use tone_core::{F4_HZ, G4_HZ};
use tone_native::{tone_key_for, HeldKeys, ToneCommand, ToneKey};

#[test]
fn tone_key_for_valid_and_invalid_keys() {
    assert_eq!(tone_key_for("g"), Some(ToneKey::G));
    assert_eq!(tone_key_for("G"), Some(ToneKey::G));
    assert_eq!(tone_key_for("f"), Some(ToneKey::F));
    assert_eq!(tone_key_for("F"), Some(ToneKey::F));
    assert_eq!(tone_key_for("a"), None);
    assert_eq!(tone_key_for(""), None);
    assert_eq!(tone_key_for("gg"), None);
}

#[test]
fn keys_map_to_reference_pitches() {
    assert_eq!(ToneKey::G.frequency(), G4_HZ);
    assert_eq!(ToneKey::F.frequency(), F4_HZ);
}

#[test]
fn press_and_release_single_key() {
    let mut held = HeldKeys::default();
    assert_eq!(held.press(ToneKey::G), Some(ToneCommand::Start(G4_HZ)));
    assert_eq!(held.sounding(), Some(ToneKey::G));
    assert_eq!(held.release(ToneKey::G), Some(ToneCommand::Stop));
    assert_eq!(held.sounding(), None);
}

#[test]
fn repeated_press_is_ignored() {
    let mut held = HeldKeys::default();
    held.press(ToneKey::F);
    assert_eq!(held.press(ToneKey::F), None);
    assert_eq!(held.release(ToneKey::F), Some(ToneCommand::Stop));
}

#[test]
fn second_key_glides_and_release_falls_back() {
    let mut held = HeldKeys::default();
    held.press(ToneKey::G);
    assert_eq!(held.press(ToneKey::F), Some(ToneCommand::Start(F4_HZ)));
    assert_eq!(held.release(ToneKey::F), Some(ToneCommand::Start(G4_HZ)));
    assert_eq!(held.release(ToneKey::G), Some(ToneCommand::Stop));
}

#[test]
fn releasing_a_background_key_keeps_the_tone() {
    let mut held = HeldKeys::default();
    held.press(ToneKey::G);
    held.press(ToneKey::F);
    assert_eq!(held.release(ToneKey::G), None);
    assert_eq!(held.sounding(), Some(ToneKey::F));
    assert_eq!(held.release(ToneKey::F), Some(ToneCommand::Stop));
}

#[test]
fn release_without_press_does_nothing() {
    let mut held = HeldKeys::default();
    assert_eq!(held.release(ToneKey::G), None);
    assert_eq!(held.release_all(), None);
}

#[test]
fn focus_loss_releases_everything() {
    let mut held = HeldKeys::default();
    held.press(ToneKey::G);
    held.press(ToneKey::F);
    assert_eq!(held.release_all(), Some(ToneCommand::Stop));
    assert_eq!(held.sounding(), None);
    assert_eq!(held.press(ToneKey::G), Some(ToneCommand::Start(G4_HZ)));
}
