//! Cross-platform key injection using enigo.
//!
//! Works with X11 on Linux, `SendInput` on Windows and CGEvent on macOS.
//! A fresh [`Enigo`] connection is opened for every dispatch, so a restarted
//! display server does not leave the service holding a dead handle.

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use keycontrol_core::{HidKeyCode, KeyMapper, ModifierSet};
use tracing::warn;

use crate::application::{InjectionError, KeyInjector};

/// [`KeyInjector`] backed by the OS input system.
#[derive(Debug, Default)]
pub struct EnigoInjector;

impl EnigoInjector {
    pub fn new() -> Self {
        Self
    }
}

impl KeyInjector for EnigoInjector {
    fn inject(&self, keys: &[HidKeyCode], modifiers: ModifierSet) -> Result<(), InjectionError> {
        // Translate everything before touching the OS so an unmappable key
        // never leaves a modifier stuck down.
        let keys = keys
            .iter()
            .map(|&code| native_key(code))
            .collect::<Result<Vec<_>, _>>()?;

        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectionError::Construct(e.to_string()))?;

        let sequence: Vec<Key> = modifier_keys(modifiers).into_iter().chain(keys).collect();
        let mut held: Vec<Key> = Vec::with_capacity(sequence.len());

        for key in sequence {
            if let Err(e) = enigo.key(key, Direction::Press) {
                release_all(&mut enigo, &held);
                return Err(InjectionError::Launch(format!("press {key:?}: {e}")));
            }
            held.push(key);
        }

        while let Some(key) = held.pop() {
            if let Err(e) = enigo.key(key, Direction::Release) {
                release_all(&mut enigo, &held);
                return Err(InjectionError::Launch(format!("release {key:?}: {e}")));
            }
        }
        Ok(())
    }
}

/// Modifier keys in press order: Control, Alt, Shift, Meta.
fn modifier_keys(modifiers: ModifierSet) -> Vec<Key> {
    [
        (modifiers.ctrl, Key::Control),
        (modifiers.alt, Key::Alt),
        (modifiers.shift, Key::Shift),
        (modifiers.meta, Key::Meta),
    ]
    .into_iter()
    .filter_map(|(active, key)| active.then_some(key))
    .collect()
}

fn native_key(code: HidKeyCode) -> Result<Key, InjectionError> {
    KeyMapper::hid_to_native(code)
        .map(Key::Other)
        .ok_or_else(|| InjectionError::Launch(format!("no native key code for {code:?}")))
}

/// Best-effort release of keys still held after a failure, newest first.
fn release_all(enigo: &mut Enigo, held: &[Key]) {
    for &key in held.iter().rev() {
        if let Err(e) = enigo.key(key, Direction::Release) {
            warn!("could not release {key:?} after failed injection: {e}");
        }
    }
}
