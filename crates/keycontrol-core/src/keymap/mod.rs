//! Key names, key codes and per-platform translation tables.
//!
//! The canonical representation is the USB HID Usage ID (page 0x07,
//! Keyboard/Keypad).  Names are resolved to HID codes by [`names`]; HID codes
//! are translated to OS-native codes only at the injection boundary.

pub mod hid;
pub mod linux_x11;
pub mod macos_cg;
pub mod names;
pub mod windows_vk;

pub use hid::HidKeyCode;

/// Unified key mapper providing every translation direction the server needs.
pub struct KeyMapper;

impl KeyMapper {
    /// Resolves a canonical key name.  See [`names::resolve`].
    pub fn resolve_name(name: &str) -> HidKeyCode {
        names::resolve(name)
    }

    /// Translates a [`HidKeyCode`] to an X11 KeySym value for Linux hosts.
    pub fn hid_to_x11_keysym(hid: HidKeyCode) -> Option<u32> {
        linux_x11::hid_to_keysym(hid.physical())
    }

    /// Translates a [`HidKeyCode`] to a Windows Virtual Key code.
    pub fn hid_to_windows_vk(hid: HidKeyCode) -> Option<u8> {
        windows_vk::hid_to_vk(hid.physical())
    }

    /// Translates a [`HidKeyCode`] to a macOS `CGKeyCode` value.
    pub fn hid_to_macos_cgkeycode(hid: HidKeyCode) -> Option<u16> {
        macos_cg::hid_to_cgkeycode(hid.physical())
    }

    /// Translates a [`HidKeyCode`] to the native code of the platform this
    /// binary was compiled for.
    ///
    /// Platform-extension slots are bound to their physical key first.
    /// Returns `None` when the key does not exist on this platform.
    pub fn hid_to_native(hid: HidKeyCode) -> Option<u32> {
        #[cfg(target_os = "windows")]
        {
            Self::hid_to_windows_vk(hid).map(u32::from)
        }
        #[cfg(target_os = "macos")]
        {
            Self::hid_to_macos_cgkeycode(hid).map(u32::from)
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Self::hid_to_x11_keysym(hid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapper_binds_special_slots_before_translating() {
        assert_eq!(
            KeyMapper::hid_to_x11_keysym(HidKeyCode::Special2),
            KeyMapper::hid_to_x11_keysym(HidKeyCode::Minus)
        );
        assert_eq!(
            KeyMapper::hid_to_windows_vk(HidKeyCode::Special8),
            KeyMapper::hid_to_windows_vk(HidKeyCode::Backslash)
        );
        assert_eq!(
            KeyMapper::hid_to_macos_cgkeycode(HidKeyCode::Special10),
            KeyMapper::hid_to_macos_cgkeycode(HidKeyCode::Period)
        );
    }

    #[test]
    fn test_native_translation_rejects_unknown() {
        assert_eq!(KeyMapper::hid_to_native(HidKeyCode::Unknown), None);
    }

    #[test]
    fn test_native_translation_covers_common_keys() {
        for name in ["A", "ENTER", "F5", "LEFT", "KP7", "SP1"] {
            let code = KeyMapper::resolve_name(name);
            assert!(
                KeyMapper::hid_to_native(code).is_some(),
                "{name} should have a native code on this platform"
            );
        }
    }
}
