//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! This is the canonical, platform-neutral key code used throughout
//! KeyControl.  The key name registry resolves names to these codes, and the
//! injection backend translates them to OS-native codes at the last moment.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a unique number to
//! every key on a keyboard.  These numbers are called *Usage IDs* and they are
//! grouped by *Usage Page*.  All keyboard keys are on page 0x07 ("Keyboard/Keypad").
//!
//! | Key          | HID Usage ID |
//! |--------------|-------------|
//! | Letter A     | 0x04        |
//! | Enter        | 0x28        |
//! | F13          | 0x68        |
//! | Help         | 0x75        |
//!
//! HID codes represent **physical key positions**, not characters.  The
//! character a key produces depends on the active keyboard layout, which is
//! exactly what a remote "press this key" service wants.
//!
//! # Vendor slots
//!
//! Usage IDs from 0xE8 upward are reserved on the keyboard page.  KeyControl
//! places its twelve platform-extension slots (`SP1`–`SP12`) at 0xF0–0xFB so
//! they never collide with a standard key.  The injection backend decides which
//! physical key each slot drives.
//!
//! # Consumer-page keys
//!
//! Media, browser and launcher keys are not on the keyboard page.  They live
//! on the Consumer page (0x0C) and are stored here as `0xC000 | usage`, so a
//! single `u16` still identifies every key without overlapping page 0x07.
//!
//! # The `Unknown` sentinel
//!
//! [`HidKeyCode::Unknown`] (value 0x0000) means "unresolved".  It is what the
//! registry returns for any unknown name, and it must never reach the OS.

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID on the keyboard/keypad page.
/// [`HidKeyCode::Unknown`] represents any key that has no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys F1–F12 (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    // ISO key between left Shift and Z (HID 0x64)
    IntlBackslash = 0x64,

    // Application key (HID 0x65)
    ContextMenu = 0x65,

    // Function keys F13–F24 (HID 0x68–0x73)
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,

    // Editing and system keys (HID 0x74–0x9C)
    Execute = 0x74,
    Help = 0x75,
    Select = 0x77,
    Mute = 0x7F,
    VolumeUp = 0x80,
    VolumeDown = 0x81,
    Cancel = 0x9B,
    Clear = 0x9C,

    // IME keys (International2/4/5, LANG1/2)
    KanaMode = 0x88,
    Convert = 0x8A,
    NonConvert = 0x8B,
    HangulMode = 0x90,
    HanjaMode = 0x91,

    // Alt as a standalone key (HID 0xE2, 0xE6)
    LeftAlt = 0xE2,
    RightAlt = 0xE6,

    // Platform-extension slots (reserved range, 0xF0–0xFB)
    Special1 = 0xF0,
    Special2 = 0xF1,
    Special3 = 0xF2,
    Special4 = 0xF3,
    Special5 = 0xF4,
    Special6 = 0xF5,
    Special7 = 0xF6,
    Special8 = 0xF7,
    Special9 = 0xF8,
    Special10 = 0xF9,
    Special11 = 0xFA,
    Special12 = 0xFB,

    // Consumer page (0x0C), stored as 0xC000 | usage
    MediaNextTrack = 0xC0B5,
    MediaPrevTrack = 0xC0B6,
    MediaStop = 0xC0B7,
    MediaPlayPause = 0xC0CD,
    LaunchMediaSelect = 0xC183,
    LaunchMail = 0xC18A,
    LaunchApp2 = 0xC192,
    LaunchApp1 = 0xC194,
    BrowserSearch = 0xC221,
    BrowserHome = 0xC223,
    BrowserBack = 0xC224,
    BrowserForward = 0xC225,
    BrowserStop = 0xC226,
    BrowserRefresh = 0xC227,
    BrowserFavorites = 0xC22A,

    /// Sentinel for unresolved key names.  Never dispatched.
    Unknown = 0x0000,
}

impl HidKeyCode {
    /// Returns the raw USB HID Usage ID value for this key code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns `true` for every code except [`HidKeyCode::Unknown`].
    pub fn is_valid(self) -> bool {
        self != HidKeyCode::Unknown
    }

    /// Returns `true` for the `SP1`–`SP12` platform-extension slots.
    pub fn is_special_slot(self) -> bool {
        (0xF0..=0xFB).contains(&self.as_u16())
    }

    /// Returns `true` for keys taken from the Consumer page.
    pub fn is_consumer(self) -> bool {
        self.as_u16() & 0xF000 == 0xC000
    }

    /// Maps a platform-extension slot to the standard key it drives.
    ///
    /// Every slot is bound to one OEM key position, in the order the slots
    /// are numbered.  Returns `self` unchanged for non-slot codes.
    pub fn physical(self) -> HidKeyCode {
        match self {
            HidKeyCode::Special1 => HidKeyCode::Backquote,
            HidKeyCode::Special2 => HidKeyCode::Minus,
            HidKeyCode::Special3 => HidKeyCode::Equal,
            HidKeyCode::Special4 => HidKeyCode::BracketLeft,
            HidKeyCode::Special5 => HidKeyCode::BracketRight,
            HidKeyCode::Special6 => HidKeyCode::Semicolon,
            HidKeyCode::Special7 => HidKeyCode::Quote,
            HidKeyCode::Special8 => HidKeyCode::Backslash,
            HidKeyCode::Special9 => HidKeyCode::Comma,
            HidKeyCode::Special10 => HidKeyCode::Period,
            HidKeyCode::Special11 => HidKeyCode::Slash,
            HidKeyCode::Special12 => HidKeyCode::IntlBackslash,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spot checks against the USB HID Usage Tables.
    const STANDARD_KEYS: &[(u16, HidKeyCode)] = &[
        (0x04, HidKeyCode::KeyA),
        (0x1D, HidKeyCode::KeyZ),
        (0x1E, HidKeyCode::Digit1),
        (0x27, HidKeyCode::Digit0),
        (0x28, HidKeyCode::Enter),
        (0x29, HidKeyCode::Escape),
        (0x2A, HidKeyCode::Backspace),
        (0x2C, HidKeyCode::Space),
        (0x3A, HidKeyCode::F1),
        (0x45, HidKeyCode::F12),
        (0x49, HidKeyCode::Insert),
        (0x4C, HidKeyCode::Delete),
        (0x52, HidKeyCode::ArrowUp),
        (0x58, HidKeyCode::NumpadEnter),
        (0x62, HidKeyCode::Numpad0),
        (0x64, HidKeyCode::IntlBackslash),
        (0x68, HidKeyCode::F13),
        (0x73, HidKeyCode::F24),
        (0x75, HidKeyCode::Help),
        (0x7F, HidKeyCode::Mute),
        (0x80, HidKeyCode::VolumeUp),
        (0x81, HidKeyCode::VolumeDown),
        (0xE2, HidKeyCode::LeftAlt),
    ];

    #[test]
    fn test_as_u16_returns_correct_hid_value_for_standard_keys() {
        for &(expected_raw, code) in STANDARD_KEYS {
            // Arrange / Act
            let raw = code.as_u16();

            // Assert
            assert_eq!(
                raw, expected_raw,
                "{code:?}.as_u16() should return 0x{expected_raw:04X}"
            );
        }
    }

    #[test]
    fn test_unknown_code_is_zero_and_invalid() {
        assert_eq!(HidKeyCode::Unknown.as_u16(), 0x0000);
        assert!(!HidKeyCode::Unknown.is_valid());
    }

    #[test]
    fn test_standard_keys_are_valid() {
        for &(_, code) in STANDARD_KEYS {
            assert!(code.is_valid(), "{code:?} should be valid");
        }
    }

    #[test]
    fn test_special_slots_occupy_reserved_range() {
        let slots = [
            HidKeyCode::Special1,
            HidKeyCode::Special2,
            HidKeyCode::Special3,
            HidKeyCode::Special4,
            HidKeyCode::Special5,
            HidKeyCode::Special6,
            HidKeyCode::Special7,
            HidKeyCode::Special8,
            HidKeyCode::Special9,
            HidKeyCode::Special10,
            HidKeyCode::Special11,
            HidKeyCode::Special12,
        ];
        for (i, &slot) in slots.iter().enumerate() {
            assert_eq!(slot.as_u16(), 0xF0 + i as u16);
            assert!(slot.is_special_slot(), "{slot:?} should be a special slot");
            assert!(
                !slot.physical().is_special_slot(),
                "{slot:?} must drive a standard key"
            );
        }
    }

    #[test]
    fn test_physical_leaves_standard_keys_unchanged() {
        for &(_, code) in STANDARD_KEYS {
            assert_eq!(code.physical(), code);
            assert!(!code.is_special_slot());
        }
    }

    #[test]
    fn test_special_slot_bindings_follow_oem_row_order() {
        assert_eq!(HidKeyCode::Special1.physical(), HidKeyCode::Backquote);
        assert_eq!(HidKeyCode::Special2.physical(), HidKeyCode::Minus);
        assert_eq!(HidKeyCode::Special11.physical(), HidKeyCode::Slash);
        assert_eq!(HidKeyCode::Special12.physical(), HidKeyCode::IntlBackslash);
    }

    #[test]
    fn test_consumer_keys_carry_their_page_in_the_high_nibble() {
        // Arrange
        let consumer = [
            (HidKeyCode::MediaPlayPause, 0xCD),
            (HidKeyCode::MediaNextTrack, 0xB5),
            (HidKeyCode::BrowserBack, 0x224),
            (HidKeyCode::LaunchMail, 0x18A),
        ];

        for (code, usage) in consumer {
            // Act / Assert
            assert!(code.is_consumer(), "{code:?} should be a consumer key");
            assert_eq!(code.as_u16() & 0x0FFF, usage);
            assert!(!code.is_special_slot());
            assert_eq!(code.physical(), code);
        }
        for &(_, code) in STANDARD_KEYS {
            assert!(!code.is_consumer(), "{code:?} is on the keyboard page");
        }
    }

    #[test]
    fn test_function_keys_f13_to_f24_are_contiguous() {
        let keys = [
            HidKeyCode::F13,
            HidKeyCode::F14,
            HidKeyCode::F15,
            HidKeyCode::F16,
            HidKeyCode::F17,
            HidKeyCode::F18,
            HidKeyCode::F19,
            HidKeyCode::F20,
            HidKeyCode::F21,
            HidKeyCode::F22,
            HidKeyCode::F23,
            HidKeyCode::F24,
        ];
        for (i, &key) in keys.iter().enumerate() {
            let expected = 0x68u16 + i as u16;
            assert_eq!(key.as_u16(), expected, "{key:?} should be 0x{expected:02X}");
        }
    }
}
