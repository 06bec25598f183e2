//! HID Usage ID to Windows Virtual Key (VK) code translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//! https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes
//!
//! # What is a Windows Virtual Key (VK) code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code"
//! (`VK_RETURN = 0x0D`, `VK_SPACE = 0x20`, ...).  Letters and digits reuse
//! their uppercase ASCII values, so `VK_A = 0x41` and `VK_0 = 0x30`.
//! Punctuation keys live in the `VK_OEM_*` range because their printed
//! symbol depends on the keyboard layout.

use super::hid::HidKeyCode;

/// Translates a [`HidKeyCode`] to a Windows Virtual Key code.
///
/// Returns `None` for [`HidKeyCode::Unknown`] and for the platform-extension
/// slots; resolve slots with [`HidKeyCode::physical`] first.
pub fn hid_to_vk(hid: HidKeyCode) -> Option<u8> {
    use HidKeyCode::*;
    let vk = match hid {
        // Letters (VK_A=0x41 … VK_Z=0x5A)
        KeyA => 0x41,
        KeyB => 0x42,
        KeyC => 0x43,
        KeyD => 0x44,
        KeyE => 0x45,
        KeyF => 0x46,
        KeyG => 0x47,
        KeyH => 0x48,
        KeyI => 0x49,
        KeyJ => 0x4A,
        KeyK => 0x4B,
        KeyL => 0x4C,
        KeyM => 0x4D,
        KeyN => 0x4E,
        KeyO => 0x4F,
        KeyP => 0x50,
        KeyQ => 0x51,
        KeyR => 0x52,
        KeyS => 0x53,
        KeyT => 0x54,
        KeyU => 0x55,
        KeyV => 0x56,
        KeyW => 0x57,
        KeyX => 0x58,
        KeyY => 0x59,
        KeyZ => 0x5A,

        // Digit row (VK_0=0x30 … VK_9=0x39)
        Digit0 => 0x30,
        Digit1 => 0x31,
        Digit2 => 0x32,
        Digit3 => 0x33,
        Digit4 => 0x34,
        Digit5 => 0x35,
        Digit6 => 0x36,
        Digit7 => 0x37,
        Digit8 => 0x38,
        Digit9 => 0x39,

        // Control keys
        Enter => 0x0D,       // VK_RETURN
        Escape => 0x1B,      // VK_ESCAPE
        Backspace => 0x08,   // VK_BACK
        Tab => 0x09,         // VK_TAB
        Space => 0x20,       // VK_SPACE
        CapsLock => 0x14,    // VK_CAPITAL
        ScrollLock => 0x91,  // VK_SCROLL
        Pause => 0x13,       // VK_PAUSE
        PrintScreen => 0x2C, // VK_SNAPSHOT
        ContextMenu => 0x5D, // VK_APPS
        Help => 0x2F,        // VK_HELP

        // Navigation
        Insert => 0x2D,     // VK_INSERT
        Delete => 0x2E,     // VK_DELETE
        Home => 0x24,       // VK_HOME
        End => 0x23,        // VK_END
        PageUp => 0x21,     // VK_PRIOR
        PageDown => 0x22,   // VK_NEXT
        ArrowLeft => 0x25,  // VK_LEFT
        ArrowUp => 0x26,    // VK_UP
        ArrowRight => 0x27, // VK_RIGHT
        ArrowDown => 0x28,  // VK_DOWN

        // Function keys (VK_F1=0x70 … VK_F24=0x87)
        F1 => 0x70,
        F2 => 0x71,
        F3 => 0x72,
        F4 => 0x73,
        F5 => 0x74,
        F6 => 0x75,
        F7 => 0x76,
        F8 => 0x77,
        F9 => 0x78,
        F10 => 0x79,
        F11 => 0x7A,
        F12 => 0x7B,
        F13 => 0x7C,
        F14 => 0x7D,
        F15 => 0x7E,
        F16 => 0x7F,
        F17 => 0x80,
        F18 => 0x81,
        F19 => 0x82,
        F20 => 0x83,
        F21 => 0x84,
        F22 => 0x85,
        F23 => 0x86,
        F24 => 0x87,

        // Numpad (VK_NUMPAD0=0x60 … VK_NUMPAD9=0x69)
        Numpad0 => 0x60,
        Numpad1 => 0x61,
        Numpad2 => 0x62,
        Numpad3 => 0x63,
        Numpad4 => 0x64,
        Numpad5 => 0x65,
        Numpad6 => 0x66,
        Numpad7 => 0x67,
        Numpad8 => 0x68,
        Numpad9 => 0x69,
        NumpadMultiply => 0x6A, // VK_MULTIPLY
        NumpadAdd => 0x6B,      // VK_ADD
        NumpadSubtract => 0x6D, // VK_SUBTRACT
        NumpadDecimal => 0x6E,  // VK_DECIMAL
        NumpadDivide => 0x6F,   // VK_DIVIDE
        NumLock => 0x90,        // VK_NUMLOCK
        // Windows has no separate VK for keypad Enter; it is VK_RETURN with
        // the extended-key flag, which the backend does not set.
        NumpadEnter => 0x0D,

        // Punctuation / symbols
        Minus => 0xBD,         // VK_OEM_MINUS
        Equal => 0xBB,         // VK_OEM_PLUS
        BracketLeft => 0xDB,   // VK_OEM_4
        BracketRight => 0xDD,  // VK_OEM_6
        Backslash => 0xDC,     // VK_OEM_5
        Semicolon => 0xBA,     // VK_OEM_1
        Quote => 0xDE,         // VK_OEM_7
        Backquote => 0xC0,     // VK_OEM_3
        Comma => 0xBC,         // VK_OEM_COMMA
        Period => 0xBE,        // VK_OEM_PERIOD
        Slash => 0xBF,         // VK_OEM_2
        IntlBackslash => 0xE2, // VK_OEM_102

        // Editing, system and IME keys
        Execute => 0x2B,    // VK_EXECUTE
        Select => 0x29,     // VK_SELECT
        Cancel => 0x03,     // VK_CANCEL
        Clear => 0x0C,      // VK_CLEAR
        LeftAlt => 0xA4,    // VK_LMENU
        RightAlt => 0xA5,   // VK_RMENU
        KanaMode => 0x15,   // VK_KANA
        HangulMode => 0x15, // VK_HANGUL (same VK as VK_KANA)
        HanjaMode => 0x19,  // VK_HANJA
        Convert => 0x1C,    // VK_CONVERT
        NonConvert => 0x1D, // VK_NONCONVERT

        // Browser, volume, media and launcher keys (VK_BROWSER_BACK=0xA6 … VK_LAUNCH_APP2=0xB7)
        BrowserBack => 0xA6,
        BrowserForward => 0xA7,
        BrowserRefresh => 0xA8,
        BrowserStop => 0xA9,
        BrowserSearch => 0xAA,
        BrowserFavorites => 0xAB,
        BrowserHome => 0xAC,
        Mute => 0xAD,
        VolumeDown => 0xAE,
        VolumeUp => 0xAF,
        MediaNextTrack => 0xB0,
        MediaPrevTrack => 0xB1,
        MediaStop => 0xB2,
        MediaPlayPause => 0xB3,
        LaunchMail => 0xB4,
        LaunchMediaSelect => 0xB5,
        LaunchApp1 => 0xB6,
        LaunchApp2 => 0xB7,

        Special1 | Special2 | Special3 | Special4 | Special5 | Special6 | Special7
        | Special8 | Special9 | Special10 | Special11 | Special12 | Unknown => return None,
    };
    Some(vk)
}
