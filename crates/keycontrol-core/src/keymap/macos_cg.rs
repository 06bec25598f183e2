//! HID Usage ID to macOS CGKeyCode translation table.
//!
//! CGKeyCode values are the `kVK_*` constants from Carbon's Events.h
//! (HIToolbox framework).  They identify physical key positions on an ANSI
//! keyboard, so the letter codes look scrambled compared with ASCII.
//!
//! macOS keyboards stop at F20; `F21`–`F24` have no CGKeyCode.  Media,
//! browser and launcher keys are posted as system-defined events rather than
//! key events, so they have no CGKeyCode either.

use super::hid::HidKeyCode;

/// Translates a [`HidKeyCode`] to a macOS `CGKeyCode` value.
///
/// Returns `None` for keys that do not exist on macOS, for
/// [`HidKeyCode::Unknown`], and for the platform-extension slots.
pub fn hid_to_cgkeycode(hid: HidKeyCode) -> Option<u16> {
    use HidKeyCode::*;
    let code = match hid {
        // Letters (ANSI positions)
        KeyA => 0x00,
        KeyS => 0x01,
        KeyD => 0x02,
        KeyF => 0x03,
        KeyH => 0x04,
        KeyG => 0x05,
        KeyZ => 0x06,
        KeyX => 0x07,
        KeyC => 0x08,
        KeyV => 0x09,
        KeyB => 0x0B,
        KeyQ => 0x0C,
        KeyW => 0x0D,
        KeyE => 0x0E,
        KeyR => 0x0F,
        KeyY => 0x10,
        KeyT => 0x11,
        KeyO => 0x1F,
        KeyU => 0x20,
        KeyI => 0x22,
        KeyP => 0x23,
        KeyL => 0x25,
        KeyJ => 0x26,
        KeyK => 0x28,
        KeyN => 0x2D,
        KeyM => 0x2E,

        // Digits
        Digit1 => 0x12,
        Digit2 => 0x13,
        Digit3 => 0x14,
        Digit4 => 0x15,
        Digit6 => 0x16,
        Digit5 => 0x17,
        Digit9 => 0x19,
        Digit7 => 0x1A,
        Digit8 => 0x1C,
        Digit0 => 0x1D,

        // Control keys
        Enter => 0x24,     // kVK_Return
        Tab => 0x30,       // kVK_Tab
        Space => 0x31,     // kVK_Space
        Backspace => 0x33, // kVK_Delete
        Escape => 0x35,    // kVK_Escape
        CapsLock => 0x39,  // kVK_CapsLock
        Help => 0x72,      // kVK_Help
        // No dedicated keys on Apple keyboards; these follow the common
        // PC-keyboard convention of landing on F13–F15.
        PrintScreen => 0x69,
        ScrollLock => 0x6B,
        Pause => 0x71,
        ContextMenu => 0x6E,

        // Navigation
        Insert => 0x72,     // kVK_Help sits in the Insert position
        Home => 0x73,       // kVK_Home
        PageUp => 0x74,     // kVK_PageUp
        Delete => 0x75,     // kVK_ForwardDelete
        End => 0x77,        // kVK_End
        PageDown => 0x79,   // kVK_PageDown
        ArrowLeft => 0x7B,  // kVK_LeftArrow
        ArrowRight => 0x7C, // kVK_RightArrow
        ArrowDown => 0x7D,  // kVK_DownArrow
        ArrowUp => 0x7E,    // kVK_UpArrow

        // Function keys
        F1 => 0x7A,
        F2 => 0x78,
        F3 => 0x63,
        F4 => 0x76,
        F5 => 0x60,
        F6 => 0x61,
        F7 => 0x62,
        F8 => 0x64,
        F9 => 0x65,
        F10 => 0x6D,
        F11 => 0x67,
        F12 => 0x6F,
        F13 => 0x69,
        F14 => 0x6B,
        F15 => 0x71,
        F16 => 0x6A,
        F17 => 0x40,
        F18 => 0x4F,
        F19 => 0x50,
        F20 => 0x5A,

        // Numpad
        NumLock => 0x47,        // kVK_ANSI_KeypadClear
        NumpadDivide => 0x4B,   // kVK_ANSI_KeypadDivide
        NumpadMultiply => 0x43, // kVK_ANSI_KeypadMultiply
        NumpadSubtract => 0x4E, // kVK_ANSI_KeypadMinus
        NumpadAdd => 0x45,      // kVK_ANSI_KeypadPlus
        NumpadEnter => 0x4C,    // kVK_ANSI_KeypadEnter
        NumpadDecimal => 0x41,  // kVK_ANSI_KeypadDecimal
        Numpad0 => 0x52,
        Numpad1 => 0x53,
        Numpad2 => 0x54,
        Numpad3 => 0x55,
        Numpad4 => 0x56,
        Numpad5 => 0x57,
        Numpad6 => 0x58,
        Numpad7 => 0x59,
        Numpad8 => 0x5B,
        Numpad9 => 0x5C,

        // Punctuation / symbols
        Equal => 0x18,         // kVK_ANSI_Equal
        Minus => 0x1B,         // kVK_ANSI_Minus
        BracketRight => 0x1E,  // kVK_ANSI_RightBracket
        BracketLeft => 0x21,   // kVK_ANSI_LeftBracket
        Quote => 0x27,         // kVK_ANSI_Quote
        Semicolon => 0x29,     // kVK_ANSI_Semicolon
        Backslash => 0x2A,     // kVK_ANSI_Backslash
        Comma => 0x2B,         // kVK_ANSI_Comma
        Slash => 0x2C,         // kVK_ANSI_Slash
        Period => 0x2F,        // kVK_ANSI_Period
        Backquote => 0x32,     // kVK_ANSI_Grave
        IntlBackslash => 0x0A, // kVK_ISO_Section

        F21 | F22 | F23 | F24 => return None,
        // System and IME keys
        Clear => 0x47,      // kVK_ANSI_KeypadClear
        LeftAlt => 0x3A,    // kVK_Option
        RightAlt => 0x3D,   // kVK_RightOption
        Mute => 0x4A,       // kVK_Mute
        VolumeUp => 0x48,   // kVK_VolumeUp
        VolumeDown => 0x49, // kVK_VolumeDown
        KanaMode => 0x68,   // kVK_JIS_Kana
        HangulMode => 0x68, // LANG1 shares the Kana position
        HanjaMode => 0x66,  // kVK_JIS_Eisu

        // No virtual keycode: media keys are NX system events on macOS
        Execute | Select | Cancel | Convert | NonConvert => return None,
        MediaNextTrack | MediaPrevTrack | MediaStop | MediaPlayPause | LaunchMediaSelect
        | LaunchMail | LaunchApp1 | LaunchApp2 | BrowserSearch | BrowserHome | BrowserBack
        | BrowserForward | BrowserStop | BrowserRefresh | BrowserFavorites => return None,
        Special1 | Special2 | Special3 | Special4 | Special5 | Special6 | Special7
        | Special8 | Special9 | Special10 | Special11 | Special12 | Unknown => return None,
    };
    Some(code)
}
