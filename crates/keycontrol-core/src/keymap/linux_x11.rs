//! HID Usage ID to X11 KeySym translation table for Linux hosts.
//!
//! X11 KeySym values are defined in X11/keysymdef.h.
//! Reference: https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/blob/master/include/X11/keysymdef.h
//!
//! # What is an X11 KeySym? (for beginners)
//!
//! X11 identifies keys by *KeySym* (Key Symbol).  Printable keys use their
//! ASCII value (`XK_a` = 0x0061) and everything else lives in the 0xFFxx
//! block (`XK_Return` = 0xFF0D).  The injection backend hands these values to
//! the X server, which finds the physical keycode that produces the symbol.
//!
//! Letters map to their *lowercase* KeySym.  Shift is applied as a separate
//! modifier, so the base symbol is always the right one to send.

use super::hid::HidKeyCode;

/// Translates a [`HidKeyCode`] to an X11 KeySym value.
///
/// Returns `None` for [`HidKeyCode::Unknown`] and for the platform-extension
/// slots; resolve slots with [`HidKeyCode::physical`] first.
pub fn hid_to_keysym(hid: HidKeyCode) -> Option<u32> {
    use HidKeyCode::*;
    let keysym = match hid {
        // Letters (XK_a–XK_z)
        KeyA => 0x0061,
        KeyB => 0x0062,
        KeyC => 0x0063,
        KeyD => 0x0064,
        KeyE => 0x0065,
        KeyF => 0x0066,
        KeyG => 0x0067,
        KeyH => 0x0068,
        KeyI => 0x0069,
        KeyJ => 0x006A,
        KeyK => 0x006B,
        KeyL => 0x006C,
        KeyM => 0x006D,
        KeyN => 0x006E,
        KeyO => 0x006F,
        KeyP => 0x0070,
        KeyQ => 0x0071,
        KeyR => 0x0072,
        KeyS => 0x0073,
        KeyT => 0x0074,
        KeyU => 0x0075,
        KeyV => 0x0076,
        KeyW => 0x0077,
        KeyX => 0x0078,
        KeyY => 0x0079,
        KeyZ => 0x007A,

        // Digits (XK_0–XK_9)
        Digit0 => 0x0030,
        Digit1 => 0x0031,
        Digit2 => 0x0032,
        Digit3 => 0x0033,
        Digit4 => 0x0034,
        Digit5 => 0x0035,
        Digit6 => 0x0036,
        Digit7 => 0x0037,
        Digit8 => 0x0038,
        Digit9 => 0x0039,

        // Control keys
        Enter => 0xFF0D,       // XK_Return
        Escape => 0xFF1B,      // XK_Escape
        Backspace => 0xFF08,   // XK_BackSpace
        Tab => 0xFF09,         // XK_Tab
        Space => 0x0020,       // XK_space
        CapsLock => 0xFFE5,    // XK_Caps_Lock
        ScrollLock => 0xFF14,  // XK_Scroll_Lock
        Pause => 0xFF13,       // XK_Pause
        PrintScreen => 0xFF61, // XK_Print
        ContextMenu => 0xFF67, // XK_Menu
        Help => 0xFF6A,        // XK_Help

        // Navigation
        Insert => 0xFF63,     // XK_Insert
        Delete => 0xFFFF,     // XK_Delete
        Home => 0xFF50,       // XK_Home
        End => 0xFF57,        // XK_End
        PageUp => 0xFF55,     // XK_Page_Up
        PageDown => 0xFF56,   // XK_Page_Down
        ArrowLeft => 0xFF51,  // XK_Left
        ArrowUp => 0xFF52,    // XK_Up
        ArrowRight => 0xFF53, // XK_Right
        ArrowDown => 0xFF54,  // XK_Down

        // Function keys (XK_F1 = 0xFFBE, contiguous through XK_F24)
        F1 => 0xFFBE,
        F2 => 0xFFBF,
        F3 => 0xFFC0,
        F4 => 0xFFC1,
        F5 => 0xFFC2,
        F6 => 0xFFC3,
        F7 => 0xFFC4,
        F8 => 0xFFC5,
        F9 => 0xFFC6,
        F10 => 0xFFC7,
        F11 => 0xFFC8,
        F12 => 0xFFC9,
        F13 => 0xFFCA,
        F14 => 0xFFCB,
        F15 => 0xFFCC,
        F16 => 0xFFCD,
        F17 => 0xFFCE,
        F18 => 0xFFCF,
        F19 => 0xFFD0,
        F20 => 0xFFD1,
        F21 => 0xFFD2,
        F22 => 0xFFD3,
        F23 => 0xFFD4,
        F24 => 0xFFD5,

        // Numpad
        NumLock => 0xFF7F,        // XK_Num_Lock
        NumpadDivide => 0xFFAF,   // XK_KP_Divide
        NumpadMultiply => 0xFFAA, // XK_KP_Multiply
        NumpadSubtract => 0xFFAD, // XK_KP_Subtract
        NumpadAdd => 0xFFAB,      // XK_KP_Add
        NumpadEnter => 0xFF8D,    // XK_KP_Enter
        NumpadDecimal => 0xFFAE,  // XK_KP_Decimal
        Numpad0 => 0xFFB0,
        Numpad1 => 0xFFB1,
        Numpad2 => 0xFFB2,
        Numpad3 => 0xFFB3,
        Numpad4 => 0xFFB4,
        Numpad5 => 0xFFB5,
        Numpad6 => 0xFFB6,
        Numpad7 => 0xFFB7,
        Numpad8 => 0xFFB8,
        Numpad9 => 0xFFB9,

        // Punctuation / symbols
        Minus => 0x002D,         // XK_minus
        Equal => 0x003D,         // XK_equal
        BracketLeft => 0x005B,   // XK_bracketleft
        BracketRight => 0x005D,  // XK_bracketright
        Backslash => 0x005C,     // XK_backslash
        Semicolon => 0x003B,     // XK_semicolon
        Quote => 0x0027,         // XK_apostrophe
        Backquote => 0x0060,     // XK_grave
        Comma => 0x002C,         // XK_comma
        Period => 0x002E,        // XK_period
        Slash => 0x002F,         // XK_slash
        IntlBackslash => 0x003C, // XK_less

        // Editing, system and IME keys
        Execute => 0xFF62,    // XK_Execute
        Select => 0xFF60,     // XK_Select
        Cancel => 0xFF69,     // XK_Cancel
        Clear => 0xFF0B,      // XK_Clear
        LeftAlt => 0xFFE9,    // XK_Alt_L
        RightAlt => 0xFFEA,   // XK_Alt_R
        KanaMode => 0xFF27,   // XK_Hiragana_Katakana
        Convert => 0xFF23,    // XK_Henkan
        NonConvert => 0xFF22, // XK_Muhenkan
        HangulMode => 0xFF31, // XK_Hangul
        HanjaMode => 0xFF34,  // XK_Hangul_Hanja

        // Multimedia keys (XF86keysym.h)
        Mute => 0x1008_FF12,              // XF86AudioMute
        VolumeDown => 0x1008_FF11,        // XF86AudioLowerVolume
        VolumeUp => 0x1008_FF13,          // XF86AudioRaiseVolume
        MediaPlayPause => 0x1008_FF14,    // XF86AudioPlay
        MediaStop => 0x1008_FF15,         // XF86AudioStop
        MediaPrevTrack => 0x1008_FF16,    // XF86AudioPrev
        MediaNextTrack => 0x1008_FF17,    // XF86AudioNext
        BrowserHome => 0x1008_FF18,       // XF86HomePage
        LaunchMail => 0x1008_FF19,        // XF86Mail
        BrowserSearch => 0x1008_FF1B,     // XF86Search
        LaunchApp2 => 0x1008_FF1D,        // XF86Calculator
        BrowserBack => 0x1008_FF26,       // XF86Back
        BrowserForward => 0x1008_FF27,    // XF86Forward
        BrowserStop => 0x1008_FF28,       // XF86Stop
        BrowserRefresh => 0x1008_FF29,    // XF86Refresh
        BrowserFavorites => 0x1008_FF30,  // XF86Favorites
        LaunchMediaSelect => 0x1008_FF32, // XF86AudioMedia
        LaunchApp1 => 0x1008_FF33,        // XF86MyComputer

        Special1 | Special2 | Special3 | Special4 | Special5 | Special6 | Special7
        | Special8 | Special9 | Special10 | Special11 | Special12 | Unknown => return None,
    };
    Some(keysym)
}
