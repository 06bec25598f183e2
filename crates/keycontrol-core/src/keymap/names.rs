//! Key name registry: canonical key names to [`HidKeyCode`].
//!
//! Callers of the HTTP API name keys with short uppercase tokens such as
//! `"A"`, `"F5"`, `"ENTER"` or `"SP3"`.  [`KEY_NAMES`] is the single table
//! that lists every accepted token; all lookups go through it.
//!
//! Lookup is exact-match and case-sensitive.  `"a"`, `" A"` and `"Enter"` are
//! not canonical names and resolve to [`HidKeyCode::Unknown`].

use super::hid::HidKeyCode;

/// Every canonical key name and the code it resolves to.
///
/// Names are unique.  A code may be reachable through several names (for
/// example `BACKSPACE` and its Windows spelling `BACK`); the first entry for a
/// code is its primary name and is what [`name_of`] reports.
pub const KEY_NAMES: &[(&str, HidKeyCode)] = {
    use HidKeyCode::*;
    &[
        // ── Digits ────────────────────────────────────────────────────────────
        ("0", Digit0),
        ("1", Digit1),
        ("2", Digit2),
        ("3", Digit3),
        ("4", Digit4),
        ("5", Digit5),
        ("6", Digit6),
        ("7", Digit7),
        ("8", Digit8),
        ("9", Digit9),
        // ── Letters ───────────────────────────────────────────────────────────
        ("A", KeyA),
        ("B", KeyB),
        ("C", KeyC),
        ("D", KeyD),
        ("E", KeyE),
        ("F", KeyF),
        ("G", KeyG),
        ("H", KeyH),
        ("I", KeyI),
        ("J", KeyJ),
        ("K", KeyK),
        ("L", KeyL),
        ("M", KeyM),
        ("N", KeyN),
        ("O", KeyO),
        ("P", KeyP),
        ("Q", KeyQ),
        ("R", KeyR),
        ("S", KeyS),
        ("T", KeyT),
        ("U", KeyU),
        ("V", KeyV),
        ("W", KeyW),
        ("X", KeyX),
        ("Y", KeyY),
        ("Z", KeyZ),
        // ── Function keys ─────────────────────────────────────────────────────
        ("F1", F1),
        ("F2", F2),
        ("F3", F3),
        ("F4", F4),
        ("F5", F5),
        ("F6", F6),
        ("F7", F7),
        ("F8", F8),
        ("F9", F9),
        ("F10", F10),
        ("F11", F11),
        ("F12", F12),
        ("F13", F13),
        ("F14", F14),
        ("F15", F15),
        ("F16", F16),
        ("F17", F17),
        ("F18", F18),
        ("F19", F19),
        ("F20", F20),
        ("F21", F21),
        ("F22", F22),
        ("F23", F23),
        ("F24", F24),
        // ── Navigation ────────────────────────────────────────────────────────
        ("LEFT", ArrowLeft),
        ("UP", ArrowUp),
        ("RIGHT", ArrowRight),
        ("DOWN", ArrowDown),
        ("HOME", Home),
        ("END", End),
        ("PAGEUP", PageUp),
        ("PAGEDOWN", PageDown),
        ("INSERT", Insert),
        ("DELETE", Delete),
        // ── Editing ───────────────────────────────────────────────────────────
        ("ENTER", Enter),
        ("TAB", Tab),
        ("BACKSPACE", Backspace),
        ("SPACE", Space),
        ("ESC", Escape),
        // ── Locks and system keys ─────────────────────────────────────────────
        ("CAPSLOCK", CapsLock),
        ("NUMLOCK", NumLock),
        ("SCROLLLOCK", ScrollLock),
        ("PRINT", PrintScreen),
        ("PAUSE", Pause),
        ("MENU", ContextMenu),
        ("HELP", Help),
        ("SELECT", Select),
        ("EXECUTE", Execute),
        ("CANCEL", Cancel),
        ("CLEAR", Clear),
        ("LMENU", LeftAlt),
        ("RMENU", RightAlt),
        // ── Punctuation / OEM ─────────────────────────────────────────────────
        ("MINUS", Minus),
        ("EQUAL", Equal),
        ("LEFTBRACE", BracketLeft),
        ("RIGHTBRACE", BracketRight),
        ("BACKSLASH", Backslash),
        ("SEMICOLON", Semicolon),
        ("APOSTROPHE", Quote),
        ("GRAVE", Backquote),
        ("COMMA", Comma),
        ("DOT", Period),
        ("SLASH", Slash),
        ("102ND", IntlBackslash),
        // ── Numeric keypad ────────────────────────────────────────────────────
        ("KP0", Numpad0),
        ("KP1", Numpad1),
        ("KP2", Numpad2),
        ("KP3", Numpad3),
        ("KP4", Numpad4),
        ("KP5", Numpad5),
        ("KP6", Numpad6),
        ("KP7", Numpad7),
        ("KP8", Numpad8),
        ("KP9", Numpad9),
        ("KPDOT", NumpadDecimal),
        ("KPPLUS", NumpadAdd),
        ("KPMINUS", NumpadSubtract),
        ("KPASTERISK", NumpadMultiply),
        ("KPSLASH", NumpadDivide),
        ("KPENTER", NumpadEnter),
        // ── IME keys ──────────────────────────────────────────────────────────
        ("KANA", KanaMode),
        ("HANGUL", HangulMode),
        ("HANJA", HanjaMode),
        ("CONVERT", Convert),
        ("NONCONVERT", NonConvert),
        // ── Volume and media ──────────────────────────────────────────────────
        ("VOLUME_MUTE", Mute),
        ("VOLUME_DOWN", VolumeDown),
        ("VOLUME_UP", VolumeUp),
        ("MEDIA_NEXT_TRACK", MediaNextTrack),
        ("MEDIA_PREV_TRACK", MediaPrevTrack),
        ("MEDIA_STOP", MediaStop),
        ("MEDIA_PLAY_PAUSE", MediaPlayPause),
        // ── Browser and launcher ──────────────────────────────────────────────
        ("BROWSER_BACK", BrowserBack),
        ("BROWSER_FORWARD", BrowserForward),
        ("BROWSER_REFRESH", BrowserRefresh),
        ("BROWSER_STOP", BrowserStop),
        ("BROWSER_SEARCH", BrowserSearch),
        ("BROWSER_FAVORITES", BrowserFavorites),
        ("BROWSER_HOME", BrowserHome),
        ("LAUNCH_MAIL", LaunchMail),
        ("LAUNCH_MEDIA_SELECT", LaunchMediaSelect),
        ("LAUNCH_APP1", LaunchApp1),
        ("LAUNCH_APP2", LaunchApp2),
        // ── Windows virtual-key spellings (aliases) ───────────────────────────
        ("BACK", Backspace),
        ("CAPITAL", CapsLock),
        ("SNAPSHOT", PrintScreen),
        ("SCROLL", ScrollLock),
        ("HANGUEL", HangulMode),
        ("KANJI", HanjaMode),
        ("OEM_1", Semicolon),
        ("OEM_PLUS", Equal),
        ("OEM_COMMA", Comma),
        ("OEM_MINUS", Minus),
        ("OEM_PERIOD", Period),
        ("OEM_2", Slash),
        ("OEM_3", Backquote),
        ("OEM_4", BracketLeft),
        ("OEM_5", Backslash),
        ("OEM_6", BracketRight),
        ("OEM_7", Quote),
        ("OEM_102", IntlBackslash),
        // ── Platform-extension slots ──────────────────────────────────────────
        ("SP1", Special1),
        ("SP2", Special2),
        ("SP3", Special3),
        ("SP4", Special4),
        ("SP5", Special5),
        ("SP6", Special6),
        ("SP7", Special7),
        ("SP8", Special8),
        ("SP9", Special9),
        ("SP10", Special10),
        ("SP11", Special11),
        ("SP12", Special12),
    ]
};

/// Resolves a canonical key name to its [`HidKeyCode`].
///
/// Total over all strings: any name that is not in [`KEY_NAMES`] resolves to
/// [`HidKeyCode::Unknown`].  No case folding or trimming is performed.
///
/// # Examples
///
/// ```rust
/// use keycontrol_core::keymap::names::resolve;
/// use keycontrol_core::HidKeyCode;
///
/// assert_eq!(resolve("ENTER"), HidKeyCode::Enter);
/// assert_eq!(resolve("enter"), HidKeyCode::Unknown);
/// ```
pub fn resolve(name: &str) -> HidKeyCode {
    KEY_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map_or(HidKeyCode::Unknown, |&(_, code)| code)
}

/// Returns the canonical name for `code`, or `None` if no name maps to it.
pub fn name_of(code: HidKeyCode) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|&&(_, candidate)| candidate == code)
        .map(|&(name, _)| name)
}

/// Iterates over every canonical key name in table order.
pub fn canonical_names() -> impl Iterator<Item = &'static str> {
    KEY_NAMES.iter().map(|&(name, _)| name)
}
