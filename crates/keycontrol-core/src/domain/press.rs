//! Press requests and the validator that builds them from query parameters.
//!
//! A [`PressRequest`] is the fully-validated form of one `/press` or
//! `/press/multi` call: a non-empty, ordered list of resolved keys plus the
//! modifiers to hold while they are pressed.  It can only be built through
//! [`PressRequest::single`] or [`PressRequest::chord`], so holding one means
//! every key code in it is valid.
//!
//! Both constructors are pure: no I/O, no shared state, and the same input
//! always produces the same result.

use std::fmt;

use thiserror::Error;

use crate::keymap::hid::HidKeyCode;
use crate::keymap::names;

/// Query parameter carrying the key name for a single press.
pub const KEY_CODE_PARAM: &str = "keyCode";

/// Query parameter carrying the comma-separated key names for a chord.
pub const KEY_CODES_PARAM: &str = "keyCodes";

/// Separator between key names in [`KEY_CODES_PARAM`].
pub const CHORD_SEPARATOR: char = ',';

/// Error type for press request validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required query parameter was absent or empty.
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    /// A key name did not resolve to a key code.
    ///
    /// `position` is 1-based; for chords it identifies the offending segment.
    #[error("invalid {parameter} provided: {name:?} at position {position}")]
    InvalidKey {
        parameter: &'static str,
        name: String,
        position: usize,
    },
}

// ── Modifiers ─────────────────────────────────────────────────────────────────

/// The four modifier flags applied to every key of a request.
///
/// The flags are independent; all sixteen combinations are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// The Windows / Command / Super key.
    pub meta: bool,
}

impl ModifierSet {
    /// Builds a modifier set from raw query values.
    ///
    /// A flag is set only when its value is exactly `"true"`.  Anything else,
    /// including `"TRUE"`, `"1"` or an absent parameter, leaves it clear.
    pub fn from_query(
        shift: Option<&str>,
        ctrl: Option<&str>,
        alt: Option<&str>,
        meta: Option<&str>,
    ) -> Self {
        Self {
            shift: is_true(shift),
            ctrl: is_true(ctrl),
            alt: is_true(alt),
            meta: is_true(meta),
        }
    }

    /// Returns `true` when no modifier is set.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }

    /// Human-readable labels of the active modifiers, in the order
    /// Ctrl, Alt, Shift, Super.
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Super"),
        ]
        .into_iter()
        .filter_map(|(active, label)| active.then_some(label))
        .collect()
    }
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

// ── Press request ─────────────────────────────────────────────────────────────

/// One key of a press request: the name the caller sent and its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub name: String,
    pub code: HidKeyCode,
}

/// Which endpoint a request came from.  Only affects the summary wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    Single,
    Chord,
}

/// A validated key press: ordered, non-empty keys plus shared modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressRequest {
    kind: PressKind,
    keys: Vec<ResolvedKey>,
    modifiers: ModifierSet,
}

impl PressRequest {
    /// Validates the single-key form (`keyCode=<NAME>`).
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingParameter`] if `key_code` is absent or empty.
    /// - [`ValidationError::InvalidKey`] if the name is not canonical.
    pub fn single(key_code: Option<&str>, modifiers: ModifierSet) -> Result<Self, ValidationError> {
        let name = required(key_code, KEY_CODE_PARAM)?;
        let key = resolve_key(name, KEY_CODE_PARAM, 1)?;
        Ok(Self {
            kind: PressKind::Single,
            keys: vec![key],
            modifiers,
        })
    }

    /// Validates the chord form (`keyCodes=<N1>,<N2>,...`).
    ///
    /// Segments are not trimmed, so `"A, B"` contains the name `" B"` and is
    /// rejected.  Empty segments are rejected the same way.  Validation is
    /// all-or-nothing: one bad segment fails the whole request.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingParameter`] if `key_codes` is absent or empty.
    /// - [`ValidationError::InvalidKey`] for the first unresolvable segment.
    pub fn chord(key_codes: Option<&str>, modifiers: ModifierSet) -> Result<Self, ValidationError> {
        let list = required(key_codes, KEY_CODES_PARAM)?;
        let keys = list
            .split(CHORD_SEPARATOR)
            .enumerate()
            .map(|(index, name)| resolve_key(name, KEY_CODES_PARAM, index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind: PressKind::Chord,
            keys,
            modifiers,
        })
    }

    pub fn kind(&self) -> PressKind {
        self.kind
    }

    pub fn keys(&self) -> &[ResolvedKey] {
        &self.keys
    }

    pub fn modifiers(&self) -> ModifierSet {
        self.modifiers
    }

    /// Key codes in dispatch order.
    pub fn codes(&self) -> Vec<HidKeyCode> {
        self.keys.iter().map(|key| key.code).collect()
    }

    /// The one-line description used for both the log and the response body.
    ///
    /// ```text
    /// Key press simulated for keyCode: A | Ctrl | Shift
    /// Key press simulated for keyCodes: A | B | Super
    /// ```
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PressRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameter = match self.kind {
            PressKind::Single => KEY_CODE_PARAM,
            PressKind::Chord => KEY_CODES_PARAM,
        };
        let names: Vec<&str> = self.keys.iter().map(|key| key.name.as_str()).collect();
        write!(f, "Key press simulated for {parameter}: {}", names.join(" | "))?;
        for label in self.modifiers.labels() {
            write!(f, " | {label}")?;
        }
        Ok(())
    }
}

fn required<'a>(value: Option<&'a str>, parameter: &'static str) -> Result<&'a str, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingParameter(parameter)),
    }
}

fn resolve_key(
    name: &str,
    parameter: &'static str,
    position: usize,
) -> Result<ResolvedKey, ValidationError> {
    let code = names::resolve(name);
    if !code.is_valid() {
        return Err(ValidationError::InvalidKey {
            parameter,
            name: name.to_string(),
            position,
        });
    }
    Ok(ResolvedKey {
        name: name.to_string(),
        code,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
