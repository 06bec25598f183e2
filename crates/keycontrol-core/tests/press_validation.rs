//! Integration tests for the keycontrol-core public API.
//!
//! These exercise the registry, validator and auth gate together, the way the
//! HTTP layer uses them.

use keycontrol_core::keymap::names;
use keycontrol_core::{
    authorize, resolve, HidKeyCode, ModifierSet, PressKind, PressRequest, ValidationError,
};

#[test]
fn test_every_canonical_name_is_accepted_by_both_paths() {
    for name in names::canonical_names() {
        let single = PressRequest::single(Some(name), ModifierSet::default())
            .unwrap_or_else(|e| panic!("{name} rejected by single path: {e}"));
        let chord = PressRequest::chord(Some(name), ModifierSet::default())
            .unwrap_or_else(|e| panic!("{name} rejected by chord path: {e}"));

        assert_eq!(single.codes(), chord.codes());
        assert_eq!(single.codes(), vec![resolve(name)]);
    }
}

#[test]
fn test_no_request_ever_carries_the_invalid_code() {
    let inputs = ["A", "A,B", "SP1,F24,KPENTER", "LEFT,LEFT,LEFT"];
    for input in inputs {
        let request = PressRequest::chord(Some(input), ModifierSet::default()).unwrap();
        assert!(request.codes().iter().all(|code| code.is_valid()));
    }
}

#[test]
fn test_media_keys_and_windows_spellings_are_accepted_in_chords() {
    // Arrange / Act
    let request =
        PressRequest::chord(Some("VOLUME_UP,BACK,OEM_PLUS"), ModifierSet::default()).unwrap();

    // Assert
    assert_eq!(
        request.codes(),
        vec![HidKeyCode::VolumeUp, HidKeyCode::Backspace, HidKeyCode::Equal]
    );
}

#[test]
fn test_chord_of_three_dispatches_in_request_order() {
    let request = PressRequest::chord(Some("A,B,C"), ModifierSet::default()).unwrap();

    assert_eq!(request.kind(), PressKind::Chord);
    assert_eq!(
        request.codes(),
        vec![resolve("A"), resolve("B"), resolve("C")]
    );
}

#[test]
fn test_repeated_names_are_kept() {
    let request = PressRequest::chord(Some("A,A"), ModifierSet::default()).unwrap();
    assert_eq!(request.codes(), vec![HidKeyCode::KeyA, HidKeyCode::KeyA]);
}

#[test]
fn test_bogus_segment_rejects_known_neighbours() {
    let result = PressRequest::chord(Some("A,BOGUS,B"), ModifierSet::default());
    assert!(matches!(
        result,
        Err(ValidationError::InvalidKey { position: 2, .. })
    ));
}

#[test]
fn test_lowercase_names_are_not_folded() {
    assert_eq!(
        PressRequest::single(Some("enter"), ModifierSet::default()),
        Err(ValidationError::InvalidKey {
            parameter: "keyCode",
            name: "enter".to_string(),
            position: 1,
        })
    );
}

#[test]
fn test_modifiers_are_carried_unchanged_for_all_sixteen_combinations() {
    let flag = |bit: bool| bit.then_some("true");
    for bits in 0u8..16 {
        let (shift, ctrl, alt, meta) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        let modifiers = ModifierSet::from_query(flag(shift), flag(ctrl), flag(alt), flag(meta));

        let request = PressRequest::chord(Some("A,B"), modifiers).unwrap();

        assert_eq!(
            request.modifiers(),
            ModifierSet {
                shift,
                ctrl,
                alt,
                meta
            }
        );
    }
}

#[test]
fn test_auth_gate_fails_closed() {
    assert!(authorize("keycontrol", "keycontrol"));
    assert!(!authorize("wrong", "keycontrol"));
    assert!(!authorize("", ""));
}
