use super::*;

// =============================================================
// Resolution precedence
// =============================================================

#[test]
fn stored_true_overrides_ambient() {
    assert!(ThemeState::resolve(Some(true), false).dark_mode);
    assert!(ThemeState::resolve(Some(true), true).dark_mode);
}

#[test]
fn stored_false_overrides_ambient() {
    assert!(!ThemeState::resolve(Some(false), false).dark_mode);
    assert!(!ThemeState::resolve(Some(false), true).dark_mode);
}

#[test]
fn missing_stored_follows_ambient() {
    assert!(ThemeState::resolve(None, true).dark_mode);
    assert!(!ThemeState::resolve(None, false).dark_mode);
}

#[test]
fn resolve_marks_resolved() {
    let state = ThemeState::resolve(None, false);
    assert!(state.is_resolved());
    assert_eq!(state.resolution, Resolution::Resolved);
}

// =============================================================
// Default / unresolved gate
// =============================================================

#[test]
fn default_state_is_unresolved_and_light() {
    let state = ThemeState::default();
    assert!(!state.is_resolved());
    assert!(!state.dark_mode);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_flips_value() {
    let state = ThemeState::resolve(Some(false), false);
    assert!(state.toggled().dark_mode);
    assert!(!state.toggled().toggled().dark_mode);
}

#[test]
fn toggle_does_not_revisit_resolution() {
    let state = ThemeState::resolve(None, true).toggled();
    assert!(state.is_resolved());
}

#[test]
fn toggle_parity_matches_initial_xor_count() {
    for initial in [false, true] {
        let mut state = ThemeState::resolve(Some(initial), false);
        for n in 1..=5 {
            state = state.toggled();
            assert_eq!(state.dark_mode, initial ^ (n % 2 == 1));
        }
    }
}

// =============================================================
// End-to-end scenario from the product behavior
// =============================================================

#[test]
fn ambient_dark_without_override_then_one_toggle_goes_light() {
    let resolved = ThemeState::resolve(None, true);
    assert!(resolved.dark_mode);

    let after_toggle = resolved.toggled();
    assert!(!after_toggle.dark_mode);
    assert!(after_toggle.is_resolved());
}
