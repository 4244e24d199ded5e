use super::*;

// =============================================================
// Presence roster
// =============================================================

#[test]
fn roster_has_one_active_editor() {
    let active = EDITORS.iter().filter(|(_, active)| *active).count();
    assert_eq!(active, 1);
}

#[test]
fn roster_is_fixed_content() {
    assert_eq!(EDITORS, EDITORS);
    assert_eq!(EDITORS.len(), 3);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn initial_takes_first_character() {
    assert_eq!(initial("Sara"), "S");
    assert_eq!(initial("omar"), "o");
}

#[test]
fn initial_of_empty_name_is_placeholder() {
    assert_eq!(initial(""), "?");
}

#[test]
fn avatar_title_marks_the_active_editor() {
    assert_eq!(avatar_title("Sara", true), "Sara is currently editing");
    assert_eq!(avatar_title("Omar", false), "Omar");
}

#[test]
fn editing_summary_handles_singular_and_plural() {
    assert_eq!(editing_summary(1), "1 person editing");
    assert_eq!(editing_summary(3), "3 people editing");
}
