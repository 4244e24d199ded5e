#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn stored_preference_is_none_in_non_hydrate_tests() {
    assert_eq!(stored_preference(), None);
}

#[test]
fn ambient_preference_is_false_in_non_hydrate_tests() {
    assert!(!ambient_preference());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn persist_is_noop_but_callable() {
    persist(true);
    persist(false);
}
