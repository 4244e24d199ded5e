use super::*;

#[test]
fn there_are_three_features() {
    assert_eq!(feature_list().len(), 3);
}

#[test]
fn feature_titles_are_distinct() {
    let features = feature_list();
    for (i, a) in features.iter().enumerate() {
        for (j, b) in features.iter().enumerate() {
            if i != j {
                assert_ne!(a.title, b.title);
            }
        }
    }
}

#[test]
fn feature_copy_is_fixed_at_build_time() {
    // Repeated calls must produce structurally identical content.
    assert_eq!(feature_list(), feature_list());
}

#[test]
fn every_feature_has_copy() {
    for feature in feature_list() {
        assert!(!feature.icon.is_empty());
        assert!(!feature.title.is_empty());
        assert!(!feature.blurb.is_empty());
    }
}
