use super::*;
use crate::dark_mode::apply_saved_preference;
use crate::dom::{ClassList, ClassSet};
use crate::preference::MemoryPreference;

const ALL: Features = Features { nav: true, anchors: true, progress: true, copy_code: true };

#[test]
fn theme_restored_at_start_is_not_repeated() {
    let mut lc = Lifecycle::new();
    lc.mark_theme_restored();

    let steps = lc.ready_steps(ALL);

    assert_eq!(steps, vec![Step::Nav, Step::Anchors, Step::Progress, Step::CopyCode]);
}

#[test]
fn deferred_theme_restore_runs_first() {
    let mut lc = Lifecycle::new();

    let steps = lc.ready_steps(ALL);

    assert_eq!(steps.first(), Some(&Step::RestoreTheme));
    assert_eq!(steps.len(), 5);
}

#[test]
fn ready_steps_run_once() {
    let mut lc = Lifecycle::new();
    assert!(!lc.is_initialized());

    assert!(!lc.ready_steps(ALL).is_empty());
    assert!(lc.is_initialized());
    assert!(lc.ready_steps(ALL).is_empty());
}

#[test]
fn disabled_features_are_skipped() {
    let mut lc = Lifecycle::new();
    lc.mark_theme_restored();

    let steps = lc.ready_steps(Features { progress: false, anchors: false, ..ALL });

    assert_eq!(steps, vec![Step::Nav, Step::CopyCode]);
}

#[test]
fn theme_restore_is_not_a_feature_switch() {
    let mut lc = Lifecycle::new();
    let none = Features { nav: false, anchors: false, progress: false, copy_code: false };

    assert_eq!(lc.ready_steps(none), vec![Step::RestoreTheme]);
}

#[test]
fn stored_dark_mode_is_visible_before_ready_steps() {
    let body = ClassSet::new();
    let store = MemoryPreference::with_raw("true");
    let mut lc = Lifecycle::new();

    // Module start.
    assert!(apply_saved_preference(&body, &store, "dark-mode"));
    lc.mark_theme_restored();
    assert!(body.contains("dark-mode"));
    assert!(!lc.is_initialized());

    // DOM ready.
    let steps = lc.ready_steps(ALL);
    assert!(!steps.contains(&Step::RestoreTheme));
}
