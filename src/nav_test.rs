use super::*;
use crate::dom::ClassSet;

#[test]
fn first_click_activates_both() {
    let menu = ClassSet::from_attr("navbar-menu");
    let trigger = ClassSet::from_attr("navbar-toggle");

    let state = toggle_pair(&menu, &trigger, "active");

    assert_eq!(state, NavState { menu_active: true, trigger_active: true });
    assert!(menu.contains("active"));
    assert!(trigger.contains("active"));
}

#[test]
fn second_click_deactivates_both() {
    let menu = ClassSet::from_attr("navbar-menu");
    let trigger = ClassSet::from_attr("navbar-toggle");

    toggle_pair(&menu, &trigger, "active");
    let state = toggle_pair(&menu, &trigger, "active");

    assert_eq!(state, NavState { menu_active: false, trigger_active: false });
    assert_eq!(menu.to_attr(), "navbar-menu");
    assert_eq!(trigger.to_attr(), "navbar-toggle");
}

#[test]
fn pre_activated_element_stays_out_of_phase() {
    let menu = ClassSet::from_attr("navbar-menu active");
    let trigger = ClassSet::from_attr("navbar-toggle");

    let state = toggle_pair(&menu, &trigger, "active");

    assert_eq!(state, NavState { menu_active: false, trigger_active: true });
}

#[test]
fn custom_class_name_is_used() {
    let menu = ClassSet::new();
    let trigger = ClassSet::new();

    toggle_pair(&menu, &trigger, "is-open");

    assert!(menu.contains("is-open"));
    assert!(!menu.contains("active"));
}
