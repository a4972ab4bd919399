use std::collections::HashMap;

use super::*;

fn page() -> HashMap<&'static str, &'static str> {
    HashMap::from([("#section1", "h2#section1"), ("#faq", "section#faq")])
}

/// Lookup against `page()` that rejects selectors a browser would not parse.
fn query(page: &HashMap<&'static str, &'static str>, selector: &str) -> Result<Option<&'static str>, String> {
    let id = selector.strip_prefix('#').unwrap_or(selector);
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("'{selector}' is not a valid selector"));
    }
    Ok(page.get(selector).copied())
}

#[test]
fn plan_always_prevents_default() {
    assert!(plan_click(Some("#section1")).prevent_default);
    assert!(plan_click(Some("#")).prevent_default);
    assert!(plan_click(None).prevent_default);
}

#[test]
fn plan_uses_href_verbatim_as_selector() {
    let plan = plan_click(Some("#section1"));
    assert_eq!(plan.selector.as_deref(), Some("#section1"));
}

#[test]
fn missing_or_empty_href_has_no_selector() {
    assert_eq!(plan_click(None).selector, None);
    assert_eq!(plan_click(Some("")).selector, None);
}

#[test]
fn matching_target_is_scrolled_to() {
    let page = page();
    let plan = plan_click(Some("#section1"));

    let outcome = resolve(&plan, |sel| query(&page, sel));

    assert!(plan.prevent_default);
    assert_eq!(outcome, AnchorOutcome::ScrollTo("h2#section1"));
}

#[test]
fn unmatched_target_suppresses_without_scrolling() {
    let page = page();
    let plan = plan_click(Some("#does-not-exist"));

    let outcome = resolve(&plan, |sel| query(&page, sel));

    assert!(plan.prevent_default);
    assert_eq!(outcome, AnchorOutcome::Suppressed);
}

#[test]
fn lookup_is_skipped_without_selector() {
    let mut called = false;
    let outcome: AnchorOutcome<()> = resolve(&plan_click(None), |_| {
        called = true;
        Ok::<_, String>(Some(()))
    });

    assert!(!called);
    assert_eq!(outcome, AnchorOutcome::Suppressed);
}

#[test]
fn invalid_selector_suppresses_without_scrolling() {
    let page = page();
    let plan = plan_click(Some("#1-intro"));

    let outcome = resolve(&plan, |sel| query(&page, sel));

    assert!(plan.prevent_default);
    assert_eq!(outcome, AnchorOutcome::Suppressed);
}

#[test]
fn bare_hash_suppresses_without_scrolling() {
    let page = page();
    let plan = plan_click(Some("#"));

    assert!(query(&page, "#").is_err());
    assert_eq!(resolve(&plan, |sel| query(&page, sel)), AnchorOutcome::Suppressed);
}

#[test]
fn href_is_reread_and_used_verbatim() {
    // The link matched `a[href^="#"]` at init, but its href is re-read on click.
    let plan = plan_click(Some("#faq"));
    assert_eq!(resolve(&plan, |sel| query(&page(), sel)), AnchorOutcome::ScrollTo("section#faq"));
    assert_eq!(plan_click(Some("/about")).selector.as_deref(), Some("/about"));
}
