//! Smooth scrolling for in-page anchor links.
//!
//! Every click on a fragment link suppresses the browser's own navigation.
//! The link's `href` is then used verbatim as a selector; a match is scrolled
//! to the top of the viewport with smooth behavior. A fragment with no match,
//! or one that is not a valid selector (`#`, `#1-intro`), only suppresses
//! navigation and does not scroll.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

#[cfg(feature = "hydrate")]
use crate::config::AnchorConfig;
#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;

/// What a click on a fragment link should do before any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPlan {
    /// Always `true`: navigation is suppressed even when nothing matches.
    pub prevent_default: bool,
    /// Selector to resolve, taken from the link's current `href`.
    pub selector: Option<String>,
}

/// Result of resolving a plan against the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorOutcome<T> {
    /// Scroll `T` into view at the top of the viewport.
    ScrollTo(T),
    /// Navigation suppressed, nothing to scroll to.
    Suppressed,
}

/// Plan a click given the link's `href` attribute at click time.
#[must_use]
pub fn plan_click(href: Option<&str>) -> AnchorPlan {
    let selector = href.filter(|h| !h.is_empty()).map(str::to_owned);
    AnchorPlan { prevent_default: true, selector }
}

/// Resolve the plan with `lookup`, which returns the matching element if any.
///
/// A lookup error (the selector does not parse) suppresses like a miss.
pub fn resolve<T, E>(plan: &AnchorPlan, lookup: impl FnOnce(&str) -> Result<Option<T>, E>) -> AnchorOutcome<T>
where
    E: std::fmt::Display,
{
    let Some(selector) = plan.selector.as_deref() else {
        return AnchorOutcome::Suppressed;
    };
    match lookup(selector) {
        Ok(Some(target)) => AnchorOutcome::ScrollTo(target),
        Ok(None) => {
            log::debug!("anchor {selector} has no target");
            AnchorOutcome::Suppressed
        }
        Err(err) => {
            log::debug!("anchor {selector} not resolvable: {err}");
            AnchorOutcome::Suppressed
        }
    }
}

/// Intercept clicks on every fragment link present right now.
#[cfg(feature = "hydrate")]
pub(crate) fn install(document: &web_sys::Document, config: &AnchorConfig) -> Result<(), EnhanceError> {
    let links = crate::dom::query_all(document, &config.link_selector)?;
    let count = links.len();
    for link in links {
        let document = document.clone();
        let link_for_cb = link.clone();
        crate::dom::listen(&link, "click", move |ev| {
            let plan = plan_click(link_for_cb.get_attribute("href").as_deref());
            if plan.prevent_default {
                ev.prevent_default();
            }
            if let AnchorOutcome::ScrollTo(target) = resolve(&plan, |selector| crate::dom::query_one(&document, selector)) {
                scroll_to_top(&target);
            }
        })?;
    }
    log::debug!("smooth scroll installed on {count} links");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn scroll_to_top(target: &web_sys::Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
