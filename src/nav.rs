//! Mobile navigation toggle.
//!
//! Clicking the trigger flips the active class on the menu and on the trigger
//! itself. Each element is toggled independently, so a page that ships one of
//! them pre-activated keeps them out of phase. If either element is missing
//! the feature stays off.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dom::ClassList;

#[cfg(feature = "hydrate")]
use crate::config::NavConfig;
#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;

/// Class state of the pair after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub menu_active: bool,
    pub trigger_active: bool,
}

/// Handle one trigger click.
pub fn toggle_pair(menu: &impl ClassList, trigger: &impl ClassList, class: &str) -> NavState {
    let menu_active = menu.toggle(class);
    let trigger_active = trigger.toggle(class);
    NavState { menu_active, trigger_active }
}

/// Wire the click handler when both elements are present.
#[cfg(feature = "hydrate")]
pub(crate) fn install(document: &web_sys::Document, config: &NavConfig) -> Result<(), EnhanceError> {
    let trigger = crate::dom::query_one(document, &config.toggle_selector)?;
    let menu = crate::dom::query_one(document, &config.menu_selector)?;
    let (Some(trigger), Some(menu)) = (trigger, menu) else {
        log::debug!("nav toggle inactive: trigger or menu missing");
        return Ok(());
    };

    let class = config.active_class.clone();
    let trigger_for_cb = trigger.clone();
    crate::dom::listen(&trigger, "click", move |_ev| {
        let state = toggle_pair(&menu.class_list(), &trigger_for_cb.class_list(), &class);
        log::trace!("nav toggled: {state:?}");
    })?;
    log::debug!("nav toggle installed");
    Ok(())
}
