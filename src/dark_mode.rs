//! Dark mode toggle and load-time restore.
//!
//! The preference lives in a [`PreferenceStore`] (`localStorage["darkMode"]`
//! in the browser) and is shown as the `.dark-mode` class on `<body>`. The
//! stored value is only read once, at module start, and must be applied before
//! first paint; after that the body class is the source of truth and the
//! store just mirrors it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::dom::ClassList;
use crate::preference::PreferenceStore;

#[cfg(feature = "hydrate")]
use crate::config::DarkModeConfig;
#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;
#[cfg(feature = "hydrate")]
use crate::preference::LocalStoragePreference;

/// Add `class` to `body` if the store says dark mode is on.
///
/// Never removes the class: a light preference leaves server-rendered markup
/// alone. Returns whether the class was applied.
pub fn apply_saved_preference(body: &impl ClassList, store: &impl PreferenceStore, class: &str) -> bool {
    if store.get() {
        body.add(class);
        true
    } else {
        false
    }
}

/// Flip `class` on `body` and persist the resulting state.
pub fn toggle_dark_mode(body: &impl ClassList, store: &impl PreferenceStore, class: &str) -> bool {
    body.toggle(class);
    let enabled = body.contains(class);
    store.set(enabled);
    enabled
}

/// Apply the stored preference to the live `<body>`.
#[cfg(feature = "hydrate")]
pub(crate) fn apply_in_page(document: &web_sys::Document, config: &DarkModeConfig) -> Result<bool, EnhanceError> {
    let body = document.body().ok_or(EnhanceError::NoBody)?;
    let store = LocalStoragePreference::new(&config.storage_key);
    Ok(apply_saved_preference(&body.class_list(), &store, &config.class_name))
}

/// Toggle the live `<body>` and persist to `localStorage`.
#[cfg(feature = "hydrate")]
pub(crate) fn toggle_in_page(config: &DarkModeConfig) -> Result<bool, EnhanceError> {
    let (_, document) = crate::dom::window_document()?;
    let body = document.body().ok_or(EnhanceError::NoBody)?;
    let store = LocalStoragePreference::new(&config.storage_key);
    Ok(toggle_dark_mode(&body.class_list(), &store, &config.class_name))
}
