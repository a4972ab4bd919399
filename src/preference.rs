//! Persisted boolean preference behind an injectable store.
//!
//! The browser store writes `"true"` / `"false"` strings to `localStorage`
//! under a single key. Only the exact string `"true"` reads back as enabled;
//! a missing key or any other value is `false`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a storage that is unavailable (private mode,
//! sandboxed iframe) or full is logged and otherwise ignored, so the page keeps
//! working with an in-session-only preference.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;

/// Read/write access to one persisted boolean flag.
pub trait PreferenceStore {
    /// The stored flag, `false` when nothing is stored.
    fn get(&self) -> bool;

    /// Persist `enabled`.
    fn set(&self, enabled: bool);
}

/// Wire encoding of a flag.
#[must_use]
pub fn encode_flag(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Decode a raw stored value. Only `"true"` is enabled.
#[must_use]
pub fn decode_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// In-memory store holding the raw encoded string, like `localStorage` would.
#[derive(Debug, Default)]
pub struct MemoryPreference {
    raw: RefCell<Option<String>>,
}

impl MemoryPreference {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an already-persisted raw value.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self { raw: RefCell::new(Some(raw.to_owned())) }
    }

    /// The raw stored string, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl PreferenceStore for MemoryPreference {
    fn get(&self) -> bool {
        decode_flag(self.raw.borrow().as_deref())
    }

    fn set(&self, enabled: bool) {
        *self.raw.borrow_mut() = Some(encode_flag(enabled).to_owned());
    }
}

/// `window.localStorage` entry under a fixed key.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStoragePreference {
    key: String,
}

#[cfg(feature = "hydrate")]
impl LocalStoragePreference {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("{}", crate::error::EnhanceError::dom("localStorage", &err));
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStoragePreference {
    fn get(&self) -> bool {
        let Some(storage) = Self::storage() else {
            return false;
        };
        match storage.get_item(&self.key) {
            Ok(raw) => decode_flag(raw.as_deref()),
            Err(err) => {
                log::warn!("{}", crate::error::EnhanceError::dom("localStorage.getItem", &err));
                false
            }
        }
    }

    fn set(&self, enabled: bool) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(&self.key, encode_flag(enabled)) {
            log::warn!("{}", crate::error::EnhanceError::dom("localStorage.setItem", &err));
        }
    }
}
