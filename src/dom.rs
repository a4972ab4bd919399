//! DOM seams used by the behavior cores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behavior logic only ever needs to flip CSS class tokens, so that is the
//! single port it sees. The browser build implements [`ClassList`] for
//! `DomTokenList`; native builds and tests use the in-memory [`ClassSet`].
//! The hydrate-only helpers below keep `web-sys` listener and query glue out
//! of the individual behavior modules.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::cell::RefCell;
use std::collections::BTreeSet;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, DomTokenList, Element, Event, EventTarget};

#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;

/// A mutable set of CSS class tokens attached to one element.
pub trait ClassList {
    /// Whether `class` is currently present.
    fn contains(&self, class: &str) -> bool;

    /// Add `class` if absent.
    fn add(&self, class: &str);

    /// Remove `class` if present.
    fn remove(&self, class: &str);

    /// Flip `class` and return whether it is present afterwards.
    fn toggle(&self, class: &str) -> bool;
}

/// In-memory [`ClassList`] with the same semantics as `DOMTokenList`.
#[derive(Debug, Default)]
pub struct ClassSet {
    tokens: RefCell<BTreeSet<String>>,
}

impl ClassSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a space-separated `class` attribute value.
    #[must_use]
    pub fn from_attr(attr: &str) -> Self {
        let tokens = attr.split_whitespace().map(str::to_owned).collect();
        Self { tokens: RefCell::new(tokens) }
    }

    /// Render back to a `class` attribute value (sorted).
    #[must_use]
    pub fn to_attr(&self) -> String {
        self.tokens.borrow().iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

impl ClassList for ClassSet {
    fn contains(&self, class: &str) -> bool {
        self.tokens.borrow().contains(class)
    }

    fn add(&self, class: &str) {
        self.tokens.borrow_mut().insert(class.to_owned());
    }

    fn remove(&self, class: &str) {
        self.tokens.borrow_mut().remove(class);
    }

    fn toggle(&self, class: &str) -> bool {
        let mut tokens = self.tokens.borrow_mut();
        if tokens.remove(class) {
            false
        } else {
            tokens.insert(class.to_owned());
            true
        }
    }
}

#[cfg(feature = "hydrate")]
impl ClassList for DomTokenList {
    fn contains(&self, class: &str) -> bool {
        DomTokenList::contains(self, class)
    }

    fn add(&self, class: &str) {
        if let Err(err) = self.add_1(class) {
            log::warn!("{}", EnhanceError::dom("classList.add", &err));
        }
    }

    fn remove(&self, class: &str) {
        if let Err(err) = self.remove_1(class) {
            log::warn!("{}", EnhanceError::dom("classList.remove", &err));
        }
    }

    fn toggle(&self, class: &str) -> bool {
        match DomTokenList::toggle(self, class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("{}", EnhanceError::dom("classList.toggle", &err));
                DomTokenList::contains(self, class)
            }
        }
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// The closure is leaked on success; listeners are never removed.
#[cfg(feature = "hydrate")]
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EnhanceError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|err| EnhanceError::dom("addEventListener", &err))?;
    cb.forget();
    Ok(())
}

/// `querySelectorAll` collected into owned elements.
#[cfg(feature = "hydrate")]
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| EnhanceError::dom("querySelectorAll", &err))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// `querySelector` that treats "no match" as `None`.
#[cfg(feature = "hydrate")]
pub(crate) fn query_one(document: &Document, selector: &str) -> Result<Option<Element>, EnhanceError> {
    document
        .query_selector(selector)
        .map_err(|err| EnhanceError::dom("querySelector", &err))
}

/// The current window and document.
#[cfg(feature = "hydrate")]
pub(crate) fn window_document() -> Result<(web_sys::Window, Document), EnhanceError> {
    let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
    let document = window.document().ok_or(EnhanceError::NoDocument)?;
    Ok((window, document))
}
