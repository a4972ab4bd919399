//! "Copy" buttons on preformatted code blocks.
//!
//! One button per code block found at init; blocks added later are not
//! picked up. The button is appended inside the block's parent, which is made
//! `position: relative` so the button can sit in its top-right corner.
//!
//! A click writes the block's full text to the clipboard. On success the label
//! switches to the copied label and a one-shot timer switches it back. Every
//! success schedules its own revert; earlier timers are never cancelled. A
//! failed write leaves the label as it was and is only logged.

#[cfg(test)]
#[path = "copy_code_test.rs"]
mod copy_code_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;

use crate::config::CopyCodeConfig;
#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;

/// Default inline style for the button.
pub const BUTTON_CSS: &str = "position: absolute; top: 0.5rem; right: 0.5rem; \
    background: var(--primary-color); color: white; border: none; padding: 0.25rem 0.5rem; \
    border-radius: 0.25rem; cursor: pointer; font-size: 0.75rem;";

/// Delay before a copied label reverts to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertAfter(pub u32);

impl RevertAfter {
    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.0))
    }
}

/// Label state of one copy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButton {
    idle_label: String,
    copied_label: String,
    revert_after_ms: u32,
    copied: bool,
    failures: u32,
}

impl CopyButton {
    #[must_use]
    pub fn new(config: &CopyCodeConfig) -> Self {
        Self {
            idle_label: config.idle_label.clone(),
            copied_label: config.copied_label.clone(),
            revert_after_ms: config.revert_after_ms,
            copied: false,
            failures: 0,
        }
    }

    /// Text the button should currently show.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.copied { &self.copied_label } else { &self.idle_label }
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Rejected clipboard writes seen so far.
    #[must_use]
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Record a successful clipboard write. Returns when to revert.
    pub fn copied(&mut self) -> RevertAfter {
        self.copied = true;
        RevertAfter(self.revert_after_ms)
    }

    /// Record a rejected clipboard write.
    ///
    /// The label is left as is and nothing is scheduled; a revert already
    /// pending from an earlier success still fires.
    pub fn failed(&mut self) {
        self.failures = self.failures.saturating_add(1);
    }

    /// Timer fired: back to the idle label.
    pub fn revert(&mut self) {
        self.copied = false;
    }
}

/// Attach a button to every code block present right now.
#[cfg(feature = "hydrate")]
pub(crate) fn install(document: &web_sys::Document, config: &CopyCodeConfig) -> Result<(), EnhanceError> {
    let blocks = crate::dom::query_all(document, &config.block_selector)?;
    let count = blocks.len();
    for block in blocks {
        attach(document, block, config)?;
    }
    log::debug!("copy buttons installed on {count} code blocks");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn attach(document: &web_sys::Document, block: web_sys::Element, config: &CopyCodeConfig) -> Result<(), EnhanceError> {
    let Some(container) = block.parent_element() else {
        log::debug!("code block without parent skipped");
        return Ok(());
    };

    let button = document
        .create_element("button")
        .map_err(|err| EnhanceError::dom("createElement", &err))?
        .unchecked_into::<web_sys::HtmlElement>();
    button.set_class_name(&config.class_name);
    button.style().set_css_text(&config.css_text);

    let state = Rc::new(RefCell::new(CopyButton::new(config)));
    render(&button, &state.borrow());

    if let Some(container) = container.dyn_ref::<web_sys::HtmlElement>() {
        container
            .style()
            .set_property("position", "relative")
            .map_err(|err| EnhanceError::dom("style.position", &err))?;
    }
    container
        .append_child(&button)
        .map_err(|err| EnhanceError::dom("appendChild", &err))?;

    let button_for_cb = button.clone();
    crate::dom::listen(&button, "click", move |_ev| {
        let text = block.text_content().unwrap_or_default();
        let state = Rc::clone(&state);
        let button = button_for_cb.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let delay = match write_clipboard(&text).await {
                Ok(()) => state.borrow_mut().copied(),
                Err(err) => {
                    state.borrow_mut().failed();
                    log::warn!("copy to clipboard failed: {err}");
                    return;
                }
            };
            render(&button, &state.borrow());
            gloo_timers::future::sleep(delay.as_duration()).await;
            state.borrow_mut().revert();
            render(&button, &state.borrow());
        });
    })?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn render(button: &web_sys::HtmlElement, state: &CopyButton) {
    button.set_text_content(Some(state.label()));
}

/// `navigator.clipboard.writeText`, tolerating contexts without the API.
#[cfg(feature = "hydrate")]
async fn write_clipboard(text: &str) -> Result<(), EnhanceError> {
    let window = web_sys::window().ok_or(EnhanceError::NoWindow)?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|err| EnhanceError::dom("navigator.clipboard", &err))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(EnhanceError::Dom { op: "navigator.clipboard", message: "unavailable".to_owned() });
    }
    let clipboard = clipboard.unchecked_into::<web_sys::Clipboard>();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| EnhanceError::dom("clipboard.writeText", &err))?;
    Ok(())
}
