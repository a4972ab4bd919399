//! Module start and DOM-ready sequencing.
//!
//! ARCHITECTURE
//! ============
//! `start` runs when the WASM module is instantiated, the earliest point this
//! crate can touch the page. It installs the panic hook and logger, loads
//! config, and restores the dark-mode class right away. Everything else waits
//! for `DOMContentLoaded`, or runs immediately when the document finished
//! parsing before the module was ready.
//!
//! If `<body>` does not exist yet at start, restoring the theme becomes the
//! first DOM-ready step so it still precedes every other behavior.
//!
//! Module scripts are deferred and the WASM fetch/compile is async, so the
//! browser may already have painted by then. A page that must never flash
//! the light theme needs a synchronous inline check at the top of `<body>`:
//!
//! ```html
//! <body>
//!   <script>
//!     if (localStorage.getItem('darkMode') === 'true') document.body.classList.add('dark-mode');
//!   </script>
//! ```
//!
//! Restoring again from `start` is harmless since adding the class is
//! idempotent.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;
#[cfg(feature = "hydrate")]
use web_sys::Document;

use crate::config::Features;
#[cfg(feature = "hydrate")]
use crate::config::EnhancerConfig;
#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;
#[cfg(feature = "hydrate")]
use crate::{anchor, copy_code, dark_mode, nav, progress};

/// One DOM-ready setup action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RestoreTheme,
    Nav,
    Anchors,
    Progress,
    CopyCode,
}

/// Tracks what already ran so setup happens exactly once.
#[derive(Debug, Default)]
pub struct Lifecycle {
    theme_restored: bool,
    initialized: bool,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the theme was restored at module start.
    pub fn mark_theme_restored(&mut self) {
        self.theme_restored = true;
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Steps to run on DOM ready, in order. Empty on every call after the first.
    pub fn ready_steps(&mut self, features: Features) -> Vec<Step> {
        if self.initialized {
            return Vec::new();
        }
        self.initialized = true;

        let mut steps = Vec::with_capacity(5);
        if !self.theme_restored {
            self.theme_restored = true;
            steps.push(Step::RestoreTheme);
        }
        if features.nav {
            steps.push(Step::Nav);
        }
        if features.anchors {
            steps.push(Step::Anchors);
        }
        if features.progress {
            steps.push(Step::Progress);
        }
        if features.copy_code {
            steps.push(Step::CopyCode);
        }
        steps
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static LIFECYCLE: RefCell<Lifecycle> = RefCell::new(Lifecycle::new());
    static CONFIG: RefCell<Option<Rc<EnhancerConfig>>> = const { RefCell::new(None) };
}

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = web_sys::window().and_then(|w| w.document());
    let (config, config_err) = match &document {
        Some(document) => EnhancerConfig::load(document),
        None => (EnhancerConfig::default(), None),
    };
    if console_log::init_with_level(config.log_level.as_level()).is_err() {
        log::debug!("logger already initialized");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using defaults");
    }
    let Some(document) = document else {
        log::warn!("page enhancer not started: {}", EnhanceError::NoDocument);
        return;
    };

    let config = Rc::new(config);
    CONFIG.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&config)));

    match dark_mode::apply_in_page(&document, &config.dark_mode) {
        Ok(_) => LIFECYCLE.with(|lc| lc.borrow_mut().mark_theme_restored()),
        Err(err) => log::debug!("theme restore deferred to DOM ready: {err}"),
    }

    if document.ready_state() == "loading" {
        let document_for_cb = document.clone();
        let config_for_cb = Rc::clone(&config);
        if let Err(err) = crate::dom::listen(&document, "DOMContentLoaded", move |_ev| {
            init(&document_for_cb, &config_for_cb);
        }) {
            log::warn!("cannot wait for DOM ready: {err}");
        }
    } else {
        init(&document, &config);
    }
}

/// `toggleDarkMode()` for page script. Returns whether dark mode is now on.
///
/// Only callable once the module has loaded; see the module docs for the
/// inline pre-check that covers first paint.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> bool {
    let config = CONFIG.with(|slot| slot.borrow().clone()).unwrap_or_default();
    match dark_mode::toggle_in_page(&config.dark_mode) {
        Ok(enabled) => enabled,
        Err(err) => {
            log::warn!("dark mode toggle failed: {err}");
            false
        }
    }
}

#[cfg(feature = "hydrate")]
fn init(document: &Document, config: &EnhancerConfig) {
    let steps = LIFECYCLE.with(|lc| lc.borrow_mut().ready_steps(config.features));
    for step in steps {
        let result = match step {
            Step::RestoreTheme => dark_mode::apply_in_page(document, &config.dark_mode).map(|_| ()),
            Step::Nav => nav::install(document, &config.nav),
            Step::Anchors => anchor::install(document, &config.anchors),
            Step::Progress => web_sys::window()
                .ok_or(EnhanceError::NoWindow)
                .and_then(|window| progress::install(&window, document, &config.progress)),
            Step::CopyCode => copy_code::install(document, &config.copy_code),
        };
        if let Err(err) = result {
            log::warn!("{step:?} setup failed: {err}");
        }
    }
    log::info!("page enhancer ready");
}
