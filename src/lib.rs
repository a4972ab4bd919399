//! # page-enhancer
//!
//! WASM enhancements for a static site's pages: mobile navigation toggle,
//! smooth scrolling for in-page anchors, a reading progress bar, copy buttons
//! on code blocks, and a persisted dark-mode preference.
//!
//! Browser glue is compiled only with the `hydrate` feature. Without it the
//! crate builds natively and exposes the browser-free core of each behavior,
//! which is what the unit tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Module start, DOM-ready sequencing, `toggleDarkMode` export |
//! | [`nav`] | Navigation trigger/menu toggle |
//! | [`anchor`] | Fragment link interception and smooth scroll |
//! | [`progress`] | Reading progress bar |
//! | [`copy_code`] | Copy-to-clipboard buttons on `pre code` blocks |
//! | [`dark_mode`] | Dark mode restore and toggle |
//! | [`preference`] | Persisted boolean flag behind [`preference::PreferenceStore`] |
//! | [`dom`] | [`dom::ClassList`] port and `web-sys` helpers |
//! | [`config`] | Defaults and inline JSON overrides |
//! | [`error`] | [`error::EnhanceError`] |

pub mod anchor;
pub mod app;
pub mod config;
pub mod copy_code;
pub mod dark_mode;
pub mod dom;
pub mod error;
pub mod nav;
pub mod preference;
pub mod progress;
