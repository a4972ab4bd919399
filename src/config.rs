//! Enhancer configuration with an optional inline JSON override.
//!
//! Defaults match the site's stylesheet contract. A page may override any
//! subset by embedding
//!
//! ```html
//! <script type="application/json" id="page-enhancer-config">
//!   { "copy_code": { "idle_label": "Copy", "copied_label": "Copied!" } }
//! </script>
//! ```
//!
//! before the module script. Missing fields keep their defaults and unknown
//! fields are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::EnhanceError;

pub const CONFIG_ELEMENT_ID: &str = "page-enhancer-config";

pub const DEFAULT_NAV_TOGGLE_SELECTOR: &str = ".navbar-toggle";
pub const DEFAULT_NAV_MENU_SELECTOR: &str = ".navbar-menu";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const DEFAULT_PROGRESS_CLASS: &str = "reading-progress";
pub const DEFAULT_CODE_BLOCK_SELECTOR: &str = "pre code";
pub const DEFAULT_COPY_BUTTON_CLASS: &str = "copy-code";
pub const DEFAULT_COPY_IDLE_LABEL: &str = "Copiar";
pub const DEFAULT_COPY_DONE_LABEL: &str = "Copiado!";
pub const DEFAULT_COPY_REVERT_MS: u32 = 2000;
pub const DEFAULT_DARK_MODE_CLASS: &str = "dark-mode";
pub const DEFAULT_DARK_MODE_KEY: &str = "darkMode";

/// Verbosity of the browser console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

/// Per-behavior on/off switches. The dark-mode toggle export is always live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    pub nav: bool,
    pub anchors: bool,
    pub progress: bool,
    pub copy_code: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self { nav: true, anchors: true, progress: true, copy_code: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: DEFAULT_NAV_TOGGLE_SELECTOR.to_owned(),
            menu_selector: DEFAULT_NAV_MENU_SELECTOR.to_owned(),
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub link_selector: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { link_selector: DEFAULT_ANCHOR_SELECTOR.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub class_name: String,
    /// Inline style applied to the bar element.
    pub css_text: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_PROGRESS_CLASS.to_owned(),
            css_text: crate::progress::BAR_CSS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CopyCodeConfig {
    pub block_selector: String,
    pub class_name: String,
    pub idle_label: String,
    pub copied_label: String,
    pub revert_after_ms: u32,
    /// Inline style applied to each button.
    pub css_text: String,
}

impl Default for CopyCodeConfig {
    fn default() -> Self {
        Self {
            block_selector: DEFAULT_CODE_BLOCK_SELECTOR.to_owned(),
            class_name: DEFAULT_COPY_BUTTON_CLASS.to_owned(),
            idle_label: DEFAULT_COPY_IDLE_LABEL.to_owned(),
            copied_label: DEFAULT_COPY_DONE_LABEL.to_owned(),
            revert_after_ms: DEFAULT_COPY_REVERT_MS,
            css_text: crate::copy_code::BUTTON_CSS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DarkModeConfig {
    pub class_name: String,
    pub storage_key: String,
}

impl Default for DarkModeConfig {
    fn default() -> Self {
        Self { class_name: DEFAULT_DARK_MODE_CLASS.to_owned(), storage_key: DEFAULT_DARK_MODE_KEY.to_owned() }
    }
}

/// Complete enhancer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub log_level: LogLevel,
    pub features: Features,
    pub nav: NavConfig,
    pub anchors: AnchorConfig,
    pub progress: ProgressConfig,
    pub copy_code: CopyCodeConfig,
    pub dark_mode: DarkModeConfig,
}

impl EnhancerConfig {
    /// Parse an override document. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Load from the inline config element, falling back to defaults.
    ///
    /// Runs before the logger exists, so a parse failure is returned alongside
    /// the fallback for the caller to report once logging is up.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn load(document: &web_sys::Document) -> (Self, Option<EnhanceError>) {
        let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return (Self::default(), None);
        };
        let raw = el.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
