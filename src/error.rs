//! Error type shared by the behavior installers.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while wiring behaviors into the page.
///
/// Installers return these to the top-level init, which logs them and moves
/// on to the next behavior.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,

    /// The window has no associated document.
    #[error("no document available")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// A DOM call threw.
    #[error("DOM call {op} failed: {message}")]
    Dom { op: &'static str, message: String },

    /// The inline config block was not valid JSON for [`crate::config::EnhancerConfig`].
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

impl EnhanceError {
    /// Wrap a thrown JS value from the DOM call named `op`.
    #[cfg(feature = "hydrate")]
    pub(crate) fn dom(op: &'static str, err: &JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        Self::Dom { op, message }
    }
}
