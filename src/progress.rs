//! Reading progress bar pinned to the top of the viewport.
//!
//! Width is recomputed on every window scroll as the share of the scrollable
//! distance already traversed. The value is not clamped. A page without
//! scrollable overflow reports `0%` instead of dividing by zero.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

#[cfg(feature = "hydrate")]
use crate::config::ProgressConfig;
#[cfg(feature = "hydrate")]
use crate::error::EnhanceError;

/// Default inline style: fixed, full stacking priority, 100ms width easing.
pub const BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: var(--primary-color); z-index: 1000; transition: width 0.1s ease;";

/// Scroll metrics sampled on a scroll event, in CSS pixels.
///
/// Offsets are fractional under zoom and on high-DPI screens; the heights are
/// always whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// `document.body.scrollTop`.
    pub body_scroll_top: f64,
    /// `document.documentElement.scrollTop`.
    pub root_scroll_top: f64,
    /// `document.documentElement.scrollHeight`.
    pub scroll_height: i32,
    /// `document.documentElement.clientHeight`.
    pub client_height: i32,
}

impl ScrollMetrics {
    /// Body offset when non-zero (quirks mode), else the root element's.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn scroll_top(&self) -> f64 {
        if self.body_scroll_top != 0.0 { self.body_scroll_top } else { self.root_scroll_top }
    }

    /// Total distance the page can scroll.
    #[must_use]
    pub fn scrollable(&self) -> i32 {
        self.scroll_height - self.client_height
    }
}

/// Percent of the scrollable distance traversed.
#[must_use]
pub fn scroll_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable();
    if scrollable <= 0 {
        return 0.0;
    }
    metrics.scroll_top() / f64::from(scrollable) * 100.0
}

/// CSS `width` value for `percent`.
#[must_use]
pub fn width_style(percent: f64) -> String {
    format!("{percent}%")
}

/// Append the bar to `<body>` and track window scroll.
#[cfg(feature = "hydrate")]
pub(crate) fn install(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &ProgressConfig,
) -> Result<(), EnhanceError> {
    let body = document.body().ok_or(EnhanceError::NoBody)?;
    let bar = document
        .create_element("div")
        .map_err(|err| EnhanceError::dom("createElement", &err))?
        .unchecked_into::<web_sys::HtmlElement>();
    bar.set_class_name(&config.class_name);
    bar.style().set_css_text(&config.css_text);
    body.append_child(&bar)
        .map_err(|err| EnhanceError::dom("appendChild", &err))?;

    let document = document.clone();
    crate::dom::listen(window, "scroll", move |_ev| {
        let Some(metrics) = sample(&document) else {
            return;
        };
        let width = width_style(scroll_percent(metrics));
        if let Err(err) = bar.style().set_property("width", &width) {
            log::warn!("{}", EnhanceError::dom("style.width", &err));
        }
    })?;
    log::debug!("reading progress installed");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn sample(document: &web_sys::Document) -> Option<ScrollMetrics> {
    let root = document.document_element()?;
    let body_scroll_top = document.body().map_or(0.0, |b| precise_scroll_top(&b));
    Some(ScrollMetrics {
        body_scroll_top,
        root_scroll_top: precise_scroll_top(&root),
        scroll_height: root.scroll_height(),
        client_height: root.client_height(),
    })
}

/// `scrollTop` as the browser's double; the `web-sys` getter truncates to `i32`.
#[cfg(feature = "hydrate")]
fn precise_scroll_top(el: &web_sys::Element) -> f64 {
    match js_sys::Reflect::get(el, &JsValue::from_str("scrollTop")) {
        Ok(value) => value.as_f64().unwrap_or_else(|| f64::from(el.scroll_top())),
        Err(_) => f64::from(el.scroll_top()),
    }
}
