//! One capability probe at startup instead of ad-hoc feature detection
//! scattered through the handlers.  Handlers consume the record, so an
//! unsupported feature is skipped at setup time, never attempted and
//! failed — and tests can inject a synthetic record.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Viewport width at or below which the page is treated as mobile, in css px.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Platform features relevant to the effect handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `navigator.share` exists.
    pub share: bool,
    /// `navigator.clipboard` exists.
    pub clipboard: bool,
    /// `IntersectionObserver` exists.
    pub intersection_observer: bool,
    /// Viewport is wider than the mobile breakpoint.
    pub desktop: bool,
}

impl Capabilities {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::from_parts(false, false, false, 0.0);
        };
        let navigator = window.navigator();
        let share = has_property(navigator.as_ref(), "share");
        let clipboard = has_property(navigator.as_ref(), "clipboard");
        let observer = has_property(window.as_ref(), "IntersectionObserver");
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        Self::from_parts(share, clipboard, observer, width)
    }

    pub fn from_parts(
        share: bool,
        clipboard: bool,
        intersection_observer: bool,
        viewport_width: f64,
    ) -> Self {
        Self {
            share,
            clipboard,
            intersection_observer,
            desktop: viewport_width > MOBILE_BREAKPOINT,
        }
    }

    /// The floating copy-link button stands in for the native share sheet
    /// on narrow viewports that cannot share.
    pub fn wants_copy_button(&self) -> bool {
        !self.desktop && !self.share
    }
}

fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_button_only_on_narrow_viewports_without_share() {
        assert!(Capabilities::from_parts(false, true, true, 480.0).wants_copy_button());
        assert!(!Capabilities::from_parts(true, true, true, 480.0).wants_copy_button());
        assert!(!Capabilities::from_parts(false, true, true, 1280.0).wants_copy_button());
    }

    #[test]
    fn breakpoint_boundary_counts_as_mobile() {
        assert!(!Capabilities::from_parts(false, false, false, MOBILE_BREAKPOINT).desktop);
        assert!(Capabilities::from_parts(false, false, false, MOBILE_BREAKPOINT + 1.0).desktop);
    }
}
