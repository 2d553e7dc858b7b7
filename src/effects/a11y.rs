//! Keyboard-focus styling and passive diagnostics.

use js_sys::Reflect;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, KeyboardEvent};

use crate::dom;

const FOCUS_CLASS: &str = "keyboard-nav";

/// Tab switches the page into keyboard-navigation mode (visible focus
/// outlines, styled by the injected stylesheet); the next mouse press
/// switches it back off until Tab is used again.
pub fn install_focus_toggle() -> Result<(), JsValue> {
    let document = dom::document()?;

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() == "Tab" {
            if let Ok(body) = dom::body() {
                let _ = body.class_list().add_1(FOCUS_CLASS);
            }
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let on_mousedown = Closure::wrap(Box::new(move |_event: Event| {
        if let Ok(body) = dom::body() {
            let _ = body.class_list().remove_1(FOCUS_CLASS);
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())?;
    on_mousedown.forget();
    Ok(())
}

/// Warns when an external stylesheet or script fails to load.  Listens in
/// the capture phase because resource error events do not bubble; never
/// blocks rendering.
pub fn install_resource_error_logger() -> Result<(), JsValue> {
    let window = dom::window()?;
    let on_error = Closure::wrap(Box::new(move |event: Event| {
        let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let tag = element.tag_name();
        if tag == "LINK" || tag == "SCRIPT" {
            let address = element
                .get_attribute("src")
                .or_else(|| element.get_attribute("href"))
                .unwrap_or_default();
            warn!("Failed to load external resource: {}", address);
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback_and_bool(
        "error",
        on_error.as_ref().unchecked_ref(),
        true,
    )?;
    on_error.forget();
    Ok(())
}

/// Offline-capability hook: detects the service worker API but registers
/// nothing, since no worker ships with the page yet.
pub fn install_service_worker_hook() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    if Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        debug!("service worker API available; no worker to register");
    }
}
