//! Floating copy-link button for narrow viewports without a native share
//! sheet.

use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlElement, MouseEvent};

use crate::capabilities::Capabilities;
use crate::dom;

const CONFIRM_MS: u32 = 2000;

const IDLE_LABEL: &str = "📋 Copy Link";
const COPIED_LABEL: &str = "✅ Copied!";

const BASE_BACKGROUND: &str = "var(--primary-gradient)";
const COPIED_BACKGROUND: &str = "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)";
const BASE_SHADOW: &str = "0 4px 16px rgba(102, 126, 234, 0.4)";
const HOVER_SHADOW: &str = "0 6px 20px rgba(102, 126, 234, 0.6)";

const BUTTON_CSS: &str = "position: fixed; bottom: 20px; right: 20px; color: white; \
                          border: none; padding: 12px 20px; border-radius: 8px; \
                          cursor: pointer; font-weight: 600; z-index: 1000; \
                          transition: all 0.3s ease;";

/// Injects the button at most once per page load; it persists until
/// navigation.  A successful copy shows a two-second confirmation state;
/// a failed copy is logged and the UI left unchanged.
pub fn install(caps: &Capabilities) -> Result<(), JsValue> {
    if !caps.wants_copy_button() {
        return Ok(());
    }
    let document = dom::document()?;
    let button: HtmlElement = document
        .create_element("button")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("button creation produced a non-html element"))?;
    button.set_inner_html(IDLE_LABEL);
    button.set_class_name("copy-link-button");
    let style = button.style();
    style.set_css_text(BUTTON_CSS);
    let _ = style.set_property("background", BASE_BACKGROUND);
    let _ = style.set_property("box-shadow", BASE_SHADOW);

    let clipboard_supported = caps.clipboard;
    let clicked = button.clone();
    let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
        if !clipboard_supported {
            error!("Failed to copy link: clipboard unsupported");
            return;
        }
        let button = clicked.clone();
        spawn_local(async move {
            let copied = async {
                let window = dom::window()?;
                let url = window.location().href()?;
                JsFuture::from(window.navigator().clipboard().write_text(&url)).await
            }
            .await;
            match copied {
                Ok(_) => confirm_copied(&button),
                Err(err) => error!("Failed to copy link: {:?}", err),
            }
        });
    }) as Box<dyn FnMut(MouseEvent)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let entered = button.clone();
    let on_enter = Closure::wrap(Box::new(move |_event: MouseEvent| {
        let style = entered.style();
        let _ = style.set_property("translate", "0 -2px");
        let _ = style.set_property("box-shadow", HOVER_SHADOW);
    }) as Box<dyn FnMut(MouseEvent)>);
    button.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
    on_enter.forget();

    let left = button.clone();
    let on_leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
        let style = left.style();
        let _ = style.set_property("translate", "0");
        let _ = style.set_property("box-shadow", BASE_SHADOW);
    }) as Box<dyn FnMut(MouseEvent)>);
    button.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();

    dom::body()?.append_child(&button)?;
    Ok(())
}

/// Confirmation state after a successful copy.  Rapid repeat clicks spawn
/// independent reverts; the last one wins.
fn confirm_copied(button: &HtmlElement) {
    button.set_inner_html(COPIED_LABEL);
    let _ = button.style().set_property("background", COPIED_BACKGROUND);
    let reverted = button.clone();
    Timeout::new(CONFIRM_MS, move || {
        reverted.set_inner_html(IDLE_LABEL);
        let _ = reverted.style().set_property("background", BASE_BACKGROUND);
    })
    .forget();
}
