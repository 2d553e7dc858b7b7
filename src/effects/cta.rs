//! Call-to-action buttons: click logging, ripple feedback, and the
//! modifier-click native share sheet.

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlAnchorElement, HtmlElement, MouseEvent, ShareData};

use crate::capabilities::Capabilities;
use crate::dom;

const RIPPLE_LIFETIME_MS: u32 = 600;

const SHARE_TITLE: &str = "Comet Browser - Earn $10 per Referral";
const SHARE_TEXT: &str = "Join the AI browser revolution! Earn $10 for each friend you refer. \
                          Get 1 month free Pro with Claude 4.5.";

/// One click listener per `.cta-button`.  The diagnostic log line is
/// emitted exactly once per click and never blocks navigation; ripples
/// are fire-and-forget, so rapid clicks overlap freely.
pub fn install(caps: &Capabilities) -> Result<(), JsValue> {
    let document = dom::document()?;
    let share_supported = caps.share;
    let buttons = document.query_selector_all(".cta-button")?;
    for index in 0..buttons.length() {
        let Some(button) = buttons
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let document = document.clone();
        let target = button.clone();
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            let url = target
                .dyn_ref::<HtmlAnchorElement>()
                .map(|anchor| anchor.href())
                .or_else(|| target.get_attribute("href"))
                .unwrap_or_default();
            let text = target.text_content().unwrap_or_default().trim().to_string();
            info!("CTA clicked: {} -> {}", text, url);

            if let Err(err) = spawn_ripple(&document, &target, &event) {
                warn!("ripple failed: {:?}", err);
            }

            if share_supported && (event.ctrl_key() || event.meta_key()) {
                event.prevent_default();
                share_page();
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn spawn_ripple(
    document: &Document,
    button: &HtmlElement,
    event: &MouseEvent,
) -> Result<(), JsValue> {
    let ripple: HtmlElement = document
        .create_element("span")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("span creation produced a non-html element"))?;
    ripple.set_class_name("ripple");
    button.append_child(&ripple)?;

    let rect = button.get_bounding_client_rect();
    let (size, x, y) = ripple_geometry(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    );
    let style = ripple.style();
    let _ = style.set_property("width", &format!("{size}px"));
    let _ = style.set_property("height", &format!("{size}px"));
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));

    Timeout::new(RIPPLE_LIFETIME_MS, move || {
        ripple.remove();
    })
    .forget();
    Ok(())
}

/// Ripple diameter and top-left offset for a click at client (cx, cy) on
/// a button with the given bounding rect: the circle that can cover the
/// whole button, centred on the click point.
fn ripple_geometry(
    cx: f64,
    cy: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64, f64) {
    let size = width.max(height);
    (size, cx - left - size / 2.0, cy - top - size / 2.0)
}

/// Opens the native share sheet with the referral pitch and the current
/// page URL.  Cancellation comes back as a rejection and is only logged.
fn share_page() {
    spawn_local(async move {
        let shared = async {
            let window = dom::window()?;
            let url = window.location().href()?;
            let data = ShareData::new();
            data.set_title(SHARE_TITLE);
            data.set_text(SHARE_TEXT);
            data.set_url(&url);
            JsFuture::from(window.navigator().share_with_data(&data)).await
        }
        .await;
        if let Err(err) = shared {
            info!("Share canceled or failed: {:?}", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::ripple_geometry;

    #[test]
    fn ripple_covers_the_longer_button_side() {
        let (size, _, _) = ripple_geometry(0.0, 0.0, 0.0, 0.0, 180.0, 48.0);
        assert_eq!(size, 180.0);
        let (size, _, _) = ripple_geometry(0.0, 0.0, 0.0, 0.0, 40.0, 90.0);
        assert_eq!(size, 90.0);
    }

    #[test]
    fn ripple_is_centred_on_the_click_point() {
        // Button at (100, 200), 180x48; click dead center.
        let (size, x, y) = ripple_geometry(190.0, 224.0, 100.0, 200.0, 180.0, 48.0);
        assert_eq!(size, 180.0);
        assert_eq!(x + size / 2.0, 90.0); // click x relative to button
        assert_eq!(y + size / 2.0, 24.0);
    }
}
