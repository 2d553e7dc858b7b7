//! Fade-in reveal for feature cards and steps.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::capabilities::Capabilities;
use crate::dom;

const REVEAL_SELECTOR: &str = ".feature-card, .step";

/// Cards and steps start transparent and shifted down 20px, then settle
/// into place the first time they cross into the viewport (10% visible,
/// bottom margin pulled in 50px).  Re-intersection is harmless: the
/// element is already at rest.  Owns `opacity` and `translate` on its
/// elements; `transform` belongs to the tilt handler.
pub fn install(caps: &Capabilities) -> Result<(), JsValue> {
    if !caps.intersection_observer {
        return Ok(());
    }
    let document = dom::document()?;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                    let style = element.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("translate", "0");
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let elements = document.query_selector_all(REVEAL_SELECTOR)?;
    for index in 0..elements.length() {
        let Some(element) = elements
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let style = element.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("translate", "0 20px");
        let _ = style.set_property("transition", "opacity 0.6s ease, translate 0.6s ease");
        observer.observe(&element);
    }
    Ok(())
}
