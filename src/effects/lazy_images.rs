//! Lazy promotion of deferred image sources.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::capabilities::Capabilities;
use crate::dom;

const DEFERRED_ATTR: &str = "data-src";

/// Every `img[data-src]` gets its real source the first time it reaches
/// the viewport.  The attribute is removed and the image unobserved in
/// the same breath, so the swap happens at most once however often the
/// image re-enters view.
pub fn install(caps: &Capabilities) -> Result<(), JsValue> {
    if !caps.intersection_observer {
        return Ok(());
    }
    let document = dom::document()?;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() else {
                    continue;
                };
                if let Some(src) = image.get_attribute(DEFERRED_ATTR) {
                    image.set_src(&src);
                    let _ = image.remove_attribute(DEFERRED_ATTR);
                    observer.unobserve(&image);
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
    on_intersect.forget();

    let images = document.query_selector_all(&format!("img[{DEFERRED_ATTR}]"))?;
    for index in 0..images.length() {
        if let Some(image) = images
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&image);
        }
    }
    Ok(())
}
