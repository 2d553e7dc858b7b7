//! Smooth scrolling for same-page fragment links.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

/// Intercepts clicks on `a[href^="#"]`, resolves the fragment to an
/// element by id and animates it to the top of the viewport.  Anchors
/// whose fragment resolves to nothing fall through silently.
pub fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let anchors = document.query_selector_all("a[href^=\"#\"]")?;
    for index in 0..anchors.length() {
        let Some(anchor) = anchors
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let document = document.clone();
        let link = anchor.clone();
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            if let Some(target) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Element id named by a fragment href.  A bare `#` addresses nothing.
fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::fragment_id;

    #[test]
    fn resolves_fragment_ids() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#how-it-works"), Some("how-it-works"));
    }

    #[test]
    fn bare_hash_and_non_fragment_hrefs_are_ignored() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/pricing"), None);
        assert_eq!(fragment_id("https://example.com#features"), None);
    }
}
