//! Parallax drift for the announcement badge.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::dom;

const PARALLAX_SPEED: f64 = 0.5;

/// Moves the badge at half scroll speed.  Writes the CSS `translate`
/// property so the `transform` slot stays free for other effects.
pub fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(badge) = document.query_selector(".announcement-badge")? else {
        return Ok(());
    };
    let badge: HtmlElement = badge
        .dyn_into()
        .map_err(|_| JsValue::from_str(".announcement-badge is not an html element"))?;

    let window = dom::window()?;
    let scroll_window = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scrolled = scroll_window.page_y_offset().unwrap_or(0.0);
        let _ = badge
            .style()
            .set_property("translate", &format!("0 {}px", badge_offset(scrolled)));
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

/// Vertical displacement for a given scroll offset.  Pure function of the
/// scroll position; repeated events at the same offset write the same value.
fn badge_offset(scrolled: f64) -> f64 {
    scrolled * PARALLAX_SPEED
}

#[cfg(test)]
mod tests {
    use super::badge_offset;

    #[test]
    fn offset_is_half_the_scroll_position() {
        assert_eq!(badge_offset(0.0), 0.0);
        assert_eq!(badge_offset(100.0), 50.0);
        assert_eq!(badge_offset(733.0), 366.5);
    }
}
