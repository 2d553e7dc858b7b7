//! Runtime stylesheet fragment the handlers rely on: ripple animation,
//! keyboard-focus outline, copy-button font, and the load transition.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

const EFFECT_CSS: &str = r#"
.keyboard-nav *:focus {
    outline: 3px solid var(--accent) !important;
    outline-offset: 2px !important;
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.copy-link-button {
    font-family: 'Inter', sans-serif;
}

body:not(.loaded) {
    opacity: 0;
}

body.loaded {
    opacity: 1;
    transition: opacity 0.3s ease;
}
"#;

/// Appends the effect styles to `<head>` and flips the body to its loaded
/// state once all subresources have arrived.  The stylesheet keeps the
/// body transparent until then, so a start after the `load` event has
/// already fired must mark the body immediately — waiting for a listener
/// that will never fire would leave the page invisible.
pub fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(EFFECT_CSS));
    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?
        .append_child(&style)?;

    if load_already_fired(&document.ready_state()) {
        mark_loaded();
        return Ok(());
    }
    let on_load = Closure::wrap(Box::new(mark_loaded) as Box<dyn FnMut()>);
    dom::window()?.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

fn mark_loaded() {
    if let Ok(body) = dom::body() {
        let _ = body.class_list().add_1("loaded");
    }
}

/// The window `load` event only fires once, when the document reaches the
/// "complete" state; any later start has already missed it.
fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[cfg(test)]
mod tests {
    use super::load_already_fired;

    #[test]
    fn body_is_marked_immediately_after_a_late_start() {
        // A listener attached in these states will still see the event.
        assert!(!load_already_fired("loading"));
        assert!(!load_already_fired("interactive"));
        // Here the event is gone; the loaded class must be set directly,
        // or the injected `body:not(.loaded)` rule hides the page forever.
        assert!(load_already_fired("complete"));
    }
}
