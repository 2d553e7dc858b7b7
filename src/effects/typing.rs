//! Typewriter reveal of the main headline, desktop only.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::capabilities::Capabilities;
use crate::dom;

const START_DELAY_MS: u32 = 500;
const CHAR_TICK_MS: u32 = 30;

/// Captures the headline's full inner markup, clears it, then reveals one
/// additional character every tick until the markup is restored.  The
/// reveal counts characters of the raw markup string, so tags stream in
/// exactly as the page author wrote them.  Timers are not cancelled on
/// navigation; fine for a single-page session.
pub fn install(caps: &Capabilities) -> Result<(), JsValue> {
    if !caps.desktop {
        return Ok(());
    }
    let document = dom::document()?;
    let Some(title) = document.query_selector(".main-title")? else {
        return Ok(());
    };
    let title: HtmlElement = title
        .dyn_into()
        .map_err(|_| JsValue::from_str(".main-title is not an html element"))?;

    let markup = title.inner_html();
    let total = markup.chars().count();
    if total == 0 {
        return Ok(());
    }
    title.set_inner_html("");
    let _ = title.style().set_property("opacity", "1");

    Timeout::new(START_DELAY_MS, move || {
        let mut shown = 0usize;
        let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let tick_handle = handle.clone();
        let interval = Interval::new(CHAR_TICK_MS, move || {
            shown += 1;
            title.set_inner_html(&reveal_prefix(&markup, shown));
            if shown >= total {
                tick_handle.borrow_mut().take();
            }
        });
        handle.borrow_mut().replace(interval);
    })
    .forget();
    Ok(())
}

/// First `count` characters of `markup`, cut on scalar boundaries.
fn reveal_prefix(markup: &str, count: usize) -> String {
    markup.chars().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::reveal_prefix;

    #[test]
    fn reveals_one_character_at_a_time() {
        let markup = "Hi <em>there</em>";
        assert_eq!(reveal_prefix(markup, 0), "");
        assert_eq!(reveal_prefix(markup, 4), "Hi <");
        assert_eq!(reveal_prefix(markup, 17), markup);
    }

    #[test]
    fn counts_past_the_end_return_the_full_markup() {
        assert_eq!(reveal_prefix("abc", 100), "abc");
    }

    #[test]
    fn cuts_on_scalar_boundaries() {
        let markup = "café ☄ browser";
        assert_eq!(reveal_prefix(markup, 4), "café");
        assert_eq!(reveal_prefix(markup, 6), "café ☄");
    }
}
