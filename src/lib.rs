//! Client-side effects for the Comet Browser landing page.
//!
//! The page itself is static, hand-authored markup; this crate attaches
//! the interactive layer on top: smooth scrolling, reveal and tilt
//! animations, ripple feedback, stat counters, the headline typewriter,
//! share/copy-link affordances, lazy images, and keyboard-focus styling.
//! Every handler is independent and every failure is logged and ignored —
//! the page must stay usable even if all of this silently breaks.

use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod capabilities;
mod dom;
mod styles;

mod effects {
    pub mod a11y;
    pub mod copy_link;
    pub mod cta;
    pub mod fade_in;
    pub mod lazy_images;
    pub mod parallax;
    pub mod smooth_scroll;
    pub mod stats;
    pub mod tilt;
    pub mod typing;
}

use capabilities::Capabilities;

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);
    info!("Starting landing page effects");

    let caps = Capabilities::detect();

    // Page-lifetime diagnostics attach right away; a stylesheet or script
    // can fail to load while the document is still parsing.
    if let Err(err) = effects::a11y::install_resource_error_logger() {
        warn!("resource error logger setup failed: {:?}", err);
    }
    effects::a11y::install_service_worker_hook();

    // Everything else needs the structural content parsed first.
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let ready = Closure::wrap(Box::new(move || {
            install_all(&caps);
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
    } else {
        install_all(&caps);
    }
    Ok(())
}

/// Wires every effect handler, independently: a handler that fails to
/// attach is logged and skipped, the rest still run.
fn install_all(caps: &Capabilities) {
    let results = [
        ("stylesheet", styles::install()),
        ("smooth scroll", effects::smooth_scroll::install()),
        ("parallax", effects::parallax::install()),
        ("fade-in", effects::fade_in::install(caps)),
        ("tilt", effects::tilt::install()),
        ("cta buttons", effects::cta::install(caps)),
        ("stat counters", effects::stats::install(caps)),
        ("typing effect", effects::typing::install(caps)),
        ("copy link", effects::copy_link::install(caps)),
        ("lazy images", effects::lazy_images::install(caps)),
        ("keyboard focus", effects::a11y::install_focus_toggle()),
    ];
    for (name, result) in results {
        if let Err(err) = result {
            warn!("{} setup failed: {:?}", name, err);
        }
    }
}
