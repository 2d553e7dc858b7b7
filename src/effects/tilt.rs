//! Cursor-tracking 3-D tilt on feature cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

/// Divides the cursor offset from card center; higher means subtler tilt.
const TILT_DAMPING: f64 = 20.0;

const NEUTRAL_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

/// Stateless per event: every mousemove fully determines the transform
/// from the current pointer position, and mouseleave snaps back to
/// neutral.  This handler exclusively owns `transform` on the cards.
pub fn install() -> Result<(), JsValue> {
    let document = dom::document()?;
    let cards = document.query_selector_all(".feature-card")?;
    for index in 0..cards.length() {
        let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let moved = card.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = moved.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            let (angle_x, angle_y) = tilt_angles(x, y, rect.width(), rect.height());
            let _ = moved
                .style()
                .set_property("transform", &tilt_transform(angle_x, angle_y));
        }) as Box<dyn FnMut(MouseEvent)>);
        card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let left = card.clone();
        let on_leave = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let _ = left.style().set_property("transform", NEUTRAL_TRANSFORM);
        }) as Box<dyn FnMut(MouseEvent)>);
        card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

/// Rotation angles in degrees for a cursor at (x, y) inside a w×h card.
fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    ((y - center_y) / TILT_DAMPING, (center_x - x) / TILT_DAMPING)
}

fn tilt_transform(angle_x: f64, angle_y: f64) -> String {
    format!("perspective(1000px) rotateX({angle_x}deg) rotateY({angle_y}deg) translateZ(10px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_at_center_means_no_tilt() {
        assert_eq!(tilt_angles(150.0, 100.0, 300.0, 200.0), (0.0, 0.0));
    }

    #[test]
    fn corners_tilt_toward_the_cursor() {
        // Top-left: tilts up (negative x-axis) and toward the left edge.
        let (ax, ay) = tilt_angles(0.0, 0.0, 300.0, 200.0);
        assert_eq!((ax, ay), (-5.0, 7.5));
        // Bottom-right mirrors it.
        let (ax, ay) = tilt_angles(300.0, 200.0, 300.0, 200.0);
        assert_eq!((ax, ay), (5.0, -7.5));
    }

    #[test]
    fn transform_carries_both_angles() {
        let css = tilt_transform(-5.0, 7.5);
        assert_eq!(
            css,
            "perspective(1000px) rotateX(-5deg) rotateY(7.5deg) translateZ(10px)"
        );
    }
}
