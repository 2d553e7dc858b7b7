//! Count-up animation for the stats strip.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::capabilities::Capabilities;
use crate::dom;

const COUNT_DURATION_MS: u32 = 2000;
const COUNT_TICK_MS: u32 = 16;

/// One-shot guard: a stat that carries this class never re-animates.
const ANIMATED_CLASS: &str = "animated";

/// Observes `.stat-number` elements whose text starts with an integer
/// literal (anything else is excluded up front) and counts them up from
/// zero the first time they become half visible.
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
                let element = entry.target();
                if element.class_list().contains(ANIMATED_CLASS) {
                    continue;
                }
                let _ = element.class_list().add_1(ANIMATED_CLASS);
                let text = element.text_content().unwrap_or_default();
                if let Some(target) = leading_int(&text) {
                    animate_counter(element, target);
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.5));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let stats = document.query_selector_all(".stat-number")?;
    for index in 0..stats.length() {
        let Some(stat) = stats
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let text = stat.text_content().unwrap_or_default();
        if leading_int(&text).is_some() {
            observer.observe(&stat);
        }
    }
    Ok(())
}

/// Counts the element's text up from zero over two seconds, snapping
/// exactly to the target on the final tick.  The interval cancels itself
/// by dropping its own handle.
fn animate_counter(element: Element, target: i64) {
    let mut counter = Counter::new(target, COUNT_DURATION_MS, COUNT_TICK_MS);
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let tick_handle = handle.clone();
    let interval = Interval::new(COUNT_TICK_MS, move || {
        let step = counter.tick();
        element.set_text_content(Some(&step.value.to_string()));
        if step.done {
            tick_handle.borrow_mut().take();
        }
    });
    handle.borrow_mut().replace(interval);
}

/// Leading-integer parse with `parseInt`'s permissiveness: "500+" and
/// "500 reviews" both count as 500, "N/A" counts as nothing.
fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse::<i64>().ok().map(|n| sign * n)
    }
}

struct Step {
    value: i64,
    done: bool,
}

/// Linear counter: fixed per-tick increment, floor displayed, exact
/// finish.  Displayed values never decrease and never exceed the target.
struct Counter {
    current: f64,
    increment: f64,
    target: i64,
}

impl Counter {
    fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms) / f64::from(tick_ms);
        Self {
            current: 0.0,
            increment: target as f64 / ticks,
            target,
        }
    }

    fn tick(&mut self) -> Step {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            Step {
                value: self.target,
                done: true,
            }
        } else {
            Step {
                value: self.current.floor() as i64,
                done: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integers_only() {
        assert_eq!(leading_int("500"), Some(500));
        assert_eq!(leading_int("500+"), Some(500));
        assert_eq!(leading_int(" 42 reviews"), Some(42));
        assert_eq!(leading_int("+7"), Some(7));
        assert_eq!(leading_int("-3"), Some(-3));
        assert_eq!(leading_int("1,200"), Some(1)); // parseInt semantics
        assert_eq!(leading_int("N/A"), None);
        assert_eq!(leading_int(""), None);
    }

    #[test]
    fn counter_is_monotonic_and_finishes_exactly() {
        let mut counter = Counter::new(500, 2000, 16);
        let mut previous = 0;
        let mut ticks = 0;
        loop {
            let step = counter.tick();
            ticks += 1;
            assert!(step.value >= previous, "value decreased");
            assert!(step.value <= 500, "value overshot the target");
            previous = step.value;
            if step.done {
                break;
            }
            assert!(ticks < 1000, "counter never finished");
        }
        assert_eq!(previous, 500);
        // 2000ms / 16ms = 125 linear steps.
        assert_eq!(ticks, 125);
    }

    #[test]
    fn zero_target_finishes_on_the_first_tick() {
        let mut counter = Counter::new(0, 2000, 16);
        let step = counter.tick();
        assert!(step.done);
        assert_eq!(step.value, 0);
    }

    #[test]
    fn target_not_divisible_by_step_count_still_lands_exactly() {
        let mut counter = Counter::new(1234, 2000, 16);
        let mut last = 0;
        for _ in 0..200 {
            let step = counter.tick();
            last = step.value;
            if step.done {
                break;
            }
        }
        assert_eq!(last, 1234);
    }
}
