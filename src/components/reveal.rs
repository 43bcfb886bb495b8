use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::scroll::reveal_transition;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if element.style().set_property(property, value).is_err() {
        warn!("Could not set {} on a revealed card", property);
    }
}

/// Hides every card matching the reveal selector and fades each one in the
/// first time it scrolls into view.
fn observe_cards() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = window()?.document()?;

    let callback: ObserverCallback = Closure::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Ok(card) = target.clone().dyn_into::<HtmlElement>() {
                set_style(&card, "opacity", "1");
                set_style(&card, "transform", "translateY(0)");
            }
            observer.unobserve(&target);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let cards = document.query_selector_all(config::REVEAL_SELECTOR).ok()?;
    for index in 0..cards.length() {
        let Some(card) = cards.item(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        set_style(&card, "opacity", "0");
        set_style(&card, "transform", &format!("translateY({}px)", config::REVEAL_OFFSET_PX));
        set_style(&card, "transition", &reveal_transition(index as usize));
        observer.observe(&card);
    }
    debug!("Observing {} cards for reveal", cards.length());

    Some((observer, callback))
}

/// Arms the reveal observer once on mount and disconnects it on unmount.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let armed = observe_cards();
            if armed.is_none() {
                warn!("Reveal-on-scroll unavailable");
            }
            move || {
                if let Some((observer, _callback)) = armed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}
