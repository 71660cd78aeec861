//! Scroll-triggered entrance animations via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use novadigital_landing_core::{RevealConfig, RevealTracker, RevealTransition, Subscription};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const ID_ATTR: &str = "data-reveal-id";

/// Observe every element matching the reveal selector. Elements get the
/// shown class once and are then unobserved; releasing the subscription
/// disconnects the observer.
pub fn observe_reveals(config: &RevealConfig) -> Option<Subscription> {
    let document = web_sys::window()?.document()?;
    let tracker = Rc::new(RefCell::new(RevealTracker::new(config.threshold)));
    let shown_class = config.shown_class.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = reveal_id(&target) else {
                    continue;
                };
                let transition = tracker.borrow_mut().observe(
                    id,
                    entry.intersection_ratio(),
                    entry.is_intersecting(),
                );
                if transition == RevealTransition::BecameShown {
                    let _ = target.class_list().add_1(&shown_class);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {e:?}");
            return None;
        }
    };

    let nodes = match document.query_selector_all(&config.selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!(selector = %config.selector, "bad reveal selector: {e:?}");
            return None;
        }
    };
    let mut observed = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let _ = element.set_attribute(ID_ATTR, &i.to_string());
        observer.observe(&element);
        observed += 1;
    }
    debug!(observed, threshold = config.threshold, "reveal observer attached");

    Some(Subscription::new("reveal-observer", move || {
        observer.disconnect();
        drop(callback);
    }))
}

fn reveal_id(element: &Element) -> Option<u32> {
    element.get_attribute(ID_ATTR)?.parse().ok()
}
