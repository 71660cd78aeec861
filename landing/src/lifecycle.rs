//! Page-wide teardown and DOM event subscriptions.
//!
//! `App` provides one [`PageTeardown`] as context; every behavior registers
//! its listeners, timers and observers there so unmounting the page releases
//! all of them in one pass.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use novadigital_landing_core::{Subscription, Teardown};
use send_wrapper::SendWrapper;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

#[derive(Clone)]
pub struct PageTeardown(SendWrapper<Rc<RefCell<Teardown>>>);

impl PageTeardown {
    /// Create the page teardown, expose it as context and run it on cleanup.
    pub fn provide() -> Self {
        let teardown = Self(SendWrapper::new(Rc::new(RefCell::new(Teardown::new()))));
        provide_context(teardown.clone());
        let on_unmount = teardown.clone();
        on_cleanup(move || on_unmount.run());
        teardown
    }

    pub fn add(&self, subscription: Subscription) {
        debug!(subscription = subscription.label(), "registered");
        self.0.borrow_mut().add(subscription);
    }

    pub fn run(&self) {
        let mut teardown = self.0.borrow_mut();
        debug!(count = teardown.len(), "page teardown");
        teardown.run();
    }
}

/// Register `subscription` with the page teardown, or with the current owner
/// when rendered outside `App`.
pub fn register(subscription: Subscription) {
    match use_context::<PageTeardown>() {
        Some(teardown) => teardown.add(subscription),
        None => {
            let held = SendWrapper::new(subscription);
            on_cleanup(move || drop(held));
        }
    }
}

/// Attach `handler` to `target` for `event`. The listener is removed when
/// the returned subscription is released.
pub fn listen(
    label: &'static str,
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Option<Subscription> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!(event, "failed to add listener: {e:?}");
        return None;
    }
    let target = target.clone();
    Some(Subscription::new(label, move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    }))
}
