//! Cancellation and unsubscribe handles for recurring page registrations.
//!
//! Every listener, timer, observer and frame loop the page starts hands back a
//! [`Subscription`]. They are collected in a [`Teardown`] and released together
//! when the page unmounts.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Shared flag checked by a recurring task before it re-schedules itself.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// An unsubscribe action. Runs at most once: explicitly or on drop.
pub struct Subscription {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    /// A subscription that cancels `token` when released.
    pub fn cancelling(label: &'static str, token: CancelToken) -> Self {
        Self::new(label, move || token.cancel())
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            debug!(subscription = self.label, "unsubscribed");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Ordered set of subscriptions released together, newest first.
#[derive(Debug, Default)]
pub struct Teardown {
    subscriptions: Vec<Subscription>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release everything. Calling again is a no-op.
    pub fn run(&mut self) {
        while let Some(mut subscription) = self.subscriptions.pop() {
            subscription.unsubscribe();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}
