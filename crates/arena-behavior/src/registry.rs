//! The event-dispatch registry behavior states subscribe to.
//!
//! Subscriptions are the only resource a state holds while enabled, so the
//! enable/disable lifecycle is literally subscribe/unsubscribe against this
//! registry.  The manager owns the instance and consults it before
//! forwarding any event; at most one state (the active one) is subscribed
//! at a time.

use arena_core::EventClass;

/// Which event classes the currently enabled state wants delivered.
#[derive(Clone, Debug, Default)]
pub struct Subscriptions {
    subscribed: [bool; EventClass::COUNT],
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `class`.  Idempotent.
    #[inline]
    pub fn subscribe(&mut self, class: EventClass) {
        self.subscribed[class.index()] = true;
    }

    /// Drop interest in `class`.  Idempotent.
    #[inline]
    pub fn unsubscribe(&mut self, class: EventClass) {
        self.subscribed[class.index()] = false;
    }

    /// `true` if `class` is currently subscribed.
    #[inline]
    pub fn contains(&self, class: EventClass) -> bool {
        self.subscribed[class.index()]
    }

    /// Release every subscription.  Disable paths call this unconditionally
    /// so a mid-battle invalidation can never leak a subscription.
    #[inline]
    pub fn clear(&mut self) {
        self.subscribed = [false; EventClass::COUNT];
    }

    /// `true` if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribed.iter().all(|s| !s)
    }
}
