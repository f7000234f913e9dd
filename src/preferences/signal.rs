//! Change notification for preferences.
//!
//! Each [`Preference`](super::Preference) owns one [`Signal`] for its
//! enabled flag and one for its value. Subscribers are plain closures,
//! called synchronously in registration order with a [`ChangeEvent`]
//! describing what changed.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{PreferenceKind, PreferenceValue};

/// Handle returned by a subscription; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What changed on a preference.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// The enabled flag flipped to the contained state.
    Enabled(bool),
    /// The cached value changed to the contained value.
    Value(PreferenceValue),
}

/// Payload delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent<'a> {
    /// Category of the preference that changed.
    pub category: &'a str,
    /// Name of the preference that changed.
    pub name: &'a str,
    /// Kind of the preference that changed.
    pub kind: PreferenceKind,
    /// The change itself.
    pub change: Change,
}

type Callback = Box<dyn FnMut(&ChangeEvent<'_>)>;

/// Ordered list of change subscribers.
#[derive(Default)]
pub struct Signal {
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl Signal {
    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        let id = SubscriptionId::next();
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was not subscribed here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber.
    pub fn emit(&mut self, event: &ChangeEvent<'_>) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn event(enabled: bool) -> ChangeEvent<'static> {
        ChangeEvent {
            category: "Audio",
            name: "Mute",
            kind: PreferenceKind::Checkbox,
            change: Change::Enabled(enabled),
        }
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::default();

        let first = Rc::clone(&log);
        let _ = signal.subscribe(move |_| first.borrow_mut().push(1));
        let second = Rc::clone(&log);
        let _ = signal.subscribe(move |_| second.borrow_mut().push(2));

        signal.emit(&event(true));
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut signal = Signal::default();

        let counter = Rc::clone(&hits);
        let id = signal.subscribe(move |_| *counter.borrow_mut() += 1);
        signal.emit(&event(false));
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.emit(&event(true));

        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn subscription_ids_are_unique() {
        let mut a = Signal::default();
        let mut b = Signal::default();
        let x = a.subscribe(|_| {});
        let y = b.subscribe(|_| {});
        assert_ne!(x, y);
        assert!(!a.unsubscribe(y));
    }
}
