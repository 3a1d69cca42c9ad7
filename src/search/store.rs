//! Holder of the current [`SearchState`] and its subscribers.
//!
//! # Dispatch
//!
//! ```text
//! dispatch(action) → reduce(&state, action) → replace state → notify every subscriber
//! ```
//!
//! Every dispatch notifies every subscriber exactly once with the new state,
//! whether or not the action changed anything.
//!
//! # Threading
//!
//! The store is single-threaded (`Rc`/`RefCell`, so neither `Send` nor `Sync`).
//! All dispatches come from the UI event loop. A dispatch issued from inside a
//! subscriber callback is queued and applied once the current notification
//! round completes, so subscribers always observe states in dispatch order.

use super::actions::SearchAction;
use super::reducer::reduce;
use super::state::SearchState;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`SearchStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&SearchState)>;

/// Owns the search screen's state; the only place new states are produced.
pub struct SearchStore {
    state: RefCell<Rc<SearchState>>,
    subscribers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_subscription: Cell<u64>,
    pending: RefCell<VecDeque<SearchAction>>,
    dispatching: Cell<bool>,
}

/// Clears the dispatching flag even if a subscriber panics.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl SearchStore {
    #[must_use]
    pub fn new(initial: SearchState) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        }
    }

    /// Returns the current state snapshot.
    ///
    /// The snapshot is shared, not copied; later dispatches replace the store's
    /// state but never alter a snapshot already handed out.
    #[must_use]
    pub fn state(&self) -> Rc<SearchState> {
        Rc::clone(&self.state.borrow())
    }

    /// Registers `observer` to be called with every new state.
    ///
    /// The observer is not called with the current state on registration. A
    /// subscription made from inside a callback takes effect from the next
    /// dispatch.
    pub fn subscribe(&self, observer: impl Fn(&SearchState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(observer)));

        tracing::trace!(subscription = id.0, "subscriber registered");
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        let removed = subscribers.len() != before;

        tracing::trace!(subscription = id.0, removed, "subscriber removed");
        removed
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Applies `action` through the reducer and notifies subscribers.
    pub fn dispatch(&self, action: SearchAction) {
        self.pending.borrow_mut().push_back(action);

        if self.dispatching.get() {
            tracing::trace!("dispatch from subscriber queued");
            return;
        }

        self.dispatching.set(true);
        let _guard = DispatchGuard(&self.dispatching);

        loop {
            let next_action = self.pending.borrow_mut().pop_front();
            let Some(action) = next_action else {
                break;
            };
            self.apply(action);
        }
    }

    fn apply(&self, action: SearchAction) {
        let _span = tracing::debug_span!("dispatch", action = action.name()).entered();

        let next = Rc::new(reduce(&self.state.borrow(), action));
        *self.state.borrow_mut() = Rc::clone(&next);

        let observers: Vec<Observer> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        tracing::trace!(subscribers = observers.len(), "notifying subscribers");
        for observer in observers {
            observer(&next);
        }
    }
}

impl fmt::Debug for SearchStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchStore")
            .field("state", &self.state.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .field("pending", &self.pending.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchEngine;
    use crate::search::state::SearchSeed;
    use crate::settings::MemorySettings;

    fn store() -> Rc<SearchStore> {
        let state = SearchState::seed(
            SearchSeed::new(SearchEngine::new("ddg", "DuckDuckGo")),
            &MemorySettings::default(),
        );
        Rc::new(SearchStore::new(state))
    }

    fn recorder(store: &SearchStore) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.query.clone()));
        seen
    }

    #[test]
    fn dispatch_replaces_state() {
        let store = store();
        store.dispatch(SearchAction::UpdateQuery("test".to_string()));
        assert_eq!(store.state().query, "test");
    }

    #[test]
    fn old_snapshots_are_not_mutated() {
        let store = store();
        let before = store.state();
        store.dispatch(SearchAction::UpdateQuery("test".to_string()));

        assert_eq!(before.query, "");
        assert!(!Rc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn each_dispatch_notifies_once_with_new_state() {
        let store = store();
        let seen = recorder(&store);

        store.dispatch(SearchAction::UpdateQuery("a".to_string()));
        store.dispatch(SearchAction::UpdateQuery("ab".to_string()));

        assert_eq!(*seen.borrow(), vec!["a", "ab"]);
    }

    #[test]
    fn no_op_dispatch_still_notifies() {
        let store = store();
        let seen = recorder(&store);

        store.dispatch(SearchAction::AllowSearchSuggestionsInPrivateModePrompt(false));
        store.dispatch(SearchAction::AllowSearchSuggestionsInPrivateModePrompt(false));

        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn every_subscriber_is_notified() {
        let store = store();
        let first = recorder(&store);
        let second = recorder(&store);

        store.dispatch(SearchAction::UpdateQuery("x".to_string()));

        assert_eq!(*first.borrow(), vec!["x"]);
        assert_eq!(*second.borrow(), vec!["x"]);
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let store = store();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.dispatch(SearchAction::UpdateQuery("a".to_string()));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(SearchAction::UpdateQuery("b".to_string()));

        assert_eq!(count.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn dispatch_from_subscriber_is_applied_in_order() {
        let store = store();
        let weak = Rc::downgrade(&store);
        store.subscribe(move |state| {
            if state.query == "first" {
                if let Some(store) = weak.upgrade() {
                    store.dispatch(SearchAction::UpdateQuery("second".to_string()));
                }
            }
        });
        let seen = recorder(&store);

        store.dispatch(SearchAction::UpdateQuery("first".to_string()));

        assert_eq!(*seen.borrow(), vec!["first", "second"]);
        assert_eq!(store.state().query, "second");
    }

    #[test]
    fn observers_can_read_state_while_notified() {
        let store = store();
        let weak = Rc::downgrade(&store);
        let matched = Rc::new(Cell::new(false));
        let flag = Rc::clone(&matched);
        store.subscribe(move |state| {
            let current = weak.upgrade().map(|store| store.state());
            flag.set(current.is_some_and(|current| *current == *state));
        });

        store.dispatch(SearchAction::UpdateQuery("q".to_string()));
        assert!(matched.get());
    }
}
