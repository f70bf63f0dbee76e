//! Document-level listeners and their subscriptions.
//!
//! The set is shared between the document (which invokes listeners) and the
//! [`Subscription`] guards handed out to subscribers (which remove them).
//! Borrows of the set are never held while a listener runs, so a listener may
//! drop its own subscription, or anybody else's, from inside its callback.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::document::Document;
use crate::event::Event;

/// Callback invoked for dispatched events.
pub type Handler = Rc<dyn Fn(&mut Document, &Event)>;

/// Identifies one registered document-level listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub(crate) struct ListenerSet {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, Handler)>>,
}

impl ListenerSet {
    pub(crate) fn insert(&self, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, handler));
        id
    }

    /// Returns true if the listener was still registered.
    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, Handler)> {
        self.entries.borrow().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

/// Keeps a document-level listener registered for as long as it lives.
///
/// Dropping the subscription (or calling [`cancel`](Self::cancel))
/// unregisters the listener. Both are idempotent and stay safe after the
/// document itself has been dropped.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    set: Weak<ListenerSet>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, set: &Rc<ListenerSet>) -> Self {
        Self {
            id,
            set: Rc::downgrade(set),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still registered with a live document.
    pub fn is_active(&self) -> bool {
        self.set.upgrade().is_some_and(|set| set.contains(self.id))
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(set) = self.set.upgrade() {
            if set.remove(self.id) {
                log::trace!("[listener] removed {:?}", self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
