//! Open/closed state of a disclosure widget.
//!
//! A [`ToggleController`] owns the expanded state of exactly one list and the
//! document-level listener that closes it on outside interaction. The
//! listener is held as a [`Subscription`] that lives exactly as long as the
//! open state: it is created by `expand`, dropped by `collapse`, and dropped
//! with the controller if the owning menu goes away while open.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use pfdom::{Document, Event, Subscription};

/// Observer invoked with the new state after every transition.
pub type ToggleHandler = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct ToggleState {
    open: bool,
    disabled: bool,
    /// Present exactly while `open`.
    outside: Option<Subscription>,
    on_toggle: Option<ToggleHandler>,
}

struct ToggleInner {
    owner: String,
    trigger: String,
    list: String,
    state: RefCell<ToggleState>,
}

/// Collapse/expand controller for one options menu.
///
/// Cloning yields another handle to the same controller. Handlers stored in
/// the document only hold [`WeakToggle`]s, so dropping the last handle
/// releases the outside listener even while open.
#[derive(Clone)]
pub struct ToggleController {
    inner: Rc<ToggleInner>,
}

/// Non-owning handle to a [`ToggleController`].
#[derive(Clone)]
pub struct WeakToggle {
    inner: Weak<ToggleInner>,
}

impl WeakToggle {
    pub fn upgrade(&self) -> Option<ToggleController> {
        self.inner.upgrade().map(|inner| ToggleController { inner })
    }
}

impl fmt::Debug for WeakToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakToggle")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl ToggleController {
    /// Bind a controller to a menu's root, trigger and list elements.
    ///
    /// The controller starts closed and does not touch the document until
    /// the first transition.
    pub fn new(owner: impl Into<String>, trigger: impl Into<String>, list: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ToggleInner {
                owner: owner.into(),
                trigger: trigger.into(),
                list: list.into(),
                state: RefCell::new(ToggleState::default()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakToggle {
        WeakToggle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn owner(&self) -> &str {
        &self.inner.owner
    }

    pub fn trigger(&self) -> &str {
        &self.inner.trigger
    }

    pub fn list(&self) -> &str {
        &self.inner.list
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().open
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.state.borrow().disabled
    }

    /// Whether the outside-interaction listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.inner
            .state
            .borrow()
            .outside
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    pub fn on_toggle(&self, handler: impl Fn(bool) + 'static) {
        self.inner.state.borrow_mut().on_toggle = Some(Rc::new(handler));
    }

    /// Open the list. Returns false if it was already open or the
    /// controller is disabled.
    pub fn expand(&self, doc: &mut Document) -> bool {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.open {
                return false;
            }
            if state.disabled {
                log::debug!("[toggle] expand rejected, '{}' is disabled", self.inner.owner);
                return false;
            }
            state.open = true;
        }

        doc.set_hidden(&self.inner.list, false);
        doc.set_attr(&self.inner.trigger, "aria-expanded", "true");

        let weak = self.downgrade();
        let outside = doc.subscribe(move |doc, event| {
            if let Some(toggle) = weak.upgrade() {
                toggle.on_document_event(doc, event);
            }
        });
        self.inner.state.borrow_mut().outside = Some(outside);

        log::debug!("[toggle] expanded '{}'", self.inner.owner);
        self.notify(true);
        true
    }

    /// Close the list. Returns false if it was already closed.
    pub fn collapse(&self, doc: &mut Document) -> bool {
        let outside = {
            let mut state = self.inner.state.borrow_mut();
            let outside = state.outside.take();
            if !state.open {
                return false;
            }
            state.open = false;
            outside
        };
        // Unregister before anything observable happens.
        drop(outside);

        doc.set_hidden(&self.inner.list, true);
        doc.set_attr(&self.inner.trigger, "aria-expanded", "false");

        log::debug!("[toggle] collapsed '{}'", self.inner.owner);
        self.notify(false);
        true
    }

    /// Trigger activation: collapse when open, expand when closed.
    pub fn toggle(&self, doc: &mut Document) -> bool {
        if self.is_open() {
            self.collapse(doc)
        } else {
            self.expand(doc)
        }
    }

    /// Disabling forces the list closed and rejects `expand` until
    /// re-enabled.
    pub fn set_disabled(&self, doc: &mut Document, disabled: bool) {
        if disabled {
            self.collapse(doc);
        }
        self.inner.state.borrow_mut().disabled = disabled;
    }

    fn on_document_event(&self, doc: &mut Document, event: &Event) {
        let outside = match event.target() {
            Some(target) => !doc.contains(&self.inner.owner, target),
            None => true,
        };
        if event.is_escape() || outside {
            log::debug!(
                "[toggle] closing '{}' (escape={}, outside={})",
                self.inner.owner,
                event.is_escape(),
                outside
            );
            self.collapse(doc);
        }
    }

    fn notify(&self, open: bool) {
        let handler = self.inner.state.borrow().on_toggle.clone();
        if let Some(handler) = handler {
            handler(open);
        }
    }
}

impl fmt::Debug for ToggleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("ToggleController")
            .field("owner", &self.inner.owner)
            .field("open", &state.open)
            .field("disabled", &state.disabled)
            .finish()
    }
}
