//! Single-selection over a scope of rendered item controls.
//!
//! A [`SelectionGroup`] is the one selection algorithm shared by both menu
//! variants: a single-select menu owns one group scoped to its whole list, a
//! multi-select menu owns one group per section, each scoped to that
//! section's subtree. Identities only need to be unique within a scope.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pfdom::{By, Document, DomError, Element};

use crate::css::{self, component, fas, DATA_CHECK, DATA_ITEM, ICON, ITEM, MENU, OPTIONS_MENU};
use crate::item::ItemDisplay;
use crate::toggle::{ToggleController, WeakToggle};
use crate::traits::HasValue;

/// Observer invoked with the newly selected item.
pub type SelectHandler<T> = Rc<dyn Fn(&T)>;

/// Ties item activation to the menu's toggle.
#[derive(Clone)]
struct Activation {
    toggle: WeakToggle,
    collapse_on_select: bool,
}

struct GroupState<T> {
    items: Vec<T>,
    selected: Option<T>,
    on_select: Option<SelectHandler<T>>,
}

struct GroupInner<T> {
    scope: String,
    /// `role` of the `li` wrapping each control.
    item_role: &'static str,
    display: ItemDisplay<T>,
    activation: Option<Activation>,
    state: RefCell<GroupState<T>>,
}

/// Zero-or-one selected item among the controls rendered into one scope.
///
/// Cloning yields another handle to the same group.
pub struct SelectionGroup<T> {
    inner: Rc<GroupInner<T>>,
}

impl<T> Clone for SelectionGroup<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> SelectionGroup<T> {
    /// A standalone group rendering into `scope`. Activating a control
    /// selects its item.
    pub fn new(scope: impl Into<String>, display: ItemDisplay<T>) -> Self {
        Self::build(scope.into(), "menuitem", display, None)
    }

    /// A group belonging to a menu: activation is ignored while the toggle is
    /// disabled or gone and, with `collapse_on_select`, closes the list after
    /// selecting. The group does not keep the toggle alive.
    pub(crate) fn bound(
        scope: impl Into<String>,
        item_role: &'static str,
        display: ItemDisplay<T>,
        toggle: &ToggleController,
        collapse_on_select: bool,
    ) -> Self {
        let activation = Activation {
            toggle: toggle.downgrade(),
            collapse_on_select,
        };
        Self::build(scope.into(), item_role, display, Some(activation))
    }

    fn build(
        scope: String,
        item_role: &'static str,
        display: ItemDisplay<T>,
        activation: Option<Activation>,
    ) -> Self {
        Self {
            inner: Rc::new(GroupInner {
                scope,
                item_role,
                display,
                activation,
                state: RefCell::new(GroupState {
                    items: Vec::new(),
                    selected: None,
                    on_select: None,
                }),
            }),
        }
    }

    /// The element whose subtree holds this group's controls.
    pub fn scope(&self) -> &str {
        &self.inner.scope
    }

    pub fn identify(&self, item: &T) -> String {
        self.inner.display.identify(item)
    }

    /// Items in insertion order.
    pub fn items(&self) -> Vec<T> {
        self.inner.state.borrow().items.clone()
    }

    pub fn value(&self) -> Option<T> {
        self.inner.state.borrow().selected.clone()
    }

    pub fn on_select(&self, handler: impl Fn(&T) + 'static) {
        self.set_on_select(Rc::new(handler));
    }

    pub(crate) fn set_on_select(&self, handler: SelectHandler<T>) {
        self.inner.state.borrow_mut().on_select = Some(handler);
    }

    /// Render a control for `item` at the end of the scope and return the
    /// control's id.
    ///
    /// Identities are not checked for duplicates; with colliding identities
    /// the indicator placement is unspecified.
    pub fn add(&self, doc: &mut Document, item: T) -> Result<String, DomError> {
        let identity = self.identify(&item);
        let indicated = self
            .inner
            .state
            .borrow()
            .selected
            .as_ref()
            .is_some_and(|selected| self.identify(selected) == identity);

        let entry = doc.create(Element::li().attr("role", self.inner.item_role));
        doc.append_child(&self.inner.scope, &entry)?;
        let control = doc.create(
            Element::button()
                .class(component(OPTIONS_MENU, &[MENU, ITEM]))
                .attr("tabindex", "-1")
                .data(DATA_ITEM, identity.clone()),
        );
        doc.append_child(&entry, &control)?;

        let mut editor = doc
            .element_mut(&control)
            .ok_or_else(|| DomError::NotFound(control.clone()))?;
        self.inner.display.render(&mut editor, &item);
        editor.child(
            Element::i()
                .classes(fas(css::CHECK))
                .class(component(OPTIONS_MENU, &[MENU, ITEM, ICON]))
                .aria("hidden", "true")
                .data(DATA_CHECK, identity.clone())
                .hidden(!indicated),
        );

        let group = self.clone();
        let activated = item.clone();
        doc.on_click(&control, move |doc, _| group.activate(doc, &activated));

        log::debug!("[selection] added '{identity}' to '{}'", self.inner.scope);
        self.inner.state.borrow_mut().items.push(item);
        Ok(control)
    }

    pub fn add_all(
        &self,
        doc: &mut Document,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), DomError> {
        for item in items {
            self.add(doc, item)?;
        }
        Ok(())
    }

    fn activate(&self, doc: &mut Document, item: &T) {
        let Some(activation) = &self.inner.activation else {
            self.select(doc, item.clone(), true);
            return;
        };
        match activation.toggle.upgrade() {
            None => log::debug!("[selection] activation ignored, menu was dropped"),
            Some(toggle) if toggle.is_disabled() => {
                log::debug!("[selection] activation ignored, menu is disabled");
            }
            Some(toggle) => {
                self.select(doc, item.clone(), true);
                if activation.collapse_on_select {
                    toggle.collapse(doc);
                }
            }
        }
    }

    /// Make `item` the selected one and move the indicator to the control(s)
    /// with its identity. Fires `on_select` when `fire_event` is set.
    pub fn select(&self, doc: &mut Document, item: T, fire_event: bool) {
        let identity = self.identify(&item);
        self.inner.state.borrow_mut().selected = Some(item.clone());
        self.show_indicator(doc, Some(&identity));
        log::debug!("[selection] selected '{identity}' in '{}'", self.inner.scope);

        if fire_event {
            let handler = self.inner.state.borrow().on_select.clone();
            if let Some(handler) = handler {
                handler(&item);
            }
        }
    }

    /// Forget the selection and hide every indicator in the scope.
    /// Does not fire `on_select`.
    pub fn clear_selection(&self, doc: &mut Document) {
        self.inner.state.borrow_mut().selected = None;
        self.show_indicator(doc, None);
    }

    /// Enable or disable the control with `item`'s identity. Items that were
    /// never rendered are ignored.
    pub fn set_item_enabled(&self, doc: &mut Document, item: &T, enabled: bool) {
        let identity = self.identify(item);
        match doc.find(&self.inner.scope, &By::data_value(DATA_ITEM, identity.as_str())) {
            Some(control) => doc.set_disabled(&control, !enabled),
            None => log::debug!("[selection] no control for '{identity}' in '{}'", self.inner.scope),
        }
    }

    /// Identities whose indicator is currently shown, in document order.
    pub fn indicated(&self, doc: &Document) -> Vec<String> {
        doc.find_all(&self.inner.scope, &By::data(DATA_CHECK))
            .iter()
            .filter_map(|id| doc.get(id))
            .filter(|icon| !icon.hidden)
            .filter_map(|icon| icon.get_data(DATA_CHECK).cloned())
            .collect()
    }

    fn show_indicator(&self, doc: &mut Document, identity: Option<&str>) {
        for icon in doc.find_all(&self.inner.scope, &By::data(DATA_CHECK)) {
            let matches = identity.is_some_and(|identity| {
                doc.get(&icon)
                    .and_then(|el| el.get_data(DATA_CHECK))
                    .is_some_and(|value| value == identity)
            });
            doc.set_hidden(&icon, !matches);
        }
    }
}

impl<T: Clone + 'static> HasValue<T> for SelectionGroup<T> {
    fn value(&self) -> Option<T> {
        SelectionGroup::value(self)
    }
}

impl<T> fmt::Debug for SelectionGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("SelectionGroup")
            .field("scope", &self.inner.scope)
            .field("items", &state.items.len())
            .field("selected", &state.selected.is_some())
            .finish()
    }
}
