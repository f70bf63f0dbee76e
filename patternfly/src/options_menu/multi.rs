use std::fmt;
use std::rc::Rc;

use pfdom::{Document, DomError, Element};

use super::{MenuShell, Trigger};
use crate::config::MenuConfig;
use crate::css::{component, GROUP, OPTIONS_MENU, SEPARATOR};
use crate::item::ItemDisplay;
use crate::selection::{SelectHandler, SelectionGroup};
use crate::toggle::ToggleController;
use crate::traits::Disable;

/// A labelled section of a [`MultiOptionsMenu`], collected before it is
/// rendered with [`MultiOptionsMenu::add_group`].
pub struct Group<T> {
    label: String,
    display: ItemDisplay<T>,
    items: Vec<T>,
    selected: Option<T>,
    on_select: Option<SelectHandler<T>>,
}

impl<T: fmt::Display + 'static> Group<T> {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_display(label, ItemDisplay::default())
    }
}

impl<T> Group<T> {
    pub fn with_display(label: impl Into<String>, display: ItemDisplay<T>) -> Self {
        Self {
            label: label.into(),
            display,
            items: Vec::new(),
            selected: None,
            on_select: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn add(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_all(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.items.extend(items);
        self
    }

    /// Initial selection, applied without notifying `on_select`.
    pub fn selected(mut self, item: T) -> Self {
        self.selected = Some(item);
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&T) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl<T> fmt::Debug for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("label", &self.label)
            .field("items", &self.items.len())
            .finish()
    }
}

/// Options menu made of independent single-select groups.
///
/// Each group tracks its own selection within its own subtree, so identities
/// may repeat across groups. The menu handle owns the toggle: once every
/// clone is dropped the trigger stops responding and an open list's outside
/// listener is released.
#[derive(Debug, Clone)]
pub struct MultiOptionsMenu {
    shell: MenuShell,
    config: MenuConfig,
}

impl MultiOptionsMenu {
    pub fn new(doc: &mut Document, trigger: Trigger, config: MenuConfig) -> Result<Self, DomError> {
        let shell = MenuShell::build(doc, &trigger, &config)?;
        Ok(Self { shell, config })
    }

    /// The menu's root element.
    pub fn element(&self) -> &str {
        &self.shell.root
    }

    /// The toggle button.
    pub fn trigger(&self) -> &str {
        &self.shell.button
    }

    /// The list holding the groups.
    pub fn menu(&self) -> &str {
        &self.shell.list
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn toggle(&self) -> &ToggleController {
        &self.shell.toggle
    }

    pub fn is_open(&self) -> bool {
        self.shell.toggle.is_open()
    }

    pub fn on_toggle(&self, handler: impl Fn(bool) + 'static) {
        self.shell.toggle.on_toggle(handler);
    }

    /// Render a group at the end of the list, preceded by a separator unless
    /// it is the first entry, and return its live selection handle.
    pub fn add_group<T: Clone + 'static>(
        &self,
        doc: &mut Document,
        group: Group<T>,
    ) -> Result<SelectionGroup<T>, DomError> {
        let list = &self.shell.list;
        if !doc.children(list).is_empty() {
            let separator = doc.create(
                Element::li()
                    .class(component(OPTIONS_MENU, &[SEPARATOR]))
                    .attr("role", SEPARATOR),
            );
            doc.append_child(list, &separator)?;
        }

        let section = doc.create(
            Element::li()
                .class(component(OPTIONS_MENU, &[GROUP]))
                .aria("label", group.label.clone()),
        );
        doc.append_child(list, &section)?;
        let scope = doc.create(Element::ul());
        doc.append_child(&section, &scope)?;

        let selection = SelectionGroup::bound(
            scope,
            "menuitem",
            group.display,
            &self.shell.toggle,
            self.config.collapse_on_select,
        );
        if let Some(handler) = group.on_select {
            selection.set_on_select(handler);
        }
        selection.add_all(doc, group.items)?;
        if let Some(item) = group.selected {
            selection.select(doc, item, false);
        }

        log::debug!("[options-menu] added group '{}'", group.label);
        Ok(selection)
    }

    /// Close the menu and detach it from the document.
    pub fn remove(&self, doc: &mut Document) -> Result<(), DomError> {
        self.shell.remove(doc)
    }

    /// Close the menu and delete its elements and handlers. Group handles
    /// returned by [`add_group`](Self::add_group) keep their state but no
    /// longer render anything.
    pub fn destroy(&self, doc: &mut Document) -> Result<(), DomError> {
        self.shell.destroy(doc)
    }
}

impl Disable for MultiOptionsMenu {
    fn disable(&self, doc: &mut Document) {
        self.shell.set_disabled(doc, true);
    }

    fn enable(&self, doc: &mut Document) {
        self.shell.set_disabled(doc, false);
    }

    fn is_disabled(&self) -> bool {
        self.shell.toggle.is_disabled()
    }
}
