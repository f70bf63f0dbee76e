use pfdom::{Document, DomError};

use super::{MenuShell, Trigger};
use crate::config::MenuConfig;
use crate::item::ItemDisplay;
use crate::selection::SelectionGroup;
use crate::toggle::ToggleController;
use crate::traits::{Disable, HasValue};

/// Options menu with one flat list and at most one selected item.
///
/// The menu handle owns the toggle: once every clone is dropped the trigger
/// stops responding and an open list's outside listener is released.
///
/// # Example
///
/// ```
/// use patternfly::{Document, Event, HasValue, ItemDisplay, MenuConfig, SingleOptionsMenu, Trigger};
///
/// let mut doc = Document::new();
/// let menu = SingleOptionsMenu::new(
///     &mut doc,
///     Trigger::text("Sort by"),
///     MenuConfig::new().collapse_on_select(true),
///     ItemDisplay::<&'static str>::default(),
/// )
/// .unwrap();
/// let body = doc.body().to_string();
/// doc.append_child(&body, menu.element()).unwrap();
/// let name = menu.add(&mut doc, "name").unwrap();
///
/// doc.dispatch(&Event::click(menu.trigger()));
/// assert!(menu.is_open());
/// doc.dispatch(&Event::click(name));
/// assert!(!menu.is_open());
/// assert_eq!(menu.value(), Some("name"));
/// ```
#[derive(Debug, Clone)]
pub struct SingleOptionsMenu<T> {
    shell: MenuShell,
    group: SelectionGroup<T>,
    config: MenuConfig,
}

impl<T: Clone + 'static> SingleOptionsMenu<T> {
    pub fn new(
        doc: &mut Document,
        trigger: Trigger,
        config: MenuConfig,
        display: ItemDisplay<T>,
    ) -> Result<Self, DomError> {
        let shell = MenuShell::build(doc, &trigger, &config)?;
        let group = SelectionGroup::bound(
            shell.list.clone(),
            "presentation",
            display,
            &shell.toggle,
            config.collapse_on_select,
        );
        Ok(Self {
            shell,
            group,
            config,
        })
    }

    /// The menu's root element.
    pub fn element(&self) -> &str {
        &self.shell.root
    }

    /// The toggle button.
    pub fn trigger(&self) -> &str {
        &self.shell.button
    }

    /// The list holding the item controls.
    pub fn menu(&self) -> &str {
        &self.shell.list
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn toggle(&self) -> &ToggleController {
        &self.shell.toggle
    }

    pub fn group(&self) -> &SelectionGroup<T> {
        &self.group
    }

    pub fn is_open(&self) -> bool {
        self.shell.toggle.is_open()
    }

    /// Append an item and return the id of its control.
    pub fn add(&self, doc: &mut Document, item: T) -> Result<String, DomError> {
        self.group.add(doc, item)
    }

    pub fn add_all(
        &self,
        doc: &mut Document,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), DomError> {
        self.group.add_all(doc, items)
    }

    /// Select `item` and notify `on_select`.
    pub fn select(&self, doc: &mut Document, item: T) {
        self.group.select(doc, item, true);
    }

    /// Select `item` without notifying, e.g. to restore state.
    pub fn select_silently(&self, doc: &mut Document, item: T) {
        self.group.select(doc, item, false);
    }

    pub fn clear_selection(&self, doc: &mut Document) {
        self.group.clear_selection(doc);
    }

    pub fn disable_item(&self, doc: &mut Document, item: &T) {
        self.group.set_item_enabled(doc, item, false);
    }

    pub fn enable_item(&self, doc: &mut Document, item: &T) {
        self.group.set_item_enabled(doc, item, true);
    }

    pub fn on_select(&self, handler: impl Fn(&T) + 'static) {
        self.group.on_select(handler);
    }

    pub fn on_toggle(&self, handler: impl Fn(bool) + 'static) {
        self.shell.toggle.on_toggle(handler);
    }

    /// Close the menu and detach it from the document.
    pub fn remove(&self, doc: &mut Document) -> Result<(), DomError> {
        self.shell.remove(doc)
    }

    /// Close the menu and delete its elements and handlers.
    pub fn destroy(&self, doc: &mut Document) -> Result<(), DomError> {
        self.shell.destroy(doc)
    }
}

impl<T: Clone + 'static> HasValue<T> for SingleOptionsMenu<T> {
    fn value(&self) -> Option<T> {
        self.group.value()
    }
}

impl<T> Disable for SingleOptionsMenu<T> {
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
