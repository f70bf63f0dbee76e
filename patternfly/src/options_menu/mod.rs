//! PatternFly options menus.
//!
//! Both variants share the same shell: a root `div.pf-c-options-menu`
//! holding a trigger and a hidden `ul[role=menu]` list, with a
//! [`ToggleController`] wired to the trigger button. They differ in how the
//! list is populated:
//!
//! - [`SingleOptionsMenu`] renders one flat selection group into the list.
//! - [`MultiOptionsMenu`] renders independent [`Group`]s separated by
//!   separators, each with its own zero-or-one selection.

mod multi;
mod single;

pub use multi::{Group, MultiOptionsMenu};
pub use single::SingleOptionsMenu;

use pfdom::{generate_id, Document, DomError, Element};

use crate::config::MenuConfig;
use crate::css::{
    self, component, fas, modifier, ALIGN_RIGHT, BUTTON, DISABLED, ICON, MENU, OPTIONS_MENU, PLAIN,
    TEXT, TOGGLE, TOP,
};
use crate::toggle::ToggleController;

/// What the user clicks to open the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Toggle button with a label and a caret.
    Text(String),
    /// Plain toggle button showing only a Font Awesome icon (`"sort-amount-down"`).
    Icon(String),
    /// Plain label next to a caret-only toggle button.
    Plain(String),
}

impl Trigger {
    pub fn text(label: impl Into<String>) -> Self {
        Trigger::Text(label.into())
    }

    pub fn icon(icon: impl Into<String>) -> Self {
        Trigger::Icon(icon.into())
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Trigger::Plain(label.into())
    }
}

/// Root, trigger and list of one options menu, plus its toggle.
#[derive(Debug, Clone)]
pub(crate) struct MenuShell {
    pub(crate) root: String,
    pub(crate) button: String,
    /// The plain-text wrapper, only for [`Trigger::Plain`].
    pub(crate) plain: Option<String>,
    pub(crate) list: String,
    pub(crate) toggle: ToggleController,
}

impl MenuShell {
    /// Build the shell detached; the caller attaches `root` wherever it
    /// belongs.
    pub(crate) fn build(
        doc: &mut Document,
        trigger: &Trigger,
        config: &MenuConfig,
    ) -> Result<Self, DomError> {
        let mut root = Element::div().class(component(OPTIONS_MENU, &[]));
        if config.up {
            root = root.class(modifier(TOP));
        }
        let root = doc.create(root);

        let button_id = generate_id("options-menu-button");
        let button = Element::button()
            .id(button_id.clone())
            .aria("expanded", "false")
            .aria("haspopup", "listbox");
        let caret = || Element::i().classes(fas(css::CARET_DOWN)).aria("hidden", "true");

        let (button, plain) = match trigger {
            Trigger::Icon(icon) => {
                let button = doc.create(
                    button
                        .class(component(OPTIONS_MENU, &[TOGGLE]))
                        .class(modifier(PLAIN)),
                );
                let icon = doc.create(Element::i().classes(fas(icon)).aria("hidden", "true"));
                doc.append_child(&button, &icon)?;
                doc.append_child(&root, &button)?;
                (button, None)
            }
            Trigger::Plain(label) => {
                let wrapper = doc.create(
                    Element::div()
                        .class(component(OPTIONS_MENU, &[TOGGLE]))
                        .class(modifier(PLAIN))
                        .class(modifier(TEXT)),
                );
                let text = doc.create(
                    Element::span()
                        .class(component(OPTIONS_MENU, &[TOGGLE, TEXT]))
                        .text(label.clone()),
                );
                let button = doc.create(
                    button
                        .class(component(OPTIONS_MENU, &[TOGGLE, BUTTON]))
                        .aria("label", label.clone()),
                );
                let caret = doc.create(caret());
                doc.append_child(&button, &caret)?;
                doc.append_child(&wrapper, &text)?;
                doc.append_child(&wrapper, &button)?;
                doc.append_child(&root, &wrapper)?;
                (button, Some(wrapper))
            }
            Trigger::Text(label) => {
                let button = doc.create(
                    button
                        .class(component(OPTIONS_MENU, &[TOGGLE]))
                        .aria("label", label.clone()),
                );
                let text = doc.create(
                    Element::span()
                        .class(component(OPTIONS_MENU, &[TOGGLE, TEXT]))
                        .text(label.clone()),
                );
                let caret = doc.create(caret().class(component(OPTIONS_MENU, &[TOGGLE, ICON])));
                doc.append_child(&button, &text)?;
                doc.append_child(&button, &caret)?;
                doc.append_child(&root, &button)?;
                (button, None)
            }
        };

        let mut list = Element::ul()
            .class(component(OPTIONS_MENU, &[MENU]))
            .hidden(true)
            .aria("labelledby", button_id)
            .attr("role", MENU);
        if config.align_right {
            list = list.class(modifier(ALIGN_RIGHT));
        }
        let list = doc.create(list);
        doc.append_child(&root, &list)?;

        let toggle = ToggleController::new(root.clone(), button.clone(), list.clone());
        let on_trigger = toggle.downgrade();
        doc.on_click(&button, move |doc, _| {
            if let Some(toggle) = on_trigger.upgrade() {
                toggle.toggle(doc);
            }
        });

        let shell = Self {
            root,
            button,
            plain,
            list,
            toggle,
        };
        if config.disabled {
            shell.set_disabled(doc, true);
        }
        Ok(shell)
    }

    pub(crate) fn set_disabled(&self, doc: &mut Document, disabled: bool) {
        self.toggle.set_disabled(doc, disabled);
        doc.set_disabled(&self.button, disabled);
        if let Some(plain) = &self.plain {
            if disabled {
                doc.add_class(plain, &modifier(DISABLED));
            } else {
                doc.remove_class(plain, &modifier(DISABLED));
            }
        }
    }

    /// Close the menu (releasing its outside listener) and detach it.
    pub(crate) fn remove(&self, doc: &mut Document) -> Result<(), DomError> {
        self.toggle.collapse(doc);
        doc.remove(&self.root)
    }

    /// Close the menu and delete its elements and handlers from the document.
    pub(crate) fn destroy(&self, doc: &mut Document) -> Result<(), DomError> {
        self.toggle.collapse(doc);
        doc.destroy(&self.root)
    }
}
