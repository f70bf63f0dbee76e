//! Item identity and display configuration.

use std::fmt;
use std::rc::Rc;

use pfdom::ElementMut;

pub type IdentifierFn<T> = Rc<dyn Fn(&T) -> String>;
pub type DisplayFn<T> = Rc<dyn Fn(&mut ElementMut<'_>, &T)>;

/// How items of a selection group are identified and rendered.
///
/// The identifier must be stable and injective over the group's lifetime:
/// the selection indicator is placed by comparing identities. The display
/// function fills in the item's control once, when the item is added.
pub struct ItemDisplay<T> {
    identifier: IdentifierFn<T>,
    display: DisplayFn<T>,
}

impl<T> Clone for ItemDisplay<T> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }
}

impl<T: fmt::Display + 'static> Default for ItemDisplay<T> {
    /// Identity and label are both the item's `to_string()`.
    fn default() -> Self {
        Self::from_identifier(|item: &T| item.to_string())
    }
}

impl<T: 'static> ItemDisplay<T> {
    pub fn new(
        identifier: impl Fn(&T) -> String + 'static,
        display: impl Fn(&mut ElementMut<'_>, &T) + 'static,
    ) -> Self {
        Self {
            identifier: Rc::new(identifier),
            display: Rc::new(display),
        }
    }

    /// Use the identity as the control's text.
    pub fn from_identifier(identifier: impl Fn(&T) -> String + 'static) -> Self {
        let identifier: IdentifierFn<T> = Rc::new(identifier);
        let label = identifier.clone();
        Self {
            identifier,
            display: Rc::new(move |control: &mut ElementMut<'_>, item: &T| {
                control.text(label(item));
            }),
        }
    }

    pub fn with_identifier(mut self, identifier: impl Fn(&T) -> String + 'static) -> Self {
        self.identifier = Rc::new(identifier);
        self
    }

    pub fn with_display(mut self, display: impl Fn(&mut ElementMut<'_>, &T) + 'static) -> Self {
        self.display = Rc::new(display);
        self
    }

    pub fn identify(&self, item: &T) -> String {
        (self.identifier)(item)
    }

    pub fn render(&self, control: &mut ElementMut<'_>, item: &T) {
        (self.display)(control, item)
    }
}

impl<T> fmt::Debug for ItemDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ItemDisplay(..)")
    }
}
