//! PatternFly options menus on a [`pfdom`] document.
//!
//! The interesting part of an options menu is its behaviour, not its markup:
//!
//! - [`ToggleController`] opens and closes the list, and while open holds a
//!   document-level listener that closes it again on Escape or on any
//!   interaction outside the menu.
//! - [`SelectionGroup`] renders items through an [`ItemDisplay`], keeps zero
//!   or one of them selected and moves the check indicator by identity.
//! - [`SingleOptionsMenu`] and [`MultiOptionsMenu`] wire the two together
//!   according to a [`MenuConfig`].

pub mod config;
pub mod css;
pub mod item;
pub mod options_menu;
pub mod selection;
pub mod toggle;
mod traits;

pub use config::MenuConfig;
pub use item::ItemDisplay;
pub use options_menu::{Group, MultiOptionsMenu, SingleOptionsMenu, Trigger};
pub use pfdom::{By, Document, DomError, Element, ElementMut, Event, Key};
pub use selection::{SelectHandler, SelectionGroup};
pub use toggle::{ToggleController, ToggleHandler, WeakToggle};
pub use traits::{Disable, HasValue};
