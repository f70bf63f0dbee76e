//! PatternFly class names and data keys.

pub const OPTIONS_MENU: &str = "options-menu";
pub const TOGGLE: &str = "toggle";
pub const TEXT: &str = "text";
pub const ICON: &str = "icon";
pub const BUTTON: &str = "button";
pub const MENU: &str = "menu";
pub const ITEM: &str = "item";
pub const GROUP: &str = "group";
pub const SEPARATOR: &str = "separator";

pub const PLAIN: &str = "plain";
pub const DISABLED: &str = "disabled";
pub const TOP: &str = "top";
pub const ALIGN_RIGHT: &str = "align-right";

pub const CARET_DOWN: &str = "caret-down";
pub const CHECK: &str = "check";

/// Data key carrying an item control's identity.
pub const DATA_ITEM: &str = "options-menu-item";
/// Data key carrying the identity on an item's check indicator.
pub const DATA_CHECK: &str = "options-menu-check";

/// Block/element class: `component("options-menu", &["menu", "item"])` is
/// `pf-c-options-menu__menu-item`.
pub fn component(block: &str, elements: &[&str]) -> String {
    if elements.is_empty() {
        format!("pf-c-{block}")
    } else {
        format!("pf-c-{block}__{}", elements.join("-"))
    }
}

pub fn modifier(name: &str) -> String {
    format!("pf-m-{name}")
}

/// Font Awesome solid icon classes.
pub fn fas(icon: &str) -> [String; 2] {
    ["fas".to_string(), format!("fa-{icon}")]
}
