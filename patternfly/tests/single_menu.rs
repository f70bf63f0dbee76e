use std::cell::RefCell;
use std::rc::Rc;

use patternfly::css::{component, modifier};
use patternfly::{
    By, Disable, Document, Event, HasValue, ItemDisplay, Key, MenuConfig, SingleOptionsMenu,
    Trigger,
};

type Log = Rc<RefCell<Vec<String>>>;

fn sort_menu(config: MenuConfig) -> (Document, SingleOptionsMenu<&'static str>, Vec<String>) {
    let mut doc = Document::new();
    let menu = SingleOptionsMenu::new(
        &mut doc,
        Trigger::text("Sort by"),
        config,
        ItemDisplay::default(),
    )
    .unwrap();
    doc.append_child("body", menu.element()).unwrap();
    let controls = ["a", "b", "c"]
        .into_iter()
        .map(|item| menu.add(&mut doc, item).unwrap())
        .collect();
    (doc, menu, controls)
}

fn record_selections(menu: &SingleOptionsMenu<&'static str>) -> Log {
    let log: Log = Rc::default();
    let selections = log.clone();
    menu.on_select(move |item| selections.borrow_mut().push(item.to_string()));
    log
}

fn open(doc: &mut Document, menu: &SingleOptionsMenu<&'static str>) {
    let trigger = menu.trigger().to_string();
    doc.dispatch(&Event::click(trigger));
    assert!(menu.is_open());
}

// ============================================================================
// Shell
// ============================================================================

#[test]
fn test_text_trigger_shell() {
    let (doc, menu, _) = sort_menu(MenuConfig::new());

    let root = doc.get(menu.element()).unwrap();
    assert!(root.has_class("pf-c-options-menu"));

    let trigger = doc.get(menu.trigger()).unwrap();
    assert!(trigger.has_class("pf-c-options-menu__toggle"));
    assert_eq!(trigger.get_attr("aria-expanded").map(String::as_str), Some("false"));
    assert_eq!(trigger.get_attr("aria-haspopup").map(String::as_str), Some("listbox"));
    assert_eq!(trigger.get_attr("aria-label").map(String::as_str), Some("Sort by"));
    let text = doc
        .find(menu.trigger(), &By::class("pf-c-options-menu__toggle-text"))
        .unwrap();
    assert_eq!(doc.get(&text).unwrap().text.as_deref(), Some("Sort by"));

    let list = doc.get(menu.menu()).unwrap();
    assert!(list.hidden);
    assert_eq!(list.get_attr("role").map(String::as_str), Some("menu"));
    assert_eq!(list.get_attr("aria-labelledby"), Some(&trigger.id));
    assert_eq!(doc.parent(menu.menu()), Some(menu.element()));
}

#[test]
fn test_plain_and_icon_triggers() {
    let mut doc = Document::new();
    let plain = SingleOptionsMenu::<String>::new(
        &mut doc,
        Trigger::plain("Page size"),
        MenuConfig::new(),
        ItemDisplay::default(),
    )
    .unwrap();
    let wrapper = doc.parent(plain.trigger()).unwrap().to_string();
    assert_ne!(wrapper, plain.element());
    assert!(doc.get(&wrapper).unwrap().has_class(&modifier("plain")));
    assert!(doc.get(&wrapper).unwrap().has_class(&modifier("text")));
    assert!(doc
        .get(plain.trigger())
        .unwrap()
        .has_class("pf-c-options-menu__toggle-button"));

    let icon = SingleOptionsMenu::<String>::new(
        &mut doc,
        Trigger::icon("sort-amount-down"),
        MenuConfig::new(),
        ItemDisplay::default(),
    )
    .unwrap();
    assert_eq!(doc.parent(icon.trigger()), Some(icon.element()));
    assert!(doc
        .find(icon.trigger(), &By::classes(["fas", "fa-sort-amount-down"]))
        .is_some());
}

#[test]
fn test_visual_options() {
    let (doc, menu, _) = sort_menu(MenuConfig::new().up(true).align_right(true));

    assert!(doc.get(menu.element()).unwrap().has_class("pf-m-top"));
    assert!(doc.get(menu.menu()).unwrap().has_class("pf-m-align-right"));
}

#[test]
fn test_item_controls() {
    let (doc, menu, controls) = sort_menu(MenuConfig::new());

    assert_eq!(menu.group().items(), vec!["a", "b", "c"]);
    let control = doc.get(&controls[1]).unwrap();
    assert!(control.has_class(&component("options-menu", &["menu", "item"])));
    assert_eq!(control.text.as_deref(), Some("b"));
    assert_eq!(control.get_data("options-menu-item").map(String::as_str), Some("b"));
    assert!(menu.group().indicated(&doc).is_empty());

    let entry = doc.parent(&controls[1]).unwrap();
    assert_eq!(
        doc.get(entry).unwrap().get_attr("role").map(String::as_str),
        Some("presentation")
    );
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_is_exclusive_and_ordered() {
    let (mut doc, menu, _) = sort_menu(MenuConfig::new());
    let selections = record_selections(&menu);

    menu.select(&mut doc, "b");
    menu.select(&mut doc, "c");

    assert_eq!(menu.value(), Some("c"));
    assert_eq!(menu.group().indicated(&doc), vec!["c"]);
    assert_eq!(*selections.borrow(), vec!["b", "c"]);
}

#[test]
fn test_select_silently_does_not_notify() {
    let (mut doc, menu, _) = sort_menu(MenuConfig::new());
    let selections = record_selections(&menu);

    menu.select_silently(&mut doc, "a");

    assert_eq!(menu.value(), Some("a"));
    assert_eq!(menu.group().indicated(&doc), vec!["a"]);
    assert!(selections.borrow().is_empty());
}

#[test]
fn test_clear_selection() {
    let (mut doc, menu, _) = sort_menu(MenuConfig::new());
    let selections = record_selections(&menu);
    menu.select(&mut doc, "a");

    menu.clear_selection(&mut doc);

    assert_eq!(menu.value(), None);
    assert!(menu.group().indicated(&doc).is_empty());
    assert_eq!(*selections.borrow(), vec!["a"]);
}

#[test]
fn test_item_added_after_selection_shows_indicator() {
    let (mut doc, menu, _) = sort_menu(MenuConfig::new());
    menu.select_silently(&mut doc, "d");
    assert!(menu.group().indicated(&doc).is_empty());

    menu.add(&mut doc, "d").unwrap();
    assert_eq!(menu.group().indicated(&doc), vec!["d"]);
}

#[test]
fn test_custom_identifier_and_display() {
    #[derive(Debug, Clone, PartialEq)]
    struct Column {
        key: &'static str,
        title: &'static str,
    }

    let mut doc = Document::new();
    let display = ItemDisplay::new(
        |c: &Column| c.key.to_string(),
        |control, c: &Column| {
            control.text(c.title).attr("title", c.key);
        },
    );
    let menu = SingleOptionsMenu::new(&mut doc, Trigger::text("Columns"), MenuConfig::new(), display)
        .unwrap();
    let name = Column {
        key: "name",
        title: "Name",
    };
    let control = menu.add(&mut doc, name.clone()).unwrap();

    assert_eq!(doc.get(&control).unwrap().text.as_deref(), Some("Name"));
    menu.select(&mut doc, name.clone());
    assert_eq!(menu.group().indicated(&doc), vec!["name"]);
    assert_eq!(menu.value(), Some(name));
}

#[test]
fn test_duplicate_identities_are_accepted() {
    let (mut doc, menu, _) = sort_menu(MenuConfig::new());
    menu.add(&mut doc, "a").unwrap();

    menu.select(&mut doc, "a");

    assert_eq!(menu.group().items().len(), 4);
    assert_eq!(menu.value(), Some("a"));
    assert!(menu.group().indicated(&doc).iter().all(|id| id == "a"));
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_activation_selects_and_keeps_open_by_default() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new());
    let selections = record_selections(&menu);
    open(&mut doc, &menu);

    doc.dispatch(&Event::click(&controls[0]));

    assert!(menu.is_open());
    assert_eq!(menu.value(), Some("a"));
    assert_eq!(*selections.borrow(), vec!["a"]);
}

#[test]
fn test_activation_collapses_when_configured() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new().collapse_on_select(true));
    let log: Log = Rc::default();
    let on_select = log.clone();
    menu.on_select(move |item| on_select.borrow_mut().push(format!("select {item}")));
    let on_toggle = log.clone();
    menu.on_toggle(move |open| on_toggle.borrow_mut().push(format!("toggle {open}")));
    open(&mut doc, &menu);

    doc.dispatch(&Event::key(Some(controls[2].as_str()), Key::Enter));

    assert!(!menu.is_open());
    assert_eq!(doc.listener_count(), 0);
    assert!(doc.get(menu.menu()).unwrap().hidden);
    assert_eq!(*log.borrow(), vec!["toggle true", "select c", "toggle false"]);
}

#[test]
fn test_escape_closes_menu() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new());
    open(&mut doc, &menu);

    doc.dispatch(&Event::key(Some(controls[0].as_str()), Key::Escape));

    assert!(!menu.is_open());
    assert_eq!(menu.value(), None);
}

// ============================================================================
// Enabling and disabling
// ============================================================================

#[test]
fn test_disable_item() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new());
    open(&mut doc, &menu);

    menu.disable_item(&mut doc, &"b");
    assert!(doc.get(&controls[1]).unwrap().disabled);
    doc.dispatch(&Event::click(&controls[1]));
    assert_eq!(menu.value(), None);

    menu.enable_item(&mut doc, &"b");
    assert!(!doc.get(&controls[1]).unwrap().disabled);
    doc.dispatch(&Event::click(&controls[1]));
    assert_eq!(menu.value(), Some("b"));
}

#[test]
fn test_disable_unknown_item_is_noop() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new());

    menu.disable_item(&mut doc, &"zzz");

    assert!(controls.iter().all(|c| !doc.get(c).unwrap().disabled));
}

#[test]
fn test_disabled_menu_never_opens() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new());
    open(&mut doc, &menu);

    menu.disable(&mut doc);
    assert!(menu.is_disabled());
    assert!(!menu.is_open());
    assert!(doc.get(menu.trigger()).unwrap().disabled);

    let trigger = menu.trigger().to_string();
    doc.dispatch(&Event::click(&trigger));
    assert!(!menu.is_open());
    assert!(!menu.toggle().expand(&mut doc));

    doc.dispatch(&Event::click(&controls[0]));
    assert_eq!(menu.value(), None);

    menu.enable(&mut doc);
    doc.dispatch(&Event::click(&trigger));
    assert!(menu.is_open());
}

#[test]
fn test_disabled_from_config() {
    let mut doc = Document::new();
    let menu = SingleOptionsMenu::<String>::new(
        &mut doc,
        Trigger::plain("Page size"),
        MenuConfig::new().disabled(true),
        ItemDisplay::default(),
    )
    .unwrap();
    let wrapper = doc.parent(menu.trigger()).unwrap().to_string();

    assert!(menu.is_disabled());
    assert!(doc.get(&wrapper).unwrap().has_class("pf-m-disabled"));

    menu.enable(&mut doc);
    assert!(!doc.get(&wrapper).unwrap().has_class("pf-m-disabled"));
}

// ============================================================================
// Teardown and configuration
// ============================================================================

#[test]
fn test_remove_while_open() {
    let (mut doc, menu, _) = sort_menu(MenuConfig::new());
    open(&mut doc, &menu);

    menu.remove(&mut doc).unwrap();

    assert!(!menu.is_open());
    assert!(!doc.is_connected(menu.element()));
    assert_eq!(doc.listener_count(), 0);
    doc.dispatch(&Event::click_at(1, 1));
}

#[test]
fn test_dropping_open_menu_releases_listener() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new().collapse_on_select(true));
    let trigger = menu.trigger().to_string();
    open(&mut doc, &menu);
    assert_eq!(doc.listener_count(), 1);

    let root = menu.element().to_string();
    doc.remove(&root).unwrap();
    drop(menu);

    assert_eq!(doc.listener_count(), 0);
    doc.dispatch(&Event::click(&controls[0]));
    doc.dispatch(&Event::click(trigger));
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_destroy_deletes_elements() {
    let (mut doc, menu, controls) = sort_menu(MenuConfig::new());
    open(&mut doc, &menu);

    menu.destroy(&mut doc).unwrap();

    assert!(!menu.is_open());
    assert_eq!(doc.listener_count(), 0);
    assert!(doc.get(menu.element()).is_none());
    assert!(doc.get(menu.trigger()).is_none());
    assert!(controls.iter().all(|id| doc.get(id).is_none()));
    assert_eq!(doc.element_count(), 1);
}

#[test]
fn test_config_from_json() {
    let config: MenuConfig = serde_json::from_str(r#"{ "collapse_on_select": true }"#).unwrap();

    assert_eq!(config, MenuConfig::new().collapse_on_select(true));
    assert!(!config.disabled);

    let json = serde_json::to_string(&MenuConfig::new().align_right(true)).unwrap();
    let back: MenuConfig = serde_json::from_str(&json).unwrap();
    assert!(back.align_right);
}
