use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use pfdom::{Document, Element, Event, Key, MouseButton};

type Log = Rc<RefCell<Vec<String>>>;

fn recorder(log: &Log, name: &'static str) -> impl Fn(&mut Document, &Event) + 'static {
    let log = log.clone();
    move |_, _| log.borrow_mut().push(name.to_string())
}

fn menu_doc() -> (Document, String, String) {
    let mut doc = Document::new();
    let menu = doc.create(Element::div().id("menu"));
    let button = doc.create(Element::button().id("toggle"));
    doc.append_child("body", &menu).unwrap();
    doc.append_child(&menu, &button).unwrap();
    (doc, menu, button)
}

// ============================================================================
// Activation handlers
// ============================================================================

#[test]
fn test_click_bubbles_from_target_to_root() {
    let (mut doc, menu, button) = menu_doc();
    let log: Log = Rc::default();
    doc.on_click(&menu, recorder(&log, "menu"));
    doc.on_click(&button, recorder(&log, "button"));

    assert!(doc.dispatch(&Event::click(&button)));
    assert_eq!(*log.borrow(), vec!["button", "menu"]);
}

#[test]
fn test_enter_and_space_activate() {
    let (mut doc, _, button) = menu_doc();
    let log: Log = Rc::default();
    doc.on_click(&button, recorder(&log, "button"));

    doc.dispatch(&Event::key(Some(button.as_str()), Key::Enter));
    doc.dispatch(&Event::key(Some(button.as_str()), Key::Char(' ')));
    doc.dispatch(&Event::key(Some(button.as_str()), Key::Char('x')));

    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_disabled_element_swallows_activation() {
    let (mut doc, menu, button) = menu_doc();
    let log: Log = Rc::default();
    doc.on_click(&button, recorder(&log, "button"));

    doc.set_disabled(&button, true);
    assert!(!doc.dispatch(&Event::click(&button)));

    doc.set_disabled(&button, false);
    doc.set_disabled(&menu, true);
    assert!(!doc.dispatch(&Event::click(&button)));

    doc.set_disabled(&menu, false);
    assert!(doc.dispatch(&Event::click(&button)));
    assert_eq!(*log.borrow(), vec!["button"]);
}

#[test]
fn test_secondary_click_is_not_activation() {
    let (mut doc, _, button) = menu_doc();
    let log: Log = Rc::default();
    doc.on_click(&button, recorder(&log, "button"));

    doc.dispatch(&Event::Click {
        target: Some(button.clone()),
        x: 0,
        y: 0,
        button: MouseButton::Right,
    });
    assert!(log.borrow().is_empty());
}

// ============================================================================
// Document listeners
// ============================================================================

#[test]
fn test_listener_sees_events_until_subscription_drops() {
    let (mut doc, _, button) = menu_doc();
    let log: Log = Rc::default();

    let sub = doc.subscribe(recorder(&log, "doc"));
    assert!(sub.is_active());
    assert_eq!(doc.listener_count(), 1);

    doc.dispatch(&Event::click(&button));
    doc.dispatch(&Event::click_at(3, 4));
    assert_eq!(log.borrow().len(), 2);

    drop(sub);
    assert_eq!(doc.listener_count(), 0);
    doc.dispatch(&Event::click_at(3, 4));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_listeners_run_after_activation_handlers() {
    let (mut doc, _, button) = menu_doc();
    let log: Log = Rc::default();
    doc.on_click(&button, recorder(&log, "button"));
    let _sub = doc.subscribe(recorder(&log, "doc"));

    doc.dispatch(&Event::click(&button));
    assert_eq!(*log.borrow(), vec!["button", "doc"]);
}

#[test]
fn test_listener_added_during_dispatch_misses_current_event() {
    let (mut doc, _, button) = menu_doc();
    let log: Log = Rc::default();
    let held: Rc<RefCell<Vec<pfdom::Subscription>>> = Rc::default();

    let on_click_log = log.clone();
    let on_click_held = held.clone();
    doc.on_click(&button, move |doc, _| {
        let log = on_click_log.clone();
        let sub = doc.subscribe(move |_, _| log.borrow_mut().push("late".to_string()));
        on_click_held.borrow_mut().push(sub);
    });

    doc.dispatch(&Event::click(&button));
    assert!(log.borrow().is_empty());

    doc.dispatch(&Event::click_at(0, 0));
    assert_eq!(*log.borrow(), vec!["late"]);
}

#[test]
fn test_listener_removed_by_earlier_listener_is_skipped() {
    let (mut doc, _, _) = menu_doc();
    let log: Log = Rc::default();
    let victim: Rc<RefCell<Option<pfdom::Subscription>>> = Rc::default();

    let killer_victim = victim.clone();
    let _killer = doc.subscribe(move |_, _| {
        killer_victim.borrow_mut().take();
    });
    *victim.borrow_mut() = Some(doc.subscribe(recorder(&log, "victim")));

    doc.dispatch(&Event::click_at(0, 0));
    assert!(log.borrow().is_empty());
    assert_eq!(doc.listener_count(), 1);
}

#[test]
fn test_listener_can_drop_its_own_subscription() {
    let (mut doc, _, _) = menu_doc();
    let calls = Rc::new(RefCell::new(0));
    let slot: Rc<RefCell<Option<pfdom::Subscription>>> = Rc::default();

    let listener_calls = calls.clone();
    let listener_slot = slot.clone();
    *slot.borrow_mut() = Some(doc.subscribe(move |_, _| {
        *listener_calls.borrow_mut() += 1;
        listener_slot.borrow_mut().take();
    }));

    doc.dispatch(&Event::click_at(0, 0));
    doc.dispatch(&Event::click_at(0, 0));
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn test_subscription_outlives_document() {
    let mut doc = Document::new();
    let sub = doc.subscribe(|_, _| {});
    drop(doc);
    assert!(!sub.is_active());
    drop(sub);
}

// ============================================================================
// Crossterm translation
// ============================================================================

#[test]
fn test_from_crossterm_key_press() {
    let raw = CtEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    let event = Event::from_crossterm(&raw, Some("toggle".to_string())).unwrap();

    assert!(event.is_escape());
    assert_eq!(event.target(), Some("toggle"));
}

#[test]
fn test_from_crossterm_ignores_key_release() {
    let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    assert_eq!(Event::from_crossterm(&CtEvent::Key(key), None), None);
}

#[test]
fn test_from_crossterm_mouse_down_only() {
    let down = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtButton::Left),
        column: 7,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    let up = CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Up(CtButton::Left),
        column: 7,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(
        Event::from_crossterm(&down, None),
        Some(Event::Click {
            target: None,
            x: 7,
            y: 2,
            button: MouseButton::Left,
        })
    );
    assert_eq!(Event::from_crossterm(&up, None), None);
}

#[test]
fn test_ctrl_enter_is_not_activation() {
    let raw = CtEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL));
    let event = Event::from_crossterm(&raw, None).unwrap();
    assert!(!event.is_activation());
}
