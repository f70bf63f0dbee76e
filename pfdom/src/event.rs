use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

/// High-level events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, targeted at the focused element (if any).
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer-down. `target` is the deepest element under the pointer,
    /// `None` when the pointer hit no element.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
}

impl Event {
    /// Primary-button click on an element.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Primary-button click that hit no element.
    pub fn click_at(x: u16, y: u16) -> Self {
        Event::Click {
            target: None,
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Unmodified key press.
    pub fn key(target: Option<&str>, key: Key) -> Self {
        Event::Key {
            target: target.map(str::to_string),
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
        }
    }

    /// Whether this event activates its target the way a button press does:
    /// a primary click, or Enter/Space without ctrl/alt.
    pub fn is_activation(&self) -> bool {
        match self {
            Event::Click { button, .. } => *button == MouseButton::Left,
            Event::Key { key, modifiers, .. } => {
                matches!(key, Key::Enter | Key::Char(' ')) && !modifiers.is_chord()
            }
        }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, Event::Key { key: Key::Escape, .. })
    }

    /// Translate a raw terminal event. Only key presses and mouse-down are
    /// meaningful to the document; everything else yields `None`.
    ///
    /// The caller resolves `target` (focused element for keys, hit element
    /// for the mouse).
    pub fn from_crossterm(raw: &CrosstermEvent, target: Option<String>) -> Option<Self> {
        match raw {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(Event::Key {
                    target,
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    target,
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Keys the document distinguishes. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ctrl or alt held. Such chords never count as activation.
    pub fn is_chord(&self) -> bool {
        self.ctrl || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
