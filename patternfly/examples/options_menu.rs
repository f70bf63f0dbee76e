//! Terminal walkthrough of a single-select options menu.
//!
//! Up/Down move focus, Enter/Space activate, Esc closes the list,
//! `o` clicks outside the menu, `d` toggles the disabled state, `q` quits.
//! Debug logs go to `options_menu.log`.

use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use patternfly::{
    By, Disable, Document, Event, HasValue, ItemDisplay, MenuConfig, SingleOptionsMenu, Trigger,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const ITEMS: [&str; 4] = ["Name", "Size", "Modified", "Owner"];

fn main() -> io::Result<()> {
    let log_file = File::create("options_menu.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new();
    let menu = SingleOptionsMenu::new(
        &mut doc,
        Trigger::text("Sort by"),
        MenuConfig::new().collapse_on_select(true),
        ItemDisplay::<&'static str>::default(),
    )
    .map_err(io::Error::other)?;
    let body = doc.body().to_string();
    doc.append_child(&body, menu.element())
        .map_err(io::Error::other)?;
    menu.add_all(&mut doc, ITEMS).map_err(io::Error::other)?;
    menu.select_silently(&mut doc, "Name");
    menu.disable_item(&mut doc, &"Owner");
    menu.on_select(|item| log::info!("[demo] sorting by {item}"));
    menu.on_toggle(|open| log::info!("[demo] menu {}", if open { "opened" } else { "closed" }));

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut doc, &menu, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    doc: &mut Document,
    menu: &SingleOptionsMenu<&'static str>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut focus = 0usize;

    loop {
        let targets = focusable(doc, menu);
        focus = focus.min(targets.len().saturating_sub(1));
        draw(out, doc, menu, &targets, focus)?;

        let raw = event::read()?;
        if let CtEvent::Key(key) = &raw {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('d') => {
                    if menu.is_disabled() {
                        menu.enable(doc);
                    } else {
                        menu.disable(doc);
                    }
                    continue;
                }
                KeyCode::Char('o') => {
                    let body = doc.body().to_string();
                    doc.dispatch(&Event::click(body));
                    continue;
                }
                KeyCode::Up => {
                    focus = focus.saturating_sub(1);
                    continue;
                }
                KeyCode::Down => {
                    focus = (focus + 1).min(targets.len().saturating_sub(1));
                    continue;
                }
                _ => {}
            }
        }

        if let Some(event) = Event::from_crossterm(&raw, targets.get(focus).cloned()) {
            doc.dispatch(&event);
        }
    }
}

/// The trigger, followed by the item controls while the list is shown.
fn focusable(doc: &Document, menu: &SingleOptionsMenu<&'static str>) -> Vec<String> {
    let mut targets = vec![menu.trigger().to_string()];
    if menu.is_open() {
        targets.extend(doc.find_all(menu.menu(), &By::data("options-menu-item")));
    }
    targets
}

fn draw(
    out: &mut impl Write,
    doc: &Document,
    menu: &SingleOptionsMenu<&'static str>,
    targets: &[String],
    focus: usize,
) -> io::Result<()> {
    execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    let marker = |id: &str| if targets.get(focus).map(String::as_str) == Some(id) { '>' } else { ' ' };
    let state = match (menu.is_disabled(), menu.is_open()) {
        (true, _) => "disabled",
        (false, true) => "open",
        (false, false) => "closed",
    };
    let current = menu.value().unwrap_or("-");
    write!(out, "{} [Sort by: {current}] ({state})\r\n", marker(menu.trigger()))?;

    for id in &targets[1..] {
        let Some(control) = doc.get(id) else {
            continue;
        };
        let label = control.text.as_deref().unwrap_or("?");
        let checked = doc
            .find(id, &By::data("options-menu-check"))
            .and_then(|icon| doc.get(&icon))
            .is_some_and(|icon| !icon.hidden);
        let check = if checked { "✓" } else { " " };
        let disabled = if control.disabled { " (disabled)" } else { "" };
        write!(out, "{}   {check} {label}{disabled}\r\n", marker(id))?;
    }

    write!(out, "\r\nup/down focus, enter select, esc close, o outside, d disable, q quit\r\n")?;
    out.flush()
}
