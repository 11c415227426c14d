use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

// Cells moved per scroll key or wheel notch
const SCROLL_STEP: f64 = 3.0;

pub fn handle_events(app: &mut AppState, timeout: Duration) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        return Ok(translate_event(app, event::read()?));
    }
    Ok(None)
}

pub fn translate_event(app: &AppState, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(mouse),
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return Some(Action::Quit);
    }

    match &app.mode {
        AppMode::Normal => handle_normal_mode(key),
        AppMode::Search { .. } => handle_search_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (Tab, _) => Some(Action::FocusNext),

        // Scrolling the map panel
        (Char('H'), KeyModifiers::SHIFT) | (Left, KeyModifiers::SHIFT) => Some(Action::Scroll {
            dx: -SCROLL_STEP,
            dy: 0.0,
        }),
        (Char('J'), KeyModifiers::SHIFT) | (Down, KeyModifiers::SHIFT) => Some(Action::Scroll {
            dx: 0.0,
            dy: SCROLL_STEP,
        }),
        (Char('K'), KeyModifiers::SHIFT) | (Up, KeyModifiers::SHIFT) => Some(Action::Scroll {
            dx: 0.0,
            dy: -SCROLL_STEP,
        }),
        (Char('L'), KeyModifiers::SHIFT) | (Right, KeyModifiers::SHIFT) => Some(Action::Scroll {
            dx: SCROLL_STEP,
            dy: 0.0,
        }),

        // Movement
        (Char('h'), KeyModifiers::NONE) | (Left, _) => Some(Action::GoLeft),
        (Char('j'), KeyModifiers::NONE) | (Down, _) => Some(Action::GoDown),
        (Char('k'), KeyModifiers::NONE) | (Up, _) => Some(Action::GoUp),
        (Char('l'), KeyModifiers::NONE) | (Right, _) => Some(Action::GoRight),
        (Char('m'), KeyModifiers::NONE) | (Char('~'), _) => Some(Action::GoToRoot),

        // Activation
        (Enter, _) | (Char(' '), KeyModifiers::NONE) => Some(Action::Activate),

        // View control
        (Char('c'), KeyModifiers::NONE) => Some(Action::Recenter),
        (Char('b'), KeyModifiers::NONE) => Some(Action::ToggleSidebar),
        (Char('t'), KeyModifiers::NONE) => Some(Action::ToggleTheme),

        // Output
        (Char('x'), KeyModifiers::NONE) => Some(Action::ExportSvg),
        (Char('y'), KeyModifiers::NONE) => Some(Action::YankUrl),

        // Search
        (Char('/'), KeyModifiers::NONE) | (Char('f'), KeyModifiers::CONTROL) => {
            Some(Action::Search)
        }

        // Help
        (Char('?'), _) => Some(Action::ShowHelp),

        _ => None,
    }
}

fn handle_search_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Esc, _) => Some(Action::CancelSearch),
        (Enter, _) => Some(Action::ConfirmSearch),
        (Down, _) | (Tab, _) | (Char('n'), KeyModifiers::CONTROL) => {
            Some(Action::NextSearchResult)
        }
        (Up, _) | (BackTab, _) | (Char('p'), KeyModifiers::CONTROL) => {
            Some(Action::PreviousSearchResult)
        }
        (Backspace, _) => Some(Action::BackspaceSearch),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Action::TypeSearchChar(c)),
        _ => None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseHelp),
        _ => None,
    }
}

fn handle_mouse_event(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollDown => Some(Action::Scroll {
            dx: 0.0,
            dy: SCROLL_STEP,
        }),
        MouseEventKind::ScrollUp => Some(Action::Scroll {
            dx: 0.0,
            dy: -SCROLL_STEP,
        }),
        MouseEventKind::ScrollRight => Some(Action::Scroll {
            dx: SCROLL_STEP,
            dy: 0.0,
        }),
        MouseEventKind::ScrollLeft => Some(Action::Scroll {
            dx: -SCROLL_STEP,
            dy: 0.0,
        }),
        _ => None,
    }
}
