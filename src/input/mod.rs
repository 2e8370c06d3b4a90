use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs until the event loop drops its receiver.
pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            if tx.is_closed() {
                break;
            }
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        Some(InputEvent::Key(k))
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => Some(InputEvent::Mouse(m)),
                    Ok(CtEvent::Resize(_, _)) => Some(InputEvent::Resize),
                    Ok(_) | Err(_) => None,
                };
                if let Some(ev) = forwarded
                    && tx.blocking_send(Event::Input(ev)).is_err()
                {
                    break;
                }
            }
        }
    })
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Redraw),
        InputEvent::Mouse(m) => match (m.kind, state.focus) {
            (MouseEventKind::ScrollUp, Focus::Library) => Some(Action::LibraryUp),
            (MouseEventKind::ScrollDown, Focus::Library) => Some(Action::LibraryDown),
            (MouseEventKind::ScrollUp, _) => Some(Action::CursorLeft),
            (MouseEventKind::ScrollDown, _) => Some(Action::CursorRight),
            _ => None,
        },
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => match state.focus {
            Focus::Palette => handle_palette(k),
            Focus::Prompt => handle_prompt(k),
            Focus::Library => handle_library(k),
        },
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => {
            Some(Action::ToggleHelp)
        }
        _ => None,
    }
}

fn handle_palette(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        KeyCode::Char(' ') => Some(Action::Regenerate),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
        KeyCode::Enter => Some(Action::ToggleLock),

        KeyCode::Char('a') => Some(Action::AddColor),
        KeyCode::Char('x') | KeyCode::Delete => Some(Action::RemoveColor),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Grow),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::Shrink),

        KeyCode::Char('c') => Some(Action::CopySelected),
        KeyCode::Char('s') => Some(Action::SavePalette),
        KeyCode::Char('e') => Some(Action::ExportPalette),

        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusPrompt),
        KeyCode::Char('b') => Some(Action::FocusLibrary),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),

        _ => None,
    }
}

fn handle_prompt(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::FocusPalette),
        KeyCode::Enter => Some(Action::SubmitPrompt),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_library(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Char('b') => Some(Action::FocusPalette),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::LibraryUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::LibraryDown),
        KeyCode::Enter => Some(Action::ApplySaved),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSaved),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}
