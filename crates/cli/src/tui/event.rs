//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Message, Mode};
use contextkit_core::opener::Launcher;

/// Map a key event to an optional message based on current app mode.
pub fn map_key_event<L: Launcher>(app: &App<L>, key: KeyEvent) -> Option<Message> {
    // Global bindings (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    // Mode-specific bindings
    match &app.mode {
        Mode::Browse => map_browse_keys(key),
        Mode::Session => map_session_keys(key),
        Mode::Input(_) => map_input_keys(key),
        Mode::Result => map_result_keys(key),
    }
}

fn map_browse_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Vim-style navigation
        KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),

        // Actions
        KeyCode::Enter | KeyCode::Char('o') => Some(Message::OpenSelected),
        KeyCode::Char('e') => Some(Message::EditSelected),
        KeyCode::Char('n') => Some(Message::NewContext),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),

        _ => None,
    }
}

fn map_session_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectPrev),
        KeyCode::Char(' ') => Some(Message::ToggleMark),

        KeyCode::Char('a') | KeyCode::Char('+') => Some(Message::AddItem),
        KeyCode::Char('d') | KeyCode::Char('-') | KeyCode::Delete => {
            Some(Message::RemoveSelected)
        }
        KeyCode::Char('s') => Some(Message::SaveSession),
        KeyCode::Esc => Some(Message::Back),

        _ => None,
    }
}

fn map_input_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char(c) => Some(Message::InputChar(c)),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Enter => Some(Message::InputSubmit),
        KeyCode::Esc => Some(Message::Cancel),
        _ => None,
    }
}

fn map_result_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
            Some(Message::ClearStatus)
        }
        _ => None,
    }
}
