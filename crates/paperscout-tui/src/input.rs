use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action.
pub fn map_event(event: &Event, mode: InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            InputMode::Editing => map_key_editing(key),
            InputMode::Browsing => map_key_browsing(key),
        },
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_key_editing(key: &KeyEvent) -> Action {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Enter => Action::SubmitQuery,
        KeyCode::Esc => Action::StopEditing,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

fn map_key_browsing(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('/') | KeyCode::Char('e') => Action::StartEditing,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Enter => Action::Choose,
        KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Char('a') => Action::ToggleSelectAll,
        KeyCode::Char('d') => Action::Download,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}
