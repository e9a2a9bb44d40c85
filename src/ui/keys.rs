//! Keyboard mapping
//!
//! Browse mode keys are view-specific single keystrokes. Every other mode
//! routes keys to the active text input as `AppEvent::Input`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::{command_to_app_event, parse_command};
use crate::app::{App, AppEvent, AppMode, InputKey, View};

fn input_key(code: KeyCode) -> Option<InputKey> {
    Some(match code {
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        _ => return None,
    })
}

/// Translate a key press into an event for the current mode and view
pub fn map_key(app: &mut App, key: KeyEvent) -> AppEvent {
    if key.kind == KeyEventKind::Release {
        return AppEvent::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match app.mode() {
        AppMode::Command if key.code == KeyCode::Enter => {
            command_to_app_event(parse_command(&app.take_command()))
        }
        AppMode::Command | AppMode::Login | AppMode::Form | AppMode::Confirm => {
            input_key(key.code).map_or(AppEvent::None, AppEvent::Input)
        }
        AppMode::Browse => map_browse_key(app, key.code),
        AppMode::Quit => AppEvent::None,
    }
}

fn map_browse_key(app: &App, code: KeyCode) -> AppEvent {
    match code {
        KeyCode::Char(':') => return AppEvent::EnterCommand,
        KeyCode::Char('q') => return AppEvent::Quit,
        KeyCode::Char('?') => return AppEvent::Help,
        KeyCode::Char('1') => return AppEvent::ShowView(View::Daily),
        KeyCode::Char('2') => return AppEvent::ShowView(View::Random),
        KeyCode::Char('3') => return AppEvent::ShowView(View::Archive),
        KeyCode::Char('4') => return AppEvent::ShowView(View::Admin),
        KeyCode::Esc if app.show_help => return AppEvent::Help,
        _ => {}
    }

    match app.view {
        View::Daily | View::Random => match code {
            KeyCode::Tab | KeyCode::Right => AppEvent::FocusNextWord,
            KeyCode::BackTab | KeyCode::Left => AppEvent::FocusPrevWord,
            KeyCode::Enter => AppEvent::OpenFocusedWord,
            KeyCode::Char('c') => AppEvent::Share,
            KeyCode::Char('h') if app.view == View::Daily => AppEvent::OpenHashtag,
            KeyCode::Char('r') if app.view == View::Daily => AppEvent::LoadDaily,
            KeyCode::Char('g') | KeyCode::Char('r') if app.view == View::Random => {
                AppEvent::GenerateRandom
            }
            KeyCode::Char('s') if app.view == View::Random => AppEvent::ToggleSettings,
            KeyCode::Char('x') if app.view == View::Random => AppEvent::ToggleScene,
            // 1-4 switch views
            KeyCode::Char(c @ '5'..='9') => {
                AppEvent::SearchWord(c.to_digit(10).unwrap_or(0) as usize)
            }
            _ => AppEvent::None,
        },
        View::Archive => match code {
            KeyCode::Char('n') | KeyCode::PageDown => AppEvent::ArchiveNext,
            KeyCode::Char('p') | KeyCode::PageUp => AppEvent::ArchivePrev,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => AppEvent::MoveCursor(1),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => AppEvent::MoveCursor(-1),
            KeyCode::Enter => AppEvent::OpenArchiveEntry,
            KeyCode::Char('r') => AppEvent::ReloadArchive,
            _ => AppEvent::None,
        },
        View::Admin if !app.admin.is_logged_in() => match code {
            KeyCode::Enter | KeyCode::Char('l') => AppEvent::BeginLogin,
            _ => AppEvent::None,
        },
        View::Admin => match code {
            KeyCode::Char('j') | KeyCode::Down => AppEvent::MoveCursor(1),
            KeyCode::Char('k') | KeyCode::Up => AppEvent::MoveCursor(-1),
            KeyCode::PageDown => AppEvent::MoveCursor(10),
            KeyCode::PageUp => AppEvent::MoveCursor(-10),
            KeyCode::Char(' ') => AppEvent::ToggleSelect,
            KeyCode::Char('a') => AppEvent::SelectAll(true),
            KeyCode::Char('u') => AppEvent::SelectAll(false),
            KeyCode::Char('N') => AppEvent::AddWord,
            KeyCode::Char('e') | KeyCode::Enter => AppEvent::EditWord,
            KeyCode::Char('t') => AppEvent::ToggleActive,
            KeyCode::Char('d') | KeyCode::Delete => AppEvent::RequestDelete,
            KeyCode::Char('A') => AppEvent::BulkSetActive(true),
            KeyCode::Char('D') => AppEvent::BulkSetActive(false),
            KeyCode::Char('r') => AppEvent::ReloadWords,
            KeyCode::Char('L') => AppEvent::Logout,
            _ => AppEvent::None,
        },
    }
}
