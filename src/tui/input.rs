//! Input dispatch layer for Elm Architecture (TEA) pattern.
//!
//! Maps key events to messages based on current app mode.
//! Handles the `gg` chord with a non-blocking state machine.

use super::{App, InputMode, Message};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// State machine for handling key chords (gg).
///
/// Instead of blocking with `event::poll()` inline, we track pending keys
/// and check for timeout in the main event loop.
#[derive(Debug, Default)]
pub struct InputState {
    /// The first key of a potential chord sequence
    pub pending: Option<KeyCode>,
    /// When the pending key was pressed (for timeout detection)
    pub pending_since: Option<Instant>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there's a pending chord that has timed out (500ms).
    pub fn has_timed_out(&self) -> bool {
        if let Some(since) = self.pending_since {
            since.elapsed().as_millis() > 500
        } else {
            false
        }
    }

    /// Clear the pending chord state.
    pub fn clear(&mut self) {
        self.pending = None;
        self.pending_since = None;
    }

    /// Set a pending chord key.
    pub fn set_pending(&mut self, key: KeyCode) {
        self.pending = Some(key);
        self.pending_since = Some(Instant::now());
    }
}

/// Map key events to messages based on current app mode.
pub fn dispatch(app: &App, input: &mut InputState, key: KeyEvent) -> Message {
    if key.kind == KeyEventKind::Release {
        return Message::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Message::Quit;
    }

    if let Some(pending) = input.pending.take() {
        input.pending_since = None;
        return handle_chord(pending, key.code);
    }

    if app.show_help() {
        dispatch_help_modal(key)
    } else if app.mode == InputMode::Editing {
        dispatch_editing_mode(key)
    } else {
        dispatch_browse_mode(app, input, key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode-specific dispatch functions
// ─────────────────────────────────────────────────────────────────────────────

/// Handle keys while browsing the catalog.
fn dispatch_browse_mode(app: &App, input: &mut InputState, key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('j') | KeyCode::Down => Message::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Message::MoveUp,
        KeyCode::Char('G') | KeyCode::End => Message::GotoBottom,
        KeyCode::Home => Message::GotoTop,
        KeyCode::Char('g') => {
            input.set_pending(KeyCode::Char('g'));
            Message::None
        }
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c.to_digit(10).unwrap_or(1) as usize;
            Message::SelectIndex(idx - 1)
        }
        KeyCode::Char('r') => Message::Refresh,
        KeyCode::Char('/') | KeyCode::Char('i') if app.panel.is_query() => Message::StartEditing,
        KeyCode::Enter if app.panel.is_query() => Message::SubmitQuery,
        KeyCode::Char(' ') => Message::RevealPunchline,
        KeyCode::Char('o') => Message::OpenLink,
        KeyCode::Char('?') => Message::ToggleHelp,
        _ => Message::None,
    }
}

/// Handle keys while typing into the query line.
fn dispatch_editing_mode(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc => Message::StopEditing,
        KeyCode::Enter => Message::SubmitQuery,
        KeyCode::Backspace => Message::QueryBackspace,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Message::ClearQuery,
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Message::QueryInput(c)
        }
        _ => Message::None,
    }
}

/// Handle keys in help modal.
fn dispatch_help_modal(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Message::CloseModal,
        _ => Message::None,
    }
}

/// Resolve the second key of a chord.
fn handle_chord(first: KeyCode, second: KeyCode) -> Message {
    match (first, second) {
        (KeyCode::Char('g'), KeyCode::Char('g')) => Message::GotoTop,
        _ => Message::None,
    }
}
