//! Terminal event mapping
//!
//! The calculator is driven by clicking keypad buttons. Keys only close
//! the window.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Actions the shell reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Left mouse button pressed at a screen cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to shell actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> ShellAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => ShellAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> ShellAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return ShellAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => ShellAction::Quit,
                _ => ShellAction::None,
            };
        }

        match code {
            KeyCode::Esc | KeyCode::Char('q') => ShellAction::Quit,
            _ => ShellAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> ShellAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => ShellAction::Click {
                x: event.column,
                y: event.row,
            },
            _ => ShellAction::None,
        }
    }
}
