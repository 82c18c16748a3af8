//! TUI Application State

use ratatui::layout::Rect;

use super::input::ShellAction;
use super::keypad::hit_test;
use super::ui::screen_layout;
use crate::config::{CalculatorConfig, ConfigResult, DEFAULT_TITLE};
use crate::core::{CalcError, CalcResult, Engine};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    title: String,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            title: DEFAULT_TITLE.to_string(),
            should_quit: false,
        }
    }

    /// Creates a calculator app from a validated configuration
    pub fn with_config(config: &CalculatorConfig) -> ConfigResult<Self> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            title: config.title.clone(),
            ..Self::new()
        })
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns the frame title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses the button at a keypad cell index
    ///
    /// Returns `false` for the blank cell or an out-of-range index.
    pub fn press_button(&mut self, index: usize) -> bool {
        let Some(token) = self.keypad.get_button(index).map(|btn| btn.token) else {
            return false;
        };
        self.keypad.highlight_token(token);
        self.engine.handle(token);
        true
    }

    /// Presses the button carrying `label`
    pub fn press_label(&mut self, label: &str) -> CalcResult<()> {
        let index = self
            .keypad
            .find_button_by_label(label)
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        self.press_button(index);
        Ok(())
    }

    /// Handles a mouse click at (x, y) on a screen of size `area`
    ///
    /// Returns `true` if the click landed on a button.
    pub fn handle_click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let keypad_area = screen_layout(area).keypad;
        match hit_test(&self.keypad, keypad_area, x, y) {
            Some(index) => self.press_button(index),
            None => {
                tracing::trace!(x, y, "click missed the keypad");
                false
            }
        }
    }

    /// Applies one shell action
    pub fn apply(&mut self, action: ShellAction, area: Rect) {
        match action {
            ShellAction::Click { x, y } => {
                self.handle_click(area, x, y);
            }
            ShellAction::Quit => self.quit(),
            ShellAction::None => {}
        }
    }
}
