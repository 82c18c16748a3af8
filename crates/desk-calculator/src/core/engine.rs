//! Calculator engine: button tokens in, display text out
//!
//! Operators chain left to right without precedence: `2 + 3 * 4 =` shows
//! `20`. Failures never escape [`Engine::handle`]; they replace the display
//! with the error marker and the next digit or `C` recovers.

use std::fmt;

use crate::config::{CalculatorConfig, ConfigResult};
use crate::core::{
    evaluate, format_display, parse_operand, CalcError, CalcResult, Operation, Token, ERROR_MARKER,
};

/// Whether the next digit starts a fresh number or extends the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// Next digit or decimal point replaces the display
    #[default]
    StartNew,
    /// Next digit or decimal point is appended to the display
    Append,
}

type Renderer = Box<dyn FnMut(&str)>;

/// The calculator state machine
pub struct Engine {
    display: String,
    accumulator: f64,
    pending: Option<Operation>,
    entry: EntryMode,
    error_marker: String,
    renderer: Option<Renderer>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("display", &self.display)
            .field("accumulator", &self.accumulator)
            .field("pending", &self.pending)
            .field("entry", &self.entry)
            .field("error_marker", &self.error_marker)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine showing `0` with no pending operator
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: 0.0,
            pending: None,
            entry: EntryMode::StartNew,
            error_marker: ERROR_MARKER.to_string(),
            renderer: None,
        }
    }

    /// Creates an engine using the configured error marker
    ///
    /// The config is validated first, so a marker that reads as a number
    /// can never make [`Engine::is_error`] ambiguous.
    pub fn with_config(config: &CalculatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            error_marker: config.error_marker.clone(),
            ..Self::new()
        })
    }

    /// Registers a callback that receives the display after every token
    #[must_use]
    pub fn on_render(mut self, render: impl FnMut(&str) + 'static) -> Self {
        self.renderer = Some(Box::new(render));
        self
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the stored left-hand operand
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns the operator waiting for its right-hand operand
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns the current entry mode
    #[must_use]
    pub fn entry_mode(&self) -> EntryMode {
        self.entry
    }

    /// Returns the text shown after a failed calculation
    #[must_use]
    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Returns true while the error marker is displayed
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == self.error_marker
    }

    /// Replaces the display text without touching any other state
    ///
    /// Shells use this to restore a saved display. Empty text becomes `0`.
    pub fn set_display(&mut self, text: &str) {
        if text.is_empty() {
            "0".clone_into(&mut self.display);
        } else {
            text.clone_into(&mut self.display);
        }
    }

    /// Interprets a button label and handles the resulting token
    ///
    /// Unknown labels fail with [`CalcError::UnknownButton`] and leave the
    /// state untouched.
    pub fn press(&mut self, label: &str) -> CalcResult<&str> {
        let token =
            Token::from_label(label).ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        Ok(self.handle(token))
    }

    /// Handles one button token and returns the new display text
    pub fn handle(&mut self, token: Token) -> &str {
        match token {
            Token::Clear => self.clear(),
            Token::ToggleSign => self.toggle_sign(),
            Token::Percent => self.percentage(),
            Token::Operator(op) => self.apply_operator(op),
            Token::Equals => self.calculate_result(),
            Token::Decimal => self.append_decimal(),
            Token::Digit(d) => self.append_digit(d),
        }

        tracing::trace!(?token, display = %self.display, "handled token");

        if let Some(render) = self.renderer.as_mut() {
            render(&self.display);
        }
        &self.display
    }

    fn clear(&mut self) {
        "0".clone_into(&mut self.display);
        self.accumulator = 0.0;
        self.pending = None;
        self.entry = EntryMode::StartNew;
    }

    fn append_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            tracing::warn!(digit = d, "ignored digit outside 0-9");
            return;
        };

        match self.entry {
            EntryMode::StartNew => {
                self.display = c.to_string();
                self.entry = EntryMode::Append;
            }
            EntryMode::Append if self.display == "0" => self.display = c.to_string(),
            EntryMode::Append => {
                self.display.push(c);
                // Digits past f64::MAX would leave a display no operator can read
                if parse_operand(&self.display).is_err() {
                    self.display.pop();
                    tracing::trace!(display = %self.display, "ignored digit beyond f64 range");
                }
            }
        }
    }

    fn append_decimal(&mut self) {
        match self.entry {
            EntryMode::StartNew => {
                "0.".clone_into(&mut self.display);
                self.entry = EntryMode::Append;
            }
            EntryMode::Append => {
                if !self.display.contains('.') {
                    self.display.push('.');
                }
            }
        }
    }

    fn toggle_sign(&mut self) {
        if self.display == "0" || self.is_error() {
            return;
        }
        if let Some(unsigned) = self.display.strip_prefix('-') {
            self.display = unsigned.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    fn percentage(&mut self) {
        match parse_operand(&self.display) {
            Ok(value) => {
                self.display = format_display(value / 100.0);
                self.entry = EntryMode::StartNew;
            }
            // Percent leaves the pending operator alone, even on failure
            Err(err) => self.fail(&err, false),
        }
    }

    fn apply_operator(&mut self, op: Operation) {
        let outcome = parse_operand(&self.display).and_then(|entered| match self.pending {
            None => Ok(entered),
            Some(pending) => evaluate(self.accumulator, entered, pending),
        });

        match outcome {
            Ok(value) => {
                if self.pending.is_some() {
                    self.display = format_display(value);
                }
                self.accumulator = value;
                self.pending = Some(op);
                self.entry = EntryMode::StartNew;
            }
            Err(err) => self.fail(&err, true),
        }
    }

    fn calculate_result(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let outcome = parse_operand(&self.display)
            .and_then(|entered| evaluate(self.accumulator, entered, pending));

        match outcome {
            Ok(value) => {
                self.display = format_display(value);
                self.accumulator = value;
                self.entry = EntryMode::StartNew;
            }
            Err(err) => self.fail(&err, true),
        }
    }

    fn fail(&mut self, err: &CalcError, clear_pending: bool) {
        tracing::debug!(
            error = %err,
            accumulator = self.accumulator,
            pending = ?self.pending,
            "calculation failed"
        );
        self.display.clone_from(&self.error_marker);
        self.entry = EntryMode::StartNew;
        if clear_pending {
            self.pending = None;
        }
    }
}
