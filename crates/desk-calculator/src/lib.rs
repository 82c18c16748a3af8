//! Desk Calculator - a four-function button calculator
//!
//! The heart of the crate is [`core::Engine`], a small state machine that
//! consumes button tokens (digits, decimal point, sign toggle, percent, the
//! four operators, clear and equals) and produces the text a calculator
//! display would show. Any front end can drive it; the `tui` feature ships
//! a terminal keypad you click with the mouse.
//!
//! # Example
//!
//! ```rust
//! use desk_calculator::prelude::*;
//!
//! let mut engine = Engine::new();
//! for label in ["2", "+", "3", "*", "4", "="] {
//!     engine.press(label).unwrap();
//! }
//! // Operators apply left to right: (2 + 3) * 4
//! assert_eq!(engine.display(), "20");
//!
//! // Failures show the error marker instead of panicking
//! engine.handle(Token::Operator(Operation::Divide));
//! engine.handle(Token::Digit(0));
//! assert_eq!(engine.handle(Token::Equals), ERROR_MARKER);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use crate::core::{
        evaluate, format_display, parse_operand, CalcError, CalcResult, Engine, EntryMode,
        Operation, Token, ERROR_MARKER,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
