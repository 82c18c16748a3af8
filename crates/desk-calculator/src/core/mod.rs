//! Core calculator module: the button-token state machine
//!
//! The engine interprets one button press at a time and keeps four pieces
//! of state: the display text, the accumulator, the pending operator and
//! the entry mode. Nothing here knows about terminals or widgets.

mod engine;
pub mod format;
mod operations;
mod token;

pub use engine::{Engine, EntryMode};
pub use format::{format_display, parse_operand};
pub use operations::{evaluate, Operation};
pub use token::Token;

use thiserror::Error;

/// Text shown in place of a number after a failed calculation
pub const ERROR_MARKER: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// None of these escape [`Engine::handle`]; the engine swallows them into
/// the error marker. They surface only from the free functions and from
/// label lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text is not a number
    #[error("Invalid number: {0}")]
    ParseError(String),
    /// Division with a right-hand operand of exactly zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not finite
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// A label that no keypad button carries
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}
