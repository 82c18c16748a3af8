//! The four arithmetic operators and their evaluation

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operator chosen on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operators in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol as printed on its button
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Looks up an operator by its button symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Applies `op` to the accumulator `a` and the entered operand `b`
///
/// Fails with [`CalcError::DivisionByZero`] when dividing by exactly zero
/// and with [`CalcError::Overflow`] when the result is not finite.
pub fn evaluate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };
    check_finite(result)
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
