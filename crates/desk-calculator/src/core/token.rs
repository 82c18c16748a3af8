//! Button tokens fed to the engine

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// A single interpreted button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Reset everything (`C`)
    Clear,
    /// Flip the sign of the displayed number (`±`)
    ToggleSign,
    /// Divide the displayed number by 100 (`%`)
    Percent,
    /// Choose a binary operator (`+ - * /`)
    Operator(Operation),
    /// Apply the pending operator (`=`)
    Equals,
    /// Start or extend the fractional part (`.`)
    Decimal,
    /// Enter a digit, 0 through 9
    Digit(u8),
}

impl Token {
    /// Creates a digit token, or `None` when `d` is not a decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a button label to its token
    ///
    /// Labels are the ones printed on the keypad: `C`, `±`, `%`, `/`, `*`,
    /// `-`, `+`, `=`, `.` and the digits.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match c {
            'C' => Some(Self::Clear),
            '±' => Some(Self::ToggleSign),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Equals),
            '.' => Some(Self::Decimal),
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            _ => Operation::from_symbol(c).map(Self::Operator),
        }
    }

    /// Returns the label printed on this token's button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Decimal => ".".to_string(),
            Self::Digit(d) => d.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Token::digit(0), Some(Token::Digit(0)));
        assert_eq!(Token::digit(9), Some(Token::Digit(9)));
        assert_eq!(Token::digit(10), None);
    }

    #[test]
    fn test_from_label_controls() {
        assert_eq!(Token::from_label("C"), Some(Token::Clear));
        assert_eq!(Token::from_label("±"), Some(Token::ToggleSign));
        assert_eq!(Token::from_label("%"), Some(Token::Percent));
        assert_eq!(Token::from_label("="), Some(Token::Equals));
        assert_eq!(Token::from_label("."), Some(Token::Decimal));
    }

    #[test]
    fn test_from_label_operators() {
        assert_eq!(Token::from_label("+"), Some(Token::Operator(Operation::Add)));
        assert_eq!(
            Token::from_label("-"),
            Some(Token::Operator(Operation::Subtract))
        );
        assert_eq!(
            Token::from_label("*"),
            Some(Token::Operator(Operation::Multiply))
        );
        assert_eq!(
            Token::from_label("/"),
            Some(Token::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_from_label_digits() {
        for d in 0..=9u8 {
            assert_eq!(Token::from_label(&d.to_string()), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        for label in ["", " ", "c", "10", "^", "AC", "=="] {
            assert_eq!(Token::from_label(label), None, "accepted {label:?}");
        }
    }

    #[test]
    fn test_label_inverts_from_label() {
        let labels = [
            "C", "±", "%", "/", "7", "8", "9", "*", "4", "5", "6", "-", "1", "2", "3", "+", "0",
            ".", "=",
        ];
        for label in labels {
            let token = Token::from_label(label).unwrap();
            assert_eq!(token.label(), label);
        }
    }

    #[test]
    fn test_token_serde_round_trip_script() {
        let script = vec![
            Token::Digit(5),
            Token::Operator(Operation::Divide),
            Token::Digit(0),
            Token::Equals,
        ];
        let json = serde_json::to_string(&script).unwrap();
        assert!(json.contains("\"equals\""));
        let parsed: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, script);
    }
}
