//! Unified Calculator Driver
//!
//! Write the behaviour check once, run it against every front end. The
//! headless [`EngineDriver`] talks to the engine directly; the
//! [`TuiDriver`] clicks buttons through the rendered keypad and reads the
//! display back from the screen buffer.

use crate::core::{CalcResult, Engine, Token, ERROR_MARKER};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use desk_calculator::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_sequence("2 + 3 * 4 =").unwrap();
/// assert_eq!(driver.display(), "20");
/// ```
pub trait CalculatorDriver {
    /// Presses the button with this label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the text currently shown on the display
    fn display(&self) -> String;

    /// Presses every whitespace-separated label in order
    fn press_sequence(&mut self, script: &str) -> CalcResult<()> {
        script
            .split_whitespace()
            .try_for_each(|label| self.press(label))
    }

    /// Resets the calculator
    fn clear(&mut self) -> CalcResult<()> {
        self.press(&Token::Clear.label())
    }
}

/// Headless driver wrapping the engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.engine.press(label).map(|_| ())
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    use super::{CalcResult, CalculatorDriver};
    use crate::core::CalcError;
    use crate::tui::{button_center, render, screen_layout, CalculatorApp};

    /// TUI-specific driver that clicks through the rendered keypad
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        area: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Screen size used when none is given
        pub const DEFAULT_AREA: Rect = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 24,
        };

        /// Creates a new TUI driver on a 40x24 screen
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new(), Self::DEFAULT_AREA)
        }

        /// Creates a TUI driver with an existing app and screen size
        #[must_use]
        pub fn with_app(app: CalculatorApp, area: Rect) -> Self {
            Self { app, area }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Renders the screen and reads the display line back
        fn screen_display(&self) -> Option<String> {
            let mut terminal =
                Terminal::new(TestBackend::new(self.area.width, self.area.height)).ok()?;
            terminal.draw(|frame| render(&self.app, frame)).ok()?;

            let display = screen_layout(self.area).display;
            let row = display.y + display.height / 2;
            let buffer = terminal.backend().buffer();
            let text: String = (display.x + 1..display.right().saturating_sub(1))
                .map(|x| buffer[(x, row)].symbol())
                .collect();
            Some(text.trim().to_string())
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let unknown = || CalcError::UnknownButton(label.to_string());
            let keypad = self.app.keypad();
            let index = keypad.find_button_by_label(label).ok_or_else(unknown)?;
            let keypad_area = screen_layout(self.area).keypad;
            let (x, y) = button_center(keypad, keypad_area, index).ok_or_else(unknown)?;

            if self.app.handle_click(self.area, x, y) {
                Ok(())
            } else {
                Err(unknown())
            }
        }

        fn display(&self) -> String {
            self.screen_display()
                .unwrap_or_else(|| self.app.display().to_string())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Behaviour Checks =====
// These work with ANY CalculatorDriver implementation

/// Leading zeros collapse while digits concatenate
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence("0 5")?;
    assert_eq!(driver.display(), "5");

    driver.clear()?;
    driver.press_sequence("1 0 2")?;
    assert_eq!(driver.display(), "102");
    Ok(())
}

/// A second decimal point has no effect
pub fn verify_decimal_idempotence<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence(".")?;
    assert_eq!(driver.display(), "0.");
    driver.press_sequence(". 5 .")?;
    assert_eq!(driver.display(), "0.5");
    Ok(())
}

/// Toggling the sign twice restores the display; zero never gets a sign
pub fn verify_sign_toggle<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence("±")?;
    assert_eq!(driver.display(), "0");

    driver.press_sequence("4 2 ±")?;
    assert_eq!(driver.display(), "-42");
    driver.press_sequence("±")?;
    assert_eq!(driver.display(), "42");
    Ok(())
}

/// Dividing by zero shows the error marker and a digit recovers
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence("5 / 0 =")?;
    assert_eq!(driver.display(), ERROR_MARKER);

    driver.press_sequence("7")?;
    assert_eq!(driver.display(), "7");
    Ok(())
}

/// Operators apply left to right without precedence
pub fn verify_chained_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence("2 + 3 *")?;
    assert_eq!(driver.display(), "5");
    driver.press_sequence("4 =")?;
    assert_eq!(driver.display(), "20");
    Ok(())
}

/// Integer-valued results drop the decimal point
pub fn verify_integer_results<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence("8 / 2 =")?;
    assert_eq!(driver.display(), "4");

    driver.clear()?;
    driver.press_sequence("1 / 4 =")?;
    assert_eq!(driver.display(), "0.25");
    Ok(())
}

/// Percent divides the display by one hundred
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear()?;
    driver.press_sequence("5 0 %")?;
    assert_eq!(driver.display(), "0.5");
    Ok(())
}

/// Clear returns to a pristine state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence("9 * 9 / 0 =")?;
    driver.clear()?;
    assert_eq!(driver.display(), "0");
    driver.press_sequence("7")?;
    assert_eq!(driver.display(), "7");
    Ok(())
}

/// Complete verification suite - runs all checks
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_digit_entry(driver)?;
    verify_decimal_idempotence(driver)?;
    verify_sign_toggle(driver)?;
    verify_division_by_zero(driver)?;
    verify_chained_arithmetic(driver)?;
    verify_integer_results(driver)?;
    verify_percent(driver)?;
    verify_clear(driver)
}
