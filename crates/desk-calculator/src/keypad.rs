//! Calculator keypad layout
//!
//! A 5x4 grid in the classic desk order, with one blank cell in the
//! bottom-right corner:
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```
//!
//! Cells are addressed by index in row-major order, so the blank cell has
//! an index but no button.

use crate::core::Token;

/// Button labels in row-major order; the empty string marks the blank cell
pub const LAYOUT: [&str; 20] = [
    "C", "±", "%", "/", //
    "7", "8", "9", "*", //
    "4", "5", "6", "-", //
    "1", "2", "3", "+", //
    "0", ".", "=", "",
];

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text printed on the button
    pub label: String,
    /// The token this button feeds to the engine
    pub token: Token,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button for a token
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self {
            label: token.label(),
            token,
            pressed: false,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Cells in row-major order; `None` is the blank slot
    cells: Vec<Option<KeypadButton>>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let cells = LAYOUT
            .iter()
            .map(|label| Token::from_label(label).map(KeypadButton::new))
            .collect();

        Self {
            cells,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons, not counting the blank cell
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns the number of grid cells
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by cell index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.get_button(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the (row, col) of a cell index
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cells.len()).then(|| (index / self.cols, index % self.cols))
    }

    /// Finds a button index by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.label == label))
    }

    /// Finds a button index by the token it feeds
    #[must_use]
    pub fn find_button_by_token(&self, token: Token) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.token == token))
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(Some(btn)) = self.cells.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in self.cells.iter_mut().flatten() {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button carrying `token`
    pub fn highlight_token(&mut self, token: Token) {
        self.release_all();
        if let Some(idx) = self.find_button_by_token(token) {
            self.press_button(idx);
        }
    }

    /// Returns the highlighted button index, if any
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|b| b.pressed))
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.cells.iter().flatten()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|btn| ((i / cols, i % cols), btn)))
    }
}
