//! Keypad widget and mouse hit testing
//!
//! The keypad is drawn inside a bordered block; each grid cell gets an
//! equal share of the inner area and the label is centered in its cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Token;
use crate::keypad::{Keypad, KeypadButton};

/// Size of one grid cell inside `area`, or `None` when the area is too small
fn cell_size(keypad: &Keypad, area: Rect) -> Option<(Rect, u16, u16)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let (rows, cols) = keypad.dimensions();
    let btn_width = inner.width / cols as u16;
    let btn_height = inner.height / rows as u16;
    (btn_width > 0 && btn_height > 0).then_some((inner, btn_width, btn_height))
}

/// Converts a click position to a button index
///
/// Returns `None` for clicks outside the grid, on the border, in the
/// leftover margin, or on the blank cell.
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let (inner, btn_width, btn_height) = cell_size(keypad, area)?;
    if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    let col = ((x - inner.x) / btn_width) as usize;
    let row = ((y - inner.y) / btn_height) as usize;
    let (rows, cols) = keypad.dimensions();
    if row >= rows || col >= cols {
        return None;
    }

    let index = row * cols + col;
    keypad.get_button(index).map(|_| index)
}

/// Returns the screen cell at the center of a button
#[must_use]
pub fn button_center(keypad: &Keypad, area: Rect, index: usize) -> Option<(u16, u16)> {
    keypad.get_button(index)?;
    let (inner, btn_width, btn_height) = cell_size(keypad, area)?;
    let (row, col) = keypad.position_of(index)?;
    Some((
        inner.x + col as u16 * btn_width + btn_width / 2,
        inner.y + row as u16 * btn_height + btn_height / 2,
    ))
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.token {
        Token::Digit(_) | Token::Decimal => Style::default().fg(Color::White),
        Token::Operator(_) => Style::default().fg(Color::Yellow),
        Token::Equals => Style::default().fg(Color::Green),
        Token::Clear => Style::default().fg(Color::Red),
        Token::ToggleSign | Token::Percent => Style::default().fg(Color::Cyan),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((inner, btn_width, btn_height)) = cell_size(self.keypad, area) else {
            return;
        };
        if btn_width < 3 {
            return;
        }

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + col as u16 * btn_width;
            let y = inner.y + row as u16 * btn_height;

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            buf.set_span(
                label_x,
                label_y,
                &Span::styled(label, button_style(btn)),
                btn_width,
            );
        }
    }
}
