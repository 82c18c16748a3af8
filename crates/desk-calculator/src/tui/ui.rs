//! TUI rendering
//!
//! A titled frame holding a single-line, right-aligned display above the
//! keypad grid.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Height of the display box, borders included
pub const DISPLAY_HEIGHT: u16 = 3;

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The display box
    pub display: Rect,
    /// The keypad box
    pub keypad: Rect,
}

/// Splits the screen into display and keypad regions
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
        .split(inner);

    ScreenLayout {
        display: chunks[0],
        keypad: chunks[1],
    }
}

/// Fits display text into `width` cells, keeping its tail
///
/// Longer text loses its leading characters and starts with `…`, so the
/// digits just typed and the low digits of a result stay visible.
#[must_use]
pub fn fit_display(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.engine().is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let width = usize::from(area.width.saturating_sub(2));
        Paragraph::new(Span::styled(fit_display(self.app.display(), width), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", self.app.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = screen_layout(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
    }
}
