//! Terminal front end for the calculator
//!
//! The shell owns an [`Engine`](crate::core::Engine), maps mouse clicks on
//! the keypad grid to tokens and redraws the display after each one.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, ShellAction};
pub use keypad::{button_center, hit_test, KeypadWidget};
pub use ui::{fit_display, render, screen_layout, CalculatorUI, ScreenLayout, DISPLAY_HEIGHT};
