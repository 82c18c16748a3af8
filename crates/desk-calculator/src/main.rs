//! Desk Calculator: terminal four-function calculator
//!
//! ## Usage
//!
//! ```bash
//! desk-calculator                          # Open the clickable keypad
//! desk-calculator --press "2 + 3 * 4 ="    # Run headless, prints 20
//! desk-calculator --press "5 / 0 =" --trace
//! desk-calculator --config calc.json --log-file calc.log
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use desk_calculator::prelude::*;
use desk_calculator::tui::{render, CalculatorApp, InputHandler};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Four-function desk calculator
#[derive(Parser, Debug)]
#[command(name = "desk-calculator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Text shown after a failed calculation
    #[arg(long, value_name = "TEXT")]
    error_marker: Option<String>,

    /// Run headless with whitespace-separated button labels, e.g. "5 / 0 ="
    #[arg(long, value_name = "LABELS", allow_hyphen_values = true)]
    press: Option<String>,

    /// With --press, print the display after every button
    #[arg(long, requires = "press")]
    trace: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type AppResult<T> = Result<T, AppError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = build_config(&cli)?;

    match &cli.press {
        Some(script) => run_script(&config, script, cli.trace),
        None => run_tui(&config),
    }
}

fn init_tracing(path: &Path) -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(())
}

fn build_config(cli: &Cli) -> AppResult<CalculatorConfig> {
    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::default(),
    };
    if let Some(marker) = &cli.error_marker {
        config = config.with_error_marker(marker.clone());
        config.validate()?;
    }
    Ok(config)
}

fn run_script(config: &CalculatorConfig, script: &str, trace: bool) -> AppResult<()> {
    let mut engine = Engine::with_config(config)?;
    let mut stdout = io::stdout().lock();

    for label in script.split_whitespace() {
        let display = engine.press(label)?;
        if trace {
            writeln!(stdout, "{label:>2} │ {display}")?;
        }
    }

    if !trace {
        writeln!(stdout, "{}", engine.display())?;
    }
    Ok(())
}

fn run_tui(config: &CalculatorConfig) -> AppResult<()> {
    let app = CalculatorApp::with_config(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> AppResult<()> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            render(&app, frame);
        })?;

        let action = input_handler.handle_event(&event::read()?);
        app.apply(action, area);
    }

    tracing::info!(display = app.display(), "calculator closed");
    Ok(())
}
