//! Tic Tac Toe terminal UI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tictactoe_tui::{App, Cli, TuiConfig, draw};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    let highlight = config.highlight()?;

    initialize_tracing(config.log_file())?;
    info!(?config, "Starting Tic Tac Toe");

    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, App::new(), &config, highlight);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &res {
        error!(error = %e, "Exited with error");
    } else {
        info!("Exited cleanly");
    }
    res
}

/// Sends logs to a file so they never draw over the UI.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_core=debug,tictactoe_tui=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &TuiConfig,
    highlight: Color,
) -> Result<()> {
    while !app.should_quit() {
        let mut click_map = Default::default();
        terminal.draw(|f| click_map = draw(f, &app, config, highlight))?;
        app.set_click_map(click_map);

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}
